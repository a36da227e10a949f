use chrono::NaiveDate;

use super::recurrence::Recurrence;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde_derive::Deserialize)]
pub struct BillId(pub u64);

/// A flat-rate recurring bill or subscription: one billed instance per
/// cycle, no installment split.
#[derive(Debug, Clone, PartialEq)]
pub struct BillDefinition {
    pub id: BillId,
    pub name: String,
    /// Amount billed per cycle.
    pub amount: f64,
    /// Day of month the bill falls due (1-31). 0 means no explicit due
    /// day; the billing anchor's day is used instead. Out-of-range days
    /// clamp to the month's last valid day.
    pub due_day: u32,
    pub recurrence: Recurrence,
    pub start: NaiveDate,
    /// Explicit override for the first billed date, when it differs from
    /// the signup date.
    pub first_payment_date: Option<NaiveDate>,
    /// While set, no billed instance is generated. The end date is
    /// informational until the trial roll-over pass clears the flag.
    pub trial: bool,
    pub trial_end: Option<NaiveDate>,
    /// Soft delete: inactive bills keep their history up to `end_date`.
    pub active: bool,
    pub end_date: Option<NaiveDate>,
}

// --

impl std::fmt::Display for BillId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl BillDefinition {
    /// Date the billing cycle is anchored on: the explicit first-payment
    /// override when present, the signup date otherwise.
    pub fn billing_anchor(&self) -> NaiveDate {
        self.first_payment_date.unwrap_or(self.start)
    }
}
