use chrono::NaiveDate;

use super::recurrence::Recurrence;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde_derive::Deserialize)]
pub struct CommitmentId(pub u64);

/// Offset unit applied to the start date of one-time commitments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde_derive::Deserialize)]
pub enum DurationUnit {
    Days,
    Weeks,
    Months,
    Years,
}

/// A multi-installment obligation (loan, lending, or installment purchase).
/// Immutable: edits are whole-value replacements on the snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct CommitmentDefinition {
    pub id: CommitmentId,
    pub name: String,
    pub principal: f64,
    pub interest: f64,
    pub fee: f64,
    pub recurrence: Recurrence,
    /// Calendar date the obligation was entered into (the original instant,
    /// normalized to midnight).
    pub start: NaiveDate,
    /// Installment count for recurring obligations; offset count (in
    /// `duration_unit`) for one-time obligations.
    pub duration: i32,
    pub duration_unit: DurationUnit,
}

// --

impl std::fmt::Display for CommitmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl CommitmentDefinition {
    /// Principal + interest + fee. Always derived, never stored; negative
    /// components count as zero.
    pub fn total_obligation(&self) -> f64 {
        self.principal.max(0.0) + self.interest.max(0.0) + self.fee.max(0.0)
    }

    /// Number of installments the obligation divides into. A non-positive
    /// duration on a recurring obligation degrades to a single full-amount
    /// installment.
    pub(crate) fn installment_count(&self) -> u32 {
        if self.recurrence.is_recurring() && self.duration > 0 {
            self.duration as u32
        } else {
            1
        }
    }
}
