use chrono::NaiveDate;

use super::{bill::BillId, commitment::CommitmentId, month_anchor::MonthAnchor};

/// Payment state of a resolved instance, in classification priority order:
/// settlement wins over any date comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstanceStatus {
    Paid,
    Overdue,
    Due,
    Upcoming,
}

/// One scheduled partial payment within a commitment. Derived, never
/// persisted; the amounts of a definition's installments sum exactly to
/// its total obligation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduledInstallment {
    pub due: NaiveDate,
    pub amount_due: f64,
}

/// Stable identity of a commitment installment across recomputations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InstallmentKey {
    pub commitment: CommitmentId,
    pub index: u32,
}

/// A commitment installment resolved for display.
#[derive(Debug, Clone, PartialEq)]
pub struct CommitmentInstance {
    pub key: InstallmentKey,
    pub due: NaiveDate,
    pub status: InstanceStatus,
    pub amount_due: f64,
    pub amount_paid: f64,
}

/// A bill occurrence resolved for display. Identity is the bill plus the
/// billed month.
#[derive(Debug, Clone, PartialEq)]
pub struct BillInstance {
    pub bill: BillId,
    pub period: MonthAnchor,
    pub due: NaiveDate,
    pub status: InstanceStatus,
    pub amount_due: f64,
}

// --

impl std::fmt::Display for InstallmentKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.commitment, self.index)
    }
}

impl CommitmentInstance {
    pub fn outstanding(&self) -> f64 {
        (self.amount_due - self.amount_paid).max(0.0)
    }
}
