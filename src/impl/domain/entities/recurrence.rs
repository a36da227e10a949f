/// Cadence of an obligation. Closed set so downstream matching is
/// exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde_derive::Deserialize)]
pub enum Recurrence {
    OneTime,
    Weekly,
    Monthly,
    Yearly,
    /// Open-ended obligation with no schedule; resolves to a single
    /// instance for the outstanding balance.
    NoDueDate,
}

impl Recurrence {
    pub fn is_recurring(&self) -> bool {
        matches!(self, Recurrence::Weekly | Recurrence::Monthly | Recurrence::Yearly)
    }
}
