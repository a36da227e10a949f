use chrono::NaiveDateTime;

use super::{bill::BillId, commitment::CommitmentId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde_derive::Deserialize)]
pub struct PaymentId(pub u64);

/// Which obligation a ledger payment settles. Matching is strictly by this
/// field; payments referencing an unknown obligation are excluded from
/// every query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde_derive::Deserialize)]
pub enum ObligationRef {
    Commitment(CommitmentId),
    Bill(BillId),
    Unlinked,
}

/// One entry of the read-only payment ledger. The ledger is an unordered
/// snapshot; any ordering the engine needs it establishes itself.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRecord {
    pub id: PaymentId,
    pub amount: f64,
    pub reference: ObligationRef,
    pub timestamp: NaiveDateTime,
}
