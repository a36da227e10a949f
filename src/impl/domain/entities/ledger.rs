use chrono::NaiveDate;

use super::{
    bill::{BillDefinition, BillId},
    commitment::{CommitmentDefinition, CommitmentId},
    month_anchor::MonthAnchor,
    payment::{ObligationRef, PaymentRecord},
};

/// Everything the engine computes from: obligation definitions plus the
/// unordered payment ledger. Engine queries never mutate it; the mutators
/// below are the definition-lifecycle operations the storage layer calls
/// between queries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LedgerSnapshot {
    pub commitments: Vec<CommitmentDefinition>,
    pub bills: Vec<BillDefinition>,
    pub payments: Vec<PaymentRecord>,
}

impl LedgerSnapshot {
    pub fn new(
        commitments: Vec<CommitmentDefinition>,
        bills: Vec<BillDefinition>,
        payments: Vec<PaymentRecord>,
    ) -> Self {
        Self {
            commitments,
            bills,
            payments,
        }
    }

    /// Sum of ledger payments referencing the given commitment.
    pub(crate) fn paid_toward_commitment(&self, id: CommitmentId) -> f64 {
        self.payments
            .iter()
            .filter(|p| p.reference == ObligationRef::Commitment(id))
            .map(|p| p.amount)
            .sum()
    }

    /// Whether any ledger payment referencing the bill falls inside the
    /// given month.
    pub(crate) fn bill_paid_in(&self, id: BillId, month: MonthAnchor) -> bool {
        self.payments
            .iter()
            .any(|p| p.reference == ObligationRef::Bill(id) && month.contains(p.timestamp.date()))
    }

    /// Insert or fully replace a commitment definition; edits are
    /// whole-value replacements.
    pub fn upsert_commitment(&mut self, definition: CommitmentDefinition) {
        match self.commitments.iter_mut().find(|c| c.id == definition.id) {
            Some(slot) => *slot = definition,
            None => self.commitments.push(definition),
        }
    }

    /// Removes a commitment and every payment referencing it.
    pub fn remove_commitment(&mut self, id: CommitmentId) {
        self.commitments.retain(|c| c.id != id);
        self.payments
            .retain(|p| p.reference != ObligationRef::Commitment(id));
    }

    pub fn upsert_bill(&mut self, definition: BillDefinition) {
        match self.bills.iter_mut().find(|b| b.id == definition.id) {
            Some(slot) => *slot = definition,
            None => self.bills.push(definition),
        }
    }

    /// Soft delete: marks the bill inactive and records the end date,
    /// keeping its payment history intact.
    pub fn deactivate_bill(&mut self, id: BillId, end: NaiveDate) {
        if let Some(bill) = self.bills.iter_mut().find(|b| b.id == id) {
            bill.active = false;
            bill.end_date = Some(end);
        }
    }

    /// Housekeeping pass: bills whose trial end has passed stop being
    /// trials and start billing from the trial end date.
    pub fn roll_over_expired_trials(&mut self, today: NaiveDate) {
        for bill in &mut self.bills {
            if !bill.trial {
                continue;
            }
            if let Some(end) = bill.trial_end {
                if end <= today {
                    bill.trial = false;
                    bill.first_payment_date = Some(end);
                }
            }
        }
    }
}
