use chrono::NaiveDate;

use crate::entities::{
    CommitmentDefinition, CommitmentInstance, InstallmentKey, InstanceStatus, LedgerSnapshot,
    MonthAnchor, Recurrence,
};

use super::{attribution, schedule::ScheduleGenerator, status, utils, visibility};

/// Resolves the visible instances of one commitment for a viewed month:
/// schedule generation, FIFO payment attribution, status classification,
/// and month-visibility filtering, in that order.
pub(crate) struct CommitmentInstanceResolver<'a> {
    definition: &'a CommitmentDefinition,
    ledger: &'a LedgerSnapshot,
}

impl<'a> CommitmentInstanceResolver<'a> {
    pub(crate) fn new(definition: &'a CommitmentDefinition, ledger: &'a LedgerSnapshot) -> Self {
        Self { definition, ledger }
    }

    pub(crate) fn resolve(&self, today: NaiveDate, anchor: MonthAnchor) -> Vec<CommitmentInstance> {
        if self.definition.recurrence == Recurrence::NoDueDate {
            return self.resolve_open_ended(anchor).into_iter().collect();
        }

        let schedule = ScheduleGenerator::new(self.definition).generate();
        let applied = attribution::attribute_payments(
            &schedule,
            self.ledger.paid_toward_commitment(self.definition.id),
        );
        schedule
            .iter()
            .zip(applied)
            .enumerate()
            .filter_map(|(index, (installment, amount_paid))| {
                let status =
                    status::classify(installment.due, installment.amount_due, amount_paid, today);
                visibility::is_visible(installment.due, status, anchor, today).then(|| {
                    CommitmentInstance {
                        key: InstallmentKey {
                            commitment: self.definition.id,
                            index: index as u32,
                        },
                        due: installment.due,
                        status,
                        amount_due: installment.amount_due,
                        amount_paid,
                    }
                })
            })
            .collect()
    }

    /// Open-ended obligations surface as exactly one instance for the
    /// outstanding balance, visible from the start month onward. Having no
    /// due date, they never classify OVERDUE or DUE; once settled they move
    /// to history like any paid installment.
    fn resolve_open_ended(&self, anchor: MonthAnchor) -> Option<CommitmentInstance> {
        if anchor < MonthAnchor::of(self.definition.start) {
            return None;
        }
        let total = self.definition.total_obligation();
        let paid = self
            .ledger
            .paid_toward_commitment(self.definition.id)
            .max(0.0);
        if utils::settles(paid, total) {
            return None;
        }
        Some(CommitmentInstance {
            key: InstallmentKey {
                commitment: self.definition.id,
                index: 0,
            },
            due: self.definition.start,
            status: InstanceStatus::Upcoming,
            amount_due: total,
            amount_paid: paid.min(total),
        })
    }
}
