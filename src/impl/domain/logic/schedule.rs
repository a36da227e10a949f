use chrono::NaiveDate;

use crate::entities::{CommitmentDefinition, Recurrence, ScheduledInstallment};

use super::{date_math, utils};

/// Produces the ordered theoretical installment schedule for a commitment:
/// due dates plus the per-installment amounts.
pub(crate) struct ScheduleGenerator<'a> {
    definition: &'a CommitmentDefinition,
}

impl<'a> ScheduleGenerator<'a> {
    pub(crate) fn new(definition: &'a CommitmentDefinition) -> Self {
        Self { definition }
    }

    pub(crate) fn generate(&self) -> Vec<ScheduledInstallment> {
        let due_dates = self.due_dates();
        let amounts = installment_amounts(self.definition.total_obligation(), due_dates.len());
        due_dates
            .into_iter()
            .zip(amounts)
            .map(|(due, amount_due)| ScheduledInstallment { due, amount_due })
            .collect()
    }

    fn due_dates(&self) -> Vec<NaiveDate> {
        let definition = self.definition;
        match definition.recurrence {
            // Open-ended obligations have no discrete schedule; downstream
            // resolves them to a single synthetic instance.
            Recurrence::NoDueDate => Vec::new(),
            Recurrence::OneTime => vec![date_math::advance_by_unit(
                definition.start,
                definition.duration_unit,
                definition.duration,
            )],
            Recurrence::Weekly | Recurrence::Monthly | Recurrence::Yearly => {
                // First installment falls one full period after the start.
                (1..=definition.installment_count())
                    .map(|k| date_math::advance_by_periods(definition.start, definition.recurrence, k))
                    .collect()
            }
        }
    }
}

/// Splits `total` into `count` installments: every installment is the
/// total divided through and rounded up to the cent, except the final one,
/// which absorbs the rounding remainder so the amounts sum to `total`
/// exactly.
pub(crate) fn installment_amounts(total: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    let flat = utils::ceil_cents(total / count as f64);
    let mut amounts = vec![flat; count];
    amounts[count - 1] = utils::round_cents(total - flat * (count as f64 - 1.0));
    amounts
}
