use crate::entities::ScheduledInstallment;

/// FIFO-distributes the cumulative amount paid across a schedule: each
/// installment draws from the unapplied pool before any later one sees a
/// cent. Returns the applied amount per installment, aligned with the
/// schedule.
pub(crate) fn attribute_payments(schedule: &[ScheduledInstallment], total_paid: f64) -> Vec<f64> {
    let mut pool = total_paid.max(0.0);
    schedule
        .iter()
        .map(|installment| {
            let applied = pool.min(installment.amount_due.max(0.0));
            pool -= applied;
            applied
        })
        .collect()
}
