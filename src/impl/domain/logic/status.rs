use chrono::NaiveDate;

use crate::entities::InstanceStatus;

use super::utils;

/// Derives the display status of a single installment. Settlement wins
/// over any date comparison, so a fully-paid installment is never OVERDUE
/// or DUE.
pub(crate) fn classify(
    due: NaiveDate,
    amount_due: f64,
    amount_paid: f64,
    today: NaiveDate,
) -> InstanceStatus {
    if utils::settles(amount_paid, amount_due) {
        InstanceStatus::Paid
    } else if due < today {
        InstanceStatus::Overdue
    } else if due == today {
        InstanceStatus::Due
    } else {
        InstanceStatus::Upcoming
    }
}
