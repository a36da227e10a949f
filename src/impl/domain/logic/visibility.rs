use chrono::NaiveDate;

use crate::entities::{InstanceStatus, MonthAnchor};

/// Days before a next-month due date during which the installment already
/// surfaces on the current month's listing.
const LOOKAHEAD_DAYS: i64 = 7;

/// Decides whether a classified installment appears in the listing for the
/// viewed month.
pub(crate) fn is_visible(
    due: NaiveDate,
    status: InstanceStatus,
    anchor: MonthAnchor,
    today: NaiveDate,
) -> bool {
    match status {
        // Settled installments belong to the history view, not the listing.
        InstanceStatus::Paid => false,
        // Unpaid past-due installments follow the user to every month.
        InstanceStatus::Overdue => true,
        InstanceStatus::Due | InstanceStatus::Upcoming => {
            if anchor.contains(due) {
                return true;
            }
            // Next-month lookahead applies only while viewing the real
            // current month; paging ahead must not chain it forward.
            anchor == MonthAnchor::of(today)
                && anchor.next().contains(due)
                && (due - today).num_days() <= LOOKAHEAD_DAYS
        }
    }
}
