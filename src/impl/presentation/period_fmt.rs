use chrono::{Duration, NaiveDate};

use crate::{domain::logic::date_math, entities::Recurrence};

use super::utils::month_day;

/// Billing-period range covered by one cycle starting at `due`
/// ("Jan 15 - Feb 14"). One-time and open-ended obligations have no cycle,
/// so only the date itself is rendered.
pub fn format_billing_period(due: NaiveDate, recurrence: Recurrence) -> String {
    let end = match recurrence {
        Recurrence::Weekly => due + Duration::days(6),
        Recurrence::Monthly | Recurrence::Yearly => {
            date_math::advance_by_periods(due, recurrence, 1) - Duration::days(1)
        }
        Recurrence::OneTime | Recurrence::NoDueDate => return month_day(due),
    };
    format!("{} - {}", month_day(due), month_day(end))
}
