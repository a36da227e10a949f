use chrono::NaiveDate;

use crate::entities::{InstanceStatus, Recurrence};

use super::utils::month_day;

/// Human-readable due label for a resolved instance: "Overdue by 3 days •
/// Jan 12", "Due Today • Jan 15", "Due Tomorrow • Jan 15", "Due Jan 15".
/// Open-ended obligations carry no date at all.
pub fn format_due_date_label(
    due: NaiveDate,
    status: InstanceStatus,
    recurrence: Recurrence,
    today: NaiveDate,
) -> String {
    if recurrence == Recurrence::NoDueDate {
        return "No due date".to_string();
    }
    match status {
        InstanceStatus::Paid => format!("Paid • {}", month_day(due)),
        InstanceStatus::Overdue => {
            let days = (today - due).num_days();
            format!(
                "Overdue by {} {} • {}",
                days,
                if days == 1 { "day" } else { "days" },
                month_day(due)
            )
        }
        InstanceStatus::Due => format!("Due Today • {}", month_day(due)),
        InstanceStatus::Upcoming => {
            if (due - today).num_days() == 1 {
                format!("Due Tomorrow • {}", month_day(due))
            } else {
                format!("Due {}", month_day(due))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn overdue_counts_days_since_due() {
        let label = format_due_date_label(
            d(2026, 1, 12),
            InstanceStatus::Overdue,
            Recurrence::Monthly,
            d(2026, 1, 15),
        );
        assert_eq!(label, "Overdue by 3 days • Jan 12");
    }

    #[test]
    fn single_day_overdue_is_singular() {
        let label = format_due_date_label(
            d(2026, 1, 14),
            InstanceStatus::Overdue,
            Recurrence::Monthly,
            d(2026, 1, 15),
        );
        assert_eq!(label, "Overdue by 1 day • Jan 14");
    }

    #[test]
    fn due_today_and_tomorrow_are_called_out() {
        let today = d(2026, 1, 14);
        assert_eq!(
            format_due_date_label(today, InstanceStatus::Due, Recurrence::Monthly, today),
            "Due Today • Jan 14"
        );
        assert_eq!(
            format_due_date_label(d(2026, 1, 15), InstanceStatus::Upcoming, Recurrence::Monthly, today),
            "Due Tomorrow • Jan 15"
        );
        assert_eq!(
            format_due_date_label(d(2026, 1, 20), InstanceStatus::Upcoming, Recurrence::Monthly, today),
            "Due Jan 20"
        );
    }

    #[test]
    fn open_ended_has_no_date_label() {
        let today = d(2026, 1, 14);
        assert_eq!(
            format_due_date_label(today, InstanceStatus::Upcoming, Recurrence::NoDueDate, today),
            "No due date"
        );
    }
}
