use chrono::{Datelike, Duration, Months, NaiveDate};

use crate::entities::{DurationUnit, Recurrence};

/// Advances `start` by `periods` recurrence periods. Advancement is always
/// measured from `start` itself, never from a previously clamped result:
/// a monthly schedule anchored on the 31st clamps to Feb 28/29 and still
/// returns to the 31st in longer months.
pub(crate) fn advance_by_periods(
    start: NaiveDate,
    recurrence: Recurrence,
    periods: u32,
) -> NaiveDate {
    match recurrence {
        Recurrence::Weekly => start + Duration::weeks(periods as i64),
        Recurrence::Monthly => add_months_clamped(start, periods),
        Recurrence::Yearly => add_months_clamped(start, periods * 12),
        Recurrence::OneTime | Recurrence::NoDueDate => start,
    }
}

/// Advances `start` by `count` offsets of the given unit. One-time
/// obligations measure their single due date this way.
pub(crate) fn advance_by_unit(start: NaiveDate, unit: DurationUnit, count: i32) -> NaiveDate {
    let count = count.max(0);
    match unit {
        DurationUnit::Days => start + Duration::days(count as i64),
        DurationUnit::Weeks => start + Duration::weeks(count as i64),
        DurationUnit::Months => add_months_clamped(start, count as u32),
        DurationUnit::Years => add_months_clamped(start, count as u32 * 12),
    }
}

/// Month advancement preserving the day-of-month where valid and clamping
/// to the target month's last day otherwise (Jan 31 + 1 month = Feb 28/29).
fn add_months_clamped(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months))
        .unwrap_or(NaiveDate::MAX)
}

/// Last valid day of the given month.
pub(crate) fn last_day_of_month(year: i32, month: u32) -> u32 {
    // Compute first day of next month, then step back one day.
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let first_of_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .expect("first-of-month construction should never fail");
    (first_of_next - Duration::days(1)).day()
}

/// Date at (year, month, day) with the day clamped into the month's valid
/// range.
pub(crate) fn clamped_date(year: i32, month: u32, day: u32) -> NaiveDate {
    let day = day.clamp(1, last_day_of_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day)
        .expect("day clamped into month range should always be valid")
}
