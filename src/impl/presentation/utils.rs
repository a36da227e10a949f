use chrono::NaiveDate;
use iso_currency::Currency;
use num_format::{Locale, ToFormattedString as _};

/// Standard number of decimal places for the given currency
/// (ex. JPY = 0, USD = 2).
fn decimal_places(currency: Currency) -> usize {
    currency.exponent().unwrap_or(0) as usize
}

/// Short month-day form used across instance labels ("Jan 15").
pub(crate) fn month_day(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// Format a monetary amount with the currency's decimal places, proper
/// thousands separators, and the currency symbol appended.
///
/// For consistency, uses en locale ('.' as decimal mark, i.e. 1,000.00)
/// regardless of user's locale or currency. Could be generalized in the
/// future.
pub fn format_amount(amount: f64, currency: Currency) -> String {
    let decimal_places = decimal_places(currency);
    if decimal_places == 0 {
        let amount_rounded = (amount.round() as i64).to_formatted_string(&Locale::en);
        return format!("{} {}", amount_rounded, currency.symbol());
    }
    let amount_integer_part = (amount.trunc() as i64).to_formatted_string(&Locale::en);
    let amount_fractional_part = format!("{:.decimal_places$}", amount.fract().abs())
        .split('.')
        .nth(1)
        .map(|f| f.to_string())
        .unwrap_or_default();
    format!(
        "{}.{:0decimal_places$} {}",
        amount_integer_part,
        amount_fractional_part,
        currency.symbol(),
    )
}
