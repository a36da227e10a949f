/// Tolerance for monetary comparisons, so floating-point dust never makes
/// a fully-paid installment read as outstanding.
pub(crate) const MONEY_EPSILON: f64 = 0.01;

/// Rounds to the nearest cent.
pub(crate) fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Rounds up to the next cent.
pub(crate) fn ceil_cents(amount: f64) -> f64 {
    (amount * 100.0).ceil() / 100.0
}

/// Whether `paid` settles `due` within the monetary tolerance. Overpayment
/// settles.
pub(crate) fn settles(paid: f64, due: f64) -> bool {
    due - paid <= MONEY_EPSILON
}
