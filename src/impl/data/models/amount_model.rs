use std::str::FromStr;

use crate::errors::LedgerParseError;

/// Monetary amount as it appears in an import file: optional thousands
/// separators, optional parenthesized negative.
#[derive(Debug)]
pub(crate) struct AmountModel(pub f64);

impl FromStr for AmountModel {
    type Err = LedgerParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.replace(',', "");
        let trimmed = raw.trim();
        let is_negative = trimmed.starts_with('(') && trimmed.ends_with(')');
        let numeric_part = trimmed.trim_matches(|c| c == '(' || c == ')');
        let amount = numeric_part
            .parse::<f64>()
            .ok()
            .filter(|a| a.is_finite())
            .ok_or_else(|| LedgerParseError::InvalidAmount {
                value: s.to_string(),
            })?;
        Ok(AmountModel(if is_negative { -amount } else { amount }))
    }
}

impl From<AmountModel> for f64 {
    fn from(model: AmountModel) -> Self {
        model.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_separated_amounts() {
        assert_eq!(f64::from("10500".parse::<AmountModel>().unwrap()), 10500.0);
        assert_eq!(f64::from("10,500.25".parse::<AmountModel>().unwrap()), 10500.25);
        assert_eq!(f64::from("(875.00)".parse::<AmountModel>().unwrap()), -875.0);
    }

    #[test]
    fn rejects_non_numeric_input() {
        assert!("ten".parse::<AmountModel>().is_err());
        assert!("NaN".parse::<AmountModel>().is_err());
    }
}
