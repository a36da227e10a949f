use std::str::FromStr;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::errors::LedgerParseError;

#[derive(Debug)]
pub(crate) struct ISODateModel(NaiveDate);

impl FromStr for ISODateModel {
    type Err = LedgerParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let d = NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
            LedgerParseError::InvalidIsoDate {
                date: s.to_string(),
            }
        })?;
        Ok(ISODateModel(d))
    }
}

impl<'de> Deserialize<'de> for ISODateModel {
    fn deserialize<D>(deserializer: D) -> Result<ISODateModel, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ISODateModel::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl From<ISODateModel> for NaiveDate {
    fn from(model: ISODateModel) -> Self {
        model.0
    }
}
