use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;

use crate::errors::LedgerParseError;

/// Payment timestamps arrive either as a full date-time or as a bare date
/// (normalized to midnight, the way obligation start instants are stored).
#[derive(Debug)]
pub(crate) struct ISOTimestampModel(NaiveDateTime);

impl FromStr for ISOTimestampModel {
    type Err = LedgerParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
            return Ok(ISOTimestampModel(dt));
        }
        let date = NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
            LedgerParseError::InvalidIsoTimestamp {
                value: s.to_string(),
            }
        })?;
        Ok(ISOTimestampModel(
            date.and_hms_opt(0, 0, 0)
                .expect("midnight construction should never fail"),
        ))
    }
}

impl<'de> Deserialize<'de> for ISOTimestampModel {
    fn deserialize<D>(deserializer: D) -> Result<ISOTimestampModel, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ISOTimestampModel::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl From<ISOTimestampModel> for NaiveDateTime {
    fn from(model: ISOTimestampModel) -> Self {
        model.0
    }
}
