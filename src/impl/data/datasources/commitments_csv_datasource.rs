use std::str::FromStr as _;

use ron::from_str;

use crate::{
    data::models::{amount_model::AmountModel, iso_date_model::ISODateModel},
    entities::{CommitmentDefinition, CommitmentId, DurationUnit, Recurrence},
    errors::LedgerParseError,
};

pub(crate) trait CommitmentsCsvDatasource {
    fn from_string(&self, s: &str) -> Result<Vec<CommitmentDefinition>, LedgerParseError>;
}

pub(crate) struct CommitmentsCsvDatasourceImpl;

impl CommitmentsCsvDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl CommitmentsCsvDatasource for CommitmentsCsvDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Vec<CommitmentDefinition>, LedgerParseError> {
        csv::Reader::from_reader(s.as_bytes())
            .records()
            .map(|r| {
                r.map_err(LedgerParseError::InvalidCsv).and_then(|r| {
                    // Extract from CSV record.
                    let raw_id = r.get(0).unwrap_or("");
                    let raw_name = r.get(1).unwrap_or("");
                    let raw_principal = r.get(2).unwrap_or("0");
                    let raw_interest = r.get(3).unwrap_or("0");
                    let raw_fee = r.get(4).unwrap_or("0");
                    let raw_recurrence = r.get(5).unwrap_or("");
                    let raw_start = r.get(6).unwrap_or("");
                    let raw_duration = r.get(7).unwrap_or("0");
                    let raw_duration_unit = r.get(8).unwrap_or("Months");

                    // Parse.
                    let id = raw_id
                        .parse::<u64>()
                        .map_err(|_| LedgerParseError::InvalidCsvContent {
                            details: format!("commitment id '{}'", raw_id),
                        })?;
                    let principal: AmountModel = AmountModel::from_str(raw_principal)?;
                    let interest: AmountModel = AmountModel::from_str(raw_interest)?;
                    let fee: AmountModel = AmountModel::from_str(raw_fee)?;
                    let recurrence: Recurrence =
                        from_str(raw_recurrence).map_err(|e| LedgerParseError::InvalidRon {
                            ron_type: "Recurrence",
                            source: e,
                        })?;
                    let start: ISODateModel = ISODateModel::from_str(raw_start)?;
                    let duration = raw_duration.parse::<i32>().map_err(|_| {
                        LedgerParseError::InvalidCsvContent {
                            details: format!("commitment duration '{}'", raw_duration),
                        }
                    })?;
                    let duration_unit: DurationUnit = from_str(raw_duration_unit)
                        .map_err(|e| LedgerParseError::InvalidRon {
                            ron_type: "DurationUnit",
                            source: e,
                        })?;

                    // Build.
                    Ok(CommitmentDefinition {
                        id: CommitmentId(id),
                        name: raw_name.into(),
                        principal: principal.into(),
                        interest: interest.into(),
                        fee: fee.into(),
                        recurrence,
                        start: start.into(),
                        duration,
                        duration_unit,
                    })
                })
            })
            .collect()
    }
}
