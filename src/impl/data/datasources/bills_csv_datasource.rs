use std::str::FromStr as _;

use ron::from_str;

use crate::{
    data::models::{amount_model::AmountModel, iso_date_model::ISODateModel},
    entities::{BillDefinition, BillId, Recurrence},
    errors::LedgerParseError,
};

pub(crate) trait BillsCsvDatasource {
    fn from_string(&self, s: &str) -> Result<Vec<BillDefinition>, LedgerParseError>;
}

pub(crate) struct BillsCsvDatasourceImpl;

impl BillsCsvDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl BillsCsvDatasource for BillsCsvDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Vec<BillDefinition>, LedgerParseError> {
        csv::Reader::from_reader(s.as_bytes())
            .records()
            .map(|r| {
                r.map_err(LedgerParseError::InvalidCsv).and_then(|r| {
                    // Extract from CSV record.
                    let raw_id = r.get(0).unwrap_or("");
                    let raw_name = r.get(1).unwrap_or("");
                    let raw_amount = r.get(2).unwrap_or("0");
                    let raw_due_day = r.get(3).unwrap_or("0");
                    let raw_recurrence = r.get(4).unwrap_or("");
                    let raw_start = r.get(5).unwrap_or("");
                    let raw_first_payment = match r.get(6) {
                        Some(s) if !s.is_empty() => Some(s),
                        _ => None,
                    };
                    let raw_trial = r.get(7).unwrap_or("false");
                    let raw_trial_end = match r.get(8) {
                        Some(s) if !s.is_empty() => Some(s),
                        _ => None,
                    };
                    let raw_active = r.get(9).unwrap_or("true");
                    let raw_end_date = match r.get(10) {
                        Some(s) if !s.is_empty() => Some(s),
                        _ => None,
                    };

                    // Parse.
                    let id = raw_id
                        .parse::<u64>()
                        .map_err(|_| LedgerParseError::InvalidCsvContent {
                            details: format!("bill id '{}'", raw_id),
                        })?;
                    let amount: AmountModel = AmountModel::from_str(raw_amount)?;
                    let due_day = raw_due_day.parse::<u32>().map_err(|_| {
                        LedgerParseError::InvalidCsvContent {
                            details: format!("bill due day '{}'", raw_due_day),
                        }
                    })?;
                    let recurrence: Recurrence =
                        from_str(raw_recurrence).map_err(|e| LedgerParseError::InvalidRon {
                            ron_type: "Recurrence",
                            source: e,
                        })?;
                    let start: ISODateModel = ISODateModel::from_str(raw_start)?;
                    let first_payment_date: Option<ISODateModel> =
                        raw_first_payment.map(ISODateModel::from_str).transpose()?;
                    let trial = raw_trial.parse::<bool>().map_err(|_| {
                        LedgerParseError::InvalidCsvContent {
                            details: format!("bill trial flag '{}'", raw_trial),
                        }
                    })?;
                    let trial_end: Option<ISODateModel> =
                        raw_trial_end.map(ISODateModel::from_str).transpose()?;
                    let active = raw_active.parse::<bool>().map_err(|_| {
                        LedgerParseError::InvalidCsvContent {
                            details: format!("bill active flag '{}'", raw_active),
                        }
                    })?;
                    let end_date: Option<ISODateModel> =
                        raw_end_date.map(ISODateModel::from_str).transpose()?;

                    // Build.
                    Ok(BillDefinition {
                        id: BillId(id),
                        name: raw_name.into(),
                        amount: amount.into(),
                        due_day,
                        recurrence,
                        start: start.into(),
                        first_payment_date: first_payment_date.map(Into::into),
                        trial,
                        trial_end: trial_end.map(Into::into),
                        active,
                        end_date: end_date.map(Into::into),
                    })
                })
            })
            .collect()
    }
}
