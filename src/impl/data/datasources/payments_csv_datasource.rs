use std::str::FromStr as _;

use ron::extensions::Extensions;

use crate::{
    data::models::{amount_model::AmountModel, iso_timestamp_model::ISOTimestampModel},
    entities::{ObligationRef, PaymentId, PaymentRecord},
    errors::LedgerParseError,
};

pub(crate) trait PaymentsCsvDatasource {
    fn from_string(&self, s: &str) -> Result<Vec<PaymentRecord>, LedgerParseError>;
}

pub(crate) struct PaymentsCsvDatasourceImpl;

impl PaymentsCsvDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl PaymentsCsvDatasource for PaymentsCsvDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Vec<PaymentRecord>, LedgerParseError> {
        csv::Reader::from_reader(s.as_bytes())
            .records()
            .map(|r| {
                r.map_err(LedgerParseError::InvalidCsv).and_then(|r| {
                    // Extract from CSV record.
                    let raw_id = r.get(0).unwrap_or("");
                    let raw_amount = r.get(1).unwrap_or("0");
                    let raw_reference = match r.get(2) {
                        Some(s) if !s.is_empty() => Some(s),
                        _ => None,
                    };
                    let raw_timestamp = r.get(3).unwrap_or("");

                    // Parse. An empty reference column is an unlinked
                    // payment, not an error.
                    let id = raw_id
                        .parse::<u64>()
                        .map_err(|_| LedgerParseError::InvalidCsvContent {
                            details: format!("payment id '{}'", raw_id),
                        })?;
                    let amount: AmountModel = AmountModel::from_str(raw_amount)?;
                    let reference: ObligationRef = match raw_reference {
                        Some(raw) => ron::Options::default()
                            .with_default_extension(Extensions::UNWRAP_NEWTYPES)
                            .from_str(raw)
                            .map_err(|e| LedgerParseError::InvalidRon {
                                ron_type: "ObligationRef",
                                source: e,
                            })?,
                        None => ObligationRef::Unlinked,
                    };
                    let timestamp: ISOTimestampModel = ISOTimestampModel::from_str(raw_timestamp)?;

                    // Build.
                    Ok(PaymentRecord {
                        id: PaymentId(id),
                        amount: amount.into(),
                        reference,
                        timestamp: timestamp.into(),
                    })
                })
            })
            .collect()
    }
}
