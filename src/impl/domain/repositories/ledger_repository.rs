use crate::{entities::LedgerSnapshot, errors::LedgerParseError};

pub(crate) trait LedgerRepository: Send + Sync {
    fn from_csv_strings(
        &self,
        commitments_csv: &str,
        bills_csv: &str,
        payments_csv: &str,
    ) -> Result<LedgerSnapshot, LedgerParseError>;

    fn from_json_string(&self, json: &str) -> Result<LedgerSnapshot, LedgerParseError>;
}
