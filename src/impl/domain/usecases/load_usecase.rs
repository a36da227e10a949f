use async_trait::async_trait;

use crate::{
    data::repositories::ledger_repository_impl::LedgerRepositoryImpl,
    domain::repositories::ledger_repository::LedgerRepository,
    entities::LedgerSnapshot,
    errors::LedgerParseError,
};

#[async_trait]
pub(crate) trait LoadUsecase: Send + Sync {
    async fn from_string(
        &self,
        commitments_csv: &str,
        bills_csv: &str,
        payments_csv: &str,
    ) -> Result<LedgerSnapshot, LedgerParseError>;

    async fn from_json_string(&self, json: &str) -> Result<LedgerSnapshot, LedgerParseError>;

    async fn from_file<P>(
        &self,
        commitments_csv: P,
        bills_csv: P,
        payments_csv: P,
    ) -> Result<LedgerSnapshot, LedgerParseError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct LoadUsecaseImpl<
    R1 = LedgerRepositoryImpl, // Default.
> where
    R1: LedgerRepository,
{
    ledger_repository: R1,
}

#[async_trait]
impl<R1> LoadUsecase for LoadUsecaseImpl<R1>
where
    R1: LedgerRepository,
{
    async fn from_string(
        &self,
        commitments_csv: &str,
        bills_csv: &str,
        payments_csv: &str,
    ) -> Result<LedgerSnapshot, LedgerParseError> {
        self.ledger_repository
            .from_csv_strings(commitments_csv, bills_csv, payments_csv)
    }

    async fn from_json_string(&self, json: &str) -> Result<LedgerSnapshot, LedgerParseError> {
        self.ledger_repository.from_json_string(json)
    }

    async fn from_file<P>(
        &self,
        commitments_csv: P,
        bills_csv: P,
        payments_csv: P,
    ) -> Result<LedgerSnapshot, LedgerParseError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let (commitments, bills, payments) = futures::try_join!(
            tokio::fs::read_to_string(commitments_csv.as_ref()),
            tokio::fs::read_to_string(bills_csv.as_ref()),
            tokio::fs::read_to_string(payments_csv.as_ref()),
        )
        .map_err(LedgerParseError::Read)?;
        self.ledger_repository
            .from_csv_strings(&commitments, &bills, &payments)
    }
}

impl LoadUsecaseImpl {
    pub(crate) fn new() -> Self {
        LoadUsecaseImpl {
            ledger_repository: LedgerRepositoryImpl::new(),
        }
    }
}
