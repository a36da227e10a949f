use crate::{
    data::datasources::{
        bills_csv_datasource::{BillsCsvDatasource, BillsCsvDatasourceImpl},
        commitments_csv_datasource::{CommitmentsCsvDatasource, CommitmentsCsvDatasourceImpl},
        payments_csv_datasource::{PaymentsCsvDatasource, PaymentsCsvDatasourceImpl},
        snapshot_json_datasource::{SnapshotJsonDatasource, SnapshotJsonDatasourceImpl},
    },
    domain::repositories::ledger_repository::LedgerRepository,
    entities::LedgerSnapshot,
    errors::LedgerParseError,
};

pub(crate) struct LedgerRepositoryImpl<
    DS1 = CommitmentsCsvDatasourceImpl, // Defaults.
    DS2 = BillsCsvDatasourceImpl,
    DS3 = PaymentsCsvDatasourceImpl,
    DS4 = SnapshotJsonDatasourceImpl,
> where
    DS1: CommitmentsCsvDatasource,
    DS2: BillsCsvDatasource,
    DS3: PaymentsCsvDatasource,
    DS4: SnapshotJsonDatasource,
{
    commitments_datasource: DS1,
    bills_datasource: DS2,
    payments_datasource: DS3,
    snapshot_datasource: DS4,
}

impl<DS1, DS2, DS3, DS4> LedgerRepository for LedgerRepositoryImpl<DS1, DS2, DS3, DS4>
where
    DS1: CommitmentsCsvDatasource + Send + Sync,
    DS2: BillsCsvDatasource + Send + Sync,
    DS3: PaymentsCsvDatasource + Send + Sync,
    DS4: SnapshotJsonDatasource + Send + Sync,
{
    fn from_csv_strings(
        &self,
        commitments_csv: &str,
        bills_csv: &str,
        payments_csv: &str,
    ) -> Result<LedgerSnapshot, LedgerParseError> {
        Ok(LedgerSnapshot::new(
            self.commitments_datasource.from_string(commitments_csv)?,
            self.bills_datasource.from_string(bills_csv)?,
            self.payments_datasource.from_string(payments_csv)?,
        ))
    }

    fn from_json_string(&self, json: &str) -> Result<LedgerSnapshot, LedgerParseError> {
        self.snapshot_datasource.from_string(json)
    }
}

impl LedgerRepositoryImpl {
    pub(crate) fn new() -> Self {
        LedgerRepositoryImpl {
            commitments_datasource: CommitmentsCsvDatasourceImpl::new(),
            bills_datasource: BillsCsvDatasourceImpl::new(),
            payments_datasource: PaymentsCsvDatasourceImpl::new(),
            snapshot_datasource: SnapshotJsonDatasourceImpl::new(),
        }
    }
}
