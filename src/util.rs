use chrono::NaiveDate;

use crate::{
    domain::{
        logic::{
            bill_resolver::BillInstanceResolver, instance_resolver::CommitmentInstanceResolver,
            status,
        },
        usecases::load_usecase::{LoadUsecase as _, LoadUsecaseImpl},
    },
    entities::{
        BillDefinition, BillInstance, CommitmentDefinition, CommitmentInstance, InstanceStatus,
        LedgerSnapshot, MonthAnchor,
    },
    errors::LedgerParseError,
};

/// Entry point to the obligation engine: snapshot loading plus the pure
/// instance queries the presentation layer renders from. Every query is a
/// deterministic function of its explicit arguments; "today" is always
/// injected, never observed.
pub struct ObligationEngineUtil {
    load_usecase: LoadUsecaseImpl,
}

impl ObligationEngineUtil {
    pub fn new() -> Self {
        Self {
            load_usecase: LoadUsecaseImpl::new(),
        }
    }

    pub async fn from_string(
        &self,
        commitments_csv: &str,
        bills_csv: &str,
        payments_csv: &str,
    ) -> Result<LedgerSnapshot, LedgerParseError> {
        self.load_usecase
            .from_string(commitments_csv, bills_csv, payments_csv)
            .await
    }

    pub async fn from_json_string(&self, json: &str) -> Result<LedgerSnapshot, LedgerParseError> {
        self.load_usecase.from_json_string(json).await
    }

    pub async fn from_file<P>(
        &self,
        commitments_csv: P,
        bills_csv: P,
        payments_csv: P,
    ) -> Result<LedgerSnapshot, LedgerParseError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        self.load_usecase
            .from_file(commitments_csv, bills_csv, payments_csv)
            .await
    }

    /// Resolves the installments of one commitment that the viewed month
    /// should display.
    pub fn commitment_instances(
        &self,
        definition: &CommitmentDefinition,
        ledger: &LedgerSnapshot,
        today: NaiveDate,
        anchor: MonthAnchor,
    ) -> Vec<CommitmentInstance> {
        CommitmentInstanceResolver::new(definition, ledger).resolve(today, anchor)
    }

    /// Resolves the billed occurrence of one bill for the viewed month, if
    /// any.
    pub fn bill_instance(
        &self,
        bill: &BillDefinition,
        ledger: &LedgerSnapshot,
        today: NaiveDate,
        anchor: MonthAnchor,
    ) -> Option<BillInstance> {
        BillInstanceResolver::new(bill, ledger).resolve(today, anchor)
    }

    pub fn classify_status(
        &self,
        due: NaiveDate,
        amount_due: f64,
        amount_paid: f64,
        today: NaiveDate,
    ) -> InstanceStatus {
        status::classify(due, amount_due, amount_paid, today)
    }
}
