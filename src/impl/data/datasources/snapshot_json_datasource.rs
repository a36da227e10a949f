use crate::{
    data::models::{iso_date_model::ISODateModel, iso_timestamp_model::ISOTimestampModel},
    entities::{
        BillDefinition, BillId, CommitmentDefinition, CommitmentId, DurationUnit, LedgerSnapshot,
        ObligationRef, PaymentId, PaymentRecord, Recurrence,
    },
    errors::LedgerParseError,
};

pub(crate) trait SnapshotJsonDatasource {
    fn from_string(&self, s: &str) -> Result<LedgerSnapshot, LedgerParseError>;
}

pub(crate) struct SnapshotJsonDatasourceImpl;

impl SnapshotJsonDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl SnapshotJsonDatasource for SnapshotJsonDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<LedgerSnapshot, LedgerParseError> {
        let model: SnapshotModel =
            serde_json::from_str(s).map_err(LedgerParseError::InvalidJson)?;
        Ok(model.into())
    }
}

// JSON wire models. Dates travel as ISO strings; everything else maps
// directly onto the entities.
// --

#[derive(Debug, serde_derive::Deserialize)]
struct SnapshotModel {
    #[serde(default)]
    commitments: Vec<CommitmentModel>,
    #[serde(default)]
    bills: Vec<BillModel>,
    #[serde(default)]
    payments: Vec<PaymentModel>,
}

#[derive(Debug, serde_derive::Deserialize)]
struct CommitmentModel {
    id: u64,
    name: String,
    principal: f64,
    interest: f64,
    fee: f64,
    recurrence: Recurrence,
    start: ISODateModel,
    duration: i32,
    duration_unit: DurationUnit,
}

#[derive(Debug, serde_derive::Deserialize)]
struct BillModel {
    id: u64,
    name: String,
    amount: f64,
    due_day: u32,
    recurrence: Recurrence,
    start: ISODateModel,
    #[serde(default)]
    first_payment_date: Option<ISODateModel>,
    #[serde(default)]
    trial: bool,
    #[serde(default)]
    trial_end: Option<ISODateModel>,
    #[serde(default = "default_active")]
    active: bool,
    #[serde(default)]
    end_date: Option<ISODateModel>,
}

#[derive(Debug, serde_derive::Deserialize)]
struct PaymentModel {
    id: u64,
    amount: f64,
    #[serde(default = "default_reference")]
    reference: ObligationRef,
    timestamp: ISOTimestampModel,
}

fn default_active() -> bool {
    true
}

fn default_reference() -> ObligationRef {
    ObligationRef::Unlinked
}

impl From<SnapshotModel> for LedgerSnapshot {
    fn from(model: SnapshotModel) -> Self {
        LedgerSnapshot::new(
            model.commitments.into_iter().map(Into::into).collect(),
            model.bills.into_iter().map(Into::into).collect(),
            model.payments.into_iter().map(Into::into).collect(),
        )
    }
}

impl From<CommitmentModel> for CommitmentDefinition {
    fn from(model: CommitmentModel) -> Self {
        CommitmentDefinition {
            id: CommitmentId(model.id),
            name: model.name,
            principal: model.principal,
            interest: model.interest,
            fee: model.fee,
            recurrence: model.recurrence,
            start: model.start.into(),
            duration: model.duration,
            duration_unit: model.duration_unit,
        }
    }
}

impl From<BillModel> for BillDefinition {
    fn from(model: BillModel) -> Self {
        BillDefinition {
            id: BillId(model.id),
            name: model.name,
            amount: model.amount,
            due_day: model.due_day,
            recurrence: model.recurrence,
            start: model.start.into(),
            first_payment_date: model.first_payment_date.map(Into::into),
            trial: model.trial,
            trial_end: model.trial_end.map(Into::into),
            active: model.active,
            end_date: model.end_date.map(Into::into),
        }
    }
}

impl From<PaymentModel> for PaymentRecord {
    fn from(model: PaymentModel) -> Self {
        PaymentRecord {
            id: PaymentId(model.id),
            amount: model.amount,
            reference: model.reference,
            timestamp: model.timestamp.into(),
        }
    }
}
