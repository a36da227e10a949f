use chrono::NaiveDate;

use obligation_engine::entities::{
    BillId, CommitmentId, InstanceStatus, MonthAnchor, ObligationRef, Recurrence,
};
use obligation_engine::fmt::{format_billing_period, format_due_date_label};
use obligation_engine::util::ObligationEngineUtil;

const COMMITMENTS_CSV: &str = "\
id,name,principal,interest,fee,recurrence,start,duration,duration_unit
1,Car loan,10000,500,0,Monthly,2026-01-15,12,Months
2,Open lending,10500,0,0,NoDueDate,2026-03-10,0,Months
";

const BILLS_CSV: &str = "\
id,name,amount,due_day,recurrence,start,first_payment_date,trial,trial_end,active,end_date
3,Rent,10000,15,Monthly,2026-01-15,,false,,true,
4,Streaming,12.99,1,Monthly,2026-01-20,,true,2026-03-01,true,
";

const PAYMENTS_CSV: &str = "\
id,amount,reference,timestamp
1,875,Commitment(1),2026-02-15T10:00:00
2,875,Commitment(1),2026-03-15
3,500,Commitment(2),2026-03-12
4,10000,Bill(3),2026-01-03T08:00:00
5,250,,2026-01-04
";

fn d(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[tokio::test]
async fn bill_occurrences_track_the_viewed_month() {
    let util = ObligationEngineUtil::new();
    let ledger = util
        .from_string(COMMITMENTS_CSV, BILLS_CSV, "id,amount,reference,timestamp\n")
        .await
        .unwrap();
    let rent = ledger.bills.iter().find(|b| b.id == BillId(3)).unwrap();
    let today = d(2025, 12, 1);

    assert!(util
        .bill_instance(rent, &ledger, today, MonthAnchor::new(2025, 12))
        .is_none());
    assert_eq!(
        util.bill_instance(rent, &ledger, today, MonthAnchor::new(2026, 1))
            .map(|i| i.due),
        Some(d(2026, 1, 15))
    );
    assert_eq!(
        util.bill_instance(rent, &ledger, today, MonthAnchor::new(2026, 2))
            .map(|i| i.due),
        Some(d(2026, 2, 15))
    );
}

#[tokio::test]
async fn payments_settle_installments_in_order() {
    let util = ObligationEngineUtil::new();
    let ledger = util
        .from_string(COMMITMENTS_CSV, BILLS_CSV, PAYMENTS_CSV)
        .await
        .unwrap();
    let loan = ledger
        .commitments
        .iter()
        .find(|c| c.id == CommitmentId(1))
        .unwrap();

    // 1750 paid settles the Feb and Mar installments of 875 each; viewing
    // April surfaces the third installment untouched.
    let instances =
        util.commitment_instances(loan, &ledger, d(2026, 1, 1), MonthAnchor::new(2026, 4));
    assert_eq!(instances.len(), 1);
    assert_eq!(instances[0].key.index, 2);
    assert_eq!(instances[0].amount_due, 875.0);
    assert_eq!(instances[0].amount_paid, 0.0);

    // The settled February installment no longer appears on its own month.
    let february =
        util.commitment_instances(loan, &ledger, d(2026, 1, 1), MonthAnchor::new(2026, 2));
    assert!(february.is_empty());
}

#[tokio::test]
async fn open_ended_commitment_shows_outstanding_balance() {
    let util = ObligationEngineUtil::new();
    let ledger = util
        .from_string(COMMITMENTS_CSV, BILLS_CSV, PAYMENTS_CSV)
        .await
        .unwrap();
    let lending = ledger
        .commitments
        .iter()
        .find(|c| c.id == CommitmentId(2))
        .unwrap();
    let today = d(2026, 3, 10);

    let current = util.commitment_instances(lending, &ledger, today, MonthAnchor::new(2026, 3));
    assert_eq!(current.len(), 1);
    assert_eq!(current[0].amount_due, 10500.0);
    assert_eq!(current[0].amount_paid, 500.0);

    let previous = util.commitment_instances(lending, &ledger, today, MonthAnchor::new(2026, 2));
    assert!(previous.is_empty());
}

#[tokio::test]
async fn monthly_commitment_started_today_defers_to_next_cycle() {
    let util = ObligationEngineUtil::new();
    let today = d(2026, 1, 15);
    let ledger = util
        .from_string(COMMITMENTS_CSV, BILLS_CSV, "id,amount,reference,timestamp\n")
        .await
        .unwrap();
    let loan = ledger
        .commitments
        .iter()
        .find(|c| c.id == CommitmentId(1))
        .unwrap();

    assert!(util
        .commitment_instances(loan, &ledger, today, MonthAnchor::new(2026, 1))
        .is_empty());
    let next = util.commitment_instances(loan, &ledger, today, MonthAnchor::new(2026, 2));
    assert_eq!(next.len(), 1);
    assert_eq!(next[0].status, InstanceStatus::Upcoming);
    assert_eq!(next[0].due, d(2026, 2, 15));
}

#[tokio::test]
async fn trial_bills_stay_silent_until_rolled_over() {
    let util = ObligationEngineUtil::new();
    let mut ledger = util
        .from_string(COMMITMENTS_CSV, BILLS_CSV, "id,amount,reference,timestamp\n")
        .await
        .unwrap();
    let streaming = ledger
        .bills
        .iter()
        .find(|b| b.id == BillId(4))
        .unwrap()
        .clone();
    assert!(util
        .bill_instance(&streaming, &ledger, d(2026, 2, 10), MonthAnchor::new(2026, 2))
        .is_none());

    // Once the trial end passes, the housekeeping pass activates billing
    // from the trial end date.
    ledger.roll_over_expired_trials(d(2026, 3, 2));
    let streaming = ledger.bills.iter().find(|b| b.id == BillId(4)).unwrap();
    assert!(!streaming.trial);
    let instance = util
        .bill_instance(streaming, &ledger, d(2026, 3, 2), MonthAnchor::new(2026, 3))
        .unwrap();
    assert_eq!(instance.due, d(2026, 3, 1));
    assert_eq!(instance.status, InstanceStatus::Overdue);
}

#[tokio::test]
async fn removing_a_commitment_cascades_to_its_payments() {
    let util = ObligationEngineUtil::new();
    let mut ledger = util
        .from_string(COMMITMENTS_CSV, BILLS_CSV, PAYMENTS_CSV)
        .await
        .unwrap();
    assert!(ledger
        .payments
        .iter()
        .any(|p| p.reference == ObligationRef::Commitment(CommitmentId(1))));

    ledger.remove_commitment(CommitmentId(1));
    assert!(ledger.commitments.iter().all(|c| c.id != CommitmentId(1)));
    assert!(ledger
        .payments
        .iter()
        .all(|p| p.reference != ObligationRef::Commitment(CommitmentId(1))));
    // Unrelated payments survive.
    assert!(ledger
        .payments
        .iter()
        .any(|p| p.reference == ObligationRef::Bill(BillId(3))));
}

#[tokio::test]
async fn edits_replace_definitions_wholesale() {
    let util = ObligationEngineUtil::new();
    let mut ledger = util
        .from_string(COMMITMENTS_CSV, BILLS_CSV, PAYMENTS_CSV)
        .await
        .unwrap();

    let mut edited = ledger
        .commitments
        .iter()
        .find(|c| c.id == CommitmentId(1))
        .unwrap()
        .clone();
    edited.interest = 800.0;
    ledger.upsert_commitment(edited);
    assert_eq!(ledger.commitments.len(), 2);
    let loan = ledger
        .commitments
        .iter()
        .find(|c| c.id == CommitmentId(1))
        .unwrap();
    assert_eq!(loan.total_obligation(), 10800.0);

    // Soft-deleting a bill ends future occurrences but keeps history.
    ledger.deactivate_bill(BillId(3), d(2026, 3, 20));
    let rent = ledger.bills.iter().find(|b| b.id == BillId(3)).unwrap();
    let today = d(2026, 5, 1);
    assert!(util
        .bill_instance(rent, &ledger, today, MonthAnchor::new(2026, 3))
        .is_some());
    assert!(util
        .bill_instance(rent, &ledger, today, MonthAnchor::new(2026, 4))
        .is_none());
}

#[tokio::test]
async fn json_snapshot_matches_csv_load() {
    let json = r#"{
        "commitments": [
            {"id": 1, "name": "Car loan", "principal": 10000.0, "interest": 500.0,
             "fee": 0.0, "recurrence": "Monthly", "start": "2026-01-15",
             "duration": 12, "duration_unit": "Months"},
            {"id": 2, "name": "Open lending", "principal": 10500.0, "interest": 0.0,
             "fee": 0.0, "recurrence": "NoDueDate", "start": "2026-03-10",
             "duration": 0, "duration_unit": "Months"}
        ],
        "bills": [
            {"id": 3, "name": "Rent", "amount": 10000.0, "due_day": 15,
             "recurrence": "Monthly", "start": "2026-01-15"},
            {"id": 4, "name": "Streaming", "amount": 12.99, "due_day": 1,
             "recurrence": "Monthly", "start": "2026-01-20", "trial": true,
             "trial_end": "2026-03-01"}
        ],
        "payments": [
            {"id": 1, "amount": 875.0, "reference": {"Commitment": 1}, "timestamp": "2026-02-15T10:00:00"},
            {"id": 2, "amount": 875.0, "reference": {"Commitment": 1}, "timestamp": "2026-03-15"},
            {"id": 3, "amount": 500.0, "reference": {"Commitment": 2}, "timestamp": "2026-03-12"},
            {"id": 4, "amount": 10000.0, "reference": {"Bill": 3}, "timestamp": "2026-01-03T08:00:00"},
            {"id": 5, "amount": 250.0, "timestamp": "2026-01-04"}
        ]
    }"#;

    let util = ObligationEngineUtil::new();
    let from_json = util.from_json_string(json).await.unwrap();
    let from_csv = util
        .from_string(COMMITMENTS_CSV, BILLS_CSV, PAYMENTS_CSV)
        .await
        .unwrap();
    assert_eq!(from_json, from_csv);
}

#[tokio::test]
async fn loads_the_three_files_from_disk() {
    use std::io::Write as _;

    let dir = tempfile::tempdir().unwrap();
    let write = |name: &str, contents: &str| {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    };
    let commitments = write("commitments.csv", COMMITMENTS_CSV);
    let bills = write("bills.csv", BILLS_CSV);
    let payments = write("payments.csv", PAYMENTS_CSV);

    let util = ObligationEngineUtil::new();
    let from_files = util
        .from_file(&commitments, &bills, &payments)
        .await
        .unwrap();
    let from_strings = util
        .from_string(COMMITMENTS_CSV, BILLS_CSV, PAYMENTS_CSV)
        .await
        .unwrap();
    assert_eq!(from_files, from_strings);
}

#[tokio::test]
async fn identical_inputs_always_resolve_identically() {
    let util = ObligationEngineUtil::new();
    let ledger = util
        .from_string(COMMITMENTS_CSV, BILLS_CSV, PAYMENTS_CSV)
        .await
        .unwrap();
    let loan = ledger
        .commitments
        .iter()
        .find(|c| c.id == CommitmentId(1))
        .unwrap();
    let rent = ledger.bills.iter().find(|b| b.id == BillId(3)).unwrap();
    let today = d(2026, 3, 5);
    let anchor = MonthAnchor::new(2026, 3);

    assert_eq!(
        util.commitment_instances(loan, &ledger, today, anchor),
        util.commitment_instances(loan, &ledger, today, anchor)
    );
    assert_eq!(
        util.bill_instance(rent, &ledger, today, anchor),
        util.bill_instance(rent, &ledger, today, anchor)
    );
}

#[test]
fn labels_render_relative_and_absolute_forms() {
    let today = d(2026, 1, 15);
    assert_eq!(
        format_due_date_label(d(2026, 1, 12), InstanceStatus::Overdue, Recurrence::Monthly, today),
        "Overdue by 3 days • Jan 12"
    );
    assert_eq!(
        format_due_date_label(d(2026, 1, 15), InstanceStatus::Due, Recurrence::Monthly, today),
        "Due Today • Jan 15"
    );
    assert_eq!(format_billing_period(d(2026, 1, 15), Recurrence::Monthly), "Jan 15 - Feb 14");
}

#[test]
fn classify_status_follows_priority_rules() {
    let util = ObligationEngineUtil::new();
    let today = d(2026, 1, 15);
    assert_eq!(util.classify_status(d(2026, 1, 12), 875.0, 875.0, today), InstanceStatus::Paid);
    assert_eq!(util.classify_status(d(2026, 1, 12), 875.0, 0.0, today), InstanceStatus::Overdue);
    assert_eq!(util.classify_status(today, 875.0, 0.0, today), InstanceStatus::Due);
    assert_eq!(util.classify_status(d(2026, 1, 20), 875.0, 0.0, today), InstanceStatus::Upcoming);
}
