use chrono::{Datelike, NaiveDate};

use crate::entities::{BillDefinition, BillInstance, InstanceStatus, LedgerSnapshot, MonthAnchor};

use super::{date_math, status};

/// Days before a next-month bill due date during which the unpaid
/// occurrence is surfaced ahead of the calendar page turning.
const LOOKAHEAD_DAYS: i64 = 3;

/// Resolves the single billed occurrence of a flat-rate bill for a viewed
/// month, if one exists.
pub(crate) struct BillInstanceResolver<'a> {
    bill: &'a BillDefinition,
    ledger: &'a LedgerSnapshot,
}

impl<'a> BillInstanceResolver<'a> {
    pub(crate) fn new(bill: &'a BillDefinition, ledger: &'a LedgerSnapshot) -> Self {
        Self { bill, ledger }
    }

    pub(crate) fn resolve(&self, today: NaiveDate, anchor: MonthAnchor) -> Option<BillInstance> {
        // While the trial runs, nothing is billed; the trial end date is
        // informational until the roll-over pass clears the flag.
        if self.bill.trial {
            return None;
        }

        let standard = self
            .month_billable(anchor)
            .then(|| self.occurrence_in(anchor, today));
        if let Some(instance) = &standard {
            if instance.status != InstanceStatus::Paid {
                return standard;
            }
        }

        // The viewed month has no open occurrence (too early, or already
        // settled): surface next month's occurrence a few days ahead if it
        // is billable and still unpaid.
        let next_month = anchor.next();
        if self.month_billable(next_month) {
            let next = self.occurrence_in(next_month, today);
            let days_until = (next.due - today).num_days();
            if next.status != InstanceStatus::Paid && (0..=LOOKAHEAD_DAYS).contains(&days_until) {
                return Some(next);
            }
        }

        standard
    }

    /// Whether the bill generates an occurrence in the given month. Months
    /// before the billing anchor never bill; soft-deleted bills keep their
    /// history up to the recorded end month.
    fn month_billable(&self, month: MonthAnchor) -> bool {
        if month < MonthAnchor::of(self.bill.billing_anchor()) {
            return false;
        }
        if self.bill.active {
            return true;
        }
        match self.bill.end_date {
            Some(end) => month <= MonthAnchor::of(end),
            None => false,
        }
    }

    fn occurrence_in(&self, month: MonthAnchor, today: NaiveDate) -> BillInstance {
        // Due day 0 means no explicit due day; fall back to the anchor's
        // day. Out-of-range days clamp to the month's last valid day.
        let due_day = if self.bill.due_day >= 1 {
            self.bill.due_day
        } else {
            self.bill.billing_anchor().day()
        };
        let due = date_math::clamped_date(month.year(), month.month(), due_day);
        let status = if self.ledger.bill_paid_in(self.bill.id, month) {
            InstanceStatus::Paid
        } else {
            status::classify(due, self.bill.amount, 0.0, today)
        };
        BillInstance {
            bill: self.bill.id,
            period: month,
            due,
            status,
            amount_due: self.bill.amount.max(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::entities::{BillId, ObligationRef, PaymentId, PaymentRecord, Recurrence};

    use super::*;

    fn d(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn rent() -> BillDefinition {
        BillDefinition {
            id: BillId(3),
            name: "Rent".to_string(),
            amount: 10000.0,
            due_day: 15,
            recurrence: Recurrence::Monthly,
            start: d(2026, 1, 15),
            first_payment_date: None,
            trial: false,
            trial_end: None,
            active: true,
            end_date: None,
        }
    }

    fn bill_payment(date: NaiveDate) -> PaymentRecord {
        PaymentRecord {
            id: PaymentId(9),
            amount: 10000.0,
            reference: ObligationRef::Bill(BillId(3)),
            timestamp: date.and_hms_opt(9, 30, 0).unwrap(),
        }
    }

    fn ledger_with(payments: Vec<PaymentRecord>) -> LedgerSnapshot {
        LedgerSnapshot::new(vec![], vec![rent()], payments)
    }

    #[test]
    fn months_before_the_start_have_no_occurrence() {
        let bill = rent();
        let ledger = ledger_with(vec![]);
        let resolver = BillInstanceResolver::new(&bill, &ledger);
        let today = d(2025, 12, 1);
        assert_eq!(resolver.resolve(today, MonthAnchor::new(2025, 12)), None);
        assert_eq!(
            resolver
                .resolve(today, MonthAnchor::new(2026, 1))
                .map(|i| i.due),
            Some(d(2026, 1, 15))
        );
        assert_eq!(
            resolver
                .resolve(today, MonthAnchor::new(2026, 2))
                .map(|i| i.due),
            Some(d(2026, 2, 15))
        );
    }

    #[test]
    fn occurrence_is_paid_when_a_ledger_entry_lands_in_month() {
        let bill = rent();
        let ledger = ledger_with(vec![bill_payment(d(2026, 1, 3))]);
        let instance = BillInstanceResolver::new(&bill, &ledger)
            .resolve(d(2026, 1, 10), MonthAnchor::new(2026, 1))
            .unwrap();
        assert_eq!(instance.status, InstanceStatus::Paid);
    }

    #[test]
    fn settled_month_defers_to_next_within_lookahead() {
        let mut bill = rent();
        bill.due_day = 1;
        let ledger = LedgerSnapshot::new(vec![], vec![bill.clone()], vec![bill_payment(d(2026, 1, 2))]);
        // Jan is settled and Feb 1 is two days out: the Feb occurrence
        // surfaces early.
        let instance = BillInstanceResolver::new(&bill, &ledger)
            .resolve(d(2026, 1, 30), MonthAnchor::new(2026, 1))
            .unwrap();
        assert_eq!(instance.period, MonthAnchor::new(2026, 2));
        assert_eq!(instance.due, d(2026, 2, 1));
        assert_eq!(instance.status, InstanceStatus::Upcoming);
    }

    #[test]
    fn settled_month_stays_paid_outside_lookahead() {
        let bill = rent();
        let ledger = ledger_with(vec![bill_payment(d(2026, 1, 3))]);
        let instance = BillInstanceResolver::new(&bill, &ledger)
            .resolve(d(2026, 1, 10), MonthAnchor::new(2026, 1))
            .unwrap();
        // Feb 15 is over a month away; the paid January occurrence stands.
        assert_eq!(instance.period, MonthAnchor::new(2026, 1));
        assert_eq!(instance.status, InstanceStatus::Paid);
    }

    #[test]
    fn too_early_month_defers_within_lookahead() {
        let mut bill = rent();
        bill.due_day = 1;
        bill.start = d(2026, 2, 1);
        let ledger = LedgerSnapshot::new(vec![], vec![bill.clone()], vec![]);
        // Viewing January on Jan 30: February's occurrence is two days out.
        let instance = BillInstanceResolver::new(&bill, &ledger)
            .resolve(d(2026, 1, 30), MonthAnchor::new(2026, 1))
            .unwrap();
        assert_eq!(instance.period, MonthAnchor::new(2026, 2));
        assert_eq!(instance.status, InstanceStatus::Upcoming);
    }

    #[test]
    fn due_day_clamps_to_short_months() {
        let mut bill = rent();
        bill.due_day = 31;
        let ledger = LedgerSnapshot::new(vec![], vec![bill.clone()], vec![]);
        let instance = BillInstanceResolver::new(&bill, &ledger)
            .resolve(d(2026, 2, 1), MonthAnchor::new(2026, 2))
            .unwrap();
        assert_eq!(instance.due, d(2026, 2, 28));
    }

    #[test]
    fn missing_due_day_falls_back_to_billing_anchor_day() {
        let mut bill = rent();
        bill.due_day = 0;
        bill.first_payment_date = Some(d(2026, 1, 20));
        let ledger = LedgerSnapshot::new(vec![], vec![bill.clone()], vec![]);
        let instance = BillInstanceResolver::new(&bill, &ledger)
            .resolve(d(2026, 1, 5), MonthAnchor::new(2026, 1))
            .unwrap();
        assert_eq!(instance.due, d(2026, 1, 20));
    }

    #[test]
    fn trial_bills_generate_nothing() {
        let mut bill = rent();
        bill.trial = true;
        bill.trial_end = Some(d(2026, 3, 1));
        let ledger = LedgerSnapshot::new(vec![], vec![bill.clone()], vec![]);
        assert_eq!(
            BillInstanceResolver::new(&bill, &ledger).resolve(d(2026, 1, 10), MonthAnchor::new(2026, 1)),
            None
        );
    }

    #[test]
    fn soft_deleted_bills_keep_history_up_to_end_month() {
        let mut bill = rent();
        bill.active = false;
        bill.end_date = Some(d(2026, 3, 20));
        let ledger = LedgerSnapshot::new(vec![], vec![bill.clone()], vec![]);
        let resolver = BillInstanceResolver::new(&bill, &ledger);
        let today = d(2026, 5, 1);
        assert!(resolver.resolve(today, MonthAnchor::new(2026, 3)).is_some());
        assert_eq!(resolver.resolve(today, MonthAnchor::new(2026, 4)), None);
    }
}
