//! Worker ledger construction.
//!
//! Merges attendance-derived credits and payment-derived debits into a
//! date-ordered, running-balance transaction list plus summary totals.

use rust_decimal::Decimal;

use crate::models::{
    AttendanceRecord, LedgerEntry, LedgerEntryKind, LedgerSummary, PaymentRecord, WorkerLedger,
};
use crate::wage::{attendance_credit, credit_description, round_currency};

/// Builds a worker's ledger from the records inside one date window.
///
/// The computation is a pure function of its inputs: building the ledger
/// twice from the same record set yields identical entries and summary.
///
/// Entry construction:
/// 1. Every attendance record with a non-zero credit (per the wage
///    policy) becomes a credit entry; the credit is rounded at the entry
///    boundary.
/// 2. Every payment becomes a debit entry, described by its notes when
///    present, otherwise by its kind label.
/// 3. The merged list is stably sorted ascending by date. On a tied
///    date, attendance-derived entries precede payment-derived entries;
///    this ordering is a policy choice, guaranteed by emitting attendance
///    first and sorting stably.
/// 4. A single walk accumulates `balance += credit - debit` and stamps
///    each entry with the rounded running total.
///
/// Summary: `total_earned = Σ credit`, `total_paid = Σ debit`,
/// `balance = total_earned - total_paid`. A positive balance means money
/// owed to the worker. Empty record sets produce an empty entry list and
/// a zero summary.
pub fn build_worker_ledger(
    daily_rate: Decimal,
    attendances: &[AttendanceRecord],
    payments: &[PaymentRecord],
) -> WorkerLedger {
    let mut entries: Vec<LedgerEntry> = Vec::with_capacity(attendances.len() + payments.len());

    for att in attendances {
        let credit = attendance_credit(att.kind, att.total_hours, daily_rate);
        if credit > Decimal::ZERO {
            entries.push(LedgerEntry {
                date: att.date,
                description: credit_description(att.kind, att.total_hours),
                kind: LedgerEntryKind::Attendance,
                credit: round_currency(credit),
                debit: Decimal::ZERO,
                balance: Decimal::ZERO,
            });
        }
    }

    for pmt in payments {
        entries.push(LedgerEntry {
            date: pmt.date,
            description: pmt
                .notes
                .clone()
                .unwrap_or_else(|| pmt.kind.label().to_string()),
            kind: LedgerEntryKind::from(pmt.kind),
            credit: Decimal::ZERO,
            debit: pmt.amount,
            balance: Decimal::ZERO,
        });
    }

    // Stable sort: same-date attendance entries stay ahead of payments.
    entries.sort_by_key(|e| e.date);

    let mut balance = Decimal::ZERO;
    for entry in &mut entries {
        balance += entry.credit - entry.debit;
        entry.balance = round_currency(balance);
    }

    let total_earned: Decimal = entries.iter().map(|e| e.credit).sum();
    let total_paid: Decimal = entries.iter().map(|e| e.debit).sum();

    WorkerLedger {
        entries,
        summary: LedgerSummary {
            total_earned,
            total_paid,
            balance: total_earned - total_paid,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AttendanceKind, PaymentKind};
    use chrono::{NaiveDate, Utc};
    use proptest::prelude::*;
    use std::str::FromStr;
    use uuid::Uuid;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn attendance(
        day: NaiveDate,
        kind: AttendanceKind,
        total_hours: Option<Decimal>,
    ) -> AttendanceRecord {
        AttendanceRecord {
            id: Uuid::new_v4(),
            date: day,
            worker_id: Uuid::new_v4(),
            site_id: None,
            kind,
            check_in: None,
            check_out: None,
            total_hours,
            notes: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn payment(
        day: NaiveDate,
        amount: Decimal,
        kind: PaymentKind,
        notes: Option<&str>,
    ) -> PaymentRecord {
        PaymentRecord {
            id: Uuid::new_v4(),
            worker_id: Uuid::new_v4(),
            date: day,
            amount,
            kind,
            notes: notes.map(str::to_string),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_records_give_empty_ledger() {
        let ledger = build_worker_ledger(dec("700"), &[], &[]);
        assert!(ledger.entries.is_empty());
        assert_eq!(ledger.summary, crate::models::LedgerSummary::zero());
    }

    #[test]
    fn test_absent_days_emit_no_entry() {
        let records = vec![attendance(date(2026, 7, 1), AttendanceKind::Absent, None)];
        let ledger = build_worker_ledger(dec("700"), &records, &[]);
        assert!(ledger.entries.is_empty());
    }

    #[test]
    fn test_scenario_ten_full_two_half_one_absent_one_payment() {
        // dailyRate=700, 10 FULL_DAY, 2 HALF_DAY, 1 ABSENT, one SALARY
        // payment of 5000 mid-range.
        let mut attendances = Vec::new();
        for day in 1..=10 {
            attendances.push(attendance(date(2026, 7, day), AttendanceKind::FullDay, None));
        }
        attendances.push(attendance(date(2026, 7, 11), AttendanceKind::HalfDay, None));
        attendances.push(attendance(date(2026, 7, 12), AttendanceKind::HalfDay, None));
        attendances.push(attendance(date(2026, 7, 13), AttendanceKind::Absent, None));

        let payments = vec![payment(
            date(2026, 7, 7),
            dec("5000"),
            PaymentKind::Salary,
            None,
        )];

        let ledger = build_worker_ledger(dec("700"), &attendances, &payments);

        assert_eq!(ledger.summary.total_earned, dec("7700"));
        assert_eq!(ledger.summary.total_paid, dec("5000"));
        assert_eq!(ledger.summary.balance, dec("2700"));
        assert_eq!(ledger.entries.len(), 13); // 12 credits + 1 debit
    }

    #[test]
    fn test_same_date_attendance_precedes_payment() {
        let attendances = vec![attendance(date(2026, 7, 5), AttendanceKind::FullDay, None)];
        let payments = vec![payment(
            date(2026, 7, 5),
            dec("200"),
            PaymentKind::Advance,
            None,
        )];

        let ledger = build_worker_ledger(dec("700"), &attendances, &payments);

        assert_eq!(ledger.entries[0].kind, LedgerEntryKind::Attendance);
        assert_eq!(ledger.entries[1].kind, LedgerEntryKind::Advance);
        // Balance reflects credit-first ordering: 700, then 500.
        assert_eq!(ledger.entries[0].balance, dec("700"));
        assert_eq!(ledger.entries[1].balance, dec("500"));
    }

    #[test]
    fn test_entries_sorted_ascending_by_date() {
        let attendances = vec![
            attendance(date(2026, 7, 10), AttendanceKind::FullDay, None),
            attendance(date(2026, 7, 2), AttendanceKind::FullDay, None),
        ];
        let payments = vec![payment(
            date(2026, 7, 5),
            dec("300"),
            PaymentKind::Advance,
            None,
        )];

        let ledger = build_worker_ledger(dec("700"), &attendances, &payments);
        let dates: Vec<NaiveDate> = ledger.entries.iter().map(|e| e.date).collect();
        assert_eq!(
            dates,
            vec![date(2026, 7, 2), date(2026, 7, 5), date(2026, 7, 10)]
        );
    }

    #[test]
    fn test_payment_description_prefers_notes() {
        let payments = vec![
            payment(date(2026, 7, 1), dec("100"), PaymentKind::Advance, Some("tea money")),
            payment(date(2026, 7, 2), dec("100"), PaymentKind::Bonus, None),
        ];
        let ledger = build_worker_ledger(dec("700"), &[], &payments);
        assert_eq!(ledger.entries[0].description, "tea money");
        assert_eq!(ledger.entries[1].description, "BONUS");
    }

    #[test]
    fn test_custom_hours_credit_rounds_at_entry() {
        // 5 hours at 700/day = 437.5, rounded to 438 at the entry.
        let attendances = vec![attendance(
            date(2026, 7, 1),
            AttendanceKind::Custom,
            Some(dec("5")),
        )];
        let ledger = build_worker_ledger(dec("700"), &attendances, &[]);
        assert_eq!(ledger.entries[0].credit, dec("438"));
        assert_eq!(ledger.summary.total_earned, dec("438"));
    }

    #[test]
    fn test_overpaid_worker_has_negative_balance() {
        let attendances = vec![attendance(date(2026, 7, 1), AttendanceKind::FullDay, None)];
        let payments = vec![payment(
            date(2026, 7, 2),
            dec("1000"),
            PaymentKind::Advance,
            None,
        )];
        let ledger = build_worker_ledger(dec("700"), &attendances, &payments);
        assert_eq!(ledger.summary.balance, dec("-300"));
    }

    #[test]
    fn test_ledger_is_idempotent() {
        let attendances = vec![
            attendance(date(2026, 7, 1), AttendanceKind::FullDay, None),
            attendance(date(2026, 7, 2), AttendanceKind::HalfDay, None),
        ];
        let payments = vec![payment(
            date(2026, 7, 3),
            dec("500"),
            PaymentKind::Salary,
            None,
        )];

        let first = build_worker_ledger(dec("700"), &attendances, &payments);
        let second = build_worker_ledger(dec("700"), &attendances, &payments);
        assert_eq!(first, second);
    }

    #[test]
    fn test_balance_invariant_holds_for_every_entry() {
        let attendances = vec![
            attendance(date(2026, 7, 1), AttendanceKind::FullDay, None),
            attendance(date(2026, 7, 2), AttendanceKind::Custom, Some(dec("3"))),
            attendance(date(2026, 7, 3), AttendanceKind::HalfDay, None),
        ];
        let payments = vec![
            payment(date(2026, 7, 2), dec("400"), PaymentKind::Advance, None),
            payment(date(2026, 7, 4), dec("250"), PaymentKind::Other, None),
        ];

        let ledger = build_worker_ledger(dec("700"), &attendances, &payments);

        let mut previous = Decimal::ZERO;
        for entry in &ledger.entries {
            assert_eq!(entry.balance, previous + entry.credit - entry.debit);
            previous = entry.balance;
        }
        assert_eq!(
            ledger.summary.balance,
            ledger.summary.total_earned - ledger.summary.total_paid
        );
    }

    proptest! {
        #[test]
        fn prop_running_balance_matches_entry_deltas(
            rate in 1u32..5_000,
            full_days in 0usize..15,
            payment_amounts in proptest::collection::vec(1u32..10_000, 0..8),
        ) {
            let rate = Decimal::from(rate);
            let attendances: Vec<AttendanceRecord> = (0..full_days)
                .map(|i| attendance(
                    date(2026, 7, (i % 28) as u32 + 1),
                    AttendanceKind::FullDay,
                    None,
                ))
                .collect();
            let payments: Vec<PaymentRecord> = payment_amounts
                .iter()
                .enumerate()
                .map(|(i, amt)| payment(
                    date(2026, 7, (i % 28) as u32 + 1),
                    Decimal::from(*amt),
                    PaymentKind::Advance,
                    None,
                ))
                .collect();

            let ledger = build_worker_ledger(rate, &attendances, &payments);

            let mut previous = Decimal::ZERO;
            for entry in &ledger.entries {
                prop_assert_eq!(entry.balance, previous + entry.credit - entry.debit);
                previous = entry.balance;
            }
            prop_assert_eq!(
                ledger.summary.balance,
                ledger.summary.total_earned - ledger.summary.total_paid
            );
        }
    }
}
