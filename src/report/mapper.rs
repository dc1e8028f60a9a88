//! Flat report-row construction.
//!
//! Joins worker identity, assigned site name, in-period attendance
//! counts, and in-period payment totals into one row per worker.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::aggregate::Period;
use crate::models::{AttendanceKind, AttendanceRecord, PaymentRecord, ReportRow, Worker};
use crate::wage::{half_day_factor, round_currency, standard_day_hours};

#[derive(Debug, Default, Clone, Copy)]
struct AttendanceTally {
    full: u64,
    half: u64,
    absent: u64,
    custom: u64,
    custom_hours: Decimal,
}

#[derive(Debug, Default, Clone, Copy)]
struct PaymentTally {
    total: Decimal,
    last_date: Option<NaiveDate>,
}

/// Maps the given workers into report rows for one date window.
///
/// `site_names` resolves a worker's default site id to its display name.
/// Attendance and payment records outside the period, or for workers not
/// in the slice, are ignored. Workers with zero matching records still
/// produce a row with zero-valued fields; filtering workers out is the
/// caller's job.
pub fn map_report_rows(
    workers: &[Worker],
    site_names: &HashMap<Uuid, String>,
    attendances: &[AttendanceRecord],
    payments: &[PaymentRecord],
    period: &Period,
) -> Vec<ReportRow> {
    let mut attendance_map: HashMap<Uuid, AttendanceTally> = HashMap::with_capacity(workers.len());
    for record in attendances {
        if !period.contains(record.date) {
            continue;
        }
        let tally = attendance_map.entry(record.worker_id).or_default();
        match record.kind {
            AttendanceKind::FullDay => tally.full += 1,
            AttendanceKind::HalfDay => tally.half += 1,
            AttendanceKind::Absent => tally.absent += 1,
            AttendanceKind::Custom => {
                tally.custom += 1;
                tally.custom_hours += record.total_hours.unwrap_or(Decimal::ZERO);
            }
        }
    }

    let mut payment_map: HashMap<Uuid, PaymentTally> = HashMap::with_capacity(workers.len());
    for payment in payments {
        if !period.contains(payment.date) {
            continue;
        }
        let tally = payment_map.entry(payment.worker_id).or_default();
        tally.total += payment.amount;
        tally.last_date = match tally.last_date {
            Some(existing) if existing >= payment.date => Some(existing),
            _ => Some(payment.date),
        };
    }

    workers
        .iter()
        .map(|worker| {
            let att = attendance_map.get(&worker.id).copied().unwrap_or_default();
            let pay = payment_map.get(&worker.id).copied().unwrap_or_default();

            let wages_earned = round_currency(
                Decimal::from(att.full) * worker.daily_rate
                    + Decimal::from(att.half) * worker.daily_rate * half_day_factor()
                    + att.custom_hours * (worker.daily_rate / standard_day_hours()),
            );

            ReportRow {
                worker_id: worker.id,
                full_name: worker.full_name.clone(),
                phone: worker.phone.clone(),
                status: worker.status,
                assigned_site: worker
                    .default_site_id
                    .and_then(|id| site_names.get(&id).cloned()),
                joining_date: worker.joining_date,
                days_present: att.full + att.half + att.custom,
                days_absent: att.absent,
                overtime_hours: att.custom_hours,
                wages_earned,
                amount_paid: pay.total,
                pending_balance: wages_earned - pay.total,
                last_payment_date: pay.last_date,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PaymentKind, WorkerStatus};
    use chrono::Utc;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn worker(name: &str, rate: Decimal, default_site_id: Option<Uuid>) -> Worker {
        Worker {
            id: Uuid::new_v4(),
            full_name: name.to_string(),
            phone: Some("9876500000".to_string()),
            role: None,
            default_site_id,
            daily_rate: rate,
            legacy_monthly_salary: None,
            joining_date: date(2024, 1, 1),
            status: WorkerStatus::Active,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn attendance(
        worker_id: Uuid,
        day: NaiveDate,
        kind: AttendanceKind,
        hours: Option<Decimal>,
    ) -> AttendanceRecord {
        AttendanceRecord {
            id: Uuid::new_v4(),
            date: day,
            worker_id,
            site_id: None,
            kind,
            check_in: None,
            check_out: None,
            total_hours: hours,
            notes: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn payment(worker_id: Uuid, day: NaiveDate, amount: Decimal) -> PaymentRecord {
        PaymentRecord {
            id: Uuid::new_v4(),
            worker_id,
            date: day,
            amount,
            kind: PaymentKind::Salary,
            notes: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_row_joins_attendance_payments_and_site_name() {
        let site_id = Uuid::new_v4();
        let w = worker("Ramesh Kumar", dec("700"), Some(site_id));
        let period = Period::month(2026, 7).unwrap();
        let mut site_names = HashMap::new();
        site_names.insert(site_id, "Riverside Tower".to_string());

        let attendances = vec![
            attendance(w.id, date(2026, 7, 1), AttendanceKind::FullDay, None),
            attendance(w.id, date(2026, 7, 2), AttendanceKind::HalfDay, None),
            attendance(w.id, date(2026, 7, 3), AttendanceKind::Absent, None),
            attendance(w.id, date(2026, 7, 4), AttendanceKind::Custom, Some(dec("4"))),
        ];
        let payments = vec![
            payment(w.id, date(2026, 7, 5), dec("500")),
            payment(w.id, date(2026, 7, 20), dec("300")),
        ];

        let rows = map_report_rows(&[w], &site_names, &attendances, &payments, &period);
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.assigned_site.as_deref(), Some("Riverside Tower"));
        assert_eq!(row.days_present, 3); // full + half + custom
        assert_eq!(row.days_absent, 1);
        assert_eq!(row.overtime_hours, dec("4"));
        // 700 + 350 + 4 * 87.5 = 1400
        assert_eq!(row.wages_earned, dec("1400"));
        assert_eq!(row.amount_paid, dec("800"));
        assert_eq!(row.pending_balance, dec("600"));
        assert_eq!(row.last_payment_date, Some(date(2026, 7, 20)));
    }

    #[test]
    fn test_worker_with_no_records_appears_with_zero_fields() {
        let w = worker("Suresh", dec("600"), None);
        let period = Period::month(2026, 7).unwrap();

        let rows = map_report_rows(&[w], &HashMap::new(), &[], &[], &period);
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.days_present, 0);
        assert_eq!(row.days_absent, 0);
        assert_eq!(row.wages_earned, Decimal::ZERO);
        assert_eq!(row.amount_paid, Decimal::ZERO);
        assert_eq!(row.pending_balance, Decimal::ZERO);
        assert_eq!(row.last_payment_date, None);
        assert_eq!(row.assigned_site, None);
    }

    #[test]
    fn test_records_outside_window_do_not_count() {
        let w = worker("Mahesh", dec("700"), None);
        let period = Period::custom(date(2026, 7, 10), date(2026, 7, 20)).unwrap();

        let attendances = vec![
            attendance(w.id, date(2026, 7, 9), AttendanceKind::FullDay, None),
            attendance(w.id, date(2026, 7, 10), AttendanceKind::FullDay, None),
            attendance(w.id, date(2026, 7, 21), AttendanceKind::FullDay, None),
        ];
        let payments = vec![
            payment(w.id, date(2026, 7, 9), dec("100")),
            payment(w.id, date(2026, 7, 15), dec("200")),
        ];

        let rows = map_report_rows(&[w], &HashMap::new(), &attendances, &payments, &period);
        let row = &rows[0];
        assert_eq!(row.days_present, 1);
        assert_eq!(row.wages_earned, dec("700"));
        assert_eq!(row.amount_paid, dec("200"));
        assert_eq!(row.last_payment_date, Some(date(2026, 7, 15)));
    }

    #[test]
    fn test_pending_balance_can_go_negative() {
        let w = worker("Dinesh", dec("700"), None);
        let period = Period::month(2026, 7).unwrap();
        let attendances = vec![attendance(w.id, date(2026, 7, 1), AttendanceKind::FullDay, None)];
        let payments = vec![payment(w.id, date(2026, 7, 2), dec("1000"))];

        let rows = map_report_rows(&[w], &HashMap::new(), &attendances, &payments, &period);
        assert_eq!(rows[0].pending_balance, dec("-300"));
    }

    #[test]
    fn test_unknown_site_id_maps_to_none() {
        let w = worker("Naresh", dec("700"), Some(Uuid::new_v4()));
        let period = Period::month(2026, 7).unwrap();

        let rows = map_report_rows(&[w], &HashMap::new(), &[], &[], &period);
        assert_eq!(rows[0].assigned_site, None);
    }

    #[test]
    fn test_rows_preserve_worker_order() {
        let w1 = worker("A", dec("700"), None);
        let w2 = worker("B", dec("600"), None);
        let period = Period::month(2026, 7).unwrap();

        let rows = map_report_rows(
            &[w1.clone(), w2.clone()],
            &HashMap::new(),
            &[],
            &[],
            &period,
        );
        assert_eq!(rows[0].worker_id, w1.id);
        assert_eq!(rows[1].worker_id, w2.id);
    }
}
