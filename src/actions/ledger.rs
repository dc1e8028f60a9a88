//! Ledger operations: the per-worker running ledger and the
//! current-month balance roll call.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::aggregate::Period;
use crate::error::{PayrollError, PayrollResult};
use crate::ledger::{LedgerWindow, build_worker_ledger};
use crate::models::{LedgerEntry, LedgerSummary, WorkerStatus};
use crate::store::{AttendanceStore, PaymentStore, Store, WorkerStore};
use crate::wage::{attendance_credit, round_currency};

/// One worker's ledger plus identity and the resolved window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerLedgerView {
    /// The worker's id.
    pub worker_id: Uuid,
    /// The worker's full name.
    pub worker_name: String,
    /// The worker's daily rate.
    pub daily_rate: Decimal,
    /// First day of the resolved window.
    pub start: NaiveDate,
    /// Last day of the resolved window.
    pub end: NaiveDate,
    /// The date-ordered entry list.
    pub entries: Vec<LedgerEntry>,
    /// The window totals.
    pub summary: LedgerSummary,
}

/// A worker's earned/paid/balance figures for the current month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerBalance {
    /// The worker's id.
    pub worker_id: Uuid,
    /// The worker's full name.
    pub worker_name: String,
    /// The worker's daily rate.
    pub daily_rate: Decimal,
    /// Wages earned this month, rounded.
    pub earned: Decimal,
    /// Payments received this month, rounded.
    pub paid: Decimal,
    /// `earned - paid`.
    pub balance: Decimal,
}

/// Builds one worker's ledger for an optionally-bounded window.
///
/// Bounds default per [`LedgerWindow::resolve`]: end = `today`, start =
/// first of the month two months prior. Empty record sets yield an
/// empty entry list and a zero summary.
pub fn worker_ledger(
    store: &dyn Store,
    worker_id: Uuid,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    today: NaiveDate,
) -> PayrollResult<WorkerLedgerView> {
    let window = LedgerWindow::resolve(start, end, today)?;

    let worker = store
        .find_worker(worker_id)?
        .ok_or(PayrollError::WorkerNotFound { id: worker_id })?;

    let attendances = store.attendance_for_worker(worker_id, window.start, window.end)?;
    let payments = store.payments_for_worker(worker_id, Some(window.start), Some(window.end))?;

    let ledger = build_worker_ledger(worker.daily_rate, &attendances, &payments);

    Ok(WorkerLedgerView {
        worker_id: worker.id,
        worker_name: worker.full_name,
        daily_rate: worker.daily_rate,
        start: window.start,
        end: window.end,
        entries: ledger.entries,
        summary: ledger.summary,
    })
}

/// Current-calendar-month earned/paid/balance for every active worker.
pub fn all_worker_balances(
    store: &dyn Store,
    today: NaiveDate,
) -> PayrollResult<Vec<WorkerBalance>> {
    let period = Period::month_of(today)?;
    let workers = store.list_workers(Some(WorkerStatus::Active))?;

    let mut balances = Vec::with_capacity(workers.len());
    for worker in workers {
        let attendances = store.attendance_for_worker(worker.id, period.start, period.end)?;
        let payments =
            store.payments_for_worker(worker.id, Some(period.start), Some(period.end))?;

        let earned: Decimal = attendances
            .iter()
            .map(|a| attendance_credit(a.kind, a.total_hours, worker.daily_rate))
            .sum();
        let paid: Decimal = payments.iter().map(|p| p.amount).sum();

        let earned = round_currency(earned);
        let paid = round_currency(paid);
        balances.push(WorkerBalance {
            worker_id: worker.id,
            worker_name: worker.full_name,
            daily_rate: worker.daily_rate,
            earned,
            paid,
            balance: earned - paid,
        });
    }

    Ok(balances)
}
