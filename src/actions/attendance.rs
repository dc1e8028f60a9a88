//! Attendance operations: natural-key upsert, bulk save, range queries,
//! and the monthly summary.

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::aggregate::{Period, WorkerAttendanceSummary, summarize_attendance};
use crate::error::{PayrollError, PayrollResult};
use crate::models::{AttendanceKind, AttendanceRecord, WorkerStatus};
use crate::store::{AttendanceStore, SiteStore, Store, WorkerStore};

/// Payload for saving one worker-day attendance record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceInput {
    /// The calendar day; any time-of-day component is ignored.
    pub date: NaiveDate,
    /// The worker attending.
    pub worker_id: Uuid,
    /// The site attended, if recorded.
    #[serde(default)]
    pub site_id: Option<Uuid>,
    /// The attendance kind for the day.
    pub kind: AttendanceKind,
    /// Optional arrival time.
    #[serde(default)]
    pub check_in: Option<NaiveTime>,
    /// Optional departure time.
    #[serde(default)]
    pub check_out: Option<NaiveTime>,
    /// Hours worked; meaningful for CUSTOM days.
    #[serde(default)]
    pub total_hours: Option<Decimal>,
    /// Optional free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
}

impl AttendanceInput {
    fn validate(&self) -> PayrollResult<()> {
        if let Some(hours) = self.total_hours {
            if hours < Decimal::ZERO {
                return Err(PayrollError::validation("total hours must be non-negative"));
            }
        }
        Ok(())
    }
}

/// One day record joined with worker and site display names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayAttendance {
    /// The attendance record.
    pub record: AttendanceRecord,
    /// The worker's full name.
    pub worker_name: String,
    /// The attended site's name, if any.
    pub site_name: Option<String>,
}

/// Outcome of a bulk attendance save.
///
/// Individual failures are aggregated; successfully saved records stand
/// and are not rolled back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkSaveOutcome {
    /// Records saved (inserted or replaced).
    pub saved: Vec<AttendanceRecord>,
    /// How many inputs failed.
    pub failed: u64,
}

/// Creates or replaces the attendance record for `(worker, date)`.
///
/// The worker must exist; the write itself relies on the store's atomic
/// natural-key upsert.
pub fn save_attendance(
    store: &dyn Store,
    input: AttendanceInput,
) -> PayrollResult<AttendanceRecord> {
    input.validate()?;

    let worker_id = input.worker_id;
    if store.find_worker(worker_id)?.is_none() {
        return Err(PayrollError::WorkerNotFound { id: worker_id });
    }

    let now = Utc::now();
    let record = AttendanceRecord {
        id: Uuid::new_v4(),
        date: input.date,
        worker_id,
        site_id: input.site_id,
        kind: input.kind,
        check_in: input.check_in,
        check_out: input.check_out,
        total_hours: input.total_hours,
        notes: input.notes,
        created_at: now,
        updated_at: now,
    };
    Ok(store.upsert_attendance(record)?)
}

/// Saves a batch of attendance records, one upsert per record.
///
/// Keys are disjoint per worker-day, so order does not matter. A failed
/// record is counted and skipped; the rest persist.
pub fn bulk_save_attendance(
    store: &dyn Store,
    inputs: Vec<AttendanceInput>,
) -> PayrollResult<BulkSaveOutcome> {
    let mut outcome = BulkSaveOutcome {
        saved: Vec::with_capacity(inputs.len()),
        failed: 0,
    };

    for input in inputs {
        match save_attendance(store, input) {
            Ok(record) => outcome.saved.push(record),
            Err(err) => {
                warn!(error = %err, "Bulk attendance entry failed");
                outcome.failed += 1;
            }
        }
    }

    Ok(outcome)
}

/// Deletes an attendance record by id.
pub fn delete_attendance(store: &dyn Store, id: Uuid) -> PayrollResult<()> {
    if !store.delete_attendance(id)? {
        return Err(PayrollError::AttendanceNotFound { id });
    }
    Ok(())
}

/// All attendance for one calendar day, joined with display names and
/// sorted by worker name.
pub fn attendance_by_date(store: &dyn Store, date: NaiveDate) -> PayrollResult<Vec<DayAttendance>> {
    let records = store.attendance_on(date)?;

    let worker_names: HashMap<Uuid, String> = store
        .list_workers(None)?
        .into_iter()
        .map(|w| (w.id, w.full_name))
        .collect();
    let site_names: HashMap<Uuid, String> = store
        .list_sites(false)?
        .into_iter()
        .map(|s| (s.id, s.name))
        .collect();

    let mut day: Vec<DayAttendance> = records
        .into_iter()
        .map(|record| {
            let worker_name = worker_names
                .get(&record.worker_id)
                .cloned()
                .unwrap_or_default();
            let site_name = record.site_id.and_then(|id| site_names.get(&id).cloned());
            DayAttendance {
                record,
                worker_name,
                site_name,
            }
        })
        .collect();
    day.sort_by(|a, b| a.worker_name.cmp(&b.worker_name));
    Ok(day)
}

/// One worker's attendance inside an inclusive date range.
pub fn worker_attendance(
    store: &dyn Store,
    worker_id: Uuid,
    start: NaiveDate,
    end: NaiveDate,
) -> PayrollResult<Vec<AttendanceRecord>> {
    if start > end {
        return Err(PayrollError::validation(format!(
            "start date {} is after end date {}",
            start, end
        )));
    }
    if store.find_worker(worker_id)?.is_none() {
        return Err(PayrollError::WorkerNotFound { id: worker_id });
    }
    Ok(store.attendance_for_worker(worker_id, start, end)?)
}

/// Per-worker attendance summary for one calendar month, covering every
/// active worker.
pub fn monthly_attendance_summary(
    store: &dyn Store,
    year: i32,
    month: u32,
) -> PayrollResult<Vec<WorkerAttendanceSummary>> {
    let period = Period::month(year, month)?;
    let workers = store.list_workers(Some(WorkerStatus::Active))?;
    let records = store.attendance_in_range(period.start, period.end)?;
    Ok(summarize_attendance(&workers, &records, &period))
}
