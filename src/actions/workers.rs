//! Worker operations: CRUD, status toggle, profile lookup, and the
//! legacy-salary migration.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{AttendanceRecord, PaymentRecord, Worker, WorkerStatus};
use crate::store::{AttendanceStore, PaymentStore, Store, WorkerStore};
use crate::wage::{MigrationSummary, daily_rate_from_monthly};

/// How many recent attendance/payment records a profile lookup returns.
const PROFILE_RECENT_LIMIT: usize = 30;

/// Payload for creating or updating a worker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerInput {
    /// The worker's full name.
    pub full_name: String,
    /// Optional contact phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// Optional role description.
    #[serde(default)]
    pub role: Option<String>,
    /// The worker's default site, if any.
    #[serde(default)]
    pub default_site_id: Option<Uuid>,
    /// Pay for one full day of work.
    pub daily_rate: Decimal,
    /// The date the worker joined.
    pub joining_date: NaiveDate,
    /// Initial status; defaults to active.
    #[serde(default = "default_status")]
    pub status: WorkerStatus,
}

fn default_status() -> WorkerStatus {
    WorkerStatus::Active
}

impl WorkerInput {
    fn validate(&self) -> PayrollResult<()> {
        if self.full_name.trim().is_empty() {
            return Err(PayrollError::validation("full name is required"));
        }
        if self.daily_rate < Decimal::ZERO {
            return Err(PayrollError::validation("daily rate must be non-negative"));
        }
        Ok(())
    }
}

/// A worker plus their most recent attendance and payment records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerProfile {
    /// The worker record.
    pub worker: Worker,
    /// Most recent attendance records, newest first.
    pub recent_attendance: Vec<AttendanceRecord>,
    /// Most recent payments, newest first.
    pub recent_payments: Vec<PaymentRecord>,
}

/// Lists workers, optionally filtered by status, newest first.
pub fn list_workers(
    store: &dyn Store,
    status: Option<WorkerStatus>,
) -> PayrollResult<Vec<Worker>> {
    Ok(store.list_workers(status)?)
}

/// Fetches one worker with their recent history.
pub fn get_worker(store: &dyn Store, id: Uuid) -> PayrollResult<WorkerProfile> {
    let worker = store
        .find_worker(id)?
        .ok_or(PayrollError::WorkerNotFound { id })?;

    let mut recent_attendance =
        store.attendance_for_worker(id, NaiveDate::MIN, NaiveDate::MAX)?;
    recent_attendance.reverse();
    recent_attendance.truncate(PROFILE_RECENT_LIMIT);

    let mut recent_payments = store.payments_for_worker(id, None, None)?;
    recent_payments.reverse();
    recent_payments.truncate(PROFILE_RECENT_LIMIT);

    Ok(WorkerProfile {
        worker,
        recent_attendance,
        recent_payments,
    })
}

/// Creates a new worker.
pub fn create_worker(store: &dyn Store, input: WorkerInput) -> PayrollResult<Worker> {
    input.validate()?;

    let now = Utc::now();
    let worker = Worker {
        id: Uuid::new_v4(),
        full_name: input.full_name.trim().to_string(),
        phone: input.phone,
        role: input.role,
        default_site_id: input.default_site_id,
        daily_rate: input.daily_rate,
        legacy_monthly_salary: None,
        joining_date: input.joining_date,
        status: input.status,
        created_at: now,
        updated_at: now,
    };
    store.insert_worker(worker.clone())?;
    Ok(worker)
}

/// Updates an existing worker.
pub fn update_worker(store: &dyn Store, id: Uuid, input: WorkerInput) -> PayrollResult<Worker> {
    input.validate()?;

    let existing = store
        .find_worker(id)?
        .ok_or(PayrollError::WorkerNotFound { id })?;

    let worker = Worker {
        full_name: input.full_name.trim().to_string(),
        phone: input.phone,
        role: input.role,
        default_site_id: input.default_site_id,
        daily_rate: input.daily_rate,
        joining_date: input.joining_date,
        status: input.status,
        updated_at: Utc::now(),
        ..existing
    };
    if !store.update_worker(worker.clone())? {
        return Err(PayrollError::WorkerNotFound { id });
    }
    Ok(worker)
}

/// Deletes a worker.
pub fn delete_worker(store: &dyn Store, id: Uuid) -> PayrollResult<()> {
    if !store.delete_worker(id)? {
        return Err(PayrollError::WorkerNotFound { id });
    }
    Ok(())
}

/// Flips a worker between active and inactive.
pub fn toggle_worker_status(store: &dyn Store, id: Uuid) -> PayrollResult<Worker> {
    let mut worker = store
        .find_worker(id)?
        .ok_or(PayrollError::WorkerNotFound { id })?;

    worker.status = worker.status.toggled();
    worker.updated_at = Utc::now();
    if !store.update_worker(worker.clone())? {
        return Err(PayrollError::WorkerNotFound { id });
    }
    Ok(worker)
}

/// Converts workers still carrying a legacy monthly salary to the
/// daily-rate schema.
///
/// A worker is eligible when `daily_rate` is zero and
/// `legacy_monthly_salary` holds a positive figure. Each conversion is
/// logged; a dry run logs without writing. Per-worker update failures
/// are counted, not fatal.
pub fn migrate_legacy_salaries(
    store: &dyn Store,
    working_days: Decimal,
    dry_run: bool,
) -> PayrollResult<MigrationSummary> {
    let workers = store.list_workers(None)?;

    let mut summary = MigrationSummary {
        scanned: workers.len() as u64,
        migrated: 0,
        failed: 0,
        dry_run,
    };

    for mut worker in workers {
        let monthly = match worker.legacy_monthly_salary {
            Some(m) if m > Decimal::ZERO && worker.daily_rate.is_zero() => m,
            _ => continue,
        };

        let daily_rate = daily_rate_from_monthly(monthly, working_days);
        info!(
            worker_id = %worker.id,
            worker_name = %worker.full_name,
            monthly = %monthly,
            daily_rate = %daily_rate,
            dry_run,
            "Converting legacy monthly salary"
        );

        if dry_run {
            summary.migrated += 1;
            continue;
        }

        worker.daily_rate = daily_rate;
        worker.updated_at = Utc::now();
        match store.update_worker(worker.clone()) {
            Ok(true) => summary.migrated += 1,
            Ok(false) => {
                warn!(worker_id = %worker.id, "Worker vanished during migration");
                summary.failed += 1;
            }
            Err(err) => {
                warn!(worker_id = %worker.id, error = %err, "Migration update failed");
                summary.failed += 1;
            }
        }
    }

    Ok(summary)
}

/// Restores migrated workers to the legacy monthly-salary schema.
///
/// The inverse of [`migrate_legacy_salaries`]: any worker holding a
/// legacy figure gets its daily rate zeroed again.
pub fn rollback_legacy_salaries(
    store: &dyn Store,
    dry_run: bool,
) -> PayrollResult<MigrationSummary> {
    let workers = store.list_workers(None)?;

    let mut summary = MigrationSummary {
        scanned: workers.len() as u64,
        migrated: 0,
        failed: 0,
        dry_run,
    };

    for mut worker in workers {
        if worker.legacy_monthly_salary.is_none() || worker.daily_rate.is_zero() {
            continue;
        }

        info!(
            worker_id = %worker.id,
            worker_name = %worker.full_name,
            dry_run,
            "Restoring legacy monthly salary"
        );

        if dry_run {
            summary.migrated += 1;
            continue;
        }

        worker.daily_rate = Decimal::ZERO;
        worker.updated_at = Utc::now();
        match store.update_worker(worker) {
            Ok(true) => summary.migrated += 1,
            _ => summary.failed += 1,
        }
    }

    Ok(summary)
}
