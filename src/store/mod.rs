//! The persistence seam.
//!
//! The engine treats the store as an external collaborator: four record
//! families behind trait objects, constructed once at process start and
//! injected into every operation. The traits are synchronous because
//! every computation reads its full input up front and runs in memory;
//! there is no mid-computation suspension to design around.

mod memory;

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{AttendanceRecord, PaymentRecord, Site, Worker, WorkerStatus};

pub use memory::MemoryStore;

/// An error reported by the underlying persistence store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend failed to execute the operation.
    #[error("store backend error: {message}")]
    Backend {
        /// A description of the backend failure.
        message: String,
    },
}

impl StoreError {
    /// Creates a backend error from any displayable message.
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }
}

/// A type alias for Results that return StoreError.
pub type StoreResult<T> = Result<T, StoreError>;

/// Worker record operations.
pub trait WorkerStore {
    /// Lists workers, optionally filtered by status, newest first.
    fn list_workers(&self, status: Option<WorkerStatus>) -> StoreResult<Vec<Worker>>;

    /// Finds one worker by id.
    fn find_worker(&self, id: Uuid) -> StoreResult<Option<Worker>>;

    /// Inserts a new worker record.
    fn insert_worker(&self, worker: Worker) -> StoreResult<()>;

    /// Replaces an existing worker record. Returns false if no record
    /// with the given id exists.
    fn update_worker(&self, worker: Worker) -> StoreResult<bool>;

    /// Deletes a worker record. Returns false if absent.
    fn delete_worker(&self, id: Uuid) -> StoreResult<bool>;

    /// Clears `default_site_id` on every worker pointing at the given
    /// site. Returns the number of workers detached.
    fn detach_default_site(&self, site_id: Uuid) -> StoreResult<u64>;

    /// Counts workers whose default site is the given one.
    fn count_workers_for_site(&self, site_id: Uuid) -> StoreResult<u64>;
}

/// Work-site record operations.
pub trait SiteStore {
    /// Lists sites, optionally restricted to active ones, newest first.
    fn list_sites(&self, active_only: bool) -> StoreResult<Vec<Site>>;

    /// Finds one site by id.
    fn find_site(&self, id: Uuid) -> StoreResult<Option<Site>>;

    /// Inserts a new site record.
    fn insert_site(&self, site: Site) -> StoreResult<()>;

    /// Replaces an existing site record. Returns false if absent.
    fn update_site(&self, site: Site) -> StoreResult<bool>;

    /// Deletes a site record. Returns false if absent.
    fn delete_site(&self, id: Uuid) -> StoreResult<bool>;
}

/// Attendance record operations.
///
/// The `(worker_id, date)` natural key is unique; `upsert_attendance`
/// is the only write path for new day records and must be atomic in the
/// backend.
pub trait AttendanceStore {
    /// Finds one attendance record by id.
    fn find_attendance(&self, id: Uuid) -> StoreResult<Option<AttendanceRecord>>;

    /// Creates or updates the record for `(record.worker_id,
    /// record.date)`. An existing record keeps its id and created_at;
    /// all other fields are replaced. Returns the stored record.
    fn upsert_attendance(&self, record: AttendanceRecord) -> StoreResult<AttendanceRecord>;

    /// Deletes an attendance record by id. Returns false if absent.
    fn delete_attendance(&self, id: Uuid) -> StoreResult<bool>;

    /// All records for one calendar day, across workers.
    fn attendance_on(&self, date: NaiveDate) -> StoreResult<Vec<AttendanceRecord>>;

    /// One worker's records with dates in `[start, end]`, ascending.
    fn attendance_for_worker(
        &self,
        worker_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> StoreResult<Vec<AttendanceRecord>>;

    /// All records with dates in `[start, end]`, across workers.
    fn attendance_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> StoreResult<Vec<AttendanceRecord>>;

    /// Counts records referencing the given site.
    fn count_attendance_for_site(&self, site_id: Uuid) -> StoreResult<u64>;
}

/// Payment record operations.
pub trait PaymentStore {
    /// Finds one payment by id.
    fn find_payment(&self, id: Uuid) -> StoreResult<Option<PaymentRecord>>;

    /// Inserts a new payment record.
    fn insert_payment(&self, payment: PaymentRecord) -> StoreResult<()>;

    /// Replaces an existing payment record. Returns false if absent.
    fn update_payment(&self, payment: PaymentRecord) -> StoreResult<bool>;

    /// Deletes a payment record. Returns false if absent.
    fn delete_payment(&self, id: Uuid) -> StoreResult<bool>;

    /// One worker's payments, optionally bounded by `[start, end]`,
    /// ascending by date.
    fn payments_for_worker(
        &self,
        worker_id: Uuid,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> StoreResult<Vec<PaymentRecord>>;

    /// All payments with dates in `[start, end]`, across workers.
    fn payments_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> StoreResult<Vec<PaymentRecord>>;
}

/// The full store contract: all four record families.
pub trait Store: WorkerStore + SiteStore + AttendanceStore + PaymentStore + Send + Sync {}

impl<T> Store for T where T: WorkerStore + SiteStore + AttendanceStore + PaymentStore + Send + Sync {}
