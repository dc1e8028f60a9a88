//! Attendance record model and related types.
//!
//! One attendance record exists per (worker, calendar day); the store
//! enforces the natural-key uniqueness via upsert.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The daily attendance status for a worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttendanceKind {
    /// A full day of work; credits one daily rate.
    FullDay,
    /// A half day of work; credits half the daily rate.
    HalfDay,
    /// Not present; credits nothing.
    Absent,
    /// An hour-based day; credits `total_hours` at the hourly fraction
    /// of the daily rate.
    Custom,
}

impl AttendanceKind {
    /// Returns true for kinds that count the worker as present.
    ///
    /// # Examples
    ///
    /// ```
    /// use labor_ledger::models::AttendanceKind;
    ///
    /// assert!(AttendanceKind::FullDay.is_present());
    /// assert!(AttendanceKind::HalfDay.is_present());
    /// assert!(!AttendanceKind::Absent.is_present());
    /// ```
    pub fn is_present(self) -> bool {
        matches!(self, AttendanceKind::FullDay | AttendanceKind::HalfDay)
    }
}

/// One worker's attendance for one calendar day.
///
/// `date` is day-granular: any time-of-day component is stripped to
/// midnight before the record reaches the store. Check-in/check-out
/// times are informational only; wage math uses `kind` and
/// `total_hours`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Unique identifier for the record.
    pub id: Uuid,
    /// The calendar day this record covers.
    pub date: NaiveDate,
    /// The worker this record belongs to.
    pub worker_id: Uuid,
    /// The site the worker attended, if recorded.
    pub site_id: Option<Uuid>,
    /// The attendance status for the day.
    pub kind: AttendanceKind,
    /// Optional recorded arrival time.
    pub check_in: Option<NaiveTime>,
    /// Optional recorded departure time.
    pub check_out: Option<NaiveTime>,
    /// Hours worked; only meaningful when `kind` is [`AttendanceKind::Custom`].
    pub total_hours: Option<Decimal>,
    /// Optional free-form notes.
    pub notes: Option<String>,
    /// When this record was created.
    pub created_at: DateTime<Utc>,
    /// When this record was last updated.
    pub updated_at: DateTime<Utc>,
}
