//! Worker model and related types.
//!
//! This module defines the Worker struct and WorkerStatus enum for
//! representing laborers tracked for attendance and pay.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents whether a worker is currently on the payroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkerStatus {
    /// The worker is actively employed and eligible for attendance.
    Active,
    /// The worker has left or been deactivated.
    Inactive,
}

impl WorkerStatus {
    /// Returns the opposite status, used by the status-toggle operation.
    pub fn toggled(self) -> Self {
        match self {
            WorkerStatus::Active => WorkerStatus::Inactive,
            WorkerStatus::Inactive => WorkerStatus::Active,
        }
    }
}

/// Represents a laborer tracked for attendance and pay.
///
/// The canonical wage unit is `daily_rate`: the pay for one full day of
/// work. Workers created under the legacy monthly-salary schema keep the
/// original figure in `legacy_monthly_salary` after migration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Worker {
    /// Unique identifier for the worker.
    pub id: Uuid,
    /// The worker's full name.
    pub full_name: String,
    /// Optional contact phone number.
    pub phone: Option<String>,
    /// Optional role description (e.g., "Mason", "Electrician").
    pub role: Option<String>,
    /// The site this worker reports to by default, if any.
    pub default_site_id: Option<Uuid>,
    /// Pay for one full day of work. Invariant: non-negative.
    pub daily_rate: Decimal,
    /// Monthly salary figure retained from before the daily-wage migration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legacy_monthly_salary: Option<Decimal>,
    /// The date the worker joined.
    pub joining_date: NaiveDate,
    /// Whether the worker is active or inactive.
    pub status: WorkerStatus,
    /// When this record was created.
    pub created_at: DateTime<Utc>,
    /// When this record was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Worker {
    /// Returns true if the worker is active.
    ///
    /// # Examples
    ///
    /// ```
    /// use labor_ledger::models::{Worker, WorkerStatus};
    /// use chrono::{NaiveDate, Utc};
    /// use rust_decimal::Decimal;
    /// use uuid::Uuid;
    ///
    /// let worker = Worker {
    ///     id: Uuid::new_v4(),
    ///     full_name: "Ramesh Kumar".to_string(),
    ///     phone: None,
    ///     role: None,
    ///     default_site_id: None,
    ///     daily_rate: Decimal::from(700),
    ///     legacy_monthly_salary: None,
    ///     joining_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
    ///     status: WorkerStatus::Active,
    ///     created_at: Utc::now(),
    ///     updated_at: Utc::now(),
    /// };
    /// assert!(worker.is_active());
    /// ```
    pub fn is_active(&self) -> bool {
        self.status == WorkerStatus::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_worker(status: WorkerStatus) -> Worker {
        Worker {
            id: Uuid::new_v4(),
            full_name: "Ramesh Kumar".to_string(),
            phone: Some("9876543210".to_string()),
            role: Some("Mason".to_string()),
            default_site_id: None,
            daily_rate: Decimal::from(700),
            legacy_monthly_salary: None,
            joining_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            status,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_is_active_returns_true_for_active() {
        let worker = create_test_worker(WorkerStatus::Active);
        assert!(worker.is_active());
    }

    #[test]
    fn test_is_active_returns_false_for_inactive() {
        let worker = create_test_worker(WorkerStatus::Inactive);
        assert!(!worker.is_active());
    }

    #[test]
    fn test_toggled_flips_status() {
        assert_eq!(WorkerStatus::Active.toggled(), WorkerStatus::Inactive);
        assert_eq!(WorkerStatus::Inactive.toggled(), WorkerStatus::Active);
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_string(&WorkerStatus::Active).unwrap(),
            "\"ACTIVE\""
        );
        assert_eq!(
            serde_json::to_string(&WorkerStatus::Inactive).unwrap(),
            "\"INACTIVE\""
        );
    }

    #[test]
    fn test_serialize_worker_round_trip() {
        let worker = create_test_worker(WorkerStatus::Active);
        let json = serde_json::to_string(&worker).unwrap();
        let deserialized: Worker = serde_json::from_str(&json).unwrap();
        assert_eq!(worker, deserialized);
    }

    #[test]
    fn test_daily_rate_serializes_as_string() {
        let worker = create_test_worker(WorkerStatus::Active);
        let json = serde_json::to_string(&worker).unwrap();
        assert!(json.contains("\"daily_rate\":\"700\""));
    }

    #[test]
    fn test_legacy_monthly_salary_skipped_when_none() {
        let worker = create_test_worker(WorkerStatus::Active);
        let json = serde_json::to_string(&worker).unwrap();
        assert!(!json.contains("legacy_monthly_salary"));
    }
}
