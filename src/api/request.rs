//! Query-parameter types for the payroll engine API.
//!
//! Request bodies reuse the input payloads defined by the action
//! modules; this module holds the query-string shapes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::WorkerStatus;

/// Query parameters for listing workers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkerListQuery {
    /// Restrict to one status.
    #[serde(default)]
    pub status: Option<WorkerStatus>,
}

/// Query parameters for listing sites.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteListQuery {
    /// Restrict to active sites.
    #[serde(default)]
    pub active_only: Option<bool>,
}

/// Query parameters selecting one calendar day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateQuery {
    /// The calendar day.
    pub date: NaiveDate,
}

/// Query parameters selecting an explicit inclusive date range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RangeQuery {
    /// First day included.
    pub start_date: NaiveDate,
    /// Last day included.
    pub end_date: NaiveDate,
}

/// Query parameters selecting one calendar month.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthQuery {
    /// The calendar year.
    pub year: i32,
    /// The 1-based month.
    pub month: u32,
}

/// Query parameters bounding a ledger window.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LedgerQuery {
    /// First day included; defaults per the ledger window rules.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Last day included; defaults to today.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

/// Query parameters for the payment listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaymentListQuery {
    /// Restrict to one worker.
    #[serde(default)]
    pub worker_id: Option<Uuid>,
    /// First day included.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Last day included.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

/// Query parameters for the recent-activity feed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivitiesQuery {
    /// Maximum activities returned; defaults to the configured limit.
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Query parameters for the legacy-salary migration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MigrationQuery {
    /// Log what would change without writing.
    #[serde(default)]
    pub dry_run: Option<bool>,
    /// Restore the legacy schema instead of migrating forward.
    #[serde(default)]
    pub rollback: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worker_list_query_status_is_optional() {
        let query: WorkerListQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.status, None);

        let query: WorkerListQuery = serde_json::from_str(r#"{"status":"ACTIVE"}"#).unwrap();
        assert_eq!(query.status, Some(WorkerStatus::Active));
    }

    #[test]
    fn test_ledger_query_defaults_to_open_bounds() {
        let query: LedgerQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.start_date, None);
        assert_eq!(query.end_date, None);
    }

    #[test]
    fn test_month_query_requires_both_fields() {
        assert!(serde_json::from_str::<MonthQuery>(r#"{"year":2026}"#).is_err());
        let query: MonthQuery = serde_json::from_str(r#"{"year":2026,"month":7}"#).unwrap();
        assert_eq!((query.year, query.month), (2026, 7));
    }
}
