//! Report models: filters, metadata, and the flat row consumed by the
//! external spreadsheet renderer.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::WorkerStatus;

/// Worker-status filter for report generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusFilter {
    /// Include workers of any status.
    #[default]
    All,
    /// Only active workers.
    Active,
    /// Only inactive workers.
    Inactive,
}

impl StatusFilter {
    /// Returns true if a worker with the given status passes the filter.
    pub fn matches(self, status: WorkerStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => status == WorkerStatus::Active,
            StatusFilter::Inactive => status == WorkerStatus::Inactive,
        }
    }
}

/// The filter set applied when generating an employee report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportFilters {
    /// Start of the reporting window (inclusive).
    pub start_date: NaiveDate,
    /// End of the reporting window (inclusive).
    pub end_date: NaiveDate,
    /// Restrict to workers whose default site is this one.
    #[serde(default)]
    pub site_id: Option<Uuid>,
    /// Restrict to a single worker.
    #[serde(default)]
    pub worker_id: Option<Uuid>,
    /// Restrict by worker status.
    #[serde(default)]
    pub status: StatusFilter,
}

/// Report header metadata handed to the renderer alongside the rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// The company the report is generated for.
    pub company_name: String,
    /// The report title (e.g., "Employee Report").
    pub report_title: String,
    /// Formatted start of the reporting window.
    pub period_from: String,
    /// Formatted end of the reporting window.
    pub period_to: String,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
}

/// One flat per-worker row for spreadsheet export.
///
/// `pending_balance` is scoped strictly to the report's date window,
/// unlike the multi-period ledger balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    /// The worker's id.
    pub worker_id: Uuid,
    /// The worker's full name.
    pub full_name: String,
    /// Contact phone number, if known.
    pub phone: Option<String>,
    /// The worker's status.
    pub status: WorkerStatus,
    /// Name of the worker's default site, if assigned.
    pub assigned_site: Option<String>,
    /// The date the worker joined.
    pub joining_date: NaiveDate,
    /// Full + half + custom days attended in the window.
    pub days_present: u64,
    /// Absent days recorded in the window.
    pub days_absent: u64,
    /// Total custom hours logged in the window.
    pub overtime_hours: Decimal,
    /// Wages earned in the window, rounded to the currency unit.
    pub wages_earned: Decimal,
    /// Payments received in the window.
    pub amount_paid: Decimal,
    /// `wages_earned - amount_paid` for the window.
    pub pending_balance: Decimal,
    /// Date of the most recent payment in the window, if any.
    pub last_payment_date: Option<NaiveDate>,
}
