//! Fleet-wide dashboard snapshot and the recent-activity feed.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{AttendanceKind, AttendanceRecord, PaymentKind, PaymentRecord, Site, Worker};

/// Today's headline numbers for the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetSnapshot {
    /// All workers on record.
    pub total_workers: u64,
    /// Workers currently active.
    pub active_workers: u64,
    /// Workers with a FULL_DAY or HALF_DAY record today.
    pub present_today: u64,
    /// Workers marked ABSENT today.
    pub absent_today: u64,
    /// Sites currently active.
    pub active_sites: u64,
    /// Sum of all active workers' daily rates.
    pub total_daily_wages: Decimal,
    /// ADVANCE payments made this calendar month.
    pub monthly_advances: Decimal,
    /// All payments made this calendar month.
    pub monthly_payments: Decimal,
}

/// Computes the dashboard snapshot from prefetched record slices.
///
/// `today_attendance` must hold only the current day's records, and
/// `month_payments` only the current calendar month's payments; the
/// caller scopes the queries.
pub fn fleet_snapshot(
    workers: &[Worker],
    sites: &[Site],
    today_attendance: &[AttendanceRecord],
    month_payments: &[PaymentRecord],
) -> FleetSnapshot {
    let active_workers = workers.iter().filter(|w| w.is_active()).count() as u64;

    let present_today = today_attendance
        .iter()
        .filter(|a| a.kind.is_present())
        .count() as u64;
    let absent_today = today_attendance
        .iter()
        .filter(|a| a.kind == AttendanceKind::Absent)
        .count() as u64;

    let total_daily_wages: Decimal = workers
        .iter()
        .filter(|w| w.is_active())
        .map(|w| w.daily_rate)
        .sum();

    let monthly_advances: Decimal = month_payments
        .iter()
        .filter(|p| p.kind == PaymentKind::Advance)
        .map(|p| p.amount)
        .sum();
    let monthly_payments_total: Decimal = month_payments.iter().map(|p| p.amount).sum();

    FleetSnapshot {
        total_workers: workers.len() as u64,
        active_workers,
        present_today,
        absent_today,
        active_sites: sites.iter().filter(|s| s.is_active).count() as u64,
        total_daily_wages,
        monthly_advances,
        monthly_payments: monthly_payments_total,
    }
}

/// The record family an activity came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    /// An attendance record was created.
    Attendance,
    /// A payment was recorded.
    Payment,
}

/// One line in the recent-activity feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// The record family.
    pub kind: ActivityKind,
    /// The underlying record's id.
    pub id: Uuid,
    /// When the record was created.
    pub at: DateTime<Utc>,
    /// Headline line (worker name plus what happened).
    pub description: String,
    /// Supporting detail (site name or payment kind).
    pub details: String,
}

/// Merges activity lines from both families, most recent first, capped
/// at `limit`.
pub fn merge_activities(mut activities: Vec<Activity>, limit: usize) -> Vec<Activity> {
    activities.sort_by(|a, b| b.at.cmp(&a.at));
    activities.truncate(limit);
    activities
}
