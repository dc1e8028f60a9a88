//! Dashboard operations: the fleet snapshot and the recent-activity
//! feed.

use std::collections::HashMap;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::aggregate::{
    Activity, ActivityKind, FleetSnapshot, Period, fleet_snapshot, merge_activities,
};
use crate::error::PayrollResult;
use crate::store::{AttendanceStore, PaymentStore, SiteStore, Store, WorkerStore};

/// Computes today's fleet snapshot.
pub fn dashboard_stats(store: &dyn Store, today: NaiveDate) -> PayrollResult<FleetSnapshot> {
    let month = Period::month_of(today)?;

    let workers = store.list_workers(None)?;
    let sites = store.list_sites(false)?;
    let today_attendance = store.attendance_on(today)?;
    let month_payments = store.payments_in_range(month.start, month.end)?;

    Ok(fleet_snapshot(
        &workers,
        &sites,
        &today_attendance,
        &month_payments,
    ))
}

/// The most recent attendance and payment records merged into one feed,
/// newest first, capped at `limit`.
pub fn recent_activities(store: &dyn Store, limit: usize) -> PayrollResult<Vec<Activity>> {
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

    let mut activities = Vec::new();

    for record in store.attendance_in_range(NaiveDate::MIN, NaiveDate::MAX)? {
        let worker_name = worker_names
            .get(&record.worker_id)
            .cloned()
            .unwrap_or_default();
        let kind_label = match record.kind {
            crate::models::AttendanceKind::FullDay => "FULL DAY",
            crate::models::AttendanceKind::HalfDay => "HALF DAY",
            crate::models::AttendanceKind::Absent => "ABSENT",
            crate::models::AttendanceKind::Custom => "CUSTOM",
        };
        activities.push(Activity {
            kind: ActivityKind::Attendance,
            id: record.id,
            at: record.created_at,
            description: format!("{} - {}", worker_name, kind_label),
            details: record
                .site_id
                .and_then(|id| site_names.get(&id).cloned())
                .unwrap_or_else(|| "No site".to_string()),
        });
    }

    for payment in store.payments_in_range(NaiveDate::MIN, NaiveDate::MAX)? {
        let worker_name = worker_names
            .get(&payment.worker_id)
            .cloned()
            .unwrap_or_default();
        activities.push(Activity {
            kind: ActivityKind::Payment,
            id: payment.id,
            at: payment.created_at,
            description: format!("{} - {}", worker_name, payment.amount),
            details: payment.kind.label().to_string(),
        });
    }

    Ok(merge_activities(activities, limit))
}
