//! Per-worker attendance rollups.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{AttendanceKind, AttendanceRecord, Worker};
use crate::wage::{half_day_factor, round_currency};

use super::Period;

/// In-period attendance counts and the wage they imply for one worker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerAttendanceSummary {
    /// The worker's id.
    pub worker_id: Uuid,
    /// The worker's full name.
    pub worker_name: String,
    /// Full days attended.
    pub full_days: u64,
    /// Half days attended.
    pub half_days: u64,
    /// Absent days recorded.
    pub absents: u64,
    /// Total custom hours logged.
    pub custom_hours: Decimal,
    /// `full_days + half_days`.
    pub total_work_days: u64,
    /// `full_days + 0.5 * half_days`.
    pub effective_days: Decimal,
    /// The worker's daily rate.
    pub daily_rate: Decimal,
    /// `round(effective_days * daily_rate)`.
    pub calculated_wage: Decimal,
}

/// Per-worker counts accumulated in one pass over the records.
#[derive(Debug, Default, Clone, Copy)]
struct KindCounts {
    full: u64,
    half: u64,
    absent: u64,
    custom_hours: Decimal,
}

/// Builds one attendance summary per worker for the given period.
///
/// Records outside the period or belonging to workers not in the given
/// slice are ignored. Counts are accumulated into a typed map keyed by
/// worker id and looked up by key, one pass over the records. Workers
/// with no in-period records still get a zero-valued summary.
pub fn summarize_attendance(
    workers: &[Worker],
    records: &[AttendanceRecord],
    period: &Period,
) -> Vec<WorkerAttendanceSummary> {
    let mut counts: HashMap<Uuid, KindCounts> = HashMap::with_capacity(workers.len());

    for record in records {
        if !period.contains(record.date) {
            continue;
        }
        let entry = counts.entry(record.worker_id).or_default();
        match record.kind {
            AttendanceKind::FullDay => entry.full += 1,
            AttendanceKind::HalfDay => entry.half += 1,
            AttendanceKind::Absent => entry.absent += 1,
            AttendanceKind::Custom => {
                entry.custom_hours += record.total_hours.unwrap_or(Decimal::ZERO);
            }
        }
    }

    workers
        .iter()
        .map(|worker| {
            let c = counts.get(&worker.id).copied().unwrap_or_default();
            let effective_days =
                Decimal::from(c.full) + Decimal::from(c.half) * half_day_factor();
            WorkerAttendanceSummary {
                worker_id: worker.id,
                worker_name: worker.full_name.clone(),
                full_days: c.full,
                half_days: c.half,
                absents: c.absent,
                custom_hours: c.custom_hours,
                total_work_days: c.full + c.half,
                effective_days,
                daily_rate: worker.daily_rate,
                calculated_wage: round_currency(effective_days * worker.daily_rate),
            }
        })
        .collect()
}
