//! Period aggregation for the payroll engine.
//!
//! This module computes per-worker and fleet-wide rollups for a calendar
//! month or custom range without building full per-entry ledgers: counts
//! and sums are enough for the dashboard and for reporting.

mod attendance;
mod payments;
mod period;
mod snapshot;

pub use attendance::{WorkerAttendanceSummary, summarize_attendance};
pub use payments::{PaymentSummary, summarize_payments};
pub use period::Period;
pub use snapshot::{Activity, ActivityKind, FleetSnapshot, fleet_snapshot, merge_activities};
