//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod ledger;
mod payment;
mod report;
mod site;
mod worker;

pub use attendance::{AttendanceKind, AttendanceRecord};
pub use ledger::{LedgerEntry, LedgerEntryKind, LedgerSummary, WorkerLedger};
pub use payment::{PaymentKind, PaymentRecord};
pub use report::{ReportFilters, ReportMetadata, ReportRow, StatusFilter};
pub use site::Site;
pub use worker::{Worker, WorkerStatus};
