//! Ledger construction for the payroll engine.
//!
//! This module turns a worker's attendance and payment records into a
//! date-ordered, running-balance transaction list plus summary totals.

mod builder;
mod window;

pub use builder::build_worker_ledger;
pub use window::LedgerWindow;
