//! Public operations of the payroll engine.
//!
//! One module per resource. Every operation takes the injected store
//! (and, where relevant, the renderer or clock values) and returns
//! `PayrollResult<T>`; validation happens before any store access where
//! feasible, and store failures never escape as panics.

pub mod attendance;
pub mod dashboard;
pub mod ledger;
pub mod payments;
pub mod reports;
pub mod sites;
pub mod workers;
