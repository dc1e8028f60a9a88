//! Wage policy for the payroll engine.
//!
//! This module contains the pure functions that turn a worker's daily
//! rate and an attendance kind into a credit amount, the currency
//! rounding rule, and the one-time legacy monthly-salary conversion.

mod migration;
mod policy;

pub use migration::{MigrationSummary, daily_rate_from_monthly, legacy_working_days};
pub use policy::{
    attendance_credit, credit_description, half_day_factor, round_currency, standard_day_hours,
};
