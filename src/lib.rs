//! Labor Payroll Ledger Engine
//!
//! This crate tracks workers, work sites, daily attendance, and payments, and
//! derives a running financial ledger (earned vs. paid) per worker under a
//! daily-wage model. It also shapes per-worker report rows for spreadsheet
//! export.

#![warn(missing_docs)]

pub mod actions;
pub mod aggregate;
pub mod api;
pub mod config;
pub mod error;
pub mod ledger;
pub mod models;
pub mod report;
pub mod store;
pub mod wage;
