//! HTTP API module for the payroll engine.
//!
//! This module provides the REST endpoints over the worker, site,
//! attendance, payment, ledger, dashboard, and report operations.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    ActivitiesQuery, DateQuery, LedgerQuery, MigrationQuery, MonthQuery, PaymentListQuery,
    RangeQuery, SiteListQuery, WorkerListQuery,
};
pub use response::ApiError;
pub use state::AppState;
