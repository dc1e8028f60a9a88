//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while computing ledgers,
//! aggregations, and reports.

use thiserror::Error;
use uuid::Uuid;

/// The main error type for the payroll engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use labor_ledger::error::PayrollError;
/// use uuid::Uuid;
///
/// let id = Uuid::nil();
/// let error = PayrollError::WorkerNotFound { id };
/// assert_eq!(
///     error.to_string(),
///     format!("Worker not found: {}", id)
/// );
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// No worker exists with the given id.
    #[error("Worker not found: {id}")]
    WorkerNotFound {
        /// The worker id that was not found.
        id: Uuid,
    },

    /// No work site exists with the given id.
    #[error("Site not found: {id}")]
    SiteNotFound {
        /// The site id that was not found.
        id: Uuid,
    },

    /// No attendance record exists with the given id.
    #[error("Attendance record not found: {id}")]
    AttendanceNotFound {
        /// The attendance record id that was not found.
        id: Uuid,
    },

    /// No payment record exists with the given id.
    #[error("Payment not found: {id}")]
    PaymentNotFound {
        /// The payment id that was not found.
        id: Uuid,
    },

    /// Input failed validation before any store access.
    #[error("Validation failed: {message}")]
    Validation {
        /// A description of what was invalid.
        message: String,
    },

    /// The underlying persistence store reported a failure.
    #[error("Store failure: {message}")]
    Store {
        /// A description of the store failure.
        message: String,
    },

    /// The application configuration file was not found.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// The application configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl PayrollError {
    /// Creates a validation error from any displayable message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

impl From<crate::store::StoreError> for PayrollError {
    fn from(err: crate::store::StoreError) -> Self {
        Self::Store {
            message: err.to_string(),
        }
    }
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
