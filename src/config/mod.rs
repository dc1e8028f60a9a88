//! Application configuration for the payroll engine.
//!
//! Configuration is loaded from one YAML file at process start and
//! injected wherever it is needed; nothing reads it from a global.
//!
//! # Example
//!
//! ```no_run
//! use labor_ledger::config::AppConfig;
//!
//! let config = AppConfig::load("./labor-ledger.yaml").unwrap();
//! println!("Reports for: {}", config.company_name);
//! ```

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};

/// Application-level settings.
///
/// Every field has a default, so a partial (or absent) file still yields
/// a working configuration via [`AppConfig::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Company name stamped into report headers.
    #[serde(default = "default_company_name")]
    pub company_name: String,
    /// Address the HTTP server binds to.
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    /// Working-days divisor for the legacy monthly-salary migration.
    #[serde(default = "default_legacy_working_days")]
    pub legacy_working_days: Decimal,
    /// How many recent activities the dashboard feed returns by default.
    #[serde(default = "default_activity_limit")]
    pub activity_limit: usize,
}

fn default_company_name() -> String {
    "Manarath Engineers".to_string()
}

fn default_bind_addr() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_legacy_working_days() -> Decimal {
    crate::wage::legacy_working_days()
}

fn default_activity_limit() -> usize {
    10
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            company_name: default_company_name(),
            bind_addr: default_bind_addr(),
            legacy_working_days: default_legacy_working_days(),
            activity_limit: default_activity_limit(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from the given YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file (e.g., "./labor-ledger.yaml")
    ///
    /// # Returns
    ///
    /// Returns the parsed configuration, or an error if the file is
    /// missing or contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| PayrollError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}
