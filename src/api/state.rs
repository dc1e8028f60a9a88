//! Application state for the payroll engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::report::ReportRenderer;
use crate::store::Store;

/// Shared application state.
///
/// Carries the injected store handle, the report renderer, and the
/// application configuration. Everything is constructed once at process
/// start; handlers never reach for globals.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn Store>,
    renderer: Arc<dyn ReportRenderer>,
    config: Arc<AppConfig>,
}

impl AppState {
    /// Creates a new application state with the given dependencies.
    pub fn new(
        store: Arc<dyn Store>,
        renderer: Arc<dyn ReportRenderer>,
        config: AppConfig,
    ) -> Self {
        Self {
            store,
            renderer,
            config: Arc::new(config),
        }
    }

    /// Returns the store handle.
    pub fn store(&self) -> &dyn Store {
        self.store.as_ref()
    }

    /// Returns the report renderer.
    pub fn renderer(&self) -> &dyn ReportRenderer {
        self.renderer.as_ref()
    }

    /// Returns the application configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
