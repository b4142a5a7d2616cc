//! Application state for the HTTP server.

use std::sync::Arc;

use crate::config::AppConfig;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Runtime configuration: dataset location and static page directory
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Create a new application state with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}
