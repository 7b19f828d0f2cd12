//! Application state for the API server

use std::sync::Arc;

use robogrid_config::ServerConfig;
use robogrid_core::SessionStore;

use crate::{error::ApiError, pages::PageRenderer};

/// Application state shared across all API handlers
#[derive(Clone)]
pub struct AppState {
    /// Live robot sessions
    pub sessions: Arc<SessionStore>,
    /// HTML page templates
    pub pages: Arc<PageRenderer>,
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Server start time for uptime calculation
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Create new application state
    pub fn new(config: ServerConfig) -> Result<Self, ApiError> {
        let pages = PageRenderer::new().map_err(|err| ApiError::Internal(err.to_string()))?;

        Ok(Self {
            sessions: Arc::new(SessionStore::new()),
            pages: Arc::new(pages),
            config: Arc::new(config),
            start_time: std::time::Instant::now(),
        })
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
