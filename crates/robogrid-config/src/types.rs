//! Server configuration types

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Settings for the Robogrid HTTP server
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to listen on
    pub bind_addr: String,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
    /// Default log filter when `RUST_LOG` is unset
    pub log_level: String,
    /// Name of the session cookie
    pub cookie_name: String,
    /// Sessions idle this long are dropped
    pub session_ttl_secs: u64,
    /// How often idle sessions are swept
    pub sweep_interval_secs: u64,
}

impl ServerConfig {
    /// Parsed listen address
    pub fn socket_addr(&self) -> Option<SocketAddr> {
        self.bind_addr.parse().ok()
    }

    pub fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.session_ttl_secs)
    }

    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_secs)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".to_string(),
            static_dir: PathBuf::from("static"),
            log_level: "info".to_string(),
            cookie_name: "robogrid-session".to_string(),
            session_ttl_secs: 3600,
            sweep_interval_secs: 60,
        }
    }
}

/// Somewhere a [`ServerConfig`] can be read from and written back to
pub trait ConfigStore {
    /// Read the layered configuration and validate it
    fn load_config(&mut self) -> Result<ServerConfig, crate::error::ConfigError>;
    /// Persist `config` as TOML
    fn save_config(&self, config: &ServerConfig) -> Result<(), crate::error::ConfigError>;
    /// Reject settings the server cannot start with
    fn validate_config(&self, config: &ServerConfig) -> Result<(), crate::error::ConfigError>;
}
