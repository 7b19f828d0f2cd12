//! Robogrid configuration
//!
//! Server settings loaded from built-in defaults, an optional TOML file, and
//! `ROBOGRID_*` environment variables, in that order.

pub mod error;
pub mod manager;
pub mod types;

pub use error::{ConfigError, Result};
pub use manager::{ConfigManager, DEFAULT_ENV_PREFIX};
pub use types::{ConfigStore, ServerConfig};
