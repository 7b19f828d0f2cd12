//! File and environment backed [`ConfigStore`]

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use tracing::debug;

use crate::{
    error::{ConfigError, Result},
    types::{ConfigStore, ServerConfig},
};

/// Prefix of the environment variables that override file settings
pub const DEFAULT_ENV_PREFIX: &str = "ROBOGRID";

/// Loads [`ServerConfig`] from an optional TOML file overlaid with
/// `ROBOGRID_*` environment variables
#[derive(Debug, Clone)]
pub struct ConfigManager {
    file: PathBuf,
    env_prefix: String,
}

impl ConfigManager {
    /// Use `<config_dir>/robogrid/config.toml`
    pub fn new() -> Self {
        let file = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("robogrid")
            .join("config.toml");
        Self::with_path(file)
    }

    /// Use an explicit TOML file; it does not have to exist
    pub fn with_path(file: PathBuf) -> Self {
        Self {
            file,
            env_prefix: DEFAULT_ENV_PREFIX.to_string(),
        }
    }

    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// TOML file this manager reads and writes
    pub fn file_path(&self) -> &Path {
        &self.file
    }
}

impl ConfigStore for ConfigManager {
    fn load_config(&mut self) -> Result<ServerConfig> {
        debug!(path = %self.file.display(), prefix = %self.env_prefix, "loading config");
        let builder = Config::builder()
            .add_source(File::from(self.file.clone()).required(false))
            .add_source(Environment::with_prefix(&self.env_prefix).try_parsing(true));

        let config = builder.build()?;
        let server_config: ServerConfig = config.try_deserialize()?;
        self.validate_config(&server_config)?;
        Ok(server_config)
    }

    fn save_config(&self, config: &ServerConfig) -> Result<()> {
        let toml = toml::to_string(config)?;
        if let Some(parent) = self.file.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.file, toml)?;
        Ok(())
    }

    fn validate_config(&self, config: &ServerConfig) -> Result<()> {
        if config.socket_addr().is_none() {
            return Err(ConfigError::Validation(format!(
                "Invalid bind address: {}",
                config.bind_addr
            )));
        }
        if config.cookie_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Cookie name cannot be empty".to_string(),
            ));
        }
        if config.session_ttl_secs == 0 {
            return Err(ConfigError::Validation(
                "Session TTL must be greater than 0".to_string(),
            ));
        }
        if config.sweep_interval_secs == 0 {
            return Err(ConfigError::Validation(
                "Sweep interval must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
