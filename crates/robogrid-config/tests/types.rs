use std::path::PathBuf;
use std::time::Duration;

use robogrid_config::*;
use tempfile::TempDir;

#[test]
fn test_server_config_default() {
    let config = ServerConfig::default();
    assert_eq!(config.bind_addr, "0.0.0.0:3000");
    assert_eq!(config.static_dir, PathBuf::from("static"));
    assert_eq!(config.cookie_name, "robogrid-session");
    assert_eq!(config.session_ttl(), Duration::from_secs(3600));
    assert!(config.socket_addr().is_some());
}

#[test]
fn test_config_validation() {
    let manager = ConfigManager::new();
    let mut config = ServerConfig::default();
    assert!(manager.validate_config(&config).is_ok());

    config.bind_addr = "not an address".to_string();
    assert!(matches!(
        manager.validate_config(&config),
        Err(ConfigError::Validation(_))
    ));

    let mut config = ServerConfig::default();
    config.session_ttl_secs = 0;
    assert!(manager.validate_config(&config).is_err());

    let mut config = ServerConfig::default();
    config.cookie_name = "  ".to_string();
    assert!(manager.validate_config(&config).is_err());
}

#[test]
fn test_missing_file_loads_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let mut manager = ConfigManager::with_path(temp_dir.path().join("absent.toml"))
        .with_env_prefix("ROBOGRID_TEST_MISSING");

    let config = manager.load_config().unwrap();
    assert_eq!(config, ServerConfig::default());
}

#[test]
fn test_file_overrides_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(
        &path,
        "bind_addr = \"127.0.0.1:8080\"\nsession_ttl_secs = 120\n",
    )
    .unwrap();

    let mut manager = ConfigManager::with_path(path).with_env_prefix("ROBOGRID_TEST_FILE");
    let config = manager.load_config().unwrap();
    assert_eq!(config.bind_addr, "127.0.0.1:8080");
    assert_eq!(config.session_ttl_secs, 120);
    assert_eq!(config.cookie_name, "robogrid-session");
}

#[test]
fn test_environment_overrides_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, "log_level = \"warn\"\n").unwrap();

    std::env::set_var("ROBOGRID_TEST_ENV_LOG_LEVEL", "debug");
    let mut manager = ConfigManager::with_path(path).with_env_prefix("ROBOGRID_TEST_ENV");
    let config = manager.load_config().unwrap();
    std::env::remove_var("ROBOGRID_TEST_ENV_LOG_LEVEL");

    assert_eq!(config.log_level, "debug");
}

#[test]
fn test_save_then_load() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("config.toml");
    let mut manager = ConfigManager::with_path(path.clone()).with_env_prefix("ROBOGRID_TEST_SAVE");

    let mut config = ServerConfig::default();
    config.sweep_interval_secs = 5;
    manager.save_config(&config).unwrap();
    assert!(path.exists());

    let loaded = manager.load_config().unwrap();
    assert_eq!(loaded.sweep_interval_secs, 5);
}

#[test]
fn test_invalid_file_value_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, "sweep_interval_secs = 0\n").unwrap();

    let mut manager = ConfigManager::with_path(path).with_env_prefix("ROBOGRID_TEST_INVALID");
    assert!(matches!(
        manager.load_config(),
        Err(ConfigError::Validation(_))
    ));
}

#[test]
fn test_default_location_and_prefix() {
    let manager = ConfigManager::new();
    assert!(manager.file_path().ends_with("robogrid/config.toml"));
    assert_eq!(DEFAULT_ENV_PREFIX, "ROBOGRID");

    let custom = ConfigManager::with_path(PathBuf::from("/tmp/robogrid.toml"));
    assert_eq!(custom.file_path(), PathBuf::from("/tmp/robogrid.toml").as_path());
}
