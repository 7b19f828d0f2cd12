use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use robogrid_api::ApiServer;
use robogrid_config::{ConfigManager, ConfigStore};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "robogrid-api")]
#[command(about = "Serve the Robogrid robot grid over HTTP")]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to listen on, e.g. 0.0.0.0:3000
    #[arg(short, long)]
    bind: Option<String>,

    /// Directory served under /static
    #[arg(long)]
    static_dir: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut manager = match cli.config {
        Some(path) => ConfigManager::with_path(path),
        None => ConfigManager::new(),
    };
    let mut config = manager.load_config().context("loading configuration")?;
    if let Some(bind) = cli.bind {
        config.bind_addr = bind;
    }
    if let Some(static_dir) = cli.static_dir {
        config.static_dir = static_dir;
    }
    if let Some(log_level) = cli.log_level {
        config.log_level = log_level;
    }
    manager
        .validate_config(&config)
        .context("validating configuration")?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!(
        config = %manager.file_path().display(),
        static_dir = %config.static_dir.display(),
        "starting Robogrid"
    );

    ApiServer::new(config)?.run().await?;
    Ok(())
}
