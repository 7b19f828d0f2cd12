//! HTTP server lifecycle

use std::future::Future;
use std::time::Duration;

use axum::Router;
use robogrid_config::ServerConfig;
use tokio::{net::TcpListener, task::JoinHandle};
use tracing::info;

use crate::{error::ApiError, routes::all_routes, state::AppState};

/// Robogrid HTTP server
pub struct ApiServer {
    state: AppState,
}

impl ApiServer {
    /// Build the server state from configuration
    pub fn new(config: ServerConfig) -> Result<Self, ApiError> {
        Ok(Self {
            state: AppState::new(config)?,
        })
    }

    /// Shared application state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Router with every route and layer attached
    pub fn router(&self) -> Router {
        all_routes(self.state.clone())
    }

    /// Bind the configured address and serve until Ctrl-C
    pub async fn run(self) -> Result<(), ApiError> {
        let addr = self.state.config.bind_addr.clone();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|err| ApiError::Internal(format!("binding {}: {}", addr, err)))?;

        self.serve(listener, async {
            let _ = tokio::signal::ctrl_c().await;
            info!("shutdown signal received");
        })
        .await
    }

    /// Serve on an already bound listener until `shutdown` resolves
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<(), ApiError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let local_addr = listener
            .local_addr()
            .map_err(|err| ApiError::Internal(err.to_string()))?;
        info!(address = %local_addr, "starting robogrid server");

        let sweeper = self.spawn_session_sweeper();
        let result = axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|err| ApiError::Internal(err.to_string()));
        sweeper.abort();

        info!(sessions = self.state.sessions.len(), "server stopped");
        result
    }

    fn spawn_session_sweeper(&self) -> JoinHandle<()> {
        let sessions = self.state.sessions.clone();
        let ttl = self.state.config.session_ttl();
        let period = self.state.config.sweep_interval().max(Duration::from_secs(1));
        let mut interval = tokio::time::interval(period);

        tokio::spawn(async move {
            // first tick completes immediately
            interval.tick().await;
            loop {
                interval.tick().await;
                sessions.evict_idle(ttl);
            }
        })
    }
}
