#![warn(missing_docs)]

//! Robogrid HTTP server
//!
//! Serves the play and code pages, applies robot actions to per-session
//! state keyed by a cookie, and exposes a small JSON surface.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod pages;
pub mod routes;
pub mod server;
pub mod session;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use server::ApiServer;
pub use state::AppState;
