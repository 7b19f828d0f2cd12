//! Request logging middleware

use std::time::{Duration, Instant};

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use tracing::{debug, info, warn};

/// Requests slower than this are logged as warnings
const SLOW_REQUEST: Duration = Duration::from_millis(100);

/// Log method, path, status and latency of every request
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    debug!(%method, %path, "request received");

    let start = Instant::now();
    let response = next.run(request).await;
    let elapsed = start.elapsed();
    let status = response.status().as_u16();
    let latency_ms = elapsed.as_secs_f64() * 1000.0;

    if elapsed > SLOW_REQUEST {
        warn!(%method, %path, status, latency_ms, "slow request");
    } else {
        info!(%method, %path, status, latency_ms, "request served");
    }

    response
}
