//! API route definitions

use axum::{
    http::StatusCode,
    middleware::from_fn,
    routing::{get, post},
    Json, Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};
use utoipa::OpenApi;

use crate::{
    error::ApiError,
    handlers::{actions, health, pages, state},
    middleware::logging::logging_middleware,
    state::AppState,
};

/// Pages and robot actions
pub fn robot_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::root))
        // Play mode
        .route("/play", get(pages::play))
        .route("/reset", get(actions::reset).post(actions::reset))
        .route("/up", get(actions::up).post(actions::up))
        .route("/down", get(actions::down).post(actions::down))
        .route("/left", get(actions::left).post(actions::left))
        .route("/right", get(actions::right).post(actions::right))
        .route("/coords/:i/:j", get(actions::teleport).post(actions::teleport))
        .route("/change-max", post(actions::change_max))
        // Code mode
        .route("/code", get(pages::code))
        .route("/user-code", post(actions::user_code))
}

/// JSON endpoints and their OpenAPI document
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/api/v1/state", get(state::get_state))
        .route("/api-docs/openapi.json", get(openapi_json))
}

/// Combined routes with static files, 404 fallback, and logging
pub fn all_routes(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir);

    robot_routes()
        .merge(api_routes())
        .nest_service("/static", static_files)
        .fallback(not_found)
        .layer(from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found(uri: axum::http::Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}

async fn openapi_json() -> (StatusCode, Json<utoipa::openapi::OpenApi>) {
    (StatusCode::OK, Json(ApiDoc::openapi()))
}

#[derive(OpenApi)]
#[openapi(
    paths(health::health_check, state::get_state),
    components(schemas(
        crate::models::StateResponse,
        crate::models::HealthResponse,
    )),
    info(
        title = "Robogrid API",
        version = "1.0.0",
        description = "JSON views of Robogrid sessions"
    )
)]
struct ApiDoc;
