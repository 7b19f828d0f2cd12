//! JSON view of the caller's session

use axum::{extract::State, Json};
use axum_extra::extract::cookie::CookieJar;

use crate::{models::StateResponse, session::resolve_session, state::AppState};

/// Current robot position, grid size, and matrix
#[utoipa::path(
    get,
    path = "/api/v1/state",
    responses(
        (status = 200, description = "Session state", body = StateResponse)
    )
)]
pub async fn get_state(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<StateResponse>) {
    let (jar, session) = resolve_session(&state, jar);
    let snapshot = session.handle.lock().snapshot();
    (jar, Json(StateResponse::from(snapshot)))
}
