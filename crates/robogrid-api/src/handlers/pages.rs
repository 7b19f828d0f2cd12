//! Page handlers

use axum::{extract::State, response::Html};
use axum_extra::extract::cookie::CookieJar;

use crate::{error::ApiResult, session::resolve_session, state::AppState};

/// Landing page
pub async fn root(State(state): State<AppState>) -> ApiResult<Html<String>> {
    Ok(Html(state.pages.root()?))
}

/// Play mode with the caller's current grid
pub async fn play(
    State(state): State<AppState>,
    jar: CookieJar,
) -> ApiResult<(CookieJar, Html<String>)> {
    let (jar, session) = resolve_session(&state, jar);
    let snapshot = session.handle.lock().snapshot();
    Ok((jar, Html(state.pages.play(&snapshot)?)))
}

/// Code mode with the caller's current grid
pub async fn code(
    State(state): State<AppState>,
    jar: CookieJar,
) -> ApiResult<(CookieJar, Html<String>)> {
    let (jar, session) = resolve_session(&state, jar);
    let snapshot = session.handle.lock().snapshot();
    Ok((jar, Html(state.pages.code(&snapshot, "")?)))
}
