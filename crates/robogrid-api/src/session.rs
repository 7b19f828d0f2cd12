//! Session cookie handling

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use robogrid_core::ResolvedSession;

use crate::state::AppState;

/// Resolve the caller's session from its cookie.
///
/// When a new session is issued the returned jar carries the cookie that
/// the response must set.
pub fn resolve_session(state: &AppState, jar: CookieJar) -> (CookieJar, ResolvedSession) {
    let cookie_name = state.config.cookie_name.as_str();
    let token = jar.get(cookie_name).map(|cookie| cookie.value().to_string());
    let resolved = state.sessions.resolve(token.as_deref());

    if !resolved.created {
        return (jar, resolved);
    }

    let cookie = Cookie::build((cookie_name.to_string(), resolved.token.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax);

    (jar.add(cookie), resolved)
}
