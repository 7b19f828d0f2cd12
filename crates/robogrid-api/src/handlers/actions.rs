//! Robot action handlers
//!
//! Every action resolves the caller's session, applies one command under the
//! session lock, and answers with the re-rendered page.

use axum::{
    extract::{rejection::FormRejection, Path, State},
    response::Html,
    Form,
};
use axum_extra::extract::{cookie::CookieJar, WithRejection};
use robogrid_core::{parse_program, Command, Direction};
use tracing::{debug, warn};

use crate::{
    error::{ApiError, ApiResult},
    models::{ResizeForm, UserCodeForm},
    session::resolve_session,
    state::AppState,
};

type PageResponse = ApiResult<(CookieJar, Html<String>)>;

fn perform(state: &AppState, jar: CookieJar, command: Command) -> PageResponse {
    let (jar, session) = resolve_session(state, jar);
    let snapshot = session.handle.lock().apply(command);
    let html = state.pages.play(&snapshot)?;
    Ok((jar, Html(html)))
}

/// Send the robot back to `(0, 0)`
pub async fn reset(State(state): State<AppState>, jar: CookieJar) -> PageResponse {
    perform(&state, jar, Command::Reset)
}

/// Move one row up, wrapping to the bottom row
pub async fn up(State(state): State<AppState>, jar: CookieJar) -> PageResponse {
    perform(&state, jar, Command::move_toward(Direction::Up))
}

/// Move one row down, wrapping to the top row
pub async fn down(State(state): State<AppState>, jar: CookieJar) -> PageResponse {
    perform(&state, jar, Command::move_toward(Direction::Down))
}

/// Move one column left, wrapping to the last column
pub async fn left(State(state): State<AppState>, jar: CookieJar) -> PageResponse {
    perform(&state, jar, Command::move_toward(Direction::Left))
}

/// Move one column right, wrapping to the first column
pub async fn right(State(state): State<AppState>, jar: CookieJar) -> PageResponse {
    perform(&state, jar, Command::move_toward(Direction::Right))
}

/// Place the robot on `(i, j)`; non-integer segments are a 400
pub async fn teleport(
    State(state): State<AppState>,
    jar: CookieJar,
    WithRejection(Path((x, y)), _): WithRejection<Path<(u32, u32)>, ApiError>,
) -> PageResponse {
    perform(&state, jar, Command::SetCoordinates { x, y })
}

/// Resize the grid from the `change_max_i` / `change_max_j` form fields.
///
/// An unreadable or missing form counts as two missing fields, so the grid
/// falls back to the default size instead of the request failing.
pub async fn change_max(
    State(state): State<AppState>,
    jar: CookieJar,
    form: Result<Form<ResizeForm>, FormRejection>,
) -> PageResponse {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            debug!(%rejection, "resize form unreadable, using defaults");
            ResizeForm::default()
        }
    };
    let (jar, session) = resolve_session(&state, jar);
    let snapshot = session
        .handle
        .lock()
        .resize(form.change_max_i.as_deref(), form.change_max_j.as_deref());
    let html = state.pages.play(&snapshot)?;
    Ok((jar, Html(html)))
}

/// Run a code-mode program.
///
/// The program is parsed in full first; a bad line rejects the request and
/// leaves the robot where it was.
pub async fn user_code(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<UserCodeForm>,
) -> PageResponse {
    let commands = parse_program(&form.user_code).inspect_err(|err| {
        warn!(line = err.line(), error = %err, "program rejected");
    })?;

    let (jar, session) = resolve_session(&state, jar);
    let snapshot = session.handle.lock().run_program(&commands);
    let html = state.pages.code(&snapshot, &form.user_code)?;
    Ok((jar, Html(html)))
}
