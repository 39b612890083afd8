use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use sickfits_core::AppError;

use crate::middleware::session::CurrentSession;
use crate::state::AppState;

/// Lets a request through to admin routes only when the configured UI access
/// predicate accepts its session.
///
/// ```rust,ignore
/// let admin = init_admin_router()
///     .route_layer(middleware::from_fn_with_state(state.clone(), require_ui_access));
/// ```
pub async fn require_ui_access(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let CurrentSession(session) = CurrentSession::from_request_parts(&mut parts, &state).await?;

    if !(state.config.app.ui.is_access_allowed)(session.as_ref()) {
        return Err(AppError::unauthorized("Sign in to access the admin UI"));
    }

    Ok(next.run(Request::from_parts(parts, body)).await)
}
