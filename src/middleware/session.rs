use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::CookieJar;
use sickfits_auth::Session;
use sickfits_core::AppError;
use tracing::debug;

use crate::modules::auth::service::AuthService;
use crate::state::AppState;

/// The request's session, if it carries a valid one.
///
/// Never rejects for a missing, malformed, expired or foreign cookie; those
/// all yield `CurrentSession(None)`. Only a database failure while loading
/// item data is an error.
#[derive(Debug, Clone)]
pub struct CurrentSession(pub Option<Session>);

impl FromRequestParts<AppState> for CurrentSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let Some(cookie) = jar.get(state.sessions.cookie_name()) else {
            return Ok(CurrentSession(None));
        };

        let claims = match state.sessions.unseal(cookie.value()) {
            Ok(claims) => claims,
            Err(e) => {
                debug!(reason = %e.error, "Ignoring session cookie");
                return Ok(CurrentSession(None));
            }
        };

        if claims.list_key != state.config.auth.list_key {
            debug!(list_key = %claims.list_key, "Ignoring session for another list");
            return Ok(CurrentSession(None));
        }

        let data = AuthService::load_item_data(&state.db, &state.config, &claims.item_id).await?;

        Ok(CurrentSession(Some(Session::new(claims, data))))
    }
}
