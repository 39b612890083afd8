use axum::{Json, extract::State, http::StatusCode};
use axum_extra::extract::cookie::CookieJar;
use tracing::{info, instrument};
use validator::Validate;

use sickfits_cli::accounts;
use sickfits_core::AppError;

use crate::middleware::session::CurrentSession;
use crate::modules::auth::model::{
    AuthenticatedItemResponse, ErrorResponse, InitFirstItemRequest, InitStatusResponse,
    SigninRequest,
};
use crate::modules::auth::service::AuthService;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/api/auth/signin",
    request_body = SigninRequest,
    responses(
        (status = 200, description = "Signed in; session cookie set", body = AuthenticatedItemResponse),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Authentication failed", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn signin(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(dto): Json<SigninRequest>,
) -> Result<(CookieJar, Json<AuthenticatedItemResponse>), AppError> {
    dto.validate().map_err(AppError::bad_request)?;

    let item = AuthService::authenticate(&state.db, &state.config, &dto.email, &dto.password).await?;
    let token = state
        .sessions
        .seal(state.config.auth.list_key, &item.id.to_string())?;

    info!(user_id = %item.id, "Signed in");

    Ok((
        jar.add(state.sessions.session_cookie(token)),
        Json(AuthenticatedItemResponse { item: Some(item) }),
    ))
}

#[utoipa::path(
    post,
    path = "/api/auth/signout",
    responses(
        (status = 204, description = "Session cookie cleared")
    ),
    tag = "Authentication"
)]
pub async fn signout(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, StatusCode) {
    (
        jar.remove(state.sessions.removal_cookie()),
        StatusCode::NO_CONTENT,
    )
}

#[utoipa::path(
    get,
    path = "/api/auth/session",
    responses(
        (status = 200, description = "The signed-in item, or null", body = AuthenticatedItemResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn get_session(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
) -> Result<Json<AuthenticatedItemResponse>, AppError> {
    let item = match session {
        Some(session) if session.data.is_some() => {
            AuthService::find_item(&state.db, &state.config, &session.item_id).await?
        }
        _ => None,
    };

    Ok(Json(AuthenticatedItemResponse { item }))
}

#[utoipa::path(
    get,
    path = "/api/auth/init",
    responses(
        (status = 200, description = "Whether the first account can still be created", body = InitStatusResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn get_init_status(
    State(state): State<AppState>,
) -> Result<Json<InitStatusResponse>, AppError> {
    let Some(init) = &state.config.auth.init_first_item else {
        return Ok(Json(InitStatusResponse {
            needs_first_item: false,
            fields: Vec::new(),
        }));
    };

    Ok(Json(InitStatusResponse {
        needs_first_item: accounts::needs_first_item(&state.db).await?,
        fields: init.fields.iter().map(|f| f.to_string()).collect(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/auth/init",
    request_body = InitFirstItemRequest,
    responses(
        (status = 201, description = "First account created and signed in", body = AuthenticatedItemResponse),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "First-item bootstrap is disabled"),
        (status = 409, description = "An account already exists", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn init_first_item(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(dto): Json<InitFirstItemRequest>,
) -> Result<(StatusCode, CookieJar, Json<AuthenticatedItemResponse>), AppError> {
    if state.config.auth.init_first_item.is_none() {
        return Err(AppError::not_found(anyhow::anyhow!(
            "First-item bootstrap is disabled"
        )));
    }

    dto.validate().map_err(AppError::bad_request)?;

    let item = accounts::create_first_item(&state.db, &dto.name, &dto.email, &dto.password).await?;
    let token = state
        .sessions
        .seal(state.config.auth.list_key, &item.id.to_string())?;

    Ok((
        StatusCode::CREATED,
        jar.add(state.sessions.session_cookie(token)),
        Json(AuthenticatedItemResponse { item: Some(item) }),
    ))
}
