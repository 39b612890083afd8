use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::middleware::ui_access::require_ui_access;
use crate::modules::admin::init_admin_router;
use crate::modules::auth::init_auth_router;
use crate::state::AppState;
use anyhow::{Context, bail};
use axum::http::{HeaderValue, Method, header};
use axum::{Router, middleware};
use sickfits_config::CorsConfig;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Builds the application router. Fails when the configured origins cannot
/// be used for a credentialed CORS policy.
pub fn init_router(state: AppState) -> anyhow::Result<Router> {
    let cors = cors_layer(&state.config.app.cors)?;

    Ok(Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api", Router::new().nest("/auth", init_auth_router()))
        .nest(
            "/admin",
            init_admin_router()
                .route_layer(middleware::from_fn_with_state(state.clone(), require_ui_access)),
        )
        .with_state(state.clone())
        .layer(cors)
        .layer(middleware::from_fn_with_state(state, logging_middleware)))
}

/// Exactly the configured origins, with credentials. A wildcard cannot be
/// combined with credentials and is rejected, as is any origin that is not a
/// valid header value.
pub fn cors_layer(cors: &CorsConfig) -> anyhow::Result<CorsLayer> {
    let mut allowed_origins = Vec::with_capacity(cors.origins.len());
    for origin in &cors.origins {
        if origin.trim() == "*" {
            bail!("FRONTEND_URL cannot be '*' while CORS credentials are enabled");
        }
        let value = HeaderValue::from_str(origin)
            .with_context(|| format!("FRONTEND_URL {:?} is not a valid origin", origin))?;
        allowed_origins.push(value);
    }

    Ok(CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(cors.credentials))
}
