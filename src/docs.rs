use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use sickfits_models::UserItem;

use crate::modules::auth::model::{
    AuthenticatedItemResponse, ErrorResponse, InitFirstItemRequest, InitStatusResponse,
    SigninRequest,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::signin,
        crate::modules::auth::controller::signout,
        crate::modules::auth::controller::get_session,
        crate::modules::auth::controller::get_init_status,
        crate::modules::auth::controller::init_first_item,
        crate::modules::admin::controller::get_lists,
    ),
    components(
        schemas(
            UserItem,
            SigninRequest,
            InitFirstItemRequest,
            InitStatusResponse,
            AuthenticatedItemResponse,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Password sign-in, sessions and first-account bootstrap"),
        (name = "Admin", description = "Schema metadata for the admin UI")
    ),
    info(
        title = "Sick Fits API",
        version = "0.1.0",
        description = "Backend for the Sick Fits store, built with Rust, Axum, and PostgreSQL.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "session_cookie",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(
                    sickfits_config::DEFAULT_COOKIE_NAME,
                ))),
            )
        }
    }
}
