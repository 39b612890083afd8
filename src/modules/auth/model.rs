//! Authentication DTOs.

use serde::{Deserialize, Serialize};
use sickfits_models::UserItem;
use utoipa::ToSchema;
use validator::Validate;

/// Sign in with the identity and secret fields of the principal list.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct SigninRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    #[schema(example = "password123")]
    pub password: String,
}

/// Fields of the first account.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct InitFirstItemRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct InitStatusResponse {
    /// True while no account exists and the bootstrap is enabled
    pub needs_first_item: bool,
    /// Fields the bootstrap accepts
    pub fields: Vec<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AuthenticatedItemResponse {
    pub item: Option<UserItem>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
