use axum::{Json, extract::State};
use serde::Serialize;

use sickfits_models::ListDefinition;

use crate::state::AppState;

#[derive(Debug, Clone, Serialize)]
pub struct AdminMetaResponse {
    /// Principal list of the auth binding
    pub auth_list: &'static str,
    pub lists: Vec<ListDefinition>,
}

#[utoipa::path(
    get,
    path = "/admin/api/lists",
    responses(
        (status = 200, description = "Schema metadata for the admin UI"),
        (status = 401, description = "No session with item data")
    ),
    tag = "Admin"
)]
pub async fn get_lists(State(state): State<AppState>) -> Json<AdminMetaResponse> {
    Json(AdminMetaResponse {
        auth_list: state.config.auth.list_key,
        lists: state.config.app.lists.lists().to_vec(),
    })
}
