use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::get_lists;

/// Admin routes. Callers layer `require_ui_access` over this router.
pub fn init_admin_router() -> Router<AppState> {
    Router::new().route("/api/lists", get(get_lists))
}
