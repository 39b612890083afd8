use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{get_init_status, get_session, init_first_item, signin, signout};

pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/signin", post(signin))
        .route("/signout", post(signout))
        .route("/session", get(get_session))
        .route("/init", get(get_init_status).post(init_first_item))
}
