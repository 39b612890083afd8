use std::sync::Arc;

use sickfits_auth::SessionCodec;
use sqlx::PgPool;

use crate::config::SystemConfig;

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub config: Arc<SystemConfig>,
    pub sessions: SessionCodec,
}

impl AppState {
    pub fn new(db: PgPool, config: SystemConfig) -> Self {
        let sessions = config.sessions.clone();
        Self {
            db,
            config: Arc::new(config),
            sessions,
        }
    }
}
