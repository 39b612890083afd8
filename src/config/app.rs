use sickfits_auth::{AccessPredicate, AuthBinding, SessionCodec, is_access_allowed};
use sickfits_config::{
    CorsConfig, DatabaseConfig, ServerConfig, SessionConfig, Settings, StartupFlags,
};
use sickfits_models::SchemaSet;
use tracing::info;

#[derive(Clone, Debug)]
pub struct UiConfig {
    /// Run on every admin request with the request's session, if any.
    pub is_access_allowed: AccessPredicate,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { is_access_allowed }
    }
}

/// Everything the server needs, fixed at startup.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub db: DatabaseConfig,
    pub session: SessionConfig,
    pub cors: CorsConfig,
    pub lists: SchemaSet,
    pub ui: UiConfig,
    pub startup: StartupFlags,
}

impl AppConfig {
    pub fn assemble(settings: Settings, startup: StartupFlags) -> Self {
        Self {
            server: settings.server,
            db: settings.database,
            session: settings.session,
            cors: settings.cors,
            lists: SchemaSet::sick_fits(),
            ui: UiConfig::default(),
            startup,
        }
    }
}

/// An [`AppConfig`] whose auth binding has been checked against its schema,
/// together with the session codec built from its session settings.
#[derive(Clone, Debug)]
pub struct SystemConfig {
    pub app: AppConfig,
    pub auth: AuthBinding,
    pub sessions: SessionCodec,
}

/// Binds authentication to a configuration. Fails when the binding names
/// lists or fields the schema does not have, or when sessions cannot be
/// signed because `COOKIE_SECRET` is missing.
pub fn with_auth(auth: AuthBinding, app: AppConfig) -> anyhow::Result<SystemConfig> {
    auth.validate(&app.lists)?;
    let sessions = SessionCodec::new(app.session.clone())?;
    Ok(SystemConfig {
        app,
        auth,
        sessions,
    })
}

pub fn build_system_config(
    settings: Settings,
    startup: StartupFlags,
) -> anyhow::Result<SystemConfig> {
    let app = AppConfig::assemble(settings, startup);
    let config = with_auth(AuthBinding::sick_fits(), app)?;

    info!(
        lists = ?config.app.lists.keys(),
        auth_list = config.auth.list_key,
        seed_data = config.app.startup.seed_data,
        "Configuration assembled"
    );

    Ok(config)
}
