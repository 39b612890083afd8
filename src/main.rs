use dotenvy::dotenv;
use sickfits::config::{Settings, StartupFlags, build_system_config};
use sickfits::logging::init_logging;
use sickfits::router::init_router;
use sickfits::startup::{CatalogueSeeder, PgConnector, connect_and_seed};
use sickfits::state::AppState;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let flags = StartupFlags::from_args(std::env::args().skip(1));
    let config = build_system_config(Settings::from_env(), flags)?;

    let db = connect_and_seed(&config.app.db, flags, &PgConnector, &CatalogueSeeder).await?;

    let address = config.app.server.bind_address();
    let state = AppState::new(db, config);
    let app = init_router(state)?;

    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!(address = %address, "Server running");
    info!("Swagger UI available at http://{}/swagger-ui", address);
    axum::serve(listener, app).await?;

    Ok(())
}
