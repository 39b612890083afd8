//! # Sick Fits DB
//!
//! Database pool initialization and schema migrations.
//!
//! # Example
//!
//! ```ignore
//! use sickfits_config::DatabaseConfig;
//! use sickfits_db::{init_db_pool, run_migrations};
//!
//! let pool = init_db_pool(&DatabaseConfig::from_env()).await?;
//! run_migrations(&pool).await?;
//! ```

use sickfits_config::DatabaseConfig;
use sqlx::postgres::PgPoolOptions;
use tracing::instrument;

pub use sqlx::PgPool;

/// Opens a PostgreSQL connection pool.
///
/// The URL is handed to the driver as-is, so a malformed or non-PostgreSQL
/// URL (including the `mongodb://` default) is reported here, as a driver
/// error, on the first connection attempt.
#[instrument(skip(config), fields(max_connections = config.max_connections))]
pub async fn init_db_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await
}

/// Brings the tables behind every list up to date.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await
}
