//! Startup sequence.
//!
//! Connecting to the database and the optional seed insertion are the only
//! suspension points of startup. Both sit behind traits so the sequence can
//! be driven with other collaborators:
//!
//! 1. [`Connector::connect`] establishes the connection.
//! 2. If, and only if, `--seed-data` was given, [`SeedRoutine::insert_seed_data`]
//!    runs once and is awaited before startup continues.
//!
//! Any failure in either step is returned unchanged. Nothing is retried.

use std::future::Future;

use sickfits_config::{DatabaseConfig, StartupFlags};
use sickfits_db::{PgPool, init_db_pool, run_migrations};
use tracing::{info, instrument};

pub trait Connector {
    type Connection;

    fn connect(
        &self,
        config: &DatabaseConfig,
    ) -> impl Future<Output = anyhow::Result<Self::Connection>>;
}

pub trait SeedRoutine<C> {
    fn insert_seed_data(&self, connection: &C) -> impl Future<Output = anyhow::Result<()>>;
}

/// Connects, then runs the seed routine when the flag asks for it.
#[instrument(skip_all, fields(seed_data = flags.seed_data))]
pub async fn connect_and_seed<K, S>(
    config: &DatabaseConfig,
    flags: StartupFlags,
    connector: &K,
    seeder: &S,
) -> anyhow::Result<K::Connection>
where
    K: Connector,
    S: SeedRoutine<K::Connection>,
{
    let connection = connector.connect(config).await?;
    info!("Connected to the database");

    if flags.seed_data {
        seeder.insert_seed_data(&connection).await?;
    }

    Ok(connection)
}

/// Opens the PostgreSQL pool and applies migrations.
pub struct PgConnector;

impl Connector for PgConnector {
    type Connection = PgPool;

    async fn connect(&self, config: &DatabaseConfig) -> anyhow::Result<PgPool> {
        let pool = init_db_pool(config).await?;
        run_migrations(&pool).await?;
        Ok(pool)
    }
}

/// Inserts the demo product catalogue.
pub struct CatalogueSeeder;

impl SeedRoutine<PgPool> for CatalogueSeeder {
    async fn insert_seed_data(&self, connection: &PgPool) -> anyhow::Result<()> {
        sickfits_cli::seeder::insert_seed_data(connection).await?;
        Ok(())
    }
}
