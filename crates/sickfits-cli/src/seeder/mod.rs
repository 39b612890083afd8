//! Database seeding with the demo catalogue.
//!
//! # Module Structure
//!
//! - [`models`] - The fixed catalogue
//! - [`products`] - Product and product image insertion
//!
//! Seeding is not idempotent: running it twice inserts the catalogue twice.

pub mod models;
pub mod products;

pub use models::{ProductSeed, seed_products};

use sqlx::PgPool;
use std::time::Instant;
use tracing::{info, instrument};

/// Inserts every product of the demo catalogue, each with its image, in a
/// single transaction. Returns the number of products inserted.
#[instrument(skip(db))]
pub async fn insert_seed_data(db: &PgPool) -> anyhow::Result<usize> {
    let start_time = Instant::now();
    let catalogue = seed_products();

    info!(products = catalogue.len(), "Inserting seed data");

    let ids = products::insert_products(db, &catalogue).await?;

    info!(
        products = ids.len(),
        elapsed_ms = start_time.elapsed().as_millis() as u64,
        "Seed data inserted"
    );

    Ok(ids.len())
}

/// Removes every product and product image. Users are kept.
#[instrument(skip(db))]
pub async fn clear_seed_data(db: &PgPool) -> anyhow::Result<u64> {
    let start_time = Instant::now();
    info!("Clearing seeded data");

    let removed = products::clear_products(db).await?;

    info!(
        products = removed,
        elapsed_ms = start_time.elapsed().as_millis() as u64,
        "Seeded data cleared"
    );

    Ok(removed)
}
