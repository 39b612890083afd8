//! Product and product image insertion.

use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use super::models::ProductSeed;

/// Inserts every seed with its image inside one transaction and returns the
/// product IDs in seed order.
pub async fn insert_products(db: &PgPool, seeds: &[ProductSeed]) -> Result<Vec<Uuid>, sqlx::Error> {
    let mut tx = db.begin().await?;
    let mut ids = Vec::with_capacity(seeds.len());

    for seed in seeds {
        ids.push(insert_product(&mut tx, seed).await?);
    }

    tx.commit().await?;
    Ok(ids)
}

async fn insert_product(
    tx: &mut Transaction<'_, Postgres>,
    seed: &ProductSeed,
) -> Result<Uuid, sqlx::Error> {
    let image_id: Uuid = sqlx::query_scalar(
        "INSERT INTO product_images (image, alt_text) VALUES ($1, $2) RETURNING id",
    )
    .bind(seed.image)
    .bind(seed.alt_text)
    .fetch_one(&mut **tx)
    .await?;

    sqlx::query_scalar(
        "INSERT INTO products (name, description, photo_id, status, price)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING id",
    )
    .bind(seed.name)
    .bind(seed.description)
    .bind(image_id)
    .bind(seed.status.as_str())
    .bind(seed.price)
    .fetch_one(&mut **tx)
    .await
}

/// Deletes all products and images, returning how many products went.
pub async fn clear_products(db: &PgPool) -> Result<u64, sqlx::Error> {
    let mut tx = db.begin().await?;

    let removed = sqlx::query("DELETE FROM products")
        .execute(&mut *tx)
        .await?
        .rows_affected();
    sqlx::query("DELETE FROM product_images")
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(removed)
}
