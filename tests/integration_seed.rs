mod common;

use std::collections::HashSet;

use sickfits::config::{DatabaseConfig, StartupFlags};
use sickfits::startup::{CatalogueSeeder, Connector, connect_and_seed};
use sickfits_cli::seeder::{clear_seed_data, insert_seed_data, seed_products};
use sickfits_models::{Product, ProductImage, ProductStatus};
use sqlx::PgPool;
use uuid::Uuid;

use common::{create_test_user, generate_unique_email};

async fn count(pool: &PgPool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(pool)
        .await
        .unwrap()
}

async fn products(pool: &PgPool) -> Vec<Product> {
    sqlx::query_as::<_, Product>(
        "SELECT id, name, description, photo_id, status, price FROM products",
    )
    .fetch_all(pool)
    .await
    .unwrap()
}

async fn product_images(pool: &PgPool) -> Vec<ProductImage> {
    sqlx::query_as::<_, ProductImage>("SELECT id, image, alt_text FROM product_images")
        .fetch_all(pool)
        .await
        .unwrap()
}

/// Hands out an already open pool.
struct OpenPool(PgPool);

impl Connector for OpenPool {
    type Connection = PgPool;

    async fn connect(&self, _config: &DatabaseConfig) -> anyhow::Result<PgPool> {
        Ok(self.0.clone())
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_seed_inserts_catalogue_with_one_image_each(pool: PgPool) {
    let catalogue = seed_products();

    let inserted = insert_seed_data(&pool).await.unwrap();

    assert_eq!(inserted, catalogue.len());
    assert_eq!(count(&pool, "products").await, catalogue.len() as i64);
    assert_eq!(count(&pool, "product_images").await, catalogue.len() as i64);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_seeded_products_link_to_their_images(pool: PgPool) {
    insert_seed_data(&pool).await.unwrap();

    let images = product_images(&pool).await;
    let image_ids: HashSet<Uuid> = images.iter().map(|i| i.id).collect();
    let stored = products(&pool).await;

    let mut photo_ids = HashSet::new();
    for product in &stored {
        let photo_id = product.photo_id.expect("seeded product without photo");
        assert!(image_ids.contains(&photo_id), "{} has a dangling photo", product.name);
        assert!(photo_ids.insert(photo_id), "{} shares a photo", product.name);
        assert_eq!(product.status, ProductStatus::Available.as_str());
    }

    for seed in seed_products() {
        let product = stored.iter().find(|p| p.name == seed.name).unwrap();
        assert_eq!(product.price, seed.price);
        assert_eq!(product.description, seed.description);

        let image = images.iter().find(|i| Some(i.id) == product.photo_id).unwrap();
        assert_eq!(image.image, seed.image);
        assert_eq!(image.alt_text, seed.alt_text);
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_seeding_twice_inserts_catalogue_again(pool: PgPool) {
    let catalogue = seed_products();

    insert_seed_data(&pool).await.unwrap();
    insert_seed_data(&pool).await.unwrap();

    assert_eq!(count(&pool, "products").await, 2 * catalogue.len() as i64);
    assert_eq!(count(&pool, "product_images").await, 2 * catalogue.len() as i64);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_clear_seed_data_keeps_users(pool: PgPool) {
    create_test_user(&pool, &generate_unique_email(), "wes-bos-rules").await;
    insert_seed_data(&pool).await.unwrap();

    let removed = clear_seed_data(&pool).await.unwrap();

    assert_eq!(removed, seed_products().len() as u64);
    assert_eq!(count(&pool, "products").await, 0);
    assert_eq!(count(&pool, "product_images").await, 0);
    assert_eq!(count(&pool, "users").await, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_seed_flag_runs_catalogue_seeder(pool: PgPool) {
    let flags = StartupFlags::from_args(["sickfits", "--seed-data"]);
    let config = DatabaseConfig::from_lookup(&|_: &str| None);

    connect_and_seed(&config, flags, &OpenPool(pool.clone()), &CatalogueSeeder)
        .await
        .unwrap();

    assert_eq!(count(&pool, "products").await, seed_products().len() as i64);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_no_seed_flag_leaves_catalogue_empty(pool: PgPool) {
    let config = DatabaseConfig::from_lookup(&|_: &str| None);

    connect_and_seed(
        &config,
        StartupFlags::default(),
        &OpenPool(pool.clone()),
        &CatalogueSeeder,
    )
    .await
    .unwrap();

    assert_eq!(count(&pool, "products").await, 0);
}
