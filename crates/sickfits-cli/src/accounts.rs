//! First-item bootstrap.
//!
//! The first `User` can be created without signing in, but only while the
//! `users` table is empty. The emptiness check and the insert run in one
//! transaction holding a table lock, so two concurrent bootstraps cannot both
//! succeed.

use sqlx::PgPool;
use tracing::{info, instrument};

use sickfits_core::{AppError, hash_password};
use sickfits_models::UserItem;

pub async fn count_users(db: &PgPool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(db)
        .await
}

/// True while no account exists yet.
pub async fn needs_first_item(db: &PgPool) -> Result<bool, sqlx::Error> {
    Ok(count_users(db).await? == 0)
}

/// Creates the very first account. Fails with 409 once any account exists.
#[instrument(skip(db, password))]
pub async fn create_first_item(
    db: &PgPool,
    name: &str,
    email: &str,
    password: &str,
) -> Result<UserItem, AppError> {
    let password_hash = hash_password(password)?;

    let mut tx = db.begin().await?;

    sqlx::query("LOCK TABLE users IN SHARE ROW EXCLUSIVE MODE")
        .execute(&mut *tx)
        .await?;

    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(&mut *tx)
        .await?;
    if existing > 0 {
        tx.rollback().await?;
        return Err(AppError::conflict(anyhow::anyhow!(
            "An initial account already exists"
        )));
    }

    let user = sqlx::query_as::<_, UserItem>(
        "INSERT INTO users (name, email, password)
         VALUES ($1, $2, $3)
         RETURNING id, name, email",
    )
    .bind(name)
    .bind(email)
    .bind(&password_hash)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    info!(user_id = %user.id, "Created first account");
    Ok(user)
}
