use serde_json::{Map, Value};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use sickfits_core::{AppError, verify_password};
use sickfits_models::{User, UserItem};

use crate::config::SystemConfig;

const AUTHENTICATION_FAILED: &str = "Authentication failed.";

pub struct AuthService;

impl AuthService {
    /// Looks the principal up by its identity field and checks its secret.
    /// Unknown identities and wrong secrets fail the same way.
    #[instrument(skip(db, config, secret))]
    pub async fn authenticate(
        db: &PgPool,
        config: &SystemConfig,
        identity: &str,
        secret: &str,
    ) -> Result<UserItem, AppError> {
        let table = principal_table(config)?;
        let auth = &config.auth;

        let query = format!(
            "SELECT id, name, email, {secret_field} AS password, created_at FROM {table} WHERE {identity_field} = $1",
            secret_field = auth.secret_field,
            identity_field = auth.identity_field,
        );

        let user = sqlx::query_as::<_, User>(&query)
            .bind(identity)
            .fetch_optional(db)
            .await?
            .ok_or_else(|| AppError::unauthorized(AUTHENTICATION_FAILED))?;

        if !verify_password(secret, &user.password)? {
            return Err(AppError::unauthorized(AUTHENTICATION_FAILED));
        }

        Ok(UserItem::from(user))
    }

    #[instrument(skip(db, config))]
    pub async fn find_item(
        db: &PgPool,
        config: &SystemConfig,
        item_id: &str,
    ) -> Result<Option<UserItem>, AppError> {
        let Ok(id) = Uuid::parse_str(item_id) else {
            return Ok(None);
        };

        let table = principal_table(config)?;
        let query = format!("SELECT id, name, email FROM {table} WHERE id = $1");

        let item = sqlx::query_as::<_, UserItem>(&query)
            .bind(id)
            .fetch_optional(db)
            .await?;

        Ok(item)
    }

    /// Loads the session's selected fields of the principal item as a JSON
    /// object. `None` when the item is gone or the ID is not one of ours.
    #[instrument(skip(db, config))]
    pub async fn load_item_data(
        db: &PgPool,
        config: &SystemConfig,
        item_id: &str,
    ) -> Result<Option<Map<String, Value>>, AppError> {
        let Ok(id) = Uuid::parse_str(item_id) else {
            return Ok(None);
        };

        let table = principal_table(config)?;
        let fields = config.auth.session_data.fields.join(", ");
        let query = format!(
            "SELECT row_to_json(item) FROM (SELECT {fields} FROM {table} WHERE id = $1) item"
        );

        let data: Option<Value> = sqlx::query_scalar(&query)
            .bind(id)
            .fetch_optional(db)
            .await?;

        Ok(data.and_then(|v| match v {
            Value::Object(map) => Some(map),
            _ => None,
        }))
    }
}

/// Table behind the principal list. Column and table names interpolated into
/// queries come only from the validated binding and schema.
fn principal_table(config: &SystemConfig) -> Result<&'static str, AppError> {
    config
        .app
        .lists
        .get(config.auth.list_key)
        .map(|list| list.table)
        .ok_or_else(|| {
            AppError::internal_error(format!(
                "Auth list '{}' is not in the schema",
                config.auth.list_key
            ))
        })
}
