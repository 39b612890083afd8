//! The `User` list.

use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::lists::{FieldDefinition, FieldKind, ListDefinition};

pub fn user_list() -> ListDefinition {
    ListDefinition {
        key: "User",
        table: "users",
        fields: vec![
            FieldDefinition::new("id", FieldKind::Id),
            FieldDefinition::new("name", FieldKind::Text).required(),
            FieldDefinition::new("email", FieldKind::Text)
                .required()
                .unique(),
            FieldDefinition::new("password", FieldKind::Password).required(),
            FieldDefinition::new("created_at", FieldKind::Timestamp),
        ],
    }
}

/// A stored user, including the password hash.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// What the API reveals about a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow, ToSchema)]
pub struct UserItem {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

impl From<User> for UserItem {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_drops_password() {
        let user = User {
            id: Uuid::new_v4(),
            name: "Wes".to_string(),
            email: "wes@example.com".to_string(),
            password: "$2b$12$hash".to_string(),
            created_at: chrono::Utc::now(),
        };
        let json = serde_json::to_string(&UserItem::from(user)).unwrap();
        assert!(!json.contains("password"));
        assert!(json.contains(r#""email":"wes@example.com""#));
    }
}
