//! The `Product` and `ProductImage` lists.

use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use crate::lists::{FieldDefinition, FieldKind, ListDefinition};

pub fn product_list() -> ListDefinition {
    ListDefinition {
        key: "Product",
        table: "products",
        fields: vec![
            FieldDefinition::new("id", FieldKind::Id),
            FieldDefinition::new("name", FieldKind::Text).required(),
            FieldDefinition::new("description", FieldKind::Text),
            FieldDefinition::relationship("photo", "ProductImage"),
            FieldDefinition::new("status", FieldKind::Select),
            FieldDefinition::new("price", FieldKind::Integer),
        ],
    }
}

pub fn product_image_list() -> ListDefinition {
    ListDefinition {
        key: "ProductImage",
        table: "product_images",
        fields: vec![
            FieldDefinition::new("id", FieldKind::Id),
            FieldDefinition::new("image", FieldKind::Image).required(),
            FieldDefinition::new("alt_text", FieldKind::Text),
        ],
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductStatus {
    #[default]
    Draft,
    Available,
    Unavailable,
}

impl ProductStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Available => "AVAILABLE",
            Self::Unavailable => "UNAVAILABLE",
        }
    }
}

/// A stored product. `price` is in cents; `status` holds
/// [`ProductStatus::as_str`].
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub photo_id: Option<Uuid>,
    pub status: String,
    pub price: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct ProductImage {
    pub id: Uuid,
    pub image: String,
    pub alt_text: String,
}
