//! List definitions.
//!
//! A *list* is a named collection of structured records, backed by one
//! database table. The [`SchemaSet`] is the ordered collection of every list
//! the backend serves; it is fixed at startup and only read afterwards.

use serde::Serialize;

use crate::{products, users};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Id,
    Text,
    Password,
    Integer,
    Select,
    Image,
    Relationship,
    Timestamp,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FieldDefinition {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub unique: bool,
    /// Target list key, for relationship fields.
    pub target: Option<&'static str>,
}

impl FieldDefinition {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
            unique: false,
            target: None,
        }
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    pub const fn relationship(name: &'static str, target: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Relationship,
            required: false,
            unique: false,
            target: Some(target),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ListDefinition {
    pub key: &'static str,
    pub table: &'static str,
    pub fields: Vec<FieldDefinition>,
}

impl ListDefinition {
    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SchemaSet {
    lists: Vec<ListDefinition>,
}

impl SchemaSet {
    pub fn new(lists: Vec<ListDefinition>) -> Self {
        Self { lists }
    }

    /// `User`, `Product`, `ProductImage`, in that order.
    pub fn sick_fits() -> Self {
        Self::new(vec![
            users::user_list(),
            products::product_list(),
            products::product_image_list(),
        ])
    }

    pub fn get(&self, key: &str) -> Option<&ListDefinition> {
        self.lists.iter().find(|l| l.key == key)
    }

    pub fn keys(&self) -> Vec<&'static str> {
        self.lists.iter().map(|l| l.key).collect()
    }

    pub fn lists(&self) -> &[ListDefinition] {
        &self.lists
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_order() {
        let schema = SchemaSet::sick_fits();
        assert_eq!(schema.keys(), vec!["User", "Product", "ProductImage"]);
    }

    #[test]
    fn test_lookup_by_key() {
        let schema = SchemaSet::sick_fits();
        let user = schema.get("User").unwrap();
        assert_eq!(user.table, "users");
        assert!(user.field("email").unwrap().unique);
        assert!(schema.get("Order").is_none());
    }

    #[test]
    fn test_relationships_point_at_known_lists() {
        let schema = SchemaSet::sick_fits();
        for list in schema.lists() {
            for field in &list.fields {
                if let Some(target) = field.target {
                    assert!(
                        schema.get(target).is_some(),
                        "{}.{} targets unknown list {}",
                        list.key,
                        field.name,
                        target
                    );
                }
            }
        }
    }

    #[test]
    fn test_serializes_metadata() {
        let json = serde_json::to_value(SchemaSet::sick_fits()).unwrap();
        assert_eq!(json["lists"][0]["key"], "User");
        assert_eq!(json["lists"][1]["fields"][0]["kind"], "id");
    }
}
