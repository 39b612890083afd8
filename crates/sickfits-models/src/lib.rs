//! # Sick Fits Models
//!
//! The schema of the store and the rows it stores.
//!
//! - [`lists`]: list definitions and the ordered [`SchemaSet`]
//! - [`users`]: the `User` list, which doubles as the auth principal
//! - [`products`]: the `Product` and `ProductImage` lists
//!
//! # Example
//!
//! ```ignore
//! use sickfits_models::SchemaSet;
//!
//! let schema = SchemaSet::sick_fits();
//! assert_eq!(schema.keys(), vec!["User", "Product", "ProductImage"]);
//! ```

pub mod lists;
pub mod products;
pub mod users;

pub use lists::{FieldDefinition, FieldKind, ListDefinition, SchemaSet};
pub use products::{Product, ProductImage, ProductStatus};
pub use users::{User, UserItem};
