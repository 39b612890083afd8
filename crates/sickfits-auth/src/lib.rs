//! # Sick Fits Auth
//!
//! Authentication for the Sick Fits backend:
//!
//! - [`binding`]: which list is the principal and which of its fields identify
//!   and authenticate it, plus the first-item bootstrap fields
//! - [`session`]: stateless sessions carried in a signed cookie
//! - [`access`]: the admin UI access predicate
//!
//! # Example
//!
//! ```ignore
//! use sickfits_auth::{AuthBinding, SessionCodec, is_access_allowed};
//! use sickfits_config::SessionConfig;
//! use sickfits_models::SchemaSet;
//!
//! let binding = AuthBinding::sick_fits();
//! binding.validate(&SchemaSet::sick_fits())?;
//!
//! let codec = SessionCodec::new(SessionConfig::from_env())?;
//! let token = codec.seal(binding.list_key, &user_id.to_string())?;
//! let claims = codec.unseal(&token)?;
//! ```

pub mod access;
pub mod binding;
pub mod session;

pub use access::{AccessPredicate, is_access_allowed};
pub use binding::{AuthBinding, InitFirstItem, ItemDataSelection};
pub use session::{Session, SessionClaims, SessionCodec};
