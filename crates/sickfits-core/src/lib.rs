//! # Sick Fits Core
//!
//! Foundational types shared by every crate in the workspace:
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`password`]: bcrypt password hashing and verification
//!
//! # Example
//!
//! ```ignore
//! use sickfits_core::{AppError, hash_password, verify_password};
//!
//! let hash = hash_password("wes-bos-rules")?;
//! assert!(verify_password("wes-bos-rules", &hash)?);
//!
//! let err = AppError::unauthorized("Authentication failed.");
//! ```

pub mod errors;
pub mod password;

pub use errors::AppError;
pub use password::{hash_password, verify_password};
