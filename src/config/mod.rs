//! Startup configuration assembly.
//!
//! Environment-derived settings come from [`sickfits_config`]; this module
//! combines them with the schema set, the UI access predicate and the
//! command-line flags into one [`AppConfig`], then wraps it with the auth
//! binding to produce the [`SystemConfig`] the server runs on.
//!
//! # Example
//!
//! ```ignore
//! use sickfits::config::build_system_config;
//! use sickfits_config::{Settings, StartupFlags};
//!
//! let config = build_system_config(
//!     Settings::from_env(),
//!     StartupFlags::from_args(std::env::args()),
//! )?;
//! ```

pub mod app;

pub use app::{AppConfig, SystemConfig, UiConfig, build_system_config, with_auth};
pub use sickfits_config::{
    CorsConfig, DatabaseConfig, ServerConfig, SessionConfig, Settings, StartupFlags,
};
