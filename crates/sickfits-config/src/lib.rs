//! # Sick Fits Config
//!
//! Settings captured from the process environment and command line.
//!
//! Environment variables are read exactly once, at startup, into the
//! immutable structs below. Downstream code receives these structs by
//! reference and never touches `std::env` again.
//!
//! - [`database`]: connection string (`DATABASE_URL`)
//! - [`session`]: session lifetime and signing secret (`COOKIE_SECRET`)
//! - [`cors`]: the single allowed frontend origin (`FRONTEND_URL`)
//! - [`server`]: listen address (`HOST`, `PORT`)
//! - [`flags`]: command-line switches (`--seed-data`)
//!
//! # Example
//!
//! ```ignore
//! use sickfits_config::{Settings, StartupFlags};
//!
//! let settings = Settings::from_env();
//! let flags = StartupFlags::from_args(std::env::args());
//! ```

pub mod cors;
pub mod database;
pub mod flags;
pub mod server;
pub mod session;

pub use cors::CorsConfig;
pub use database::{DEFAULT_DATABASE_URL, DatabaseConfig};
pub use flags::{SEED_DATA_FLAG, StartupFlags};
pub use server::ServerConfig;
pub use session::{DEFAULT_COOKIE_NAME, SESSION_MAX_AGE_SECS, SessionConfig};

/// Every environment-derived setting, captured together.
#[derive(Clone, Debug)]
pub struct Settings {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub session: SessionConfig,
    pub cors: CorsConfig,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(env_lookup)
    }

    /// Builds settings from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            server: ServerConfig::from_lookup(&lookup),
            database: DatabaseConfig::from_lookup(&lookup),
            session: SessionConfig::from_lookup(&lookup),
            cors: CorsConfig::from_lookup(&lookup),
        }
    }
}

/// Reads a variable from the process environment. Values that are not
/// valid unicode are treated as unset.
pub(crate) fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Returns the variable only when it is set to a non-empty value.
pub(crate) fn non_empty<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).filter(|v| !v.is_empty())
}
