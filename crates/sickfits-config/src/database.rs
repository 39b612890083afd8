//! Database connection settings.
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`: connection string (optional, see [`DEFAULT_DATABASE_URL`])
//! - `DATABASE_MAX_CONNECTIONS`: pool size (default: 5)
//!
//! The URL is not validated here. A malformed or unsupported URL surfaces as
//! an error from the driver when the pool first connects.

use crate::{env_lookup, non_empty};

/// Connection string used when `DATABASE_URL` is unset or empty.
pub const DEFAULT_DATABASE_URL: &str = "mongodb://localhost/keystone-sick-fits-tutorial";

const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(&env_lookup)
    }

    pub fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            url: non_empty(lookup, "DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            max_connections: lookup("DATABASE_MAX_CONNECTIONS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_CONNECTIONS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_env;

    #[test]
    fn test_unset_url_uses_default() {
        let config = DatabaseConfig::from_lookup(&test_env::lookup(&[]));
        assert_eq!(
            config.url,
            "mongodb://localhost/keystone-sick-fits-tutorial"
        );
    }

    #[test]
    fn test_set_url_is_used_verbatim() {
        let config =
            DatabaseConfig::from_lookup(&test_env::lookup(&[("DATABASE_URL", "mongodb://example/db")]));
        assert_eq!(config.url, "mongodb://example/db");
    }

    #[test]
    fn test_empty_url_uses_default() {
        let config = DatabaseConfig::from_lookup(&test_env::lookup(&[("DATABASE_URL", "")]));
        assert_eq!(config.url, DEFAULT_DATABASE_URL);
    }

    #[test]
    fn test_malformed_url_is_not_rejected() {
        let config = DatabaseConfig::from_lookup(&test_env::lookup(&[("DATABASE_URL", "not a url")]));
        assert_eq!(config.url, "not a url");
    }

    #[test]
    fn test_max_connections() {
        let config = DatabaseConfig::from_lookup(&test_env::lookup(&[]));
        assert_eq!(config.max_connections, 5);

        let config =
            DatabaseConfig::from_lookup(&test_env::lookup(&[("DATABASE_MAX_CONNECTIONS", "12")]));
        assert_eq!(config.max_connections, 12);

        let config =
            DatabaseConfig::from_lookup(&test_env::lookup(&[("DATABASE_MAX_CONNECTIONS", "lots")]));
        assert_eq!(config.max_connections, 5);
    }
}
