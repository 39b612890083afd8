//! Session policy.
//!
//! Sessions are stateless: everything the server needs is inside a signed
//! cookie. The lifetime is fixed at 360 days; only the signing secret and
//! cookie security come from the environment.
//!
//! # Environment Variables
//!
//! - `COOKIE_SECRET`: signing secret, taken verbatim. There is no default and
//!   no presence check here; building the session codec without one fails
//!   startup.
//! - `ENVIRONMENT`: when `production`, the cookie is marked `Secure`.

use crate::env_lookup;

/// How long a signed-in user stays signed in: 360 days, in seconds.
pub const SESSION_MAX_AGE_SECS: i64 = 60 * 60 * 24 * 360;

pub const DEFAULT_COOKIE_NAME: &str = "sickfits-session";

#[derive(Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub max_age: i64,
    pub secret: Option<String>,
    pub cookie_name: String,
    pub secure: bool,
}

impl std::fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionConfig")
            .field("max_age", &self.max_age)
            .field("secret", &self.secret.as_ref().map(|_| "<redacted>"))
            .field("cookie_name", &self.cookie_name)
            .field("secure", &self.secure)
            .finish()
    }
}

impl SessionConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(&env_lookup)
    }

    pub fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            max_age: SESSION_MAX_AGE_SECS,
            secret: lookup("COOKIE_SECRET"),
            cookie_name: DEFAULT_COOKIE_NAME.to_string(),
            secure: lookup("ENVIRONMENT").is_some_and(|env| env == "production"),
        }
    }

    /// Session settings with an explicit secret, for tests and tooling.
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            max_age: SESSION_MAX_AGE_SECS,
            secret: Some(secret.into()),
            cookie_name: DEFAULT_COOKIE_NAME.to_string(),
            secure: false,
        }
    }
}
