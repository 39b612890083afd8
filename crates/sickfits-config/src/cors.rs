use crate::{env_lookup, non_empty};

/// Cross-origin policy: the frontend is the only allowed origin and it may
/// send credentials (the session cookie).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorsConfig {
    pub origins: Vec<String>,
    pub credentials: bool,
}

impl CorsConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(&env_lookup)
    }

    pub fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            origins: non_empty(lookup, "FRONTEND_URL").into_iter().collect(),
            credentials: true,
        }
    }
}
