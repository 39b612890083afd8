//! Stateless sessions.
//!
//! A session is an HS256-signed token stored in an HTTP-only cookie. The
//! token names the principal list and item; nothing is kept server-side.
//! On each request the token is verified and the selected fields of the item
//! are loaded into [`Session::data`].
//!
//! Signing and verification need `COOKIE_SECRET`. A codec cannot be built
//! without it, so a missing secret fails startup.

use anyhow::bail;
use axum_extra::extract::cookie::{Cookie, SameSite};
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use sickfits_config::SessionConfig;
use sickfits_core::AppError;

/// Claims sealed into the session cookie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Principal list, e.g. `User`
    pub list_key: String,
    /// Principal item ID
    pub item_id: String,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: usize,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: usize,
}

/// The session attached to a request.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub list_key: String,
    pub item_id: String,
    /// Selected item fields; `None` when the item no longer exists.
    pub data: Option<Map<String, Value>>,
}

impl Session {
    pub fn new(claims: SessionClaims, data: Option<Map<String, Value>>) -> Self {
        Self {
            list_key: claims.list_key,
            item_id: claims.item_id,
            data,
        }
    }
}

/// Seals and unseals session tokens. `SessionConfig`'s `Debug` redacts the
/// secret, so the derived `Debug` here does too.
#[derive(Clone, Debug)]
pub struct SessionCodec {
    config: SessionConfig,
}

impl SessionCodec {
    /// Fails when the config carries no signing secret.
    pub fn new(config: SessionConfig) -> anyhow::Result<Self> {
        match config.secret.as_deref() {
            None => bail!("COOKIE_SECRET is not set; sessions cannot be signed"),
            Some("") => bail!("COOKIE_SECRET is empty; sessions cannot be signed"),
            Some(_) => Ok(Self { config }),
        }
    }

    pub fn cookie_name(&self) -> &str {
        &self.config.cookie_name
    }

    fn secret(&self) -> &[u8] {
        self.config.secret.as_deref().unwrap_or_default().as_bytes()
    }

    /// Signs a session for `item_id` that expires after the configured max age.
    pub fn seal(&self, list_key: &str, item_id: &str) -> Result<String, AppError> {
        let secret = self.secret();
        let now = Utc::now().timestamp() as usize;

        let claims = SessionClaims {
            list_key: list_key.to_string(),
            item_id: item_id.to_string(),
            exp: now + self.config.max_age as usize,
            iat: now,
        };

        encode(&Header::default(), &claims, &EncodingKey::from_secret(secret))
            .map_err(|e| AppError::internal_error(format!("Failed to sign session: {}", e)))
    }

    /// Verifies signature and expiry.
    pub fn unseal(&self, token: &str) -> Result<SessionClaims, AppError> {
        let secret = self.secret();

        decode::<SessionClaims>(
            token,
            &DecodingKey::from_secret(secret),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|_| AppError::unauthorized("Invalid or expired session"))
    }

    /// The cookie that carries a sealed session.
    pub fn session_cookie(&self, token: String) -> Cookie<'static> {
        Cookie::build((self.config.cookie_name.clone(), token))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.config.secure)
            .max_age(time::Duration::seconds(self.config.max_age))
            .build()
    }

    /// A cookie matching [`Self::session_cookie`]'s name and path, for removal.
    pub fn removal_cookie(&self) -> Cookie<'static> {
        Cookie::build((self.config.cookie_name.clone(), ""))
            .path("/")
            .build()
    }
}
