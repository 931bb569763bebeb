//! Application Configuration
//!
//! Immutable signing configuration for the token service. Built once at
//! startup and passed in explicitly; never read as ambient global state.

use std::time::Duration;

use crate::error::{AuthError, AuthResult};

/// Token TTL applied when the configured value is missing or non-positive
pub const DEFAULT_TOKEN_TTL_HOURS: i64 = 3;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Symmetric signing secret (HS256). Must be non-empty.
    pub secret: String,
    /// Token issuer claim
    pub issuer: String,
    /// Token audience claim
    pub audience: String,
    /// Token time-to-live
    pub token_ttl: Duration,
}

impl AuthConfig {
    /// Build the configuration, rejecting an absent or empty secret.
    ///
    /// A missing secret is fatal: the caller is expected to abort startup
    /// rather than fall back to a default key.
    pub fn new(
        secret: impl Into<String>,
        issuer: impl Into<String>,
        audience: impl Into<String>,
        ttl_hours: Option<i64>,
    ) -> AuthResult<Self> {
        let secret = secret.into();
        if secret.trim().is_empty() {
            return Err(AuthError::SecretMissing);
        }

        let hours = match ttl_hours {
            Some(h) if h > 0 => h,
            _ => DEFAULT_TOKEN_TTL_HOURS,
        };

        Ok(Self {
            secret,
            issuer: issuer.into(),
            audience: audience.into(),
            token_ttl: Duration::from_secs(hours as u64 * 3600),
        })
    }

    /// Token TTL in whole seconds
    pub fn token_ttl_secs(&self) -> i64 {
        self.token_ttl.as_secs() as i64
    }
}
