//! Token Service
//!
//! Issues and validates the signed bearer token (JWT, HMAC-SHA-256).
//! Tokens are stateless and independently verifiable; there is no
//! server-side revocation list.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::application::config::AuthConfig;
use crate::domain::entity::credential::Credential;
use crate::error::{AuthError, AuthResult};

/// Token claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the credential's internal id
    pub sub: String,
    /// Username, used downstream for write attribution
    pub name: String,
    /// Issuer
    pub iss: String,
    /// Audience
    pub aud: String,
    /// Issued-at (Unix seconds)
    pub iat: i64,
    /// Expiry (Unix seconds); always `iat + ttl`
    pub exp: i64,
}

/// A freshly issued token
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    /// Expiry as Unix seconds
    pub expires_at: i64,
}

/// Issues and validates bearer tokens.
///
/// Construction consumes the validated [`AuthConfig`]; the signing secret
/// has already been checked for presence there.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    issuer: String,
    audience: String,
    ttl_secs: i64,
}

impl TokenService {
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer]);
        validation.set_audience(&[&config.audience]);
        validation.set_required_spec_claims(&["exp", "iss", "aud"]);
        // Zero clock-skew tolerance: an expired token is expired.
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
            issuer: config.issuer.clone(),
            audience: config.audience.clone(),
            ttl_secs: config.token_ttl_secs(),
        }
    }

    /// Issue a signed token for the given credential.
    pub fn issue(&self, credential: &Credential) -> AuthResult<IssuedToken> {
        let iat = Utc::now().timestamp();
        let exp = iat + self.ttl_secs;

        let claims = Claims {
            sub: credential.client_id.to_string(),
            name: credential.username.clone(),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            iat,
            exp,
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Internal(format!("Token signing failed: {}", e)))?;

        tracing::info!(
            username = %credential.username,
            expires_at = exp,
            "Issued bearer token"
        );

        Ok(IssuedToken {
            token,
            expires_at: exp,
        })
    }

    /// Validate a token string and return its claims.
    ///
    /// Signature, issuer, audience and expiry are all checked. Every
    /// failure mode collapses to [`AuthError::TokenInvalid`]; the caller
    /// cannot distinguish why verification failed.
    pub fn validate(&self, token: &str) -> AuthResult<Claims> {
        match decode::<Claims>(token, &self.decoding_key, &self.validation) {
            Ok(data) => Ok(data.claims),
            Err(e) => {
                tracing::debug!(error = %e, "Token validation failed");
                Err(AuthError::TokenInvalid)
            }
        }
    }
}
