//! Credential Entity
//!
//! A username/password-hash pair. There is no mutation path: rows are
//! created by out-of-band provisioning and are immutable as modeled here.

/// Stored API credential
#[derive(Debug, Clone)]
pub struct Credential {
    /// Internal id, used as the token subject
    pub client_id: i32,
    /// Unique username, matched case-sensitively
    pub username: String,
    /// Argon2id hash in PHC string format
    pub password_hash: String,
}
