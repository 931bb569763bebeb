//! Request Principal
//!
//! The authenticated identity attached to a request by the bearer gate,
//! used downstream for write attribution (created_by / update_by / deleted_by).

/// Attribution value used when no authenticated principal is present.
pub const SYSTEM_USER: &str = "system";

/// Authenticated caller identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    /// Stable subject identifier (the credential's internal id)
    pub subject: String,
    /// Username, used for attribution stamps
    pub username: String,
}

impl Principal {
    pub fn new(subject: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            username: username.into(),
        }
    }

    /// Attribution name for a possibly-absent principal.
    pub fn attribution(principal: Option<&Principal>) -> String {
        principal
            .map(|p| p.username.clone())
            .unwrap_or_else(|| SYSTEM_USER.to_string())
    }
}
