//! Login Use Case
//!
//! Verifies a username/password pair and issues a bearer token.

use std::sync::Arc;

use platform::password::{ClearTextPassword, verify_password};

use crate::application::token::TokenService;
use crate::domain::repository::CredentialRepository;
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

/// Login output
#[derive(Debug)]
pub struct LoginOutput {
    /// Signed bearer token
    pub token: String,
    pub username: String,
}

/// Login use case
pub struct LoginUseCase<R>
where
    R: CredentialRepository,
{
    repo: Arc<R>,
    tokens: Arc<TokenService>,
}

impl<R> LoginUseCase<R>
where
    R: CredentialRepository,
{
    pub fn new(repo: Arc<R>, tokens: Arc<TokenService>) -> Self {
        Self { repo, tokens }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        // Presence check happens before any store access
        if input.username.trim().is_empty() || input.password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        // Exact username match; unknown user falls through to the same
        // error as a wrong password
        let credential = self
            .repo
            .find_by_username(&input.username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let password = ClearTextPassword::new(input.password);
        let password_valid = verify_password(&password, &credential.password_hash)?;

        if !password_valid {
            return Err(AuthError::InvalidCredentials);
        }

        let issued = self.tokens.issue(&credential)?;

        tracing::info!(username = %credential.username, "User signed in");

        Ok(LoginOutput {
            token: issued.token,
            username: credential.username,
        })
    }
}
