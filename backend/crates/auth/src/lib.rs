//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Credential entity and repository trait
//! - `application/` - Token service, login use case, configuration
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router, bearer middleware
//!
//! ## Features
//! - Username + password login issuing a signed bearer token (JWT, HS256)
//! - Stateless per-request token validation (issuer, audience, expiry,
//!   zero clock-skew tolerance)
//! - Request gate middleware attaching the authenticated principal for
//!   downstream write attribution
//!
//! ## Security Model
//! - Passwords hashed with Argon2id; credentials provisioned out of band
//! - Unknown user and wrong password are indistinguishable to the caller
//! - Signing configuration is immutable process-wide state; startup fails
//!   if the secret is absent

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::token::TokenService;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgCredentialRepository;
pub use presentation::middleware::{BearerGateState, require_bearer};
pub use presentation::router::auth_router;
