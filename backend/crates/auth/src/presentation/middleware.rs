//! Bearer Middleware (Request Gate)
//!
//! Validates the bearer token on every protected route and attaches the
//! authenticated principal to the request for write attribution. The login
//! route is not behind this gate.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use kernel::principal::Principal;

use crate::application::token::TokenService;
use crate::error::AuthError;

/// Middleware state
#[derive(Clone)]
pub struct BearerGateState {
    pub tokens: Arc<TokenService>,
}

/// Middleware that requires a valid bearer token.
///
/// Rejects with 401 before any business logic runs; on success the
/// [`Principal`] is available to downstream handlers via request
/// extensions.
pub async fn require_bearer(
    State(state): State<BearerGateState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = platform::bearer::extract_bearer(req.headers()).map(str::to_owned);

    let Some(token) = token else {
        return Err(AuthError::TokenMissing.into_response());
    };

    let claims = match state.tokens.validate(&token) {
        Ok(claims) => claims,
        Err(e) => return Err(e.into_response()),
    };

    req.extensions_mut()
        .insert(Principal::new(claims.sub, claims.name));

    Ok(next.run(req).await)
}
