//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use std::sync::Arc;

use kernel::response::ApiResponse;

use crate::application::token::TokenService;
use crate::application::{LoginInput, LoginUseCase};
use crate::domain::repository::CredentialRepository;
use crate::error::AuthResult;
use crate::presentation::dto::{LoginRequest, LoginResponse};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: CredentialRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub tokens: Arc<TokenService>,
}

/// POST /api/auth/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<ApiResponse<LoginResponse>>
where
    R: CredentialRepository + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(state.repo.clone(), state.tokens.clone());

    let input = LoginInput {
        username: req.username,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    Ok(ApiResponse::ok(LoginResponse {
        token: output.token,
        username: output.username,
    }))
}
