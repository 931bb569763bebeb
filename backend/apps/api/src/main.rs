//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; application-level errors use the
//! crate-specific error types layered on `kernel::error::AppError`.

use anyhow::Context;
use auth::{AuthConfig, BearerGateState, PgCredentialRepository, TokenService, auth_router};
use axum::{
    Router, http,
    http::{Method, header},
    middleware,
};
use catalog::{PgProductRepository, catalog_router};
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_PORT: u16 = 8080;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,catalog=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Token signing configuration. A missing or empty secret aborts startup.
    let auth_config = AuthConfig::new(
        env::var("JWT_SECRET").unwrap_or_default(),
        env::var("JWT_ISSUER").unwrap_or_else(|_| "product-catalog-api".to_string()),
        env::var("JWT_AUDIENCE").unwrap_or_else(|_| "product-catalog-clients".to_string()),
        env::var("JWT_EXPIRATION_HOURS")
            .ok()
            .and_then(|v| v.parse::<i64>().ok()),
    )
    .context("JWT_SECRET must be set to a non-empty value")?;

    let tokens = Arc::new(TokenService::new(&auth_config));

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:5173,http://127.0.0.1:5173".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // Build router. Product routes sit behind the bearer gate; login does not.
    let protected_products = catalog_router(PgProductRepository::new(pool.clone())).route_layer(
        middleware::from_fn_with_state(
            BearerGateState {
                tokens: tokens.clone(),
            },
            auth::require_bearer,
        ),
    );

    let app = Router::new()
        .nest(
            "/api/auth",
            auth_router(PgCredentialRepository::new(pool.clone()), tokens.clone()),
        )
        .nest("/api/products", protected_products)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let port = env::var("PORT")
        .ok()
        .and_then(|v| v.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
