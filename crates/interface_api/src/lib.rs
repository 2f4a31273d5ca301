//! HTTP API Layer
//!
//! This crate provides the REST API for the utility billing system using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Configuration read/update and bill calculation
//! - **Middleware**: Admin-secret authorization, request logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(pool, config);
//! axum::serve(listener, app).await?;
//! ```

pub mod auth;
pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;

use axum::{
    http::HeaderValue,
    middleware as axum_middleware,
    routing::{get, post, put},
    Router,
};
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::config::ApiConfig;
use crate::handlers::{billing, health};
use crate::middleware::{request_log_middleware, require_admin};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `pool` - Database connection pool
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(pool: PgPool, config: ApiConfig) -> Router {
    let cors = cors_layer(&config);
    let state = AppState { pool, config };

    // Public routes (no auth required)
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    // Billing routes; only the configuration update requires the admin secret
    let api_routes = Router::new()
        .route("/config", get(billing::get_config))
        .route(
            "/config",
            put(billing::update_config).layer(axum_middleware::from_fn_with_state(
                state.clone(),
                require_admin,
            )),
        )
        .route("/calculate", post(billing::calculate));

    Router::new()
        .merge(public_routes)
        .nest("/api", api_routes)
        .layer(axum_middleware::from_fn(request_log_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Builds the CORS layer from the configured origin allow-list
///
/// An empty allow-list keeps the permissive default; configured origins that
/// fail to parse are skipped with a warning.
fn cors_layer(config: &ApiConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins()
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin, "Ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
