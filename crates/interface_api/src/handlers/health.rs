//! Health check handlers

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

impl HealthResponse {
    fn with_status(status: &str) -> Self {
        Self {
            status: status.to_string(),
            service: "billing-api".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::with_status("healthy"))
}

/// Readiness check: the service is ready once the pricing schema is reachable
pub async fn readiness_check(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, StatusCode> {
    sqlx::query("SELECT 1 FROM pricing_config LIMIT 1")
        .fetch_optional(&state.pool)
        .await
        .map_err(|_| StatusCode::SERVICE_UNAVAILABLE)?;

    Ok(Json(HealthResponse::with_status("ready")))
}
