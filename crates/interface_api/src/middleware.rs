//! API middleware

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use tracing::{info, warn};

use crate::auth::is_admin;
use crate::error::ApiError;
use crate::AppState;

/// Admin authorization middleware
///
/// Rejects mutating configuration requests whose `x-admin-secret` header
/// does not match the configured secret.
pub async fn require_admin(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    if !is_admin(request.headers(), &state.config.admin_secret) {
        warn!(uri = %request.uri(), "Rejected request with missing or invalid admin secret");
        return ApiError::Unauthorized.into_response();
    }

    next.run(request).await
}

/// Request logging middleware
///
/// Logs every API request with method, path, status, and duration.
pub async fn request_log_middleware(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let start = Utc::now();
    let response = next.run(request).await;
    let duration = Utc::now() - start;

    info!(
        method = %method,
        uri = %uri,
        status = %response.status().as_u16(),
        duration_ms = duration.num_milliseconds(),
        "API request"
    );

    response
}
