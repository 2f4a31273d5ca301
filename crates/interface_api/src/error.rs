//! API error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use domain_tariff::TariffError;
use infra_db::DatabaseError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg.clone()),
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "unauthorized",
                "Invalid admin credentials".to_string(),
            ),
            ApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg.clone())
            }
            ApiError::Database(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "database_error", msg.clone())
            }
            // Clients rely on 400 for validation rejections
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, "validation_error", msg.clone()),
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<TariffError> for ApiError {
    fn from(err: TariffError) -> Self {
        match err {
            TariffError::Validation(msg) => ApiError::Validation(msg),
        }
    }
}

impl From<DatabaseError> for ApiError {
    fn from(err: DatabaseError) -> Self {
        if err.is_not_found() {
            ApiError::NotFound(err.to_string())
        } else if err.is_constraint_violation() {
            // The schema enforces the same ranges as domain validation
            ApiError::Validation(err.to_string())
        } else {
            ApiError::Database(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_validation_maps_to_400() {
        let response =
            ApiError::from(TariffError::validation("Units must be a positive number"))
                .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_unauthorized_maps_to_401() {
        let response = ApiError::Unauthorized.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_database_maps_to_500() {
        let response = ApiError::from(DatabaseError::QueryFailed("boom".to_string()))
            .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_missing_row_maps_to_404() {
        let error = ApiError::from(DatabaseError::not_found("PricingConfig", "active"));
        assert_eq!(error.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_constraint_violation_maps_to_400() {
        let error = ApiError::from(DatabaseError::ConstraintViolation(
            "pricing_config_vat_percentage_check".to_string(),
        ));
        assert_eq!(error.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
