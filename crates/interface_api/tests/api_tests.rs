//! HTTP contract tests
//!
//! These tests drive the full router through axum-test. The pool is created
//! lazily and never connects: every path exercised here (health, auth
//! rejection, input validation) resolves before any database access.

use axum_test::TestServer;
use axum::http::{HeaderName, HeaderValue, StatusCode};
use serde_json::{json, Value};
use sqlx::postgres::PgPoolOptions;

use interface_api::{config::ApiConfig, create_router};

const TEST_SECRET: &str = "test-admin-secret";

fn test_server() -> TestServer {
    let pool = PgPoolOptions::new()
        .connect_lazy("postgres://localhost/billing_test")
        .expect("lazy pool creation cannot fail");

    let config = ApiConfig {
        admin_secret: TEST_SECRET.to_string(),
        ..ApiConfig::default()
    };

    TestServer::new(create_router(pool, config)).expect("router is serveable")
}

fn admin_header() -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static("x-admin-secret"),
        HeaderValue::from_static(TEST_SECRET),
    )
}

#[tokio::test]
async fn test_health_endpoint() {
    let server = test_server();

    let response = server.get("/health").await;
    response.assert_status(StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "billing-api");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_update_config_without_secret_is_unauthorized() {
    let server = test_server();

    let response = server
        .put("/api/config")
        .json(&json!({
            "rate_per_unit": "6.00",
            "vat_percentage": "10.00",
            "service_charge": "25.00"
        }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);

    let body: Value = response.json();
    assert_eq!(body["error"], "unauthorized");
    assert_eq!(body["message"], "Invalid admin credentials");
}

#[tokio::test]
async fn test_update_config_with_wrong_secret_is_unauthorized() {
    let server = test_server();

    let response = server
        .put("/api/config")
        .add_header(
            HeaderName::from_static("x-admin-secret"),
            HeaderValue::from_static("not-the-secret"),
        )
        .json(&json!({
            "rate_per_unit": "6.00",
            "vat_percentage": "10.00",
            "service_charge": "25.00"
        }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_update_config_rejects_invalid_values() {
    let server = test_server();
    let (name, value) = admin_header();

    let invalid_bodies = [
        json!({ "rate_per_unit": "0", "vat_percentage": "15", "service_charge": "50" }),
        json!({ "rate_per_unit": "-5", "vat_percentage": "15", "service_charge": "50" }),
        json!({ "rate_per_unit": "5", "vat_percentage": "-1", "service_charge": "50" }),
        json!({ "rate_per_unit": "5", "vat_percentage": "101", "service_charge": "50" }),
        json!({ "rate_per_unit": "5", "vat_percentage": "15", "service_charge": "-50" }),
    ];

    for body in invalid_bodies {
        let response = server
            .put("/api/config")
            .add_header(name.clone(), value.clone())
            .json(&body)
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);

        let error: Value = response.json();
        assert_eq!(error["error"], "validation_error", "body: {}", body);
    }
}

#[tokio::test]
async fn test_calculate_rejects_non_positive_units() {
    let server = test_server();

    for units in ["0", "-5", "-0.01"] {
        let response = server
            .post("/api/calculate")
            .json(&json!({ "units": units }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);

        let body: Value = response.json();
        assert_eq!(body["message"], "Units must be a positive number");
    }
}

#[tokio::test]
async fn test_calculate_rejects_malformed_units() {
    let server = test_server();

    let response = server
        .post("/api/calculate")
        .json(&json!({ "units": "not-a-number" }))
        .await;

    // Deserialization failures reject before any business logic runs
    assert!(response.status_code().is_client_error());
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let server = test_server();

    let response = server.get("/api/unknown").await;
    response.assert_status(StatusCode::NOT_FOUND);
}
