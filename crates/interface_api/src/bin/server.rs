//! Utility Billing Core - API Server Binary
//!
//! This binary starts the HTTP API server for the utility billing system.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin billing-api
//!
//! # Run with environment variables
//! API_HOST=0.0.0.0 API_PORT=8080 DATABASE_URL=postgres://... cargo run --bin billing-api
//! ```
//!
//! # Environment Variables
//!
//! * `API_HOST` - Server host (default: 0.0.0.0)
//! * `API_PORT` - Server port (default: 8080)
//! * `API_ADMIN_SECRET` - Shared secret for configuration updates (required in production)
//! * `API_DATABASE_URL` / `DATABASE_URL` - PostgreSQL connection string
//! * `API_CORS_ORIGINS` - Comma-separated CORS origin allow-list (default: any)
//! * `API_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)

use interface_api::{config::ApiConfig, create_router};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Main entry point for the API server.
///
/// Initializes logging, loads configuration, establishes the database
/// connection, applies migrations, and starts the HTTP server.
///
/// # Errors
///
/// Returns an error if:
/// - Configuration cannot be loaded from environment
/// - Database connection or migrations fail
/// - Server fails to bind to the configured address
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = load_config()?;

    init_tracing(&config.log_level);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        "Starting Utility Billing API Server"
    );

    let pool = infra_db::create_pool_from_url(&config.database_url).await?;

    run_migrations(&pool).await?;

    let app = create_router(pool, config.clone());

    let addr: SocketAddr = config.server_addr().parse()?;

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Loads API configuration from environment variables.
///
/// Falls back to individual environment variables or defaults when the
/// prefixed form is not set.
fn load_config() -> Result<ApiConfig, Box<dyn std::error::Error>> {
    let config = ApiConfig::from_env().unwrap_or_else(|_| ApiConfig {
        host: std::env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
        port: std::env::var("API_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080),
        admin_secret: std::env::var("API_ADMIN_SECRET")
            .or_else(|_| std::env::var("ADMIN_SECRET"))
            .unwrap_or_else(|_| "dev-secret-change-in-production".to_string()),
        database_url: std::env::var("DATABASE_URL")
            .or_else(|_| std::env::var("API_DATABASE_URL"))
            .unwrap_or_else(|_| "postgres://localhost/billing".to_string()),
        cors_origins: std::env::var("API_CORS_ORIGINS").unwrap_or_default(),
        log_level: std::env::var("API_LOG_LEVEL")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| "info".to_string()),
    });

    Ok(config)
}

/// Initializes the tracing subscriber for structured logging.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Applies the embedded database migrations.
async fn run_migrations(pool: &sqlx::PgPool) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Running database migrations...");

    infra_db::MIGRATOR.run(pool).await?;

    tracing::info!("Database ready");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// This enables graceful shutdown of the server, allowing in-flight
/// requests to complete before the process exits.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
