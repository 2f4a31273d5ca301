//! API configuration

use serde::Deserialize;

/// API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Shared secret required on mutating configuration requests
    pub admin_secret: String,
    /// Database URL
    pub database_url: String,
    /// Comma-separated CORS origin allow-list; empty means any origin
    #[serde(default)]
    pub cors_origins: String,
    /// Log level
    pub log_level: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            admin_secret: "change-me-in-production".to_string(),
            database_url: "postgres://localhost/billing".to_string(),
            cors_origins: String::new(),
            log_level: "info".to_string(),
        }
    }
}

impl ApiConfig {
    /// Loads configuration from environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("API"))
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the configured CORS origins, if any
    pub fn allowed_origins(&self) -> Vec<String> {
        self.cors_origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }
}
