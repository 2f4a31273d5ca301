//! Infrastructure Database Layer
//!
//! This crate provides the PostgreSQL infrastructure for the billing system
//! using SQLx: connection pool management, embedded migrations, and the
//! repository holding the single active pricing configuration.
//!
//! # Architecture
//!
//! The crate follows the repository pattern, hiding SQL and row mapping from
//! the domain and API layers. Queries are checked at runtime rather than via
//! the compile-time macros so the workspace builds without a live database.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{DatabaseConfig, create_pool, TariffRepository};
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/billing")).await?;
//! infra_db::MIGRATOR.run(&pool).await?;
//! let repo = TariffRepository::new(pool);
//! let config = repo.get_or_create_active().await?;
//! ```

pub mod error;
pub mod pool;
pub mod repositories;

pub use error::DatabaseError;
pub use pool::{create_pool, create_pool_from_url, DatabaseConfig, DatabasePool};
pub use repositories::tariff::{PricingConfigRow, TariffRepository};

/// Embedded migrations for the pricing configuration schema
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();
