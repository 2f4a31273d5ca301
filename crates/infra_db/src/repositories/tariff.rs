//! Tariff repository implementation
//!
//! This module provides database access for the pricing configuration,
//! the single row governing all bill calculations.
//!
//! # Single Active Row
//!
//! At most one configuration is active at any time. The schema enforces this
//! with a partial unique index on `active`, and first-read default creation
//! inserts with `ON CONFLICT DO NOTHING` so concurrent first reads cannot
//! produce two active rows. Updates overwrite the active row in place under
//! a row lock; the row's identity persists across updates.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::info;

use domain_tariff::PricingConfig;

use crate::error::DatabaseError;

/// A persisted pricing configuration row
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct PricingConfigRow {
    pub id: i32,
    pub rate_per_unit: Decimal,
    pub vat_percentage: Decimal,
    pub service_charge: Decimal,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PricingConfigRow {
    /// Returns the domain pricing values carried by this row
    pub fn pricing(&self) -> PricingConfig {
        PricingConfig {
            rate_per_unit: self.rate_per_unit,
            vat_percentage: self.vat_percentage,
            service_charge: self.service_charge,
        }
    }
}

const SELECT_ACTIVE: &str = r#"
    SELECT id, rate_per_unit, vat_percentage, service_charge,
           active, created_at, updated_at
    FROM pricing_config
    WHERE active
"#;

/// Repository for the single active pricing configuration
#[derive(Debug, Clone)]
pub struct TariffRepository {
    pool: PgPool,
}

impl TariffRepository {
    /// Creates a new TariffRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Retrieves the active configuration, if one exists
    pub async fn find_active(&self) -> Result<Option<PricingConfigRow>, DatabaseError> {
        let row = sqlx::query_as::<_, PricingConfigRow>(SELECT_ACTIVE)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DatabaseError::from(&e))?;

        Ok(row)
    }

    /// Retrieves the active configuration, creating the default tariff if
    /// none exists yet
    ///
    /// The insert races benignly with concurrent first reads: whichever
    /// request wins creates the row, the others fall through to the
    /// re-select. Every caller observes the same persisted identity.
    pub async fn get_or_create_active(&self) -> Result<PricingConfigRow, DatabaseError> {
        if let Some(row) = self.find_active().await? {
            return Ok(row);
        }

        let defaults = PricingConfig::default_tariff();
        info!(
            rate = %defaults.rate_per_unit,
            vat = %defaults.vat_percentage,
            charge = %defaults.service_charge,
            "No active pricing configuration found, creating defaults"
        );

        sqlx::query(
            r#"
            INSERT INTO pricing_config (rate_per_unit, vat_percentage, service_charge, active)
            VALUES ($1, $2, $3, TRUE)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(defaults.rate_per_unit)
        .bind(defaults.vat_percentage)
        .bind(defaults.service_charge)
        .execute(&self.pool)
        .await
        .map_err(|e| DatabaseError::from(&e))?;

        let row = sqlx::query_as::<_, PricingConfigRow>(SELECT_ACTIVE)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DatabaseError::from(&e))?
            .ok_or_else(|| DatabaseError::not_found("PricingConfig", "active"))?;

        Ok(row)
    }

    /// Overwrites the active configuration with the given values
    ///
    /// If an active row exists its three pricing fields are updated in place
    /// (same `id`); otherwise a new active row is inserted. The row is locked
    /// for the duration of the transaction, so concurrent updates serialize
    /// into last-write-wins.
    pub async fn update_active(
        &self,
        config: &PricingConfig,
    ) -> Result<PricingConfigRow, DatabaseError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DatabaseError::from(&e))?;

        let current = sqlx::query_as::<_, PricingConfigRow>(
            r#"
            SELECT id, rate_per_unit, vat_percentage, service_charge,
                   active, created_at, updated_at
            FROM pricing_config
            WHERE active
            FOR UPDATE
            "#,
        )
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| DatabaseError::from(&e))?;

        let row = match current {
            Some(existing) => {
                sqlx::query_as::<_, PricingConfigRow>(
                    r#"
                    UPDATE pricing_config
                    SET rate_per_unit = $1,
                        vat_percentage = $2,
                        service_charge = $3,
                        updated_at = now()
                    WHERE id = $4
                    RETURNING id, rate_per_unit, vat_percentage, service_charge,
                              active, created_at, updated_at
                    "#,
                )
                .bind(config.rate_per_unit)
                .bind(config.vat_percentage)
                .bind(config.service_charge)
                .bind(existing.id)
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| DatabaseError::from(&e))?
            }
            None => {
                sqlx::query_as::<_, PricingConfigRow>(
                    r#"
                    INSERT INTO pricing_config (rate_per_unit, vat_percentage, service_charge, active)
                    VALUES ($1, $2, $3, TRUE)
                    RETURNING id, rate_per_unit, vat_percentage, service_charge,
                              active, created_at, updated_at
                    "#,
                )
                .bind(config.rate_per_unit)
                .bind(config.vat_percentage)
                .bind(config.service_charge)
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| DatabaseError::from(&e))?
            }
        };

        tx.commit().await.map_err(|e| DatabaseError::from(&e))?;

        info!(id = row.id, "Pricing configuration updated");
        Ok(row)
    }
}
