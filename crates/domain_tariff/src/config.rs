//! Pricing configuration value object
//!
//! A pricing configuration carries the three values that govern every bill:
//! the per-unit rate, the VAT percentage applied to consumption, and a flat
//! service charge added untaxed. At most one configuration is active at any
//! time; the persistence layer enforces that invariant.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::TariffError;

/// Hardcoded defaults used when no configuration exists yet
const DEFAULT_RATE_PER_UNIT: Decimal = dec!(5.00);
const DEFAULT_VAT_PERCENTAGE: Decimal = dec!(15.00);
const DEFAULT_SERVICE_CHARGE: Decimal = dec!(50.00);

/// The pricing values governing bill calculation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Currency amount charged per consumption unit; strictly positive
    pub rate_per_unit: Decimal,
    /// VAT percentage applied to the subtotal; within [0, 100]
    pub vat_percentage: Decimal,
    /// Flat fee added to every bill, untaxed; non-negative
    pub service_charge: Decimal,
}

impl PricingConfig {
    /// Returns the default tariff created lazily on first read
    /// (rate 5.00, VAT 15.00, service charge 50.00)
    pub fn default_tariff() -> Self {
        Self {
            rate_per_unit: DEFAULT_RATE_PER_UNIT,
            vat_percentage: DEFAULT_VAT_PERCENTAGE,
            service_charge: DEFAULT_SERVICE_CHARGE,
        }
    }
}

/// Unvalidated pricing values as submitted by an admin client
///
/// The store must never persist invalid data, so an update only becomes a
/// [`PricingConfig`] by passing through [`PricingConfigUpdate::validated`].
#[derive(Debug, Clone, Deserialize)]
pub struct PricingConfigUpdate {
    pub rate_per_unit: Decimal,
    pub vat_percentage: Decimal,
    pub service_charge: Decimal,
}

impl PricingConfigUpdate {
    /// Validates the submitted values and converts them into a usable config
    ///
    /// # Errors
    ///
    /// Returns `TariffError::Validation` when the rate is not strictly
    /// positive, the VAT percentage falls outside [0, 100], or the service
    /// charge is negative.
    pub fn validated(self) -> Result<PricingConfig, TariffError> {
        if self.rate_per_unit <= Decimal::ZERO {
            return Err(TariffError::validation(
                "rate_per_unit must be a positive number",
            ));
        }
        if self.vat_percentage < Decimal::ZERO || self.vat_percentage > dec!(100) {
            return Err(TariffError::validation(
                "vat_percentage must be between 0 and 100",
            ));
        }
        if self.service_charge < Decimal::ZERO {
            return Err(TariffError::validation(
                "service_charge must not be negative",
            ));
        }

        Ok(PricingConfig {
            rate_per_unit: self.rate_per_unit,
            vat_percentage: self.vat_percentage,
            service_charge: self.service_charge,
        })
    }
}
