//! Test Data Builders
//!
//! Builder patterns for constructing test data with sensible defaults.
//! Tests specify only the relevant fields and take defaults for the rest.

use domain_tariff::PricingConfig;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Builder for constructing test pricing configurations
///
/// Starts from the system default tariff; individual fields can be
/// overridden, including values that would fail validation, so tests can
/// exercise rejection paths.
pub struct TestTariffBuilder {
    rate_per_unit: Decimal,
    vat_percentage: Decimal,
    service_charge: Decimal,
}

impl Default for TestTariffBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestTariffBuilder {
    /// Creates a new builder seeded with the default tariff
    pub fn new() -> Self {
        Self {
            rate_per_unit: dec!(5.00),
            vat_percentage: dec!(15.00),
            service_charge: dec!(50.00),
        }
    }

    /// Sets the rate per unit
    pub fn with_rate(mut self, rate: Decimal) -> Self {
        self.rate_per_unit = rate;
        self
    }

    /// Sets the VAT percentage
    pub fn with_vat(mut self, vat: Decimal) -> Self {
        self.vat_percentage = vat;
        self
    }

    /// Sets the service charge
    pub fn with_service_charge(mut self, charge: Decimal) -> Self {
        self.service_charge = charge;
        self
    }

    /// Builds the pricing configuration
    pub fn build(self) -> PricingConfig {
        PricingConfig {
            rate_per_unit: self.rate_per_unit,
            vat_percentage: self.vat_percentage,
            service_charge: self.service_charge,
        }
    }
}
