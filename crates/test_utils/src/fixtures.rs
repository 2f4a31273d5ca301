//! Test Fixtures
//!
//! Pre-built pricing configurations for common test scenarios.

use domain_tariff::PricingConfig;
use rust_decimal_macros::dec;

/// Fixtures for tariff configurations
pub struct TariffFixtures;

impl TariffFixtures {
    /// The lazily-created default tariff (rate 5.00, VAT 15.00, charge 50.00)
    pub fn default_tariff() -> PricingConfig {
        PricingConfig::default_tariff()
    }

    /// A flat tariff with no VAT and no service charge
    pub fn flat_rate(rate: rust_decimal::Decimal) -> PricingConfig {
        PricingConfig {
            rate_per_unit: rate,
            vat_percentage: dec!(0),
            service_charge: dec!(0),
        }
    }

    /// A tariff at the validation boundaries: minimal rate, maximal VAT
    pub fn boundary_tariff() -> PricingConfig {
        PricingConfig {
            rate_per_unit: dec!(0.01),
            vat_percentage: dec!(100),
            service_charge: dec!(0),
        }
    }
}
