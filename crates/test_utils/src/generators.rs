//! Property-Based Test Generators
//!
//! Proptest strategies producing valid domain values for property tests.

use domain_tariff::PricingConfig;
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy producing positive unit counts with two fractional digits
pub fn positive_units() -> impl Strategy<Value = Decimal> {
    (1i64..=10_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy producing non-positive unit counts (zero included)
pub fn non_positive_units() -> impl Strategy<Value = Decimal> {
    (-10_000_000i64..=0).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy producing pricing configurations that satisfy all validation
/// rules: positive rate, VAT within [0, 100], non-negative service charge
pub fn valid_config() -> impl Strategy<Value = PricingConfig> {
    (1i64..=1_000_000, 0i64..=10_000, 0i64..=1_000_000).prop_map(
        |(rate_cents, vat_bp, charge_cents)| PricingConfig {
            rate_per_unit: Decimal::new(rate_cents, 2),
            vat_percentage: Decimal::new(vat_bp, 2),
            service_charge: Decimal::new(charge_cents, 2),
        },
    )
}
