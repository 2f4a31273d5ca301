//! Bill calculation
//!
//! A stateless, deterministic transformation from a unit count and a pricing
//! configuration to an itemized breakdown. The computation order is business
//! policy, not an implementation detail: VAT is charged on the consumption
//! subtotal only, and the service charge is added last, untaxed.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::config::PricingConfig;
use crate::error::TariffError;

/// Itemized decomposition of a total charge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillBreakdown {
    /// units * rate_per_unit
    pub subtotal: Decimal,
    /// subtotal * vat_percentage / 100
    pub vat_amount: Decimal,
    /// The configuration's flat fee, passed through unchanged
    pub service_charge: Decimal,
    /// subtotal + vat_amount + service_charge
    pub total: Decimal,
}

/// Computes the bill breakdown for a unit count under the given configuration
///
/// Internal arithmetic runs at full decimal precision; each output field is
/// rounded to 2 decimal places (half away from zero) for presentation.
///
/// # Errors
///
/// Returns `TariffError::Validation` when `units` is zero or negative.
pub fn calculate_bill(units: Decimal, config: &PricingConfig) -> Result<BillBreakdown, TariffError> {
    if units <= Decimal::ZERO {
        return Err(TariffError::validation("Units must be a positive number"));
    }

    let subtotal = units * config.rate_per_unit;
    let vat_amount = subtotal * config.vat_percentage / Decimal::ONE_HUNDRED;
    let total = subtotal + vat_amount + config.service_charge;

    Ok(BillBreakdown {
        subtotal: round_money(subtotal),
        vat_amount: round_money(vat_amount),
        service_charge: round_money(config.service_charge),
        total: round_money(total),
    })
}

/// Rounds a monetary amount to 2 decimal places, half away from zero
fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
