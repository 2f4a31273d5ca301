//! Custom Test Assertions
//!
//! Specialized assertion helpers for monetary values that give more
//! meaningful error messages than standard assertions.

use domain_tariff::BillBreakdown;
use rust_decimal::Decimal;

/// Asserts that two decimal amounts are equal within a tolerance
///
/// # Panics
///
/// Panics if the amounts differ by more than `tolerance`.
pub fn assert_decimal_approx_eq(actual: Decimal, expected: Decimal, tolerance: Decimal) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "Amounts differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual,
        expected,
        diff,
        tolerance
    );
}

/// Asserts that a decimal is presented with at most 2 fractional digits
pub fn assert_presentation_rounded(amount: Decimal) {
    assert!(
        amount.scale() <= 2,
        "Amount {} has scale {} but presentation values carry at most 2 decimal places",
        amount,
        amount.scale()
    );
}

/// Asserts the internal consistency of a bill breakdown
///
/// Checks that all fields are presentation-rounded and that the total equals
/// the sum of its parts within a one-cent rounding tolerance.
pub fn assert_breakdown_consistent(breakdown: &BillBreakdown) {
    assert_presentation_rounded(breakdown.subtotal);
    assert_presentation_rounded(breakdown.vat_amount);
    assert_presentation_rounded(breakdown.service_charge);
    assert_presentation_rounded(breakdown.total);

    let summed = breakdown.subtotal + breakdown.vat_amount + breakdown.service_charge;
    assert_decimal_approx_eq(breakdown.total, summed, Decimal::new(2, 2));
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_approx_eq_within_tolerance() {
        assert_decimal_approx_eq(dec!(1.00), dec!(1.01), dec!(0.01));
    }

    #[test]
    #[should_panic]
    fn test_approx_eq_outside_tolerance() {
        assert_decimal_approx_eq(dec!(1.00), dec!(1.05), dec!(0.01));
    }

    #[test]
    fn test_presentation_rounded_accepts_two_places() {
        assert_presentation_rounded(dec!(12.34));
        assert_presentation_rounded(dec!(5));
    }

    #[test]
    #[should_panic]
    fn test_presentation_rounded_rejects_three_places() {
        assert_presentation_rounded(dec!(0.125));
    }
}
