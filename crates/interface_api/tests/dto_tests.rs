//! DTO mapping and serialization tests

use rust_decimal_macros::dec;
use serde_json::Value;

use domain_tariff::calculate_bill;
use interface_api::dto::billing::{BillResponse, BreakdownDto};
use test_utils::{assert_breakdown_consistent, TariffFixtures, TestTariffBuilder};

#[test]
fn test_bill_response_shape() {
    let config = TariffFixtures::default_tariff();
    let units = dec!(100);
    let breakdown = calculate_bill(units, &config).unwrap();
    assert_breakdown_consistent(&breakdown);

    let response = BillResponse {
        units,
        rate_per_unit: config.rate_per_unit,
        vat_percentage: config.vat_percentage,
        service_charge: config.service_charge,
        breakdown: BreakdownDto::from(breakdown),
    };

    let json: Value = serde_json::to_value(&response).unwrap();

    // Decimal fields serialize as strings for lossless parsing by clients
    assert_eq!(json["units"], "100");
    assert_eq!(json["rate_per_unit"], "5.00");
    assert_eq!(json["vat_percentage"], "15.00");
    assert_eq!(json["service_charge"], "50.00");
    assert_eq!(json["breakdown"]["subtotal"], "500.00");
    assert_eq!(json["breakdown"]["vat_amount"], "75.00");
    assert_eq!(json["breakdown"]["service_charge"], "50.00");
    assert_eq!(json["breakdown"]["total"], "625.00");
}

#[test]
fn test_breakdown_consistency_for_custom_tariff() {
    let config = TestTariffBuilder::new()
        .with_rate(dec!(10))
        .with_vat(dec!(0))
        .with_service_charge(dec!(0))
        .build();

    let breakdown = calculate_bill(dec!(50), &config).unwrap();
    assert_breakdown_consistent(&breakdown);

    assert_eq!(breakdown.subtotal, dec!(500.00));
    assert_eq!(breakdown.vat_amount, dec!(0.00));
    assert_eq!(breakdown.total, dec!(500.00));
}
