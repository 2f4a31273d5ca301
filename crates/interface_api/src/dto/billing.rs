//! Billing DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use domain_tariff::BillBreakdown;
use infra_db::PricingConfigRow;

/// Admin request to overwrite the active pricing configuration
#[derive(Debug, Deserialize)]
pub struct UpdateConfigRequest {
    pub rate_per_unit: Decimal,
    pub vat_percentage: Decimal,
    pub service_charge: Decimal,
}

/// Request to calculate a bill for a unit count
#[derive(Debug, Deserialize)]
pub struct CalculateBillRequest {
    pub units: Decimal,
}

/// The persisted pricing configuration as returned to clients
///
/// Decimal fields serialize as strings; callers are expected to parse.
#[derive(Debug, Serialize)]
pub struct PricingConfigResponse {
    pub id: i32,
    pub rate_per_unit: Decimal,
    pub vat_percentage: Decimal,
    pub service_charge: Decimal,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PricingConfigRow> for PricingConfigResponse {
    fn from(row: PricingConfigRow) -> Self {
        Self {
            id: row.id,
            rate_per_unit: row.rate_per_unit,
            vat_percentage: row.vat_percentage,
            service_charge: row.service_charge,
            active: row.active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Bill calculation response: the inputs echoed back plus the breakdown
#[derive(Debug, Serialize)]
pub struct BillResponse {
    pub units: Decimal,
    pub rate_per_unit: Decimal,
    pub vat_percentage: Decimal,
    pub service_charge: Decimal,
    pub breakdown: BreakdownDto,
}

/// Itemized charges, each rounded to 2 decimal places
#[derive(Debug, Serialize)]
pub struct BreakdownDto {
    pub subtotal: Decimal,
    pub vat_amount: Decimal,
    pub service_charge: Decimal,
    pub total: Decimal,
}

impl From<BillBreakdown> for BreakdownDto {
    fn from(breakdown: BillBreakdown) -> Self {
        Self {
            subtotal: breakdown.subtotal,
            vat_amount: breakdown.vat_amount,
            service_charge: breakdown.service_charge,
            total: breakdown.total,
        }
    }
}
