//! Billing handlers

use axum::{extract::State, Json};

use domain_tariff::{calculate_bill, PricingConfigUpdate};
use infra_db::TariffRepository;

use crate::dto::billing::*;
use crate::{error::ApiError, AppState};

/// Returns the active pricing configuration, creating the default tariff on
/// first read
pub async fn get_config(
    State(state): State<AppState>,
) -> Result<Json<PricingConfigResponse>, ApiError> {
    let repo = TariffRepository::new(state.pool.clone());
    let row = repo.get_or_create_active().await?;

    Ok(Json(row.into()))
}

/// Overwrites the active pricing configuration (admin only)
///
/// The admin secret is enforced by middleware before this handler runs.
/// Invalid values are rejected with 400 and leave the store unchanged.
pub async fn update_config(
    State(state): State<AppState>,
    Json(request): Json<UpdateConfigRequest>,
) -> Result<Json<PricingConfigResponse>, ApiError> {
    let config = PricingConfigUpdate {
        rate_per_unit: request.rate_per_unit,
        vat_percentage: request.vat_percentage,
        service_charge: request.service_charge,
    }
    .validated()?;

    let repo = TariffRepository::new(state.pool.clone());
    let row = repo.update_active(&config).await?;

    Ok(Json(row.into()))
}

/// Calculates a bill breakdown for the requested unit count under the
/// current tariff
pub async fn calculate(
    State(state): State<AppState>,
    Json(request): Json<CalculateBillRequest>,
) -> Result<Json<BillResponse>, ApiError> {
    // Validate units before touching the store
    if request.units <= rust_decimal::Decimal::ZERO {
        return Err(ApiError::Validation(
            "Units must be a positive number".to_string(),
        ));
    }

    let repo = TariffRepository::new(state.pool.clone());
    let row = repo.get_or_create_active().await?;
    let config = row.pricing();

    let breakdown = calculate_bill(request.units, &config)?;

    Ok(Json(BillResponse {
        units: request.units,
        rate_per_unit: config.rate_per_unit,
        vat_percentage: config.vat_percentage,
        service_charge: config.service_charge,
        breakdown: breakdown.into(),
    }))
}
