use chrono::Utc;
use uuid::Uuid;

use crate::db::queries;
use crate::errors::AppError;
use crate::models::{ServiceEstimate, ServiceEstimatePayload};
use crate::state::AppState;

pub fn create_service_estimate(
    state: &AppState,
    payload: ServiceEstimatePayload,
) -> Result<ServiceEstimate, AppError> {
    let estimate = payload
        .validate()?
        .into_service_estimate(Uuid::new_v4().to_string(), Utc::now());

    state
        .db
        .with_conn(|conn| queries::insert_service_estimate(conn, &estimate))?;

    tracing::info!(
        estimate_id = %estimate.id,
        vehicle_id = %estimate.vehicle_id,
        components = estimate.estimates.len(),
        "service estimate stored"
    );
    Ok(estimate)
}

/// Estimate history for one vehicle, newest first. Unknown vehicles yield an
/// empty list.
pub fn list_for_vehicle(
    state: &AppState,
    vehicle_id: &str,
) -> Result<Vec<ServiceEstimate>, AppError> {
    state
        .db
        .with_conn(|conn| queries::list_service_estimates_for_vehicle(conn, vehicle_id))
}
