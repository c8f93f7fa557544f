use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::errors::AppError;
use crate::models::{ServiceEstimate, ServiceEstimatePayload};
use crate::services::service_estimates;
use crate::state::AppState;

// POST /api/service-estimates
pub async fn create_service_estimate(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ServiceEstimatePayload>, JsonRejection>,
) -> Result<(StatusCode, Json<ServiceEstimate>), AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection, "unreadable service estimate body");
        AppError::InvalidPayload(rejection.body_text())
    })?;

    match service_estimates::create_service_estimate(&state, payload) {
        Ok(estimate) => Ok((StatusCode::CREATED, Json(estimate))),
        Err(e @ AppError::Validation(_)) => {
            tracing::warn!(error = %e, "service estimate rejected");
            Err(e)
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to save service estimate");
            Err(e)
        }
    }
}

// GET /api/service-estimates/:vehicle_id
pub async fn list_for_vehicle(
    State(state): State<Arc<AppState>>,
    Path(vehicle_id): Path<String>,
) -> Result<Json<Vec<ServiceEstimate>>, AppError> {
    let estimates = service_estimates::list_for_vehicle(&state, &vehicle_id).map_err(|e| {
        tracing::error!(error = %e, vehicle_id = %vehicle_id, "failed to list service estimates");
        e
    })?;

    Ok(Json(estimates))
}
