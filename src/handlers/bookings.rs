use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::db::queries::Page;
use crate::errors::AppError;
use crate::models::{Booking, BookingPayload};
use crate::services::bookings;
use crate::state::AppState;

pub const BOOKING_STORED: &str = "Booking stored successfully!";
pub const BOOKING_FAILED: &str = "Failed to save booking";

#[derive(Serialize)]
pub struct SubmitBookingResponse {
    success: bool,
    message: &'static str,
}

// POST /book
//
// Always answers 200; the outcome is carried in `success`. Failure detail is
// logged and never returned to the client.
pub async fn submit_booking(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<BookingPayload>, JsonRejection>,
) -> Json<SubmitBookingResponse> {
    let result = payload
        .map_err(|rejection| AppError::InvalidPayload(rejection.body_text()))
        .and_then(|Json(payload)| bookings::submit_booking(&state, payload));

    match result {
        Ok(_) => Json(SubmitBookingResponse {
            success: true,
            message: BOOKING_STORED,
        }),
        Err(e) => {
            if e.status().is_client_error() {
                tracing::warn!(error = %e, "booking rejected");
            } else {
                tracing::error!(error = %e, "failed to save booking");
            }
            Json(SubmitBookingResponse {
                success: false,
                message: BOOKING_FAILED,
            })
        }
    }
}

// GET /bookings
#[derive(Debug, Default, Deserialize)]
pub struct BookingsQuery {
    pub limit: Option<u32>,
    pub skip: Option<u32>,
}

impl From<BookingsQuery> for Page {
    fn from(query: BookingsQuery) -> Self {
        Page {
            limit: query.limit,
            skip: query.skip.unwrap_or(0),
        }
    }
}

pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
    Query(query): Query<BookingsQuery>,
) -> Result<Json<Vec<Booking>>, AppError> {
    let bookings = bookings::list_bookings(&state, query.into()).map_err(|e| {
        tracing::error!(error = %e, "failed to list bookings");
        e
    })?;

    Ok(Json(bookings))
}
