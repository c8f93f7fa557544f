use chrono::Utc;
use uuid::Uuid;

use crate::db::queries::{self, Page};
use crate::errors::AppError;
use crate::models::{Booking, BookingPayload};
use crate::state::AppState;

/// Validates and stores a booking. Every submission creates a new record;
/// identical payloads are not de-duplicated.
pub fn submit_booking(state: &AppState, payload: BookingPayload) -> Result<Booking, AppError> {
    let booking = payload
        .validate()?
        .into_booking(Uuid::new_v4().to_string(), Utc::now());

    state
        .db
        .with_conn(|conn| queries::insert_booking(conn, &booking))?;

    tracing::info!(
        booking_id = %booking.id,
        service_type = booking.service_type.as_str(),
        centre = booking.details.centre_name.as_deref().unwrap_or(""),
        "booking stored"
    );
    Ok(booking)
}

pub fn list_bookings(state: &AppState, page: Page) -> Result<Vec<Booking>, AppError> {
    state.db.with_conn(|conn| queries::list_bookings(conn, page))
}
