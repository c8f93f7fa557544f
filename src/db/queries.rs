use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};

use crate::errors::AppError;
use crate::models::{Booking, ServiceEstimate};

/// Fixed-width UTC timestamp so the TEXT column sorts chronologically.
const SORT_KEY_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6fZ";

fn sort_key(ts: &DateTime<Utc>) -> String {
    ts.format(SORT_KEY_FORMAT).to_string()
}

/// Window over a newest-first listing. `limit: None` returns everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Page {
    pub limit: Option<u32>,
    pub skip: u32,
}

// ── Bookings ──

pub fn insert_booking(conn: &Connection, booking: &Booking) -> Result<(), AppError> {
    let document = serde_json::to_string(booking)?;

    conn.execute(
        "INSERT INTO bookings (id, service_type, document, created_at) VALUES (?1, ?2, ?3, ?4)",
        params![
            booking.id,
            booking.service_type.as_str(),
            document,
            sort_key(&booking.created_at),
        ],
    )?;
    Ok(())
}

pub fn list_bookings(conn: &Connection, page: Page) -> Result<Vec<Booking>, AppError> {
    // SQLite treats a negative LIMIT as unbounded.
    let limit = page.limit.map(i64::from).unwrap_or(-1);

    let mut stmt = conn.prepare(
        "SELECT document FROM bookings ORDER BY created_at DESC, rowid DESC LIMIT ?1 OFFSET ?2",
    )?;
    let rows = stmt.query_map(params![limit, i64::from(page.skip)], |row| {
        row.get::<_, String>(0)
    })?;

    let mut bookings = vec![];
    for row in rows {
        bookings.push(serde_json::from_str(&row?)?);
    }
    Ok(bookings)
}

// ── Service estimates ──

pub fn insert_service_estimate(
    conn: &Connection,
    estimate: &ServiceEstimate,
) -> Result<(), AppError> {
    let document = serde_json::to_string(estimate)?;

    conn.execute(
        "INSERT INTO service_estimates (id, vehicle_id, document, created_at) VALUES (?1, ?2, ?3, ?4)",
        params![
            estimate.id,
            estimate.vehicle_id,
            document,
            sort_key(&estimate.created_at),
        ],
    )?;
    Ok(())
}

pub fn list_service_estimates_for_vehicle(
    conn: &Connection,
    vehicle_id: &str,
) -> Result<Vec<ServiceEstimate>, AppError> {
    let mut stmt = conn.prepare(
        "SELECT document FROM service_estimates WHERE vehicle_id = ?1
         ORDER BY created_at DESC, rowid DESC",
    )?;
    let rows = stmt.query_map(params![vehicle_id], |row| row.get::<_, String>(0))?;

    let mut estimates = vec![];
    for row in rows {
        estimates.push(serde_json::from_str(&row?)?);
    }
    Ok(estimates)
}
