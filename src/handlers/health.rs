use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

// GET /
pub async fn root() -> &'static str {
    "Booking API running ✓"
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    store: &'static str,
}

// GET /health
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        store: if state.db.is_connected() {
            "connected"
        } else {
            "disconnected"
        },
    })
}
