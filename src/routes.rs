use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Full HTTP surface. Cross-origin requests are accepted from anywhere.
pub fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::health::root))
        .route("/health", get(handlers::health::health))
        .route("/book", post(handlers::bookings::submit_booking))
        .route("/bookings", get(handlers::bookings::list_bookings))
        .route(
            "/api/service-estimates",
            post(handlers::service_estimates::create_service_estimate),
        )
        .route(
            "/api/service-estimates/:vehicle_id",
            get(handlers::service_estimates::list_for_vehicle),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
