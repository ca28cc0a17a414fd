//! REST API over the plant catalogue and production estimators.
//!
//! Endpoints:
//! - `GET /plants` — full catalogue
//! - `GET /plants/{id}` — one plant
//! - `GET /plants/type/{type}` — catalogue filtered by technology
//! - `GET /production` — per-plant estimates plus fleet totals (`?type=` filter)
//! - `GET /production/{id}` — one plant's estimate with the weather snapshot
//! - `GET /nearby` — plants within a radius of a query point

mod handlers;
mod types;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;

use crate::fleet::Fleet;
use crate::weather::WeatherObservation;

/// Immutable application state shared across all request handlers.
///
/// Wrapped in `Arc` — no locks needed since all data is read-only.
/// Production responses are recomputed from this state on every request;
/// nothing is cached across calls.
pub struct AppState {
    /// Plant catalogue served by this instance.
    pub fleet: Fleet,
    /// Current weather observation applied to every estimate.
    pub weather: WeatherObservation,
}

/// Builds the axum router with all API routes.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/plants", get(handlers::get_plants))
        .route("/plants/{id}", get(handlers::get_plant))
        .route("/plants/type/{type}", get(handlers::get_plants_by_type))
        .route("/production", get(handlers::get_production))
        .route("/production/{id}", get(handlers::get_plant_production))
        .route("/nearby", get(handlers::get_nearby))
        .with_state(state)
}

/// Binds to the given address and serves the API.
///
/// # Panics
///
/// Panics if the TCP listener cannot bind to `addr`.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind to {addr}: {e}"));
    eprintln!("API server listening on http://{addr}");
    axum::serve(listener, app)
        .await
        .unwrap_or_else(|e| panic!("server error: {e}"));
}
