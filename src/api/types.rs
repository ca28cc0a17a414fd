//! API response and query types.

use serde::{Deserialize, Serialize};

use crate::fleet::Plant;
use crate::report::{FleetReport, PlantEstimate};
use crate::weather::WeatherObservation;

/// Fleet-wide production response: per-plant rows plus aggregates.
#[derive(Debug, Serialize)]
pub struct ProductionResponse {
    /// Per-plant estimate rows, in catalogue order.
    pub results: Vec<PlantEstimate>,
    /// Aggregate totals computed from `results`.
    pub report: FleetReport,
    /// Weather snapshot the estimates were computed from.
    pub weather: WeatherObservation,
    /// Production unit for all power figures.
    pub unit: &'static str,
}

/// Single-plant production response.
#[derive(Debug, Serialize)]
pub struct PlantProductionResponse {
    /// The estimate row.
    #[serde(flatten)]
    pub estimate: PlantEstimate,
    /// Weather snapshot the estimate was computed from.
    pub weather: WeatherObservation,
}

/// Optional technology filter for the production endpoint.
#[derive(Debug, Deserialize)]
pub struct ProductionQuery {
    /// Plant type name (`solar`, `wind`, `geothermal`).
    #[serde(rename = "type")]
    pub plant_type: Option<String>,
}

/// Query parameters for the nearby endpoint.
#[derive(Debug, Deserialize)]
pub struct NearbyQuery {
    /// Query point latitude (degrees).
    pub lat: f64,
    /// Query point longitude (degrees).
    pub lon: f64,
    /// Search radius (km, must be > 0).
    pub radius_km: f64,
}

/// One plant in a nearby response, annotated with its distance.
#[derive(Debug, Serialize)]
pub struct NearbyPlant {
    /// The plant record.
    #[serde(flatten)]
    pub plant: Plant,
    /// Great-circle distance from the query point (km).
    pub distance_km: f64,
}

/// Error response body for 4xx errors.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}
