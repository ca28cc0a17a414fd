//! Request handlers for the API endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use super::AppState;
use super::types::{
    ErrorResponse, NearbyPlant, NearbyQuery, PlantProductionResponse, ProductionQuery,
    ProductionResponse,
};
use crate::fleet::{Plant, PlantType};
use crate::geo;
use crate::report::{FleetReport, PlantEstimate, fleet_estimates};

type ApiError = (StatusCode, Json<ErrorResponse>);

fn not_found(message: String) -> ApiError {
    (StatusCode::NOT_FOUND, Json(ErrorResponse { error: message }))
}

fn bad_request(message: String) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse { error: message }),
    )
}

/// Returns the full plant catalogue.
///
/// `GET /plants` → 200 + `Vec<Plant>` JSON
pub async fn get_plants(State(state): State<Arc<AppState>>) -> Json<Vec<Plant>> {
    Json(state.fleet.plants().to_vec())
}

/// Returns one plant by id.
///
/// `GET /plants/{id}` → 200 + `Plant` JSON, or 404 + `ErrorResponse`
pub async fn get_plant(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> Result<Json<Plant>, ApiError> {
    state
        .fleet
        .get(id)
        .cloned()
        .map(Json)
        .ok_or_else(|| not_found(format!("plant {id} not found")))
}

/// Returns the catalogue filtered by technology.
///
/// `GET /plants/type/{type}` → 200 + `Vec<Plant>`, or 400 on a bad type name
pub async fn get_plants_by_type(
    State(state): State<Arc<AppState>>,
    Path(type_name): Path<String>,
) -> Result<Json<Vec<Plant>>, ApiError> {
    let plant_type: PlantType = type_name.parse().map_err(bad_request)?;
    let plants = state
        .fleet
        .of_type(plant_type)
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(plants))
}

/// Returns per-plant estimates and fleet totals, recomputed per request.
///
/// `GET /production` → 200 + `ProductionResponse`
/// `GET /production?type=wind` → filtered to one technology
pub async fn get_production(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ProductionQuery>,
) -> Result<Json<ProductionResponse>, ApiError> {
    let rows = match query.plant_type {
        Some(name) => {
            let plant_type: PlantType = name.parse().map_err(bad_request)?;
            let plants: Vec<Plant> = state
                .fleet
                .of_type(plant_type)
                .into_iter()
                .cloned()
                .collect();
            fleet_estimates(&plants, &state.weather)
        }
        None => fleet_estimates(state.fleet.plants(), &state.weather),
    };
    let report = FleetReport::from_rows(&rows);
    Ok(Json(ProductionResponse {
        results: rows,
        report,
        weather: state.weather.clone(),
        unit: "MW",
    }))
}

/// Returns one plant's estimate with the weather snapshot used.
///
/// `GET /production/{id}` → 200 + `PlantProductionResponse`, or 404
pub async fn get_plant_production(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> Result<Json<PlantProductionResponse>, ApiError> {
    let plant = state
        .fleet
        .get(id)
        .ok_or_else(|| not_found(format!("plant {id} not found")))?;
    Ok(Json(PlantProductionResponse {
        estimate: PlantEstimate::for_plant(plant, &state.weather),
        weather: state.weather.clone(),
    }))
}

/// Returns plants within the requested radius, ascending by distance.
///
/// `GET /nearby?lat=..&lon=..&radius_km=..` → 200 + `Vec<NearbyPlant>`
/// Invalid radius or out-of-range coordinates → 400 + `ErrorResponse`
pub async fn get_nearby(
    State(state): State<Arc<AppState>>,
    Query(query): Query<NearbyQuery>,
) -> Result<Json<Vec<NearbyPlant>>, ApiError> {
    if query.radius_km <= 0.0 {
        return Err(bad_request(format!(
            "radius_km must be > 0, got {}",
            query.radius_km
        )));
    }
    if !(-90.0..=90.0).contains(&query.lat) {
        return Err(bad_request(format!(
            "lat must be in [-90, 90], got {}",
            query.lat
        )));
    }
    if !(-180.0..=180.0).contains(&query.lon) {
        return Err(bad_request(format!(
            "lon must be in [-180, 180], got {}",
            query.lon
        )));
    }

    let hits: Vec<NearbyPlant> = geo::find_nearby(
        query.lat,
        query.lon,
        state.fleet.plants(),
        query.radius_km,
    )
    .into_iter()
    .map(|plant| {
        let distance_km = geo::haversine_km(query.lat, query.lon, plant.latitude, plant.longitude);
        NearbyPlant { plant, distance_km }
    })
    .collect();

    Ok(Json(hits))
}
