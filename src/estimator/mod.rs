//! Weather-conditioned production estimators, one pure model per plant type.
//!
//! All functions here are stateless and total over their numeric domain:
//! out-of-range inputs are absorbed by arithmetic clamps rather than
//! signaled as errors. Callers validate plant records before invocation.

/// Geothermal reservoir/ambient temperature model.
pub mod geothermal;
/// Solar irradiance and sky-condition model.
pub mod solar;
pub mod types;
/// Piecewise turbine power-curve model.
pub mod wind;

pub use geothermal::compute_geothermal_production;
pub use solar::compute_solar_production;
pub use types::{GeothermalEstimate, ProductionEstimate};
pub use wind::compute_wind_production;

use crate::fleet::{Plant, PlantType};
use crate::weather::WeatherObservation;

/// Estimates instantaneous production for a plant under the given weather.
///
/// Dispatches exhaustively on the plant type. Geothermal reservoir
/// temperature comes from the plant record when present, falling back to
/// the per-site table ([`geothermal::site_reservoir_temp_c`]).
pub fn estimate(plant: &Plant, weather: &WeatherObservation) -> ProductionEstimate {
    match plant.plant_type {
        PlantType::Solar => compute_solar_production(plant.capacity_mw, weather),
        PlantType::Wind => compute_wind_production(plant.capacity_mw, weather),
        PlantType::Geothermal => {
            compute_geothermal_production(plant.capacity_mw, reservoir_temp_for(plant), weather)
                .estimate
        }
    }
}

/// Resolves the reservoir temperature for a geothermal plant.
pub fn reservoir_temp_for(plant: &Plant) -> f64 {
    plant
        .reservoir_temp_c
        .unwrap_or_else(|| geothermal::site_reservoir_temp_c(&plant.name))
}
