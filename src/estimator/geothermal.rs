//! Geothermal production model: reservoir and ambient temperature effects.

use crate::estimator::types::{BASE_PRICE_PER_KWH, GeothermalEstimate, ProductionEstimate};
use crate::weather::WeatherObservation;

/// Plant efficiency at the 150 °C reference reservoir.
const BASE_EFFICIENCY: f64 = 0.85;

/// Reservoir temperature assumed for sites missing from the lookup table (°C).
pub const DEFAULT_RESERVOIR_TEMP_C: f64 = 170.0;

/// Estimates geothermal production from reservoir and ambient temperature.
///
/// `temp_effect = min(1.2, reservoir / 150)`; colder ambient air improves
/// condenser cooling: `ambient_effect = max(0.9, 1.1 − ambient / 40)`.
/// Unit price rises with heating demand below 10 °C (×1.2) or cooling
/// demand above 35 °C (×1.1).
pub fn compute_geothermal_production(
    capacity_mw: f64,
    reservoir_temp_c: f64,
    weather: &WeatherObservation,
) -> GeothermalEstimate {
    let ambient = weather.temperature_c;
    let temp_effect = (reservoir_temp_c / 150.0).min(1.2);
    let ambient_effect = (1.1 - ambient / 40.0).max(0.9);
    let efficiency = BASE_EFFICIENCY * temp_effect * ambient_effect;

    let unit_price = if ambient < 10.0 {
        BASE_PRICE_PER_KWH * 1.2
    } else if ambient > 35.0 {
        BASE_PRICE_PER_KWH * 1.1
    } else {
        BASE_PRICE_PER_KWH
    };

    GeothermalEstimate {
        estimate: ProductionEstimate::from_parts(capacity_mw, efficiency, unit_price),
        reservoir_temp_c,
        ambient_temp_c: ambient,
    }
}

/// Fallback reservoir temperature (°C) keyed by site name.
///
/// Used only for plants whose record carries no `reservoir_temp_c`
/// attribute. Unrecognized names get [`DEFAULT_RESERVOIR_TEMP_C`].
pub fn site_reservoir_temp_c(plant_name: &str) -> f64 {
    match plant_name {
        "Denizli JES" => 180.0,
        "Aydın JES" => 165.0,
        "Manisa JES" => 155.0,
        "Çanakkale JES" => 160.0,
        _ => DEFAULT_RESERVOIR_TEMP_C,
    }
}
