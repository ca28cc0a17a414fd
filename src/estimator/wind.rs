//! Wind production model: piecewise turbine power curve over wind speed.

use crate::estimator::types::{BASE_PRICE_PER_KWH, ProductionEstimate};
use crate::weather::WeatherObservation;

/// Turbine efficiency at the optimal point of the power curve.
const BASE_EFFICIENCY: f64 = 0.75;

/// Estimates wind production for a plant of the given rated capacity.
///
/// Efficiency is `0.75 × wind_speed_effect(v)`. Unit price reflects supply
/// shifts: ×0.9 above 15 m/s (oversupply), ×1.1 below 7 m/s (scarcity).
pub fn compute_wind_production(
    capacity_mw: f64,
    weather: &WeatherObservation,
) -> ProductionEstimate {
    let v = weather.wind_speed_ms;
    let efficiency = BASE_EFFICIENCY * wind_speed_effect(v);

    let unit_price = if v > 15.0 {
        BASE_PRICE_PER_KWH * 0.9
    } else if v < 7.0 {
        BASE_PRICE_PER_KWH * 1.1
    } else {
        BASE_PRICE_PER_KWH
    };

    ProductionEstimate::from_parts(capacity_mw, efficiency, unit_price)
}

/// Piecewise wind-speed multiplier (v in m/s), half-open interval semantics:
///
/// | speed     | effect              |
/// |-----------|---------------------|
/// | < 3       | 0.1                 |
/// | [3, 7)    | 0.3 + (v − 3) × 0.1 |
/// | [7, 12)   | 0.7 + (v − 7) × 0.06|
/// | [12, 15]  | 1.0                 |
/// | (15, 25]  | 1.0 − (v − 15) × 0.02 |
/// | > 25      | 0.2 (safety cutout) |
///
/// Adjacent segments meet at their shared boundary, so the curve is
/// continuous everywhere except the cutout above 25 m/s.
pub fn wind_speed_effect(v: f64) -> f64 {
    if v < 3.0 {
        0.1
    } else if v < 7.0 {
        0.3 + (v - 3.0) * 0.1
    } else if v < 12.0 {
        0.7 + (v - 7.0) * 0.06
    } else if v <= 15.0 {
        1.0
    } else if v <= 25.0 {
        1.0 - (v - 15.0) * 0.02
    } else {
        0.2
    }
}
