//! Solar production model: temperature, radiation, and sky-condition effects.

use crate::estimator::types::{BASE_PRICE_PER_KWH, ProductionEstimate};
use crate::weather::WeatherObservation;

/// Panel efficiency under reference conditions.
const BASE_EFFICIENCY: f64 = 0.85;

/// Reference irradiance for the linear radiation scaling (W/m²).
const REFERENCE_RADIATION_WM2: f64 = 800.0;

/// Optimal panel temperature (°C).
const OPTIMAL_TEMP_C: f64 = 25.0;

/// Estimates solar production for a plant of the given rated capacity.
///
/// Efficiency is `0.85 × temperature_effect × radiation_effect ×
/// condition_effect`. Each factor is clamped on its own but the product is
/// not, so the result can reach 0.85 × 1.2 = 1.02 under very high
/// irradiance at the optimal temperature.
///
/// Unit price starts at the base rate and rises with cooling demand above
/// 30 °C (×1.3) or heating demand below 5 °C (×1.2).
pub fn compute_solar_production(
    capacity_mw: f64,
    weather: &WeatherObservation,
) -> ProductionEstimate {
    let efficiency = BASE_EFFICIENCY
        * temperature_effect(weather.temperature_c)
        * radiation_effect(weather.solar_radiation_wm2)
        * condition_effect(&weather.condition);

    let unit_price = if weather.temperature_c > 30.0 {
        BASE_PRICE_PER_KWH * 1.3
    } else if weather.temperature_c < 5.0 {
        BASE_PRICE_PER_KWH * 1.2
    } else {
        BASE_PRICE_PER_KWH
    };

    ProductionEstimate::from_parts(capacity_mw, efficiency, unit_price)
}

/// Efficiency degrades 1% per °C away from the 25 °C optimum, floored at 0.5.
pub fn temperature_effect(temperature_c: f64) -> f64 {
    (1.0 - (temperature_c - OPTIMAL_TEMP_C).abs() * 0.01).max(0.5)
}

/// Linear scaling against the 800 W/m² reference, capped at 1.2.
pub fn radiation_effect(solar_radiation_wm2: f64) -> f64 {
    (solar_radiation_wm2 / REFERENCE_RADIATION_WM2).min(1.2)
}

/// Sky-condition multiplier from a case-sensitive substring match on the
/// provider's English category names.
pub fn condition_effect(condition: &str) -> f64 {
    if condition.contains("Rain") || condition.contains("Storm") {
        0.3
    } else if condition.contains("Cloud") {
        0.7
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weather(temperature_c: f64, solar_radiation_wm2: f64, condition: &str) -> WeatherObservation {
        WeatherObservation {
            temperature_c,
            solar_radiation_wm2,
            condition: condition.to_string(),
            ..WeatherObservation::clear_sky_default()
        }
    }

    #[test]
    fn optimal_temperature_gives_unity_effect() {
        assert_eq!(temperature_effect(25.0), 1.0);
    }

    #[test]
    fn temperature_effect_degrades_one_pct_per_degree() {
        assert!((temperature_effect(30.0) - 0.95).abs() < 1e-12);
        assert!((temperature_effect(20.0) - 0.95).abs() < 1e-12);
    }

    #[test]
    fn temperature_effect_floors_at_half() {
        assert_eq!(temperature_effect(100.0), 0.5);
        assert_eq!(temperature_effect(-60.0), 0.5);
    }

    #[test]
    fn radiation_effect_caps_at_1_2() {
        assert_eq!(radiation_effect(800.0), 1.0);
        assert_eq!(radiation_effect(2000.0), 1.2);
        assert!((radiation_effect(400.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn storm_forces_condition_effect_regardless_of_other_fields() {
        assert_eq!(condition_effect("Storm"), 0.3);
        assert_eq!(condition_effect("Thunderstorm"), 0.3);
        assert_eq!(condition_effect("Rain"), 0.3);
        let e = compute_solar_production(100.0, &weather(25.0, 800.0, "Storm"));
        assert!((e.efficiency - 0.85 * 0.3).abs() < 1e-12);
    }

    #[test]
    fn cloud_condition_scales_to_0_7() {
        assert_eq!(condition_effect("Clouds"), 0.7);
        assert_eq!(condition_effect("Cloudy"), 0.7);
    }

    #[test]
    fn condition_match_is_case_sensitive() {
        // Lowercase provider strings do not trigger the penalty branches.
        assert_eq!(condition_effect("rain"), 1.0);
        assert_eq!(condition_effect("clouds"), 1.0);
    }

    #[test]
    fn reference_scenario_100mw_clear_sky() {
        // 25 °C, 800 W/m², "Clear": every factor is exactly 1.0.
        let e = compute_solar_production(100.0, &weather(25.0, 800.0, "Clear"));
        assert_eq!(e.efficiency, 0.85);
        assert_eq!(e.production_mw, 85.0);
        assert_eq!(e.unit_price_per_kwh, BASE_PRICE_PER_KWH);
        assert_eq!(e.monthly_revenue, e.daily_revenue * 30.0);
    }

    #[test]
    fn hot_weather_raises_unit_price() {
        let e = compute_solar_production(10.0, &weather(35.0, 800.0, "Clear"));
        assert!((e.unit_price_per_kwh - BASE_PRICE_PER_KWH * 1.3).abs() < 1e-12);
    }

    #[test]
    fn cold_weather_raises_unit_price() {
        let e = compute_solar_production(10.0, &weather(0.0, 800.0, "Clear"));
        assert!((e.unit_price_per_kwh - BASE_PRICE_PER_KWH * 1.2).abs() < 1e-12);
    }

    #[test]
    fn efficiency_headroom_above_one_is_reachable() {
        // Optimal temperature with irradiance at the cap: 0.85 * 1.2.
        let e = compute_solar_production(100.0, &weather(25.0, 1200.0, "Clear"));
        assert!(e.efficiency > 1.0);
        assert!((e.efficiency - 1.02).abs() < 1e-12);
    }

    #[test]
    fn production_stays_within_model_bound() {
        for t in [-30.0, 0.0, 25.0, 45.0] {
            for r in [0.0, 400.0, 800.0, 1500.0] {
                let e = compute_solar_production(100.0, &weather(t, r, "Clear"));
                assert!(e.production_mw >= 0.0);
                assert!(e.production_mw <= 100.0 * 0.85 * 1.2 + 1e-9);
            }
        }
    }
}
