//! Weather observation snapshot consumed by the production estimators.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// An immutable weather snapshot for one location at one point in time.
///
/// Produced externally (weather provider or config) and consumed read-only
/// by the estimators. The `condition` string uses the provider's English
/// category names ("Clear", "Rain", "Clouds", ...) and is matched
/// case-sensitively by the solar model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherObservation {
    /// Air temperature (°C).
    pub temperature_c: f64,
    /// Wind speed (m/s).
    pub wind_speed_ms: f64,
    /// Solar radiation (W/m²).
    pub solar_radiation_wm2: f64,
    /// Relative humidity (%).
    pub humidity_pct: f64,
    /// Barometric pressure (hPa).
    pub pressure_hpa: f64,
    /// Free-text weather category (e.g. "Clear", "Rain", "Clouds").
    pub condition: String,
    /// Observation time as Unix seconds.
    pub observed_at_unix: u64,
}

impl WeatherObservation {
    /// Returns the clear-sky fallback observation used when no provider
    /// data is available: 25 °C, 5 m/s, 800 W/m², 50 %, 1013.25 hPa.
    pub fn clear_sky_default() -> Self {
        Self {
            temperature_c: 25.0,
            wind_speed_ms: 5.0,
            solar_radiation_wm2: 800.0,
            humidity_pct: 50.0,
            pressure_hpa: 1013.25,
            condition: "Clear".to_string(),
            observed_at_unix: unix_now(),
        }
    }
}

/// Current wall-clock time as Unix seconds (0 if the clock is before epoch).
pub fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_sky_matches_fallback_contract() {
        let w = WeatherObservation::clear_sky_default();
        assert_eq!(w.temperature_c, 25.0);
        assert_eq!(w.wind_speed_ms, 5.0);
        assert_eq!(w.solar_radiation_wm2, 800.0);
        assert_eq!(w.humidity_pct, 50.0);
        assert_eq!(w.pressure_hpa, 1013.25);
        assert_eq!(w.condition, "Clear");
    }

    #[test]
    fn unix_now_is_nonzero() {
        assert!(unix_now() > 0);
    }
}
