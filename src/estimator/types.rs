//! Shared estimator result types and pricing constants.

use serde::Serialize;

/// Base electricity price (currency units per kWh) before demand adjustment.
pub const BASE_PRICE_PER_KWH: f64 = 2.5;

/// Fixed revenue horizon multiplier: monthly revenue is daily × 30,
/// not calendar-aware.
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Instantaneous production estimate for one plant.
///
/// Always recomputed from the current plant + weather pair; never cached
/// across calls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductionEstimate {
    /// Efficiency fraction (actual / rated output). Individual model
    /// factors are clamped but the product is not, so values slightly
    /// above 1.0 are reachable under extreme inputs.
    pub efficiency: f64,
    /// Estimated instantaneous production (MW).
    pub production_mw: f64,
    /// Demand-adjusted unit price (currency units per kWh).
    pub unit_price_per_kwh: f64,
    /// Daily revenue (currency units): `production_mw * 1000 * unit_price`.
    pub daily_revenue: f64,
    /// Monthly revenue (currency units): `daily_revenue * 30`.
    pub monthly_revenue: f64,
}

impl ProductionEstimate {
    /// Assembles an estimate from efficiency, capacity, and unit price.
    ///
    /// Bakes in the MW → kW conversion for revenue and the fixed 30-day
    /// month, so `monthly_revenue == daily_revenue * 30.0` holds exactly.
    pub fn from_parts(capacity_mw: f64, efficiency: f64, unit_price_per_kwh: f64) -> Self {
        let production_mw = capacity_mw * efficiency;
        let daily_revenue = production_mw * 1000.0 * unit_price_per_kwh;
        Self {
            efficiency,
            production_mw,
            unit_price_per_kwh,
            daily_revenue,
            monthly_revenue: daily_revenue * DAYS_PER_MONTH,
        }
    }
}

/// Geothermal estimate with the temperatures that drove it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeothermalEstimate {
    /// Common estimate fields.
    #[serde(flatten)]
    pub estimate: ProductionEstimate,
    /// Reservoir temperature used (°C).
    pub reservoir_temp_c: f64,
    /// Ambient air temperature used (°C).
    pub ambient_temp_c: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_parts_bakes_in_unit_conversion() {
        let e = ProductionEstimate::from_parts(100.0, 0.85, 2.5);
        assert_eq!(e.production_mw, 85.0);
        assert_eq!(e.daily_revenue, 85.0 * 1000.0 * 2.5);
    }

    #[test]
    fn monthly_revenue_is_exactly_thirty_dailies() {
        for (cap, eff, price) in [(100.0, 0.85, 2.5), (50.0, 0.675, 2.75), (0.0, 1.0, 3.25)] {
            let e = ProductionEstimate::from_parts(cap, eff, price);
            assert_eq!(e.monthly_revenue, e.daily_revenue * 30.0);
        }
    }

    #[test]
    fn zero_capacity_yields_zero_production_and_revenue() {
        let e = ProductionEstimate::from_parts(0.0, 0.85, BASE_PRICE_PER_KWH);
        assert_eq!(e.production_mw, 0.0);
        assert_eq!(e.daily_revenue, 0.0);
        assert_eq!(e.monthly_revenue, 0.0);
    }
}
