//! Per-plant estimate rows and post-hoc fleet aggregation.

use std::fmt;

use serde::Serialize;

use crate::estimator;
use crate::estimator::ProductionEstimate;
use crate::fleet::{Plant, PlantType};
use crate::weather::WeatherObservation;

/// One plant's estimate, annotated with plant identity.
#[derive(Debug, Clone, Serialize)]
pub struct PlantEstimate {
    /// Plant identifier.
    pub plant_id: u32,
    /// Site name.
    pub name: String,
    /// Plant technology.
    pub plant_type: PlantType,
    /// Rated capacity (MW).
    pub capacity_mw: f64,
    /// The production estimate.
    #[serde(flatten)]
    pub estimate: ProductionEstimate,
    /// Reservoir temperature used (°C), geothermal only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservoir_temp_c: Option<f64>,
}

impl PlantEstimate {
    /// Computes the estimate row for one plant under the given weather.
    pub fn for_plant(plant: &Plant, weather: &WeatherObservation) -> Self {
        let reservoir_temp_c = match plant.plant_type {
            PlantType::Geothermal => Some(estimator::reservoir_temp_for(plant)),
            _ => None,
        };
        Self {
            plant_id: plant.id,
            name: plant.name.clone(),
            plant_type: plant.plant_type,
            capacity_mw: plant.capacity_mw,
            estimate: estimator::estimate(plant, weather),
            reservoir_temp_c,
        }
    }
}

impl fmt::Display for PlantEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:<3} {:<24} {:>10} | cap={:>7.1} MW  eff={:>5.1}%  prod={:>7.1} MW | \
             price={:.2}/kWh  daily={:>10.0}  monthly={:>11.0}",
            self.plant_id,
            self.name,
            self.plant_type.to_string(),
            self.capacity_mw,
            self.estimate.efficiency * 100.0,
            self.estimate.production_mw,
            self.estimate.unit_price_per_kwh,
            self.estimate.daily_revenue,
            self.estimate.monthly_revenue,
        )
    }
}

/// Aggregate production figures for a whole fleet.
///
/// Computed post-hoc from the estimate rows so totals always agree with
/// the per-plant records.
#[derive(Debug, Clone, Serialize)]
pub struct FleetReport {
    /// Number of plants aggregated.
    pub plant_count: usize,
    /// Sum of all production (MW).
    pub total_production_mw: f64,
    /// Sum of all daily revenue (currency units).
    pub total_daily_revenue: f64,
    /// Solar production subtotal (MW).
    pub solar_mw: f64,
    /// Wind production subtotal (MW).
    pub wind_mw: f64,
    /// Geothermal production subtotal (MW).
    pub geothermal_mw: f64,
}

impl FleetReport {
    /// Aggregates totals from the complete set of estimate rows.
    pub fn from_rows(rows: &[PlantEstimate]) -> Self {
        let mut report = Self {
            plant_count: rows.len(),
            total_production_mw: 0.0,
            total_daily_revenue: 0.0,
            solar_mw: 0.0,
            wind_mw: 0.0,
            geothermal_mw: 0.0,
        };
        for row in rows {
            report.total_production_mw += row.estimate.production_mw;
            report.total_daily_revenue += row.estimate.daily_revenue;
            match row.plant_type {
                PlantType::Solar => report.solar_mw += row.estimate.production_mw,
                PlantType::Wind => report.wind_mw += row.estimate.production_mw,
                PlantType::Geothermal => report.geothermal_mw += row.estimate.production_mw,
            }
        }
        report
    }

    /// Production subtotal for one plant type (MW).
    pub fn production_for(&self, plant_type: PlantType) -> f64 {
        match plant_type {
            PlantType::Solar => self.solar_mw,
            PlantType::Wind => self.wind_mw,
            PlantType::Geothermal => self.geothermal_mw,
        }
    }
}

impl fmt::Display for FleetReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Fleet Report ---")?;
        writeln!(f, "Plants:            {}", self.plant_count)?;
        writeln!(f, "Total production:  {:.2} MW", self.total_production_mw)?;
        writeln!(f, "  solar:           {:.2} MW", self.solar_mw)?;
        writeln!(f, "  wind:            {:.2} MW", self.wind_mw)?;
        writeln!(f, "  geothermal:      {:.2} MW", self.geothermal_mw)?;
        write!(f, "Daily revenue:     {:.0}", self.total_daily_revenue)
    }
}

/// Computes estimate rows for every plant in catalogue order.
pub fn fleet_estimates(plants: &[Plant], weather: &WeatherObservation) -> Vec<PlantEstimate> {
    plants
        .iter()
        .map(|p| PlantEstimate::for_plant(p, weather))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_plant(id: u32, plant_type: PlantType, capacity_mw: f64) -> Plant {
        Plant {
            id,
            name: format!("Plant {id}"),
            plant_type,
            capacity_mw,
            latitude: 38.0,
            longitude: 30.0,
            status: "active".to_string(),
            reservoir_temp_c: None,
            last_updated_unix: 0,
        }
    }

    #[test]
    fn totals_equal_sum_of_rows() {
        let plants = vec![
            make_plant(1, PlantType::Solar, 100.0),
            make_plant(2, PlantType::Wind, 50.0),
            make_plant(3, PlantType::Geothermal, 80.0),
        ];
        let weather = WeatherObservation::clear_sky_default();
        let rows = fleet_estimates(&plants, &weather);
        let report = FleetReport::from_rows(&rows);

        let sum: f64 = rows.iter().map(|r| r.estimate.production_mw).sum();
        assert!((report.total_production_mw - sum).abs() < 1e-9);
        assert_eq!(report.plant_count, 3);
    }

    #[test]
    fn per_type_subtotals_partition_the_total() {
        let plants = vec![
            make_plant(1, PlantType::Solar, 100.0),
            make_plant(2, PlantType::Solar, 40.0),
            make_plant(3, PlantType::Wind, 50.0),
        ];
        let weather = WeatherObservation::clear_sky_default();
        let report = FleetReport::from_rows(&fleet_estimates(&plants, &weather));
        assert!(
            (report.solar_mw + report.wind_mw + report.geothermal_mw
                - report.total_production_mw)
                .abs()
                < 1e-9
        );
        assert_eq!(report.geothermal_mw, 0.0);
        assert_eq!(report.production_for(PlantType::Wind), report.wind_mw);
    }

    #[test]
    fn geothermal_row_carries_reservoir_temperature() {
        let plants = vec![make_plant(1, PlantType::Geothermal, 80.0)];
        let weather = WeatherObservation::clear_sky_default();
        let rows = fleet_estimates(&plants, &weather);
        assert_eq!(rows[0].reservoir_temp_c, Some(170.0));
    }

    #[test]
    fn non_geothermal_rows_have_no_reservoir_field() {
        let plants = vec![make_plant(1, PlantType::Solar, 100.0)];
        let weather = WeatherObservation::clear_sky_default();
        let rows = fleet_estimates(&plants, &weather);
        assert!(rows[0].reservoir_temp_c.is_none());
    }

    #[test]
    fn empty_fleet_reports_zeroes() {
        let report = FleetReport::from_rows(&[]);
        assert_eq!(report.plant_count, 0);
        assert_eq!(report.total_production_mw, 0.0);
    }

    #[test]
    fn display_does_not_panic() {
        let plants = vec![make_plant(1, PlantType::Wind, 50.0)];
        let weather = WeatherObservation::clear_sky_default();
        let rows = fleet_estimates(&plants, &weather);
        let report = FleetReport::from_rows(&rows);
        assert!(!format!("{}", rows[0]).is_empty());
        assert!(!format!("{report}").is_empty());
    }
}
