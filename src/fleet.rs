//! Plant catalogue: plant records and fleet lookups.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::weather::unix_now;

/// Closed set of supported plant technologies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlantType {
    Solar,
    Wind,
    Geothermal,
}

impl PlantType {
    /// All variants, in display order.
    pub const ALL: [PlantType; 3] = [PlantType::Solar, PlantType::Wind, PlantType::Geothermal];
}

impl fmt::Display for PlantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PlantType::Solar => "solar",
            PlantType::Wind => "wind",
            PlantType::Geothermal => "geothermal",
        };
        f.write_str(s)
    }
}

impl FromStr for PlantType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "solar" => Ok(PlantType::Solar),
            "wind" => Ok(PlantType::Wind),
            "geothermal" => Ok(PlantType::Geothermal),
            other => Err(format!(
                "unknown plant type \"{other}\", expected one of: solar, wind, geothermal"
            )),
        }
    }
}

/// An energy plant record.
///
/// Created from administrative input (config or API); mutated only on
/// status edits, never deleted in normal flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plant {
    /// Unique plant identifier.
    pub id: u32,
    /// Human-readable site name.
    pub name: String,
    /// Plant technology.
    pub plant_type: PlantType,
    /// Nameplate rated capacity (MW, > 0).
    pub capacity_mw: f64,
    /// WGS84 latitude (degrees).
    pub latitude: f64,
    /// WGS84 longitude (degrees).
    pub longitude: f64,
    /// Operational status (free text, e.g. "active").
    pub status: String,
    /// Reservoir temperature (°C) for geothermal plants.
    ///
    /// When absent, the estimator falls back to the per-site lookup table
    /// (default 170 °C for unrecognized names).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reservoir_temp_c: Option<f64>,
    /// Last modification time as Unix seconds.
    pub last_updated_unix: u64,
}

/// In-memory plant catalogue.
#[derive(Debug, Clone, Default)]
pub struct Fleet {
    plants: Vec<Plant>,
}

impl Fleet {
    /// Builds a fleet from a plant list, preserving order.
    pub fn new(plants: Vec<Plant>) -> Self {
        Self { plants }
    }

    /// All plants, in catalogue order.
    pub fn plants(&self) -> &[Plant] {
        &self.plants
    }

    /// Looks up a plant by id.
    pub fn get(&self, id: u32) -> Option<&Plant> {
        self.plants.iter().find(|p| p.id == id)
    }

    /// Plants of the given type, in catalogue order.
    pub fn of_type(&self, plant_type: PlantType) -> Vec<&Plant> {
        self.plants
            .iter()
            .filter(|p| p.plant_type == plant_type)
            .collect()
    }

    /// Number of plants in the catalogue.
    pub fn len(&self) -> usize {
        self.plants.len()
    }

    /// Whether the catalogue is empty.
    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }

    /// Updates a plant's status and touches its modification time.
    ///
    /// Returns `false` if no plant with the given id exists.
    pub fn update_status(&mut self, id: u32, status: &str) -> bool {
        match self.plants.iter_mut().find(|p| p.id == id) {
            Some(plant) => {
                plant.status = status.to_string();
                plant.last_updated_unix = unix_now();
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_plant(id: u32, plant_type: PlantType) -> Plant {
        Plant {
            id,
            name: format!("Plant {id}"),
            plant_type,
            capacity_mw: 100.0,
            latitude: 38.0,
            longitude: 32.0,
            status: "active".to_string(),
            reservoir_temp_c: None,
            last_updated_unix: 0,
        }
    }

    #[test]
    fn plant_type_round_trips_through_str() {
        for t in PlantType::ALL {
            let parsed: PlantType = t.to_string().parse().expect("display form should parse");
            assert_eq!(parsed, t);
        }
    }

    #[test]
    fn plant_type_rejects_unknown() {
        let err = "hydro".parse::<PlantType>();
        assert!(err.is_err());
    }

    #[test]
    fn get_finds_by_id() {
        let fleet = Fleet::new(vec![
            make_plant(1, PlantType::Solar),
            make_plant(2, PlantType::Wind),
        ]);
        assert_eq!(fleet.get(2).map(|p| p.id), Some(2));
        assert!(fleet.get(99).is_none());
    }

    #[test]
    fn of_type_filters_and_preserves_order() {
        let fleet = Fleet::new(vec![
            make_plant(1, PlantType::Wind),
            make_plant(2, PlantType::Solar),
            make_plant(3, PlantType::Wind),
        ]);
        let wind = fleet.of_type(PlantType::Wind);
        assert_eq!(wind.len(), 2);
        assert_eq!(wind[0].id, 1);
        assert_eq!(wind[1].id, 3);
    }

    #[test]
    fn update_status_touches_timestamp() {
        let mut fleet = Fleet::new(vec![make_plant(1, PlantType::Solar)]);
        assert!(fleet.update_status(1, "maintenance"));
        let plant = fleet.get(1).expect("plant 1 exists");
        assert_eq!(plant.status, "maintenance");
        assert!(plant.last_updated_unix > 0);
    }

    #[test]
    fn update_status_unknown_id_is_noop() {
        let mut fleet = Fleet::new(vec![make_plant(1, PlantType::Solar)]);
        assert!(!fleet.update_status(42, "offline"));
        assert_eq!(fleet.get(1).map(|p| p.status.as_str()), Some("active"));
    }
}
