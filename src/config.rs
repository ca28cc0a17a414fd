//! TOML-based fleet configuration and preset definitions.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::fleet::{Fleet, Plant, PlantType};
use crate::weather::{WeatherObservation, unix_now};

/// Top-level fleet configuration parsed from TOML.
///
/// The `[weather]` section defaults to the clear-sky fallback observation.
/// Load from TOML with [`FleetConfig::from_toml_file`] or use a built-in
/// preset via [`FleetConfig::from_preset`].
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FleetConfig {
    /// Current weather observation applied to every plant.
    #[serde(default)]
    pub weather: WeatherSection,
    /// Plant catalogue entries.
    #[serde(default)]
    pub plants: Vec<PlantSection>,
}

/// Weather observation parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WeatherSection {
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
    /// Weather category text (provider capitalization, e.g. "Clear").
    pub condition: String,
}

impl Default for WeatherSection {
    fn default() -> Self {
        Self {
            temperature_c: 25.0,
            wind_speed_ms: 5.0,
            solar_radiation_wm2: 800.0,
            humidity_pct: 50.0,
            pressure_hpa: 1013.25,
            condition: "Clear".to_string(),
        }
    }
}

/// One plant catalogue entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlantSection {
    /// Unique plant identifier.
    pub id: u32,
    /// Site name.
    pub name: String,
    /// Plant technology: `"solar"`, `"wind"`, or `"geothermal"`.
    #[serde(rename = "type")]
    pub plant_type: PlantType,
    /// Rated capacity (MW, must be > 0).
    pub capacity_mw: f64,
    /// WGS84 latitude (degrees, [-90, 90]).
    pub latitude: f64,
    /// WGS84 longitude (degrees, [-180, 180]).
    pub longitude: f64,
    /// Operational status.
    #[serde(default = "default_status")]
    pub status: String,
    /// Reservoir temperature (°C), geothermal plants only.
    #[serde(default)]
    pub reservoir_temp_c: Option<f64>,
}

fn default_status() -> String {
    "active".to_string()
}

/// Configuration error with field path and constraint description.
#[derive(Debug)]
pub struct ConfigError {
    /// Dotted field path (e.g., `"plants[2].capacity_mw"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {} — {}", self.field, self.message)
    }
}

impl FleetConfig {
    /// Returns the demo preset: one plant of each type at reference capacity.
    pub fn demo() -> Self {
        Self {
            weather: WeatherSection::default(),
            plants: vec![
                PlantSection {
                    id: 1,
                    name: "Demo GES".to_string(),
                    plant_type: PlantType::Solar,
                    capacity_mw: 100.0,
                    latitude: 37.7144,
                    longitude: 33.5506,
                    status: default_status(),
                    reservoir_temp_c: None,
                },
                PlantSection {
                    id: 2,
                    name: "Demo RES".to_string(),
                    plant_type: PlantType::Wind,
                    capacity_mw: 50.0,
                    latitude: 40.1553,
                    longitude: 26.4142,
                    status: default_status(),
                    reservoir_temp_c: None,
                },
                PlantSection {
                    id: 3,
                    name: "Demo JES".to_string(),
                    plant_type: PlantType::Geothermal,
                    capacity_mw: 80.0,
                    latitude: 37.9500,
                    longitude: 28.8300,
                    status: default_status(),
                    reservoir_temp_c: None,
                },
            ],
        }
    }

    /// Returns the anatolia preset: a realistic mixed fleet of named
    /// Anatolian sites, including the four tabled geothermal reservoirs.
    pub fn anatolia() -> Self {
        let p = |id, name: &str, plant_type, capacity_mw, latitude, longitude| PlantSection {
            id,
            name: name.to_string(),
            plant_type,
            capacity_mw,
            latitude,
            longitude,
            status: default_status(),
            reservoir_temp_c: None,
        };
        Self {
            weather: WeatherSection::default(),
            plants: vec![
                p(1, "Karapınar GES", PlantType::Solar, 1350.0, 37.7144, 33.5506),
                p(2, "Konya GES", PlantType::Solar, 600.0, 37.8667, 32.4833),
                p(3, "Kalyon GES", PlantType::Solar, 506.0, 39.2153, 32.8597),
                p(4, "Çanakkale RES", PlantType::Wind, 1320.0, 40.1553, 26.4142),
                p(5, "İzmir RES", PlantType::Wind, 801.0, 38.4622, 27.2178),
                p(6, "Balıkesir RES", PlantType::Wind, 343.0, 39.6484, 27.8826),
                p(7, "Denizli JES", PlantType::Geothermal, 250.0, 37.9500, 28.8300),
                p(8, "Aydın JES", PlantType::Geothermal, 110.0, 37.8444, 27.8458),
                p(9, "Manisa JES", PlantType::Geothermal, 90.0, 38.6191, 27.4289),
                p(10, "Çanakkale JES", PlantType::Geothermal, 75.0, 40.0158, 26.5622),
            ],
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["demo", "anatolia"];

    /// Loads a fleet from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "demo" => Ok(Self::demo()),
            "anatolia" => Ok(Self::anatolia()),
            _ => Err(ConfigError {
                field: "preset".to_string(),
                message: format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            }),
        }
    }

    /// Parses a fleet configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "fleet".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a fleet configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        let w = &self.weather;
        if !(0.0..=100.0).contains(&w.humidity_pct) {
            errors.push(ConfigError {
                field: "weather.humidity_pct".into(),
                message: "must be in [0.0, 100.0]".into(),
            });
        }
        if w.wind_speed_ms < 0.0 {
            errors.push(ConfigError {
                field: "weather.wind_speed_ms".into(),
                message: "must be >= 0".into(),
            });
        }
        if w.solar_radiation_wm2 < 0.0 {
            errors.push(ConfigError {
                field: "weather.solar_radiation_wm2".into(),
                message: "must be >= 0".into(),
            });
        }

        if self.plants.is_empty() {
            errors.push(ConfigError {
                field: "plants".into(),
                message: "must contain at least one plant".into(),
            });
        }

        let mut seen_ids = Vec::new();
        for (i, p) in self.plants.iter().enumerate() {
            if seen_ids.contains(&p.id) {
                errors.push(ConfigError {
                    field: format!("plants[{i}].id"),
                    message: format!("duplicate id {}", p.id),
                });
            }
            seen_ids.push(p.id);

            if p.name.trim().is_empty() {
                errors.push(ConfigError {
                    field: format!("plants[{i}].name"),
                    message: "must not be empty".into(),
                });
            }
            if p.capacity_mw <= 0.0 {
                errors.push(ConfigError {
                    field: format!("plants[{i}].capacity_mw"),
                    message: "must be > 0".into(),
                });
            }
            if !(-90.0..=90.0).contains(&p.latitude) {
                errors.push(ConfigError {
                    field: format!("plants[{i}].latitude"),
                    message: "must be in [-90.0, 90.0]".into(),
                });
            }
            if !(-180.0..=180.0).contains(&p.longitude) {
                errors.push(ConfigError {
                    field: format!("plants[{i}].longitude"),
                    message: "must be in [-180.0, 180.0]".into(),
                });
            }
            if let Some(res) = p.reservoir_temp_c {
                if res <= 0.0 {
                    errors.push(ConfigError {
                        field: format!("plants[{i}].reservoir_temp_c"),
                        message: "must be > 0 when present".into(),
                    });
                }
            }
        }

        errors
    }

    /// Builds the weather observation from the `[weather]` section,
    /// stamped with the current time.
    pub fn to_weather(&self) -> WeatherObservation {
        let w = &self.weather;
        WeatherObservation {
            temperature_c: w.temperature_c,
            wind_speed_ms: w.wind_speed_ms,
            solar_radiation_wm2: w.solar_radiation_wm2,
            humidity_pct: w.humidity_pct,
            pressure_hpa: w.pressure_hpa,
            condition: w.condition.clone(),
            observed_at_unix: unix_now(),
        }
    }

    /// Builds the plant catalogue from the `[[plants]]` entries.
    pub fn to_fleet(&self) -> Fleet {
        let now = unix_now();
        let plants = self
            .plants
            .iter()
            .map(|p| Plant {
                id: p.id,
                name: p.name.clone(),
                plant_type: p.plant_type,
                capacity_mw: p.capacity_mw,
                latitude: p.latitude,
                longitude: p.longitude,
                status: p.status.clone(),
                reservoir_temp_c: p.reservoir_temp_c,
                last_updated_unix: now,
            })
            .collect();
        Fleet::new(plants)
    }
}
