//! Renewable-plant production estimation: weather-conditioned efficiency
//! models, a geospatial proximity finder, and fleet-level reporting.

#[cfg(feature = "api")]
pub mod api;
pub mod config;
/// Solar, wind, and geothermal production models.
pub mod estimator;
pub mod fleet;
/// Haversine distance and radius search.
pub mod geo;
pub mod io;
pub mod report;
pub mod weather;
