//! Great-circle distance and radius search over the plant catalogue.

use crate::fleet::Plant;

/// Mean Earth radius (km).
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine great-circle distance (km) between two WGS84 coordinates
/// given in degrees.
///
/// `a = sin²(Δlat/2) + cos(lat1)·cos(lat2)·sin²(Δlon/2)`, distance
/// `2R·atan2(√a, √(1−a))`. Continental-scale use only; no special-casing
/// for antipodal points or the poles.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Plants within `radius_km` of the query point, ascending by distance.
///
/// Ties keep the candidate list's original relative order (stable sort).
pub fn find_nearby(lat: f64, lon: f64, plants: &[Plant], radius_km: f64) -> Vec<Plant> {
    let mut within: Vec<(f64, &Plant)> = plants
        .iter()
        .map(|p| (haversine_km(lat, lon, p.latitude, p.longitude), p))
        .filter(|(d, _)| *d <= radius_km)
        .collect();
    within.sort_by(|a, b| a.0.total_cmp(&b.0));
    within.into_iter().map(|(_, p)| p.clone()).collect()
}
