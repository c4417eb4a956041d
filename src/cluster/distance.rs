use std::f64::consts::PI;

use super::point::LatLng;

/// Coefficient to translate from degrees to radians
pub const DEGREE_RAD: f64 = PI / 180.0;

/// Earth radius in kilometers
pub const EARTH_R: f64 = 6371.0;

/// Calculates great-circle (Haversine) distance between two points
///
/// # Returns
///
/// Distance in kilometers
pub fn distance_km(a: &LatLng, b: &LatLng) -> f64 {
    let d_lat = (b.lat - a.lat) * DEGREE_RAD;
    let d_lng = (b.lng - a.lng) * DEGREE_RAD;

    let s_lat = (d_lat / 2.0).sin();
    let s_lng = (d_lng / 2.0).sin();
    let h = s_lat * s_lat
        + (a.lat * DEGREE_RAD).cos() * (b.lat * DEGREE_RAD).cos() * s_lng * s_lng;

    2.0 * EARTH_R * h.sqrt().atan2((1.0 - h).sqrt())
}
