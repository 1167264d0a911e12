//! Great-circle distance, bearing and forward projection
//!
//! All angles at this boundary are degrees, all distances kilometers.
//! Radians are only used internally.

use super::constants::{EARTH_RADIUS_KM, RESULT_DECIMALS};
use super::point::GeoPoint;
use crate::utils::math_utils::round_half_up;

/// Great-circle distance between two points using the Haversine formula
///
/// # Arguments
/// * `a` - First point
/// * `b` - Second point
///
/// # Returns
/// Distance in kilometers, rounded to 2 decimals
pub fn distance(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat_rad().cos() * b.lat_rad().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    round_half_up(EARTH_RADIUS_KM * c, RESULT_DECIMALS)
}

/// Distance between two coordinate pairs given as raw degrees
///
/// Same result as [`distance`]; convenient when coordinates come straight
/// from storage columns.
pub fn distance_between(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    distance(GeoPoint::new(lat1, lon1), GeoPoint::new(lat2, lon2))
}

/// Initial bearing along the great circle from `from` to `to`
///
/// # Returns
/// Degrees clockwise from north, in [0, 360)
pub fn bearing(from: GeoPoint, to: GeoPoint) -> f64 {
    let lat1 = from.lat_rad();
    let lat2 = to.lat_rad();
    let d_lon = (to.longitude - from.longitude).to_radians();

    let y = d_lon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();
    let theta = y.atan2(x).to_degrees();

    (theta + 360.0) % 360.0
}

/// Project a point along a great circle
///
/// # Arguments
/// * `start` - Starting point
/// * `distance_km` - Distance to travel in kilometers
/// * `bearing_deg` - Initial bearing in degrees clockwise from north
///
/// # Returns
/// The destination point. The result is not rounded and its longitude is
/// not wrapped back into [-180, 180].
pub fn destination_point(start: GeoPoint, distance_km: f64, bearing_deg: f64) -> GeoPoint {
    let delta = distance_km / EARTH_RADIUS_KM;
    let theta = bearing_deg.to_radians();
    let lat1 = start.lat_rad();
    let lon1 = start.lon_rad();

    let lat2 = (lat1.sin() * delta.cos() + lat1.cos() * delta.sin() * theta.cos()).asin();
    let lon2 = lon1
        + (theta.sin() * delta.sin() * lat1.cos()).atan2(delta.cos() - lat1.sin() * lat2.sin());

    GeoPoint::new(lat2.to_degrees(), lon2.to_degrees())
}

/// Check whether `point` lies within `radius_km` of `center` (boundary inclusive)
pub fn is_within_radius(center: GeoPoint, point: GeoPoint, radius_km: f64) -> bool {
    distance(center, point) <= radius_km
}
