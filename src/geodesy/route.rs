//! Aggregate computations over a whole route or polygon

use super::constants::{EARTH_RADIUS_KM, RESULT_DECIMALS};
use super::distance::distance;
use super::point::GeoPoint;
use crate::utils::math_utils::round_half_up;

/// Arithmetic mean of the latitudes and longitudes
///
/// This is a planar average, not a spherical centroid. It is close enough
/// for clustered points but drifts near the poles and breaks across the
/// antimeridian.
///
/// # Returns
/// The mean point, or `None` for an empty slice
pub fn centroid(points: &[GeoPoint]) -> Option<GeoPoint> {
    if points.is_empty() {
        return None;
    }

    let (lat_sum, lon_sum) = points.iter()
        .fold((0.0, 0.0), |(lat, lon), p| (lat + p.latitude, lon + p.longitude));
    let n = points.len() as f64;

    Some(GeoPoint::new(lat_sum / n, lon_sum / n))
}

/// Total length of a route, summing the distance of each consecutive leg
///
/// # Returns
/// Kilometers rounded to 2 decimals; 0 for fewer than two points
pub fn route_length(points: &[GeoPoint]) -> f64 {
    let total: f64 = points.windows(2)
        .map(|leg| distance(leg[0], leg[1]))
        .sum();

    round_half_up(total, RESULT_DECIMALS)
}

/// Area enclosed by a polygon on the sphere
///
/// Uses the longitude-based summation
/// `Σ Δlon_i · (2 + sin lat_i + sin lat_{i+1})`, closing the ring back to the
/// first vertex, scaled by `R²/2`. Polygons crossing the antimeridian or
/// spanning a large part of the globe are not corrected for.
///
/// # Arguments
/// * `points` - Polygon vertices in order; the ring is closed implicitly
///
/// # Returns
/// Area in square kilometers rounded to 2 decimals; 0 for fewer than three points
pub fn polygon_area(points: &[GeoPoint]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }

    let n = points.len();
    let mut sum = 0.0;
    for i in 0..n {
        let p1 = points[i];
        let p2 = points[(i + 1) % n];
        sum += (p2.lon_rad() - p1.lon_rad()) * (2.0 + p1.lat_rad().sin() + p2.lat_rad().sin());
    }

    let area = (sum * EARTH_RADIUS_KM * EARTH_RADIUS_KM / 2.0).abs();
    round_half_up(area, RESULT_DECIMALS)
}
