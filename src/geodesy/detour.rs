//! Detour cost of passing through a waypoint

use super::constants::RESULT_DECIMALS;
use super::distance::distance;
use super::point::GeoPoint;
use crate::utils::math_utils::round_half_up;

/// Extra distance, as a percentage of the direct trip, for going
/// `origin → waypoint → destination` instead of `origin → destination`
///
/// Distances are the rounded values from [`distance`].
///
/// # Returns
/// Percentage rounded to 2 decimals, or 0 when origin and destination
/// coincide (zero direct distance)
pub fn detour_percentage(origin: GeoPoint, destination: GeoPoint, waypoint: GeoPoint) -> f64 {
    let direct = distance(origin, destination);
    if direct == 0.0 {
        return 0.0;
    }

    let via = distance(origin, waypoint) + distance(waypoint, destination);
    round_half_up((via - direct) / direct * 100.0, RESULT_DECIMALS)
}
