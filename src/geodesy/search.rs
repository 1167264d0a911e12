//! Nearest-point searches over point sequences

use log::debug;

use super::distance::distance;
use super::point::GeoPoint;

/// A point paired with its distance from a reference
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosestPoint {
    /// The nearest point found
    pub point: GeoPoint,
    /// Distance to the reference in kilometers (rounded to 2 decimals)
    pub distance: f64,
}

/// The closest pair of points between two routes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosestPair {
    /// Point taken from the first route
    pub point1: GeoPoint,
    /// Point taken from the second route
    pub point2: GeoPoint,
    /// Distance between the two points in kilometers
    pub distance: f64,
}

/// Find the point in `points` nearest to `reference`
///
/// Linear scan with a strict comparison, so on equal distances the
/// earliest point wins.
///
/// # Returns
/// The nearest point and its distance, or `None` if `points` is empty
pub fn closest_point(reference: GeoPoint, points: &[GeoPoint]) -> Option<ClosestPoint> {
    let mut best: Option<ClosestPoint> = None;

    for &point in points {
        let d = distance(reference, point);
        if best.map_or(true, |current| d < current.distance) {
            best = Some(ClosestPoint { point, distance: d });
        }
    }

    best
}

/// Find the closest pair of points between two routes
///
/// This compares every point of `route1` with every point of `route2`
/// (O(n·m)). It does not intersect the segments between points: two
/// crossing polylines with no shared vertex still report a non-zero
/// distance.
///
/// # Returns
/// The closest pair, first-seen on ties, or `None` if either route is empty
pub fn closest_intersection(route1: &[GeoPoint], route2: &[GeoPoint]) -> Option<ClosestPair> {
    debug!("Searching closest pair across {}x{} route points", route1.len(), route2.len());

    let mut best: Option<ClosestPair> = None;

    for &point1 in route1 {
        for &point2 in route2 {
            let d = distance(point1, point2);
            if best.map_or(true, |current| d < current.distance) {
                best = Some(ClosestPair { point1, point2, distance: d });
            }
        }
    }

    if let Some(pair) = &best {
        debug!("Closest pair {} / {} at {} km", pair.point1, pair.point2, pair.distance);
    }

    best
}
