//! Tests for nearest-point searches

use crate::geodesy::{closest_intersection, closest_point, GeoPoint};

#[test]
fn test_closest_point_empty() {
    assert!(closest_point(GeoPoint::new(48.0, 2.0), &[]).is_none());
}

#[test]
fn test_closest_point_self() {
    let reference = GeoPoint::new(48.8566, 2.3522);
    let found = closest_point(reference, &[reference]).unwrap();
    assert_eq!(found.point, reference);
    assert_eq!(found.distance, 0.0);
}

#[test]
fn test_closest_point_picks_nearest() {
    let reference = GeoPoint::new(0.0, 0.0);
    let points = [GeoPoint::new(0.0, 3.0), GeoPoint::new(0.0, 1.0), GeoPoint::new(2.0, 0.0)];
    let found = closest_point(reference, &points).unwrap();
    assert_eq!(found.point, points[1]);
    assert_eq!(found.distance, 111.19);
}

#[test]
fn test_closest_point_first_wins_ties() {
    let reference = GeoPoint::new(0.0, 0.0);
    let points = [GeoPoint::new(0.0, 1.0), GeoPoint::new(1.0, 0.0), GeoPoint::new(0.0, -1.0)];
    let found = closest_point(reference, &points).unwrap();
    assert_eq!(found.point, points[0]);
}

#[test]
fn test_closest_intersection_empty_routes() {
    let route = [GeoPoint::new(0.0, 0.0)];
    assert!(closest_intersection(&[], &route).is_none());
    assert!(closest_intersection(&route, &[]).is_none());
}

#[test]
fn test_closest_intersection_shared_point() {
    let shared = GeoPoint::new(45.7578, 4.8320);
    let route1 = [GeoPoint::new(48.8566, 2.3522), shared, GeoPoint::new(43.2965, 5.3698)];
    let route2 = [GeoPoint::new(46.2044, 6.1432), shared];

    let pair = closest_intersection(&route1, &route2).unwrap();
    assert_eq!(pair.distance, 0.0);
    assert_eq!(pair.point1, shared);
    assert_eq!(pair.point2, shared);
}

#[test]
fn test_closest_intersection_ignores_crossing_segments() {
    // Two segments crossing at (0, 0) with no vertex there
    let route1 = [GeoPoint::new(-1.0, 0.0), GeoPoint::new(1.0, 0.0)];
    let route2 = [GeoPoint::new(0.0, -1.0), GeoPoint::new(0.0, 1.0)];

    let pair = closest_intersection(&route1, &route2).unwrap();
    assert!(pair.distance > 150.0);
    assert_eq!(pair.point1, route1[0]);
    assert_eq!(pair.point2, route2[0]);
}
