//! Tests for distance, bearing and projection

use crate::geodesy::{
    bearing, destination_point, detour_percentage, distance, distance_between,
    is_valid_geo_point, is_within_radius, GeoPoint,
};

fn paris() -> GeoPoint {
    GeoPoint::new(48.8566, 2.3522)
}

fn lyon() -> GeoPoint {
    GeoPoint::new(45.7578, 4.8320)
}

#[test]
fn test_distance_paris_lyon() {
    let d = distance(paris(), lyon());
    assert!((d - 392.0).abs() <= 1.0, "unexpected Paris-Lyon distance {}", d);
    assert_eq!(d, 391.98);
}

#[test]
fn test_distance_same_point_is_zero() {
    for p in [paris(), lyon(), GeoPoint::new(-90.0, 0.0), GeoPoint::new(0.0, 180.0)] {
        assert_eq!(distance(p, p), 0.0);
    }
}

#[test]
fn test_distance_is_symmetric() {
    let points = [paris(), lyon(), GeoPoint::new(-33.8688, 151.2093), GeoPoint::new(40.7128, -74.0060)];
    for &a in &points {
        for &b in &points {
            assert_eq!(distance(a, b), distance(b, a));
        }
    }
}

#[test]
fn test_distance_is_rounded_to_two_decimals() {
    // One degree of arc on the equator is 111.1949... km
    assert_eq!(distance(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 1.0)), 111.19);
}

#[test]
fn test_distance_between_matches_distance() {
    assert_eq!(distance_between(48.8566, 2.3522, 45.7578, 4.8320), distance(paris(), lyon()));
}

#[test]
fn test_bearing_cardinal_directions() {
    let origin = GeoPoint::new(0.0, 0.0);
    assert!((bearing(origin, GeoPoint::new(1.0, 0.0)) - 0.0).abs() < 1e-9);
    assert!((bearing(origin, GeoPoint::new(0.0, 1.0)) - 90.0).abs() < 1e-9);
    assert!((bearing(origin, GeoPoint::new(-1.0, 0.0)) - 180.0).abs() < 1e-9);
    assert!((bearing(origin, GeoPoint::new(0.0, -1.0)) - 270.0).abs() < 1e-9);
}

#[test]
fn test_bearing_in_range() {
    let points = [
        paris(), lyon(),
        GeoPoint::new(-33.8688, 151.2093),
        GeoPoint::new(40.7128, -74.0060),
        GeoPoint::new(0.0, 0.0),
        GeoPoint::new(89.9, -179.9),
    ];
    for &a in &points {
        for &b in &points {
            let theta = bearing(a, b);
            assert!((0.0..360.0).contains(&theta), "bearing {} out of range", theta);
        }
    }
}

#[test]
fn test_bearing_is_not_reversible() {
    // Great-circle bearings differ at each end of a long path
    let forward = bearing(paris(), GeoPoint::new(40.7128, -74.0060));
    let back = bearing(GeoPoint::new(40.7128, -74.0060), paris());
    assert!(((forward + 180.0) % 360.0 - back).abs() > 1.0);
}

#[test]
fn test_destination_point_round_trip() {
    for &(d, b) in &[(10.0, 45.0), (1.5, 0.0), (25.0, 200.0), (0.5, 359.0)] {
        let dest = destination_point(paris(), d, b);
        let back = distance(paris(), dest);
        assert!((back - d).abs() <= 0.01, "projected {} km, measured {} km", d, back);
    }
}

#[test]
fn test_destination_point_along_equator() {
    let dest = destination_point(GeoPoint::new(0.0, 0.0), 111.194_926_644_558_73, 90.0);
    assert!(dest.latitude.abs() < 1e-9);
    assert!((dest.longitude - 1.0).abs() < 1e-9);
}

#[test]
fn test_destination_point_zero_distance() {
    let dest = destination_point(lyon(), 0.0, 123.0);
    assert!((dest.latitude - lyon().latitude).abs() < 1e-12);
    assert!((dest.longitude - lyon().longitude).abs() < 1e-12);
}

#[test]
fn test_is_within_radius() {
    assert!(is_within_radius(paris(), paris(), 0.0));
    assert!(is_within_radius(paris(), lyon(), 391.98));
    assert!(!is_within_radius(paris(), lyon(), 391.97));
    assert!(!is_within_radius(paris(), lyon(), 100.0));
}

#[test]
fn test_detour_on_the_way_is_zero() {
    let origin = GeoPoint::new(0.0, 0.0);
    let destination = GeoPoint::new(0.0, 2.0);
    let pct = detour_percentage(origin, destination, GeoPoint::new(0.0, 1.0));
    assert!(pct.abs() < 0.01);
}

#[test]
fn test_detour_off_route() {
    let origin = GeoPoint::new(0.0, 0.0);
    let destination = GeoPoint::new(0.0, 2.0);
    // 157.25 + 157.25 against a direct 222.39 km
    assert_eq!(detour_percentage(origin, destination, GeoPoint::new(1.0, 1.0)), 41.42);
}

#[test]
fn test_detour_with_zero_direct_distance() {
    let origin = paris();
    assert_eq!(detour_percentage(origin, origin, lyon()), 0.0);
    assert_eq!(detour_percentage(origin, origin, origin), 0.0);
}

#[test]
fn test_is_valid_geo_point() {
    assert!(!is_valid_geo_point(GeoPoint::new(91.0, 0.0)));
    assert!(!is_valid_geo_point(GeoPoint::new(0.0, -180.5)));
    assert!(is_valid_geo_point(GeoPoint::new(90.0, 180.0)));
    assert!(is_valid_geo_point(GeoPoint::new(-90.0, -180.0)));
    assert!(!is_valid_geo_point(GeoPoint::new(f64::NAN, 0.0)));
}
