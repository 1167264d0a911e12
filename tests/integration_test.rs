//! Integration tests for the RouteKit public API

extern crate std;

use std::fs;
use std::path::PathBuf;

use routekit::matching::{IntermediatePoint, MatchKind, PlannedRoute, RelayKind, RelayPoint, Shipment};
use routekit::{GeoError, GeoPoint, RouteKit, RouteKitConfig, RouteReader};

/// Write `content` to a uniquely named file in the temp directory
fn temp_route(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("routekit_{}_{}", std::process::id(), name));
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_summarize_text_route() {
    let path = temp_route("square.txt", "# 1 degree square\n0,0\n0,1\n1,1\n1,0\n");
    let kit = RouteKit::new(None).unwrap();

    let summary = kit.summarize_route(&path).unwrap();
    std::assert_eq!(summary.points, 4);
    std::assert!((summary.area_km2 - 12363.68).abs() < 0.02);
    std::assert_eq!(summary.centroid, Some(GeoPoint::new(0.5, 0.5)));
    std::assert_eq!(summary.invalid_points, 0);
    // Three legs of roughly one degree each
    std::assert!(summary.length_km > 330.0 && summary.length_km < 335.0);

    let _ = fs::remove_file(&path);
}

#[test]
fn test_compare_gpx_and_text_routes() {
    let gpx = temp_route("paris_lyon.gpx", r#"<?xml version="1.0"?>
<gpx version="1.1" creator="test">
  <rte>
    <rtept lat="48.8566" lon="2.3522"/>
    <rtept lat="47.3220" lon="5.0415"/>
    <rtept lat="45.7578" lon="4.8320"/>
  </rte>
</gpx>"#);
    let text = temp_route("geneva_lyon.txt", "46.2044,6.1432\n45.7578,4.8320\n");

    let kit = RouteKit::new(None).unwrap();
    let pair = kit.compare_routes(&gpx, &text).unwrap().unwrap();
    std::assert_eq!(pair.distance, 0.0);
    std::assert_eq!(pair.point1, GeoPoint::new(45.7578, 4.8320));

    let _ = fs::remove_file(&gpx);
    let _ = fs::remove_file(&text);
}

#[test]
fn test_compare_with_empty_route() {
    let empty = temp_route("empty.txt", "# nothing here\n");
    let one = temp_route("one.txt", "1,1\n");

    let kit = RouteKit::new(None).unwrap();
    std::assert!(kit.compare_routes(&empty, &one).unwrap().is_none());

    let _ = fs::remove_file(&empty);
    let _ = fs::remove_file(&one);
}

#[test]
fn test_missing_route_file() {
    let result = RouteReader::read_file("/nonexistent/routekit/route.gpx");
    std::assert!(matches!(result, Err(GeoError::IoError(_))));
}

#[test]
fn test_evaluate_shipment_with_config() {
    let config = RouteKitConfig::from_str("[matching]\nmax_detour_percentage = 20\n").unwrap();
    let kit = RouteKit::with_config(config, None).unwrap();

    let route = PlannedRoute::new(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 2.0), 20.0, 15.0)
        .with_intermediate_point(IntermediatePoint {
            location: GeoPoint::new(0.0, 1.0),
            radius_km: 5.0,
            label: "Midway".to_string(),
        });
    let shipment = Shipment {
        pickup: GeoPoint::new(0.0, 0.05),
        delivery: GeoPoint::new(0.0, 1.95),
    };

    let (placement, score) = kit.evaluate_shipment(&shipment, &route).unwrap();
    let placement = placement.unwrap();
    std::assert_eq!(placement.kind, MatchKind::DirectRoute);
    std::assert!(score.score > 49.0);
    std::assert!(score.estimated_minutes > 0);
}

#[test]
fn test_relay_candidates_use_configured_segment_and_kinds() {
    let config = RouteKitConfig::from_str(
        "[relay]\nmax_segment_km = 12\nkinds = [\"locker\"]\n",
    ).unwrap();
    let kit = RouteKit::with_config(config, None).unwrap();

    let relay = |id: &str, kind: RelayKind, lat: f64, lon: f64| RelayPoint {
        id: id.to_string(),
        name: id.to_string(),
        kind,
        location: GeoPoint::new(lat, lon),
        available_slots: 1,
        active: true,
    };
    let points = vec![
        relay("warehouse", RelayKind::Warehouse, 0.0, 0.1),
        relay("near", RelayKind::Locker, 0.0, 0.1),
        relay("offset", RelayKind::Locker, 0.05, 0.1),
    ];

    // "warehouse" is not an accepted kind; "offset" is 12.43 km from each end, over the 12 km limit
    let selected = kit.relay_candidates(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 0.2), &points);
    std::assert_eq!(selected.len(), 1);
    std::assert_eq!(selected[0].id, "near");
}

#[test]
fn test_api_log_file_records_operations() {
    let route = temp_route("logged.txt", "48.8566,2.3522\n45.7578,4.8320\n");
    let log = std::env::temp_dir().join(format!("routekit_{}_api.log", std::process::id()));

    let kit = RouteKit::new(log.to_str()).unwrap();
    kit.load_route(&route).unwrap();

    let content = fs::read_to_string(&log).unwrap();
    std::assert!(content.contains("2 points"));

    let _ = fs::remove_file(&route);
    let _ = fs::remove_file(&log);
}
