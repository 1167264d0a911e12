pub mod geodesy;
pub mod coordinate;
pub mod io;
pub mod matching;
pub mod config;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::{RouteKit, RouteSummary};
pub use crate::config::RouteKitConfig;

pub use geodesy::{
    bearing, centroid, closest_intersection, closest_point, destination_point, detour_percentage,
    distance, distance_between, is_valid_geo_point, is_within_radius, polygon_area, route_length,
    ClosestPair, ClosestPoint, GeoError, GeoPoint, GeoResult, EARTH_RADIUS_KM,
};
pub use io::RouteReader;
