//! Spherical-earth geodesy
//!
//! Stateless functions over [`GeoPoint`] values on a sphere of radius
//! [`EARTH_RADIUS_KM`]. Nothing here allocates shared state or performs
//! I/O, so every function is safe to call from any thread.
//!
//! Distance, area and percentage results are rounded to 2 decimals.

pub mod constants;
mod detour;
mod distance;
pub mod errors;
mod point;
mod route;
mod search;
mod tests;

pub use constants::EARTH_RADIUS_KM;
pub use detour::detour_percentage;
pub use distance::{bearing, destination_point, distance, distance_between, is_within_radius};
pub use errors::{GeoError, GeoResult};
pub use point::{is_valid_geo_point, GeoPoint};
pub use route::{centroid, polygon_area, route_length};
pub use search::{closest_intersection, closest_point, ClosestPair, ClosestPoint};
