//! Coordinate input handling
//!
//! Turns user-supplied coordinate text into [`GeoPoint`](crate::geodesy::GeoPoint) values.

mod parse;

pub use self::parse::{parse_coordinate, parse_coordinate_strict};
