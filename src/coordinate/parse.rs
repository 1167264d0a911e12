//! Coordinate string parsing
//!
//! Accepts `"lat,lon"`, `"lat;lon"` or `"lat lon"`, with optional
//! surrounding whitespace.

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::geodesy::{GeoError, GeoPoint, GeoResult};

lazy_static! {
    static ref COORDINATE_PATTERN: Regex = Regex::new(
        r"^\s*([+-]?\d+(?:\.\d+)?)\s*(?:[,;]|\s)\s*([+-]?\d+(?:\.\d+)?)\s*$"
    ).expect("coordinate pattern is a valid regex");
}

/// Parse a `"lat,lon"` string into a point
///
/// Out-of-range values are accepted; see [`parse_coordinate_strict`].
pub fn parse_coordinate(text: &str) -> GeoResult<GeoPoint> {
    let caps = COORDINATE_PATTERN.captures(text)
        .ok_or_else(|| GeoError::InvalidCoordinate(text.to_string()))?;

    let latitude = caps[1].parse::<f64>()
        .map_err(|_| GeoError::InvalidCoordinate(text.to_string()))?;
    let longitude = caps[2].parse::<f64>()
        .map_err(|_| GeoError::InvalidCoordinate(text.to_string()))?;

    debug!("Parsed coordinate '{}' as lat={}, lon={}", text.trim(), latitude, longitude);
    Ok(GeoPoint::new(latitude, longitude))
}

/// Parse a `"lat,lon"` string and reject points outside the valid range
pub fn parse_coordinate_strict(text: &str) -> GeoResult<GeoPoint> {
    let point = parse_coordinate(text)?;
    if !point.is_valid() {
        return Err(GeoError::OutOfRange(point.latitude, point.longitude));
    }
    Ok(point)
}
