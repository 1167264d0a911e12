//! Point structure for geographic coordinates

use std::fmt;
use std::str::FromStr;

use super::constants::{latitude, longitude};
use super::errors::GeoError;

/// A point on the Earth's surface, in decimal degrees
///
/// Points are plain values: they are copied into every computation and
/// carry no identity beyond their coordinate pair. Construction does not
/// validate the range; use [`GeoPoint::is_valid`] when that matters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    /// Latitude in degrees, nominally in [-90, 90]
    pub latitude: f64,
    /// Longitude in degrees, nominally in [-180, 180]
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a new point from latitude and longitude in degrees
    pub fn new(latitude: f64, longitude: f64) -> Self {
        GeoPoint { latitude, longitude }
    }

    /// Check that latitude and longitude are within their inclusive bounds
    pub fn is_valid(&self) -> bool {
        (latitude::MIN..=latitude::MAX).contains(&self.latitude)
            && (longitude::MIN..=longitude::MAX).contains(&self.longitude)
    }

    /// Latitude in radians
    pub(crate) fn lat_rad(&self) -> f64 {
        self.latitude.to_radians()
    }

    /// Longitude in radians
    pub(crate) fn lon_rad(&self) -> f64 {
        self.longitude.to_radians()
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        GeoPoint::new(latitude, longitude)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

impl FromStr for GeoPoint {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::coordinate::parse_coordinate(s)
    }
}

/// Range check on a point: latitude in [-90, 90], longitude in [-180, 180]
pub fn is_valid_geo_point(point: GeoPoint) -> bool {
    point.is_valid()
}
