//! Custom error types for geodesy input handling
//!
//! The computations themselves are total and never fail; these errors
//! cover parsing coordinates, reading route files and loading configuration.

use std::fmt;
use std::io;

/// Geodesy-related error types
#[derive(Debug)]
pub enum GeoError {
    /// I/O error
    IoError(io::Error),
    /// Coordinate text that could not be parsed
    InvalidCoordinate(String),
    /// Coordinate outside latitude [-90,90] / longitude [-180,180]
    OutOfRange(f64, f64),
    /// Malformed route file
    RouteFormat(String),
    /// Invalid configuration value
    Config(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for GeoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeoError::IoError(e) => write!(f, "I/O error: {}", e),
            GeoError::InvalidCoordinate(s) => write!(f, "Invalid coordinate: '{}'", s),
            GeoError::OutOfRange(lat, lon) => {
                write!(f, "Coordinate out of range: latitude {}, longitude {}", lat, lon)
            },
            GeoError::RouteFormat(msg) => write!(f, "Route format error: {}", msg),
            GeoError::Config(msg) => write!(f, "Configuration error: {}", msg),
            GeoError::GenericError(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for GeoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GeoError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for GeoError {
    fn from(error: io::Error) -> Self {
        GeoError::IoError(error)
    }
}

impl From<String> for GeoError {
    fn from(msg: String) -> Self {
        GeoError::GenericError(msg)
    }
}

/// Result type for fallible geodesy operations
pub type GeoResult<T> = Result<T, GeoError>;
