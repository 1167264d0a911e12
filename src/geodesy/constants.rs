//! Constants shared by the geodesy computations

/// Mean Earth radius in kilometers (spherical model, no ellipsoidal correction)
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Latitude bounds in degrees (inclusive)
pub mod latitude {
    pub const MIN: f64 = -90.0;
    pub const MAX: f64 = 90.0;
}

/// Longitude bounds in degrees (inclusive)
pub mod longitude {
    pub const MIN: f64 = -180.0;
    pub const MAX: f64 = 180.0;
}

/// Number of decimals kept on distance, area and percentage results
pub const RESULT_DECIMALS: i32 = 2;
