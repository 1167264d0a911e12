//! Travel time estimates

/// Estimate door-to-door delivery time for a trip length
///
/// Average speeds are 25 km/h for short urban trips (< 10 km), 45 km/h
/// for regional trips (< 50 km) and 70 km/h beyond.
///
/// # Returns
/// Whole minutes, rounded to nearest
pub fn estimate_delivery_minutes(distance_km: f64) -> u32 {
    let speed_kmh = if distance_km < 10.0 {
        25.0
    } else if distance_km < 50.0 {
        45.0
    } else {
        70.0
    };

    (distance_km.max(0.0) / speed_kmh * 60.0).round() as u32
}
