//! Thresholds applied when scoring a shipment against a route

/// Matching thresholds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchingCriteria {
    /// Maximum pickup-to-delivery distance considered, in kilometers
    pub max_distance_km: f64,
    /// Maximum accepted detour, as a percentage of the route's direct length
    pub max_detour_percentage: f64,
}

impl Default for MatchingCriteria {
    fn default() -> Self {
        MatchingCriteria {
            max_distance_km: 50.0,
            max_detour_percentage: 30.0,
        }
    }
}
