use std::path::Path;
use log::info;
use crate::config::RouteKitConfig;
use crate::geodesy::{self, ClosestPair, GeoPoint, GeoResult};
use crate::io::RouteReader;
use crate::matching::{self, MatchingCriteria, PlannedRoute, RelayPoint, RouteMatch, RouteScore, Shipment};
use crate::utils::logger::Logger;

/// Summary figures for a single route
#[derive(Debug, Clone, PartialEq)]
pub struct RouteSummary {
    /// Number of points in the route
    pub points: usize,
    /// Sum of leg distances in kilometers
    pub length_km: f64,
    /// Area enclosed when the route is treated as a closed polygon
    pub area_km2: f64,
    /// Planar mean of the points, `None` for an empty route
    pub centroid: Option<GeoPoint>,
    /// Points with latitude or longitude out of range
    pub invalid_points: usize,
}

/// Main interface to the RouteKit library
pub struct RouteKit {
    config: RouteKitConfig,
    logger: Logger,
}

impl RouteKit {
    /// Create a new RouteKit instance with default configuration
    ///
    /// # Arguments
    /// * `log_file` - Optional path to a log file; nothing is written when `None`
    ///
    /// # Returns
    /// A RouteKit instance or an error if the log file cannot be created
    pub fn new(log_file: Option<&str>) -> GeoResult<Self> {
        Self::with_config(RouteKitConfig::default(), log_file)
    }

    /// Create a new RouteKit instance with the given configuration
    pub fn with_config(config: RouteKitConfig, log_file: Option<&str>) -> GeoResult<Self> {
        let logger = match log_file {
            Some(path) => Logger::new(path)?,
            None => Logger::disabled(),
        };
        Ok(RouteKit { config, logger })
    }

    /// Active configuration
    pub fn config(&self) -> &RouteKitConfig {
        &self.config
    }

    /// Read a route from a GPX or text file
    pub fn load_route<P: AsRef<Path>>(&self, path: P) -> GeoResult<Vec<GeoPoint>> {
        let route = RouteReader::read_file(path.as_ref())?;
        self.logger.log(&format!("Loaded {} ({} points)", path.as_ref().display(), route.len()))?;
        Ok(route)
    }

    /// Load a route and compute its summary figures
    ///
    /// # Arguments
    /// * `path` - Path to the route file
    ///
    /// # Returns
    /// Length, area, centroid and validity counts for the route
    pub fn summarize_route<P: AsRef<Path>>(&self, path: P) -> GeoResult<RouteSummary> {
        let route = self.load_route(path)?;
        Ok(summarize(&route))
    }

    /// Find the closest pair of points between two route files
    pub fn compare_routes<P: AsRef<Path>, Q: AsRef<Path>>(&self, first: P, second: Q) -> GeoResult<Option<ClosestPair>> {
        let route1 = self.load_route(first)?;
        let route2 = self.load_route(second)?;

        let pair = geodesy::closest_intersection(&route1, &route2);
        if let Some(p) = &pair {
            info!("Routes come within {} km of each other", p.distance);
            self.logger.log(&format!("Closest pair: {} / {} ({} km)", p.point1, p.point2, p.distance))?;
        }
        Ok(pair)
    }

    /// Check a shipment against a planned route and score the full detour
    ///
    /// # Returns
    /// The best compatible placement (if any) and the detour score under
    /// the configured criteria
    pub fn evaluate_shipment(&self, shipment: &Shipment, route: &PlannedRoute) -> GeoResult<(Option<RouteMatch>, RouteScore)> {
        let criteria = MatchingCriteria::from(&self.config);

        let placement = matching::check_compatibility(shipment, route);
        let score = matching::score_route(shipment, route, &criteria);

        info!("Shipment {} -> {}: match {:?}, score {:.2}",
              shipment.pickup, shipment.delivery, placement.as_ref().map(|m| &m.kind), score.score);
        self.logger.log(&format!("Detour {}% over {} km, score {:.2}",
                                 score.detour_percentage, score.detour_distance_km, score.score))?;

        Ok((placement, score))
    }

    /// Relay points usable between pickup and delivery under the configured
    /// kinds and segment limit
    pub fn relay_candidates<'a>(&self, pickup: GeoPoint, delivery: GeoPoint, points: &'a [RelayPoint]) -> Vec<&'a RelayPoint> {
        matching::select_relay_points(pickup, delivery, points, &self.config.relay_kinds, self.config.relay_max_segment_km)
    }
}

/// Compute summary figures for in-memory route points
pub fn summarize(route: &[GeoPoint]) -> RouteSummary {
    RouteSummary {
        points: route.len(),
        length_km: geodesy::route_length(route),
        area_km2: geodesy::polygon_area(route),
        centroid: geodesy::centroid(route),
        invalid_points: route.iter().filter(|p| !geodesy::is_valid_geo_point(**p)).count(),
    }
}
