//! Fit between a shipment and a deliverer's planned trip
//!
//! A shipment can ride along a route either directly (the deliverer leaves
//! the route near its departure to pick up and rejoins near its arrival) or
//! through one of the intermediate points the deliverer announced.

use log::debug;

use super::criteria::MatchingCriteria;
use super::timing::estimate_delivery_minutes;
use crate::geodesy::constants::RESULT_DECIMALS;
use crate::geodesy::{distance, GeoPoint};
use crate::utils::math_utils::round_half_up;

/// A parcel to move from `pickup` to `delivery`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shipment {
    pub pickup: GeoPoint,
    pub delivery: GeoPoint,
}

/// A point along a planned route where the deliverer accepts pickups
#[derive(Debug, Clone, PartialEq)]
pub struct IntermediatePoint {
    pub location: GeoPoint,
    /// Pickups must be within this distance of the point, in kilometers
    pub radius_km: f64,
    pub label: String,
}

/// A trip announced by a deliverer
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedRoute {
    pub departure: GeoPoint,
    pub arrival: GeoPoint,
    /// Largest detour the deliverer accepts, in percent of the direct trip
    pub max_detour_percentage: f64,
    /// Pickup and delivery must lie this close to departure and arrival
    pub min_match_distance_km: f64,
    pub intermediate_points: Vec<IntermediatePoint>,
}

impl PlannedRoute {
    /// Create a direct route with no intermediate points
    pub fn new(departure: GeoPoint, arrival: GeoPoint, max_detour_percentage: f64, min_match_distance_km: f64) -> Self {
        PlannedRoute {
            departure,
            arrival,
            max_detour_percentage,
            min_match_distance_km,
            intermediate_points: Vec::new(),
        }
    }

    /// Add an intermediate pickup point
    pub fn with_intermediate_point(mut self, point: IntermediatePoint) -> Self {
        self.intermediate_points.push(point);
        self
    }

    /// Great-circle length of the trip without any detour
    pub fn direct_distance(&self) -> f64 {
        distance(self.departure, self.arrival)
    }
}

/// How the shipment fits on the route
#[derive(Debug, Clone, PartialEq)]
pub enum MatchKind {
    DirectRoute,
    /// Through the intermediate point with this label
    IntermediatePoint(String),
}

/// A compatible placement of a shipment on a route
#[derive(Debug, Clone, PartialEq)]
pub struct RouteMatch {
    pub kind: MatchKind,
    /// Pickup-to-delivery distance in kilometers
    pub shipment_distance_km: f64,
    pub detour_percentage: f64,
}

/// Detour-based score of a shipment against a route
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteScore {
    /// 0 to 50, higher for smaller detours
    pub score: f64,
    /// Length of departure → pickup → delivery → arrival
    pub detour_distance_km: f64,
    pub shipment_distance_km: f64,
    pub detour_percentage: f64,
    /// 0 when the detour exceeds the criteria
    pub estimated_minutes: u32,
}

/// Percentage of `extra_km` over `base_km`, 0 for a zero-length base
fn percentage_of(extra_km: f64, base_km: f64) -> f64 {
    if base_km == 0.0 {
        return 0.0;
    }
    round_half_up(extra_km / base_km * 100.0, RESULT_DECIMALS)
}

fn direct_match(shipment: &Shipment, route: &PlannedRoute, direct_km: f64) -> Option<RouteMatch> {
    let to_pickup = distance(route.departure, shipment.pickup);
    let carried = distance(shipment.pickup, shipment.delivery);
    let to_arrival = distance(shipment.delivery, route.arrival);

    if to_pickup > route.min_match_distance_km || to_arrival > route.min_match_distance_km {
        return None;
    }

    let total = to_pickup + carried + to_arrival;
    Some(RouteMatch {
        kind: MatchKind::DirectRoute,
        shipment_distance_km: carried,
        detour_percentage: percentage_of(total - direct_km, direct_km).max(0.0),
    })
}

fn intermediate_match(shipment: &Shipment, point: &IntermediatePoint, direct_km: f64) -> Option<RouteMatch> {
    let to_pickup = distance(point.location, shipment.pickup);
    if to_pickup > point.radius_km {
        return None;
    }

    let carried = distance(shipment.pickup, shipment.delivery);
    Some(RouteMatch {
        kind: MatchKind::IntermediatePoint(point.label.clone()),
        shipment_distance_km: carried,
        detour_percentage: percentage_of(to_pickup + carried, direct_km),
    })
}

/// Find the best way to carry a shipment on a route
///
/// The direct placement is tried first and only counts when it stays
/// within the route's maximum detour. Each intermediate point is then tried
/// in order; a candidate replaces the current best when its detour is
/// strictly smaller. Intermediate matches are not held to the maximum
/// detour.
///
/// # Returns
/// The lowest-detour match, or `None` when the shipment does not fit
pub fn check_compatibility(shipment: &Shipment, route: &PlannedRoute) -> Option<RouteMatch> {
    let direct_km = route.direct_distance();
    let mut best = direct_match(shipment, route, direct_km)
        .filter(|m| m.detour_percentage <= route.max_detour_percentage);

    for point in &route.intermediate_points {
        let candidate = match intermediate_match(shipment, point, direct_km) {
            Some(m) => m,
            None => continue,
        };
        let improves = best.as_ref()
            .map(|current| candidate.detour_percentage < current.detour_percentage)
            .unwrap_or(true);
        if improves {
            best = Some(candidate);
        }
    }

    debug!("Compatibility of shipment {} -> {}: {:?}", shipment.pickup, shipment.delivery, best);
    best
}

/// Score a shipment against a route by the full detour it causes
///
/// The deliverer is assumed to drive departure → pickup → delivery →
/// arrival. Detours over `criteria.max_detour_percentage` score 0.
pub fn score_route(shipment: &Shipment, route: &PlannedRoute, criteria: &MatchingCriteria) -> RouteScore {
    let direct_km = route.direct_distance();
    let carried = distance(shipment.pickup, shipment.delivery);
    let detour_km = round_half_up(
        distance(route.departure, shipment.pickup) + carried + distance(shipment.delivery, route.arrival),
        RESULT_DECIMALS,
    );
    let detour_percentage = percentage_of(detour_km - direct_km, direct_km);

    if detour_percentage > criteria.max_detour_percentage {
        return RouteScore {
            score: 0.0,
            detour_distance_km: detour_km,
            shipment_distance_km: carried,
            detour_percentage,
            estimated_minutes: 0,
        };
    }

    let score = (50.0 - detour_percentage / criteria.max_detour_percentage * 50.0).max(0.0);
    RouteScore {
        score,
        detour_distance_km: detour_km,
        shipment_distance_km: carried,
        detour_percentage,
        estimated_minutes: estimate_delivery_minutes(detour_km),
    }
}
