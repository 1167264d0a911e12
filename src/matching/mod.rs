//! Delivery matching on top of the geodesy functions
//!
//! Route compatibility, detour scoring, relay point selection and travel
//! time estimates used when pairing shipments with deliverers.

mod criteria;
mod relay;
mod route_match;
mod timing;

pub use criteria::MatchingCriteria;
pub use relay::{select_relay_points, RelayKind, RelayPoint, DEFAULT_RELAY_KINDS};
pub use route_match::{
    check_compatibility, score_route, IntermediatePoint, MatchKind, PlannedRoute, RouteMatch, RouteScore, Shipment,
};
pub use timing::estimate_delivery_minutes;
