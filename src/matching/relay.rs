//! Relay point selection for split deliveries
//!
//! A long delivery can be handed over at a relay point (a shop or locker)
//! between pickup and delivery. Candidates must be reachable from both ends.

use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::geodesy::{distance, GeoError, GeoPoint};

/// Kind of handover location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelayKind {
    Warehouse,
    PartnerShop,
    Locker,
    PickupPoint,
}

/// Kinds accepted when the caller has no preference
pub const DEFAULT_RELAY_KINDS: [RelayKind; 2] = [RelayKind::Warehouse, RelayKind::PartnerShop];

impl RelayKind {
    /// Configuration name of this kind
    pub fn name(&self) -> &'static str {
        match self {
            RelayKind::Warehouse => "warehouse",
            RelayKind::PartnerShop => "partner_shop",
            RelayKind::Locker => "locker",
            RelayKind::PickupPoint => "pickup_point",
        }
    }
}

impl fmt::Display for RelayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RelayKind {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "warehouse" => Ok(RelayKind::Warehouse),
            "partner_shop" => Ok(RelayKind::PartnerShop),
            "locker" => Ok(RelayKind::Locker),
            "pickup_point" => Ok(RelayKind::PickupPoint),
            _ => Err(GeoError::GenericError(format!("Unknown relay kind: {}", s))),
        }
    }
}

/// A handover location
#[derive(Debug, Clone, PartialEq)]
pub struct RelayPoint {
    pub id: String,
    pub name: String,
    pub kind: RelayKind,
    pub location: GeoPoint,
    pub available_slots: u32,
    pub active: bool,
}

impl RelayPoint {
    /// Total distance pickup → relay → delivery
    fn leg_total(&self, pickup: GeoPoint, delivery: GeoPoint) -> f64 {
        distance(pickup, self.location) + distance(self.location, delivery)
    }
}

/// Choose relay points usable between `pickup` and `delivery`
///
/// A point qualifies when its kind is listed in `accepted_kinds`, it is
/// active, has at least one free slot and is within `max_segment_km` of
/// both the pickup and the delivery (inclusive). An empty `accepted_kinds`
/// accepts nothing.
///
/// # Returns
/// Qualifying points ordered by total pickup → relay → delivery distance,
/// keeping input order among equals
pub fn select_relay_points<'a>(
    pickup: GeoPoint,
    delivery: GeoPoint,
    candidates: &'a [RelayPoint],
    accepted_kinds: &[RelayKind],
    max_segment_km: f64,
) -> Vec<&'a RelayPoint> {
    let mut selected: Vec<(f64, &RelayPoint)> = candidates.iter()
        .filter(|p| accepted_kinds.contains(&p.kind))
        .filter(|p| p.active && p.available_slots > 0)
        .filter(|p| {
            distance(pickup, p.location) <= max_segment_km
                && distance(p.location, delivery) <= max_segment_km
        })
        .map(|p| (p.leg_total(pickup, delivery), p))
        .collect();

    selected.sort_by(|a, b| a.0.total_cmp(&b.0));

    debug!("{} of {} relay points qualify within {} km", selected.len(), candidates.len(), max_segment_km);
    selected.into_iter().map(|(_, p)| p).collect()
}
