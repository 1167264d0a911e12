//! Shipment-to-route matching command

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::commands::{coordinate_arg, number_arg, report};
use crate::config::RouteKitConfig;
use crate::geodesy::{distance, GeoResult};
use crate::matching::{check_compatibility, score_route, MatchKind, MatchingCriteria, PlannedRoute, Shipment};
use crate::utils::logger::Logger;

/// Command checking whether a shipment fits a planned route
pub struct MatchCommand<'a> {
    shipment: Shipment,
    route: PlannedRoute,
    criteria: MatchingCriteria,
    logger: &'a Logger,
}

impl<'a> MatchCommand<'a> {
    /// Create a new match command
    ///
    /// `--max-detour` overrides the configured detour limit for both the
    /// route and the scoring criteria; `--min-match` overrides the
    /// configured match distance.
    pub fn new(args: &ArgMatches, config: &RouteKitConfig, logger: &'a Logger) -> GeoResult<Self> {
        let mut criteria = config.matching_criteria();
        if let Some(max_detour) = number_arg(args, "max-detour")? {
            criteria.max_detour_percentage = max_detour;
        }
        let min_match = number_arg(args, "min-match")?.unwrap_or(config.min_match_distance_km);

        let route = PlannedRoute::new(
            coordinate_arg(args, "departure")?,
            coordinate_arg(args, "arrival")?,
            criteria.max_detour_percentage,
            min_match,
        );
        let shipment = Shipment {
            pickup: coordinate_arg(args, "pickup")?,
            delivery: coordinate_arg(args, "delivery")?,
        };

        Ok(MatchCommand {
            shipment,
            route,
            criteria,
            logger,
        })
    }

    fn shipment_too_long(&self) -> bool {
        distance(self.shipment.pickup, self.shipment.delivery) > self.criteria.max_distance_km
    }
}

impl<'a> Command for MatchCommand<'a> {
    fn execute(&self) -> GeoResult<()> {
        info!("Matching shipment {} -> {} against route {} -> {}",
              self.shipment.pickup, self.shipment.delivery, self.route.departure, self.route.arrival);

        match check_compatibility(&self.shipment, &self.route) {
            Some(m) => {
                let kind = match &m.kind {
                    MatchKind::DirectRoute => "direct route".to_string(),
                    MatchKind::IntermediatePoint(label) => format!("via {}", label),
                };
                report(self.logger, &format!("Compatible: yes ({})", kind))?;
                report(self.logger, &format!("Match detour: {:.2}%", m.detour_percentage))?;
            },
            None => report(self.logger, "Compatible: no")?,
        }

        if self.shipment_too_long() {
            report(self.logger, &format!("Warning: shipment exceeds {} km", self.criteria.max_distance_km))?;
        }

        let score = score_route(&self.shipment, &self.route, &self.criteria);
        report(self.logger, &format!("Detour distance: {:.2} km ({:.2}%)", score.detour_distance_km, score.detour_percentage))?;
        report(self.logger, &format!("Score: {:.1}/50", score.score))?;
        report(self.logger, &format!("Estimated time: {} min", score.estimated_minutes))?;

        Ok(())
    }
}
