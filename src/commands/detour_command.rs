//! Detour percentage through a waypoint

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::commands::{coordinate_arg, report};
use crate::geodesy::{detour_percentage, distance, GeoPoint, GeoResult};
use crate::utils::logger::Logger;

/// Command computing the detour caused by a waypoint
pub struct DetourCommand<'a> {
    origin: GeoPoint,
    destination: GeoPoint,
    waypoint: GeoPoint,
    logger: &'a Logger,
}

impl<'a> DetourCommand<'a> {
    /// Create a new detour command
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> GeoResult<Self> {
        Ok(DetourCommand {
            origin: coordinate_arg(args, "origin")?,
            destination: coordinate_arg(args, "destination")?,
            waypoint: coordinate_arg(args, "waypoint")?,
            logger,
        })
    }
}

impl<'a> Command for DetourCommand<'a> {
    fn execute(&self) -> GeoResult<()> {
        info!("Detour {} -> {} via {}", self.origin, self.destination, self.waypoint);

        let direct = distance(self.origin, self.destination);
        let via = distance(self.origin, self.waypoint) + distance(self.waypoint, self.destination);

        report(self.logger, &format!("Direct: {:.2} km", direct))?;
        report(self.logger, &format!("Via waypoint: {:.2} km", via))?;
        report(self.logger, &format!("Detour: {:.2}%", detour_percentage(self.origin, self.destination, self.waypoint)))?;

        Ok(())
    }
}
