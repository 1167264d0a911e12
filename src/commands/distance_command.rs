//! Distance and bearing between two points

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::commands::{coordinate_arg, report};
use crate::geodesy::{bearing, distance, GeoPoint, GeoResult};
use crate::utils::logger::Logger;

/// Command reporting great-circle distance and bearings between two points
pub struct DistanceCommand<'a> {
    from: GeoPoint,
    to: GeoPoint,
    logger: &'a Logger,
}

impl<'a> DistanceCommand<'a> {
    /// Create a new distance command
    ///
    /// # Arguments
    /// * `args` - Subcommand argument matches from clap
    /// * `logger` - Logger for recording operations
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> GeoResult<Self> {
        Ok(DistanceCommand {
            from: coordinate_arg(args, "from")?,
            to: coordinate_arg(args, "to")?,
            logger,
        })
    }
}

impl<'a> Command for DistanceCommand<'a> {
    fn execute(&self) -> GeoResult<()> {
        info!("Measuring {} -> {}", self.from, self.to);

        report(self.logger, &format!("Distance: {:.2} km", distance(self.from, self.to)))?;
        report(self.logger, &format!("Initial bearing: {:.2}°", bearing(self.from, self.to)))?;
        report(self.logger, &format!("Reverse bearing: {:.2}°", bearing(self.to, self.from)))?;

        Ok(())
    }
}
