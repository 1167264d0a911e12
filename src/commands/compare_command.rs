//! Closest approach between two routes

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::commands::report;
use crate::geodesy::{closest_intersection, GeoError, GeoResult};
use crate::io::RouteReader;
use crate::utils::logger::Logger;

/// Command finding the closest pair of points between two route files
pub struct CompareCommand<'a> {
    first_file: String,
    second_file: String,
    logger: &'a Logger,
}

impl<'a> CompareCommand<'a> {
    /// Create a new compare command
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> GeoResult<Self> {
        let file = |name: &str| {
            args.get_one::<String>(name)
                .cloned()
                .ok_or_else(|| GeoError::GenericError(format!("Missing {} route file", name)))
        };

        Ok(CompareCommand {
            first_file: file("first")?,
            second_file: file("second")?,
            logger,
        })
    }
}

impl<'a> Command for CompareCommand<'a> {
    fn execute(&self) -> GeoResult<()> {
        info!("Comparing routes {} and {}", self.first_file, self.second_file);

        let route1 = RouteReader::read_file(&self.first_file)?;
        let route2 = RouteReader::read_file(&self.second_file)?;

        match closest_intersection(&route1, &route2) {
            Some(pair) => {
                report(self.logger, &format!("First route point: {}", pair.point1))?;
                report(self.logger, &format!("Second route point: {}", pair.point2))?;
                report(self.logger, &format!("Distance: {:.2} km", pair.distance))?;
            },
            None => report(self.logger, "No closest pair: one of the routes is empty")?,
        }

        Ok(())
    }
}
