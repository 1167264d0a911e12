//! Forward projection from a point

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::commands::{coordinate_arg, number_arg, report};
use crate::geodesy::{destination_point, GeoError, GeoPoint, GeoResult};
use crate::utils::logger::Logger;

/// Command projecting a point by distance and bearing
pub struct ProjectCommand<'a> {
    from: GeoPoint,
    distance_km: f64,
    bearing_deg: f64,
    logger: &'a Logger,
}

impl<'a> ProjectCommand<'a> {
    /// Create a new projection command
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> GeoResult<Self> {
        let distance_km = number_arg(args, "distance")?
            .ok_or_else(|| GeoError::GenericError("Missing --distance".to_string()))?;
        let bearing_deg = number_arg(args, "bearing")?
            .ok_or_else(|| GeoError::GenericError("Missing --bearing".to_string()))?;

        Ok(ProjectCommand {
            from: coordinate_arg(args, "from")?,
            distance_km,
            bearing_deg,
            logger,
        })
    }
}

impl<'a> Command for ProjectCommand<'a> {
    fn execute(&self) -> GeoResult<()> {
        info!("Projecting {} by {} km at {}°", self.from, self.distance_km, self.bearing_deg);

        let destination = destination_point(self.from, self.distance_km, self.bearing_deg);
        report(self.logger, &format!("Destination: {:.6},{:.6}", destination.latitude, destination.longitude))?;

        Ok(())
    }
}
