//! Route file analysis command
//!
//! Loads a route and reports its length, enclosed area and centroid, and
//! optionally the route's closest point to a reference coordinate.

use clap::ArgMatches;
use log::{info, warn};

use crate::api::summarize;
use crate::commands::command_traits::Command;
use crate::commands::{coordinate_arg, number_arg, report};
use crate::geodesy::{closest_point, is_within_radius, GeoError, GeoPoint, GeoResult};
use crate::io::RouteReader;
use crate::utils::logger::Logger;

/// Command for analyzing a route file
pub struct RouteCommand<'a> {
    /// Path to the route file
    input_file: String,
    /// Reference point for nearest-point search
    near: Option<GeoPoint>,
    /// Radius around `near` for counting route points, in kilometers
    radius_km: Option<f64>,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> RouteCommand<'a> {
    /// Create a new route command
    ///
    /// # Arguments
    /// * `args` - Subcommand argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new RouteCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> GeoResult<Self> {
        let input_file = args.get_one::<String>("input")
            .ok_or_else(|| GeoError::GenericError("Missing route file".to_string()))?
            .clone();

        let near = if args.contains_id("near") {
            Some(coordinate_arg(args, "near")?)
        } else {
            None
        };

        let radius_km = number_arg(args, "radius")?;
        if radius_km.is_some() && near.is_none() {
            return Err(GeoError::GenericError("--radius requires --near".to_string()));
        }

        Ok(RouteCommand {
            input_file,
            near,
            radius_km,
            logger,
        })
    }

    /// Report the route point nearest to the reference
    fn report_nearest(&self, route: &[GeoPoint], near: GeoPoint) -> GeoResult<()> {
        match closest_point(near, route) {
            Some(found) => report(self.logger, &format!("Closest point to {}: {} ({:.2} km)", near, found.point, found.distance))?,
            None => report(self.logger, "Closest point: none (empty route)")?,
        }

        if let Some(radius) = self.radius_km {
            let inside = route.iter().filter(|p| is_within_radius(near, **p, radius)).count();
            report(self.logger, &format!("Points within {} km: {}", radius, inside))?;
        }

        Ok(())
    }
}

impl<'a> Command for RouteCommand<'a> {
    fn execute(&self) -> GeoResult<()> {
        info!("Analyzing route file: {}", self.input_file);

        let route = RouteReader::read_file(&self.input_file)?;
        let summary = summarize(&route);

        if summary.invalid_points > 0 {
            warn!("{} route points have out-of-range coordinates", summary.invalid_points);
        }

        report(self.logger, &format!("Points: {}", summary.points))?;
        report(self.logger, &format!("Length: {:.2} km", summary.length_km))?;
        report(self.logger, &format!("Enclosed area: {:.2} km²", summary.area_km2))?;
        match summary.centroid {
            Some(c) => report(self.logger, &format!("Centroid: {:.6},{:.6}", c.latitude, c.longitude))?,
            None => report(self.logger, "Centroid: none (empty route)")?,
        }
        report(self.logger, &format!("Invalid points: {}", summary.invalid_points))?;

        if let Some(near) = self.near {
            self.report_nearest(&route, near)?;
        }

        Ok(())
    }
}
