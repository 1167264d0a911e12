//! CLI command implementations
//!
//! Each subcommand of the `routekit` binary is a [`Command`] built by
//! [`RoutekitCommandFactory`] from the parsed arguments.

pub mod cli;
pub mod command_traits;
pub mod distance_command;
pub mod project_command;
pub mod detour_command;
pub mod route_command;
pub mod compare_command;
pub mod match_command;

pub use cli::build_cli;
pub use command_traits::{Command, CommandFactory};
pub use distance_command::DistanceCommand;
pub use project_command::ProjectCommand;
pub use detour_command::DetourCommand;
pub use route_command::RouteCommand;
pub use compare_command::CompareCommand;
pub use match_command::MatchCommand;

use clap::ArgMatches;
use crate::config::RouteKitConfig;
use crate::coordinate::parse_coordinate_strict;
use crate::geodesy::{GeoError, GeoPoint, GeoResult};
use crate::utils::logger::Logger;

/// Factory for creating command instances based on CLI arguments
pub struct RoutekitCommandFactory {
    config: RouteKitConfig,
}

impl RoutekitCommandFactory {
    /// Create a new factory instance
    pub fn new(config: RouteKitConfig) -> Self {
        RoutekitCommandFactory { config }
    }
}

impl<'a> CommandFactory<'a> for RoutekitCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> GeoResult<Box<dyn Command + 'a>> {
        match args.subcommand() {
            Some(("distance", sub)) => Ok(Box::new(DistanceCommand::new(sub, logger)?)),
            Some(("project", sub)) => Ok(Box::new(ProjectCommand::new(sub, logger)?)),
            Some(("detour", sub)) => Ok(Box::new(DetourCommand::new(sub, logger)?)),
            Some(("route", sub)) => Ok(Box::new(RouteCommand::new(sub, logger)?)),
            Some(("compare", sub)) => Ok(Box::new(CompareCommand::new(sub, logger)?)),
            Some(("match", sub)) => Ok(Box::new(MatchCommand::new(sub, &self.config, logger)?)),
            Some((name, _)) => Err(GeoError::GenericError(format!("Unknown command: {}", name))),
            None => Err(GeoError::GenericError("No command given, see --help".to_string())),
        }
    }
}

/// Read a required coordinate argument, rejecting out-of-range values
pub(crate) fn coordinate_arg(args: &ArgMatches, name: &str) -> GeoResult<GeoPoint> {
    let text = args.get_one::<String>(name)
        .ok_or_else(|| GeoError::GenericError(format!("Missing {} coordinate", name)))?;
    parse_coordinate_strict(text)
}

/// Read an optional numeric argument
pub(crate) fn number_arg(args: &ArgMatches, name: &str) -> GeoResult<Option<f64>> {
    match args.get_one::<String>(name) {
        Some(text) => text.trim().parse::<f64>()
            .map(Some)
            .map_err(|_| GeoError::GenericError(format!("Invalid value for --{}: {}", name, text))),
        None => Ok(None),
    }
}

/// Print a result line and record it in the log file
pub(crate) fn report(logger: &Logger, line: &str) -> GeoResult<()> {
    println!("{}", line);
    logger.log(line)?;
    Ok(())
}
