//! Seams between the clap front end and the routekit subcommands
//!
//! Each subcommand (`distance`, `project`, `detour`, `route`, `compare`,
//! `match`) is a [`Command`] built from its parsed arguments; the
//! [`CommandFactory`] picks which one to build.

use crate::utils::logger::Logger;
use crate::geodesy::GeoResult;

/// A routekit subcommand with its arguments already parsed and validated
///
/// Coordinates and thresholds are checked when the command is built, so
/// `execute` only computes and prints the report.
pub trait Command {
    /// Run the computation and print its report to stdout
    fn execute(&self) -> GeoResult<()>;
}

/// Builds the subcommand matching the parsed command line
pub trait CommandFactory<'a> {
    /// Build the command for the subcommand in `args`
    ///
    /// Fails with `InvalidCoordinate`, `OutOfRange` or a generic error when
    /// an argument cannot be used, or when no known subcommand was given.
    fn create_command(&self, args: &clap::ArgMatches, logger: &'a Logger) -> GeoResult<Box<dyn Command + 'a>>;
}
