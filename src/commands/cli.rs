//! Command-line definition for the `routekit` binary

use clap::{Arg, ArgAction, Command as ClapCommand};

fn coordinate(name: &'static str, help: &'static str, index: usize) -> Arg {
    Arg::new(name)
        .help(help)
        .value_name("LAT,LON")
        .allow_hyphen_values(true)
        .required(true)
        .index(index)
}

/// Build the `routekit` argument parser
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("RouteKit")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Maurice Schilpp")
        .about("Spherical-earth distance, bearing and route matching toolkit")
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .help("TOML configuration file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Record results in FILE and diagnostics in FILE.debug instead of stderr")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            ClapCommand::new("distance")
                .about("Great-circle distance and bearings between two points")
                .arg(coordinate("from", "Start point", 1))
                .arg(coordinate("to", "End point", 2)),
        )
        .subcommand(
            ClapCommand::new("project")
                .about("Destination reached from a point by distance and bearing")
                .arg(coordinate("from", "Start point", 1))
                .arg(
                    Arg::new("distance")
                        .long("distance")
                        .help("Distance to travel in kilometers")
                        .value_name("KM")
                        .allow_negative_numbers(true)
                        .required(true),
                )
                .arg(
                    Arg::new("bearing")
                        .long("bearing")
                        .help("Initial bearing in degrees clockwise from north")
                        .value_name("DEG")
                        .allow_negative_numbers(true)
                        .required(true),
                ),
        )
        .subcommand(
            ClapCommand::new("detour")
                .about("Extra distance in percent for passing through a waypoint")
                .arg(coordinate("origin", "Trip origin", 1))
                .arg(coordinate("destination", "Trip destination", 2))
                .arg(coordinate("waypoint", "Waypoint to pass through", 3)),
        )
        .subcommand(
            ClapCommand::new("route")
                .about("Length, area and centroid of a route file (GPX or lat,lon lines)")
                .arg(
                    Arg::new("input")
                        .help("Route file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("near")
                        .long("near")
                        .help("Report the route point closest to this coordinate")
                        .value_name("LAT,LON")
                        .allow_hyphen_values(true)
                        .required(false),
                )
                .arg(
                    Arg::new("radius")
                        .long("radius")
                        .help("Count route points within this many kilometers of --near")
                        .value_name("KM")
                        .required(false),
                ),
        )
        .subcommand(
            ClapCommand::new("compare")
                .about("Closest pair of points between two route files")
                .arg(Arg::new("first").help("First route file").required(true).index(1))
                .arg(Arg::new("second").help("Second route file").required(true).index(2)),
        )
        .subcommand(
            ClapCommand::new("match")
                .about("Check whether a shipment fits a deliverer's planned route")
                .arg(
                    Arg::new("departure")
                        .long("departure")
                        .help("Route departure")
                        .value_name("LAT,LON")
                        .allow_hyphen_values(true)
                        .required(true),
                )
                .arg(
                    Arg::new("arrival")
                        .long("arrival")
                        .help("Route arrival")
                        .value_name("LAT,LON")
                        .allow_hyphen_values(true)
                        .required(true),
                )
                .arg(
                    Arg::new("pickup")
                        .long("pickup")
                        .help("Shipment pickup")
                        .value_name("LAT,LON")
                        .allow_hyphen_values(true)
                        .required(true),
                )
                .arg(
                    Arg::new("delivery")
                        .long("delivery")
                        .help("Shipment delivery")
                        .value_name("LAT,LON")
                        .allow_hyphen_values(true)
                        .required(true),
                )
                .arg(
                    Arg::new("max-detour")
                        .long("max-detour")
                        .help("Maximum accepted detour in percent (overrides config)")
                        .value_name("PERCENT")
                        .required(false),
                )
                .arg(
                    Arg::new("min-match")
                        .long("min-match")
                        .help("Maximum distance in km from departure to pickup and delivery to arrival (overrides config)")
                        .value_name("KM")
                        .required(false),
                ),
        )
}
