use clap::ArgMatches;
use std::process;
use log::{error, LevelFilter};

use routekit::config::RouteKitConfig;
use routekit::utils::logger::Logger;
use routekit::commands::{build_cli, CommandFactory, RoutekitCommandFactory};

fn load_config(matches: &ArgMatches) -> RouteKitConfig {
    match matches.get_one::<String>("config") {
        Some(path) => match RouteKitConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading config {}: {}", path, e);
                process::exit(1);
            }
        },
        None => RouteKitConfig::default(),
    }
}

fn main() {
    let matches = build_cli().get_matches();
    let config = load_config(&matches);

    let level = if matches.get_flag("verbose") { LevelFilter::Debug } else { config.log_level };
    let log_file = matches.get_one::<String>("log-file").cloned().or_else(|| config.log_file.clone());

    let logger = match &log_file {
        Some(path) => {
            if let Err(e) = Logger::init_global_logger(&format!("{}.debug", path), level) {
                eprintln!("Error setting up global logger: {}", e);
                process::exit(1);
            }
            match Logger::new(path) {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("Error initializing logger: {}", e);
                    process::exit(1);
                }
            }
        },
        None => {
            Logger::init_console_logger(level);
            Logger::disabled()
        }
    };

    let factory = RoutekitCommandFactory::new(config);

    let command_result = factory.create_command(&matches, &logger);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
