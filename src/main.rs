//! hello-demo command-line entry point
//!
//! Prints the greeting on stdout. Logging goes to stderr.

use clap::{Arg, ArgMatches, Command};
use hello_demo::core::{logging, Config, LogFormat};
use hello_demo::{Error, Greeter, Result};
use std::process::ExitCode;
use tracing::{debug, info};

fn main() -> ExitCode {
    let matches = Command::new("hello-demo")
        .version(hello_demo::VERSION)
        .about("Prints a friendly greeting.")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Configuration file path")
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .help("Log level (trace, debug, info, warn, error)")
        )
        .arg(
            Arg::new("log-format")
                .long("log-format")
                .value_name("FORMAT")
                .help("Log format (pretty, compact)")
        )
        .get_matches();

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            if e.is_client_error() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

fn run(matches: &ArgMatches) -> Result<()> {
    // Load configuration
    let mut config = if let Some(config_path) = matches.get_one::<String>("config") {
        Config::from_file(config_path)?
    } else {
        Config::load()?
    };

    // Apply CLI overrides
    apply_cli_overrides(&mut config, matches)?;
    config.validate()?;

    logging::init(&config.logging)?;
    info!("Starting {} v{}", hello_demo::NAME, hello_demo::VERSION);
    debug!("Configuration: {:?}", config);

    println!("{}", Greeter::new());

    Ok(())
}

/// Apply command line argument overrides to configuration
fn apply_cli_overrides(config: &mut Config, matches: &ArgMatches) -> Result<()> {
    if let Some(level) = matches.get_one::<String>("log-level") {
        config.logging.level = level.clone();
    }

    if let Some(format) = matches.get_one::<String>("log-format") {
        config.logging.format = format
            .parse::<LogFormat>()
            .map_err(|e| Error::config(format!("Invalid --log-format: {}", e)))?;
    }

    Ok(())
}
