//! Logging setup
//!
//! Installs a global `tracing` subscriber. Events go to stderr so stdout
//! only carries program output.

use crate::core::config::{LogFormat, LoggingConfig};
use crate::core::error::{Error, Result};
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Build the event filter for the configured level
pub fn filter_for(config: &LoggingConfig) -> Result<EnvFilter> {
    let level = config.normalized_level()?;
    EnvFilter::try_new(&level).map_err(|e| Error::logging(e.to_string()))
}

/// Install the global subscriber. `RUST_LOG` takes precedence over the
/// configured level when set.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let filter = match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(_) => EnvFilter::try_from_default_env().map_err(|e| Error::logging(e.to_string()))?,
        Err(_) => filter_for(config)?,
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal());

    match config.format {
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    }
    .map_err(|e| Error::logging(e.to_string()))
}
