//! Configuration for hello-demo
//!
//! Only logging is configurable. Settings come from defaults, then an
//! optional TOML file, then `HELLO_*` environment variables.

use crate::core::error::{Error, Result};
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Config file picked up from the working directory by [`Config::load`]
pub const DEFAULT_CONFIG_FILE: &str = "hello-demo.toml";

/// Environment variable overriding the log level
pub const ENV_LOG_LEVEL: &str = "HELLO_LOG_LEVEL";

/// Environment variable overriding the log format
pub const ENV_LOG_FORMAT: &str = "HELLO_LOG_FORMAT";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log output style
    pub format: LogFormat,
}

/// Output style of the log formatter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Multi-line, human friendly
    Pretty,
    /// Single line per event
    #[default]
    Compact,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl LoggingConfig {
    /// The level in lowercase, or a config error if it is not a known level
    pub fn normalized_level(&self) -> Result<String> {
        let level = self.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(Error::config(format!("Invalid log level: {}", self.level)));
        }
        Ok(level)
    }
}

impl FromStr for LogFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "compact" => Ok(LogFormat::Compact),
            other => Err(Error::invalid_input(format!(
                "Unknown log format: {}. Valid options: pretty, compact",
                other
            ))),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Pretty => f.write_str("pretty"),
            LogFormat::Compact => f.write_str("compact"),
        }
    }
}

impl Config {
    /// Load configuration from the default file and environment variables
    pub fn load() -> Result<Self> {
        let mut config = Config::default();

        // A missing or malformed default file falls back to the defaults.
        // Logging is not up yet at this point, so nothing is reported.
        if let Ok(file_config) = Self::from_file(DEFAULT_CONFIG_FILE) {
            config = file_config;
        }

        // Override with environment variables
        config.apply_overrides(|key| std::env::var(key).ok())?;

        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::config(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&contents)
            .map_err(|e| Error::config(format!("Failed to parse config file: {}", e)))
    }

    /// Apply `HELLO_*` overrides resolved through `lookup`
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.logging.level = level;
        }

        if let Some(format) = lookup(ENV_LOG_FORMAT) {
            self.logging.format = format.parse()?;
        }

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        self.logging.normalized_level()?;

        Ok(())
    }
}
