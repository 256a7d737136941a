//! Core foundations
//!
//! Error handling, configuration and logging shared by the library and the
//! command-line entry point.

pub mod error;
pub mod config;
pub mod logging;

// Re-export commonly used items
pub use error::{Error, Result};
pub use config::{Config, LogFormat, LoggingConfig};
