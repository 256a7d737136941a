//! Error types for the hello-demo crate
//!
//! Greeting itself is infallible. These errors only come from the
//! surrounding plumbing: loading configuration and setting up logging.

use thiserror::Error;

/// Main result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for hello-demo
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Logger setup failed
    #[error("Logging error: {0}")]
    Logging(String),
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a logging error
    pub fn logging(msg: impl Into<String>) -> Self {
        Self::Logging(msg.into())
    }

    /// Check if this error was caused by what the user supplied
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::Config(_) | Error::InvalidInput(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_format_messages() {
        assert_eq!(
            Error::config("bad file").to_string(),
            "Configuration error: bad file"
        );
        assert_eq!(
            Error::invalid_input("nope").to_string(),
            "Invalid input: nope"
        );
        assert_eq!(
            Error::logging("already set").to_string(),
            "Logging error: already set"
        );
    }

    #[test]
    fn test_client_error_classification() {
        assert!(Error::config("x").is_client_error());
        assert!(Error::invalid_input("x").is_client_error());
        assert!(!Error::logging("x").is_client_error());
    }
}
