//! hello-demo - the smallest useful greeter
//!
//! The library exposes a single component, the [`Greeter`], whose
//! [`hello`](Greeter::hello) operation returns `"Hello, World!"`. Around it
//! sit the usual foundations: error type, configuration and logging, used
//! by the `hello-demo` binary.
#![warn(missing_docs)]

// Core foundational modules
pub mod core;

// Main functional module
pub mod greeter;

// Re-export commonly used items for convenience
pub use crate::core::{Config, Error, Result};
pub use greeter::{hello, Greeter, GREETING};

/// Crate version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Initialize logging with default settings
///
/// ```
/// hello_demo::init()?;
/// assert_eq!(hello_demo::hello(), "Hello, World!");
/// # Ok::<(), hello_demo::Error>(())
/// ```
pub fn init() -> Result<()> {
    crate::core::logging::init(&Config::default().logging)?;

    tracing::info!("Initializing {} v{}", NAME, VERSION);

    Ok(())
}
