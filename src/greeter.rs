//! The greeter
//!
//! [`Greeter::hello`] always returns [`GREETING`]. It takes no input, holds
//! no state and cannot fail, so it is safe to call from any number of
//! threads at once.

use std::fmt;

/// The greeting, byte for byte
pub const GREETING: &str = "Hello, World!";

/// Produces the fixed greeting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Greeter;

impl Greeter {
    /// Create a greeter
    pub const fn new() -> Self {
        Greeter
    }

    /// Return the greeting
    pub fn hello(&self) -> &'static str {
        GREETING
    }
}

impl fmt::Display for Greeter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hello())
    }
}

/// Shorthand for `Greeter::new().hello()`
pub fn hello() -> &'static str {
    Greeter::new().hello()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_hello_returns_expected_string() {
        let greeter = Greeter::new();
        assert_eq!(greeter.hello(), "Hello, World!");
    }

    #[test]
    fn test_exact_bytes() {
        assert_eq!(hello().as_bytes(), b"Hello, World!");
        assert_eq!(hello().len(), 13);
        assert_eq!(hello(), hello().trim());
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let greeter = Greeter::default();
        let first = greeter.hello();
        for _ in 0..1_000 {
            assert_eq!(greeter.hello(), first);
        }
        assert_eq!(Greeter::new().hello(), first);
    }

    #[test]
    fn test_concurrent_calls() {
        let handles: Vec<_> = (0..16)
            .map(|_| {
                thread::spawn(|| {
                    let greeter = Greeter::new();
                    (0..100).all(|_| greeter.hello() == GREETING)
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Greeter.to_string(), GREETING);
        assert_eq!(format!("{}!", Greeter), "Hello, World!!");
    }
}
