//! Error types for Glasspane
//!
//! This module defines custom error types used throughout the application.
//! We use thiserror for convenient error type definitions and anyhow for
//! application-level error handling in the binary.

use thiserror::Error;

/// Main error type for Glasspane
#[derive(Error, Debug)]
pub enum PaneError {
    /// Window and event loop errors
    #[error("Window error: {0}")]
    Window(String),

    /// GPU setup and presentation errors
    #[error("Renderer error: {0}")]
    Renderer(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("File error: {0}")]
    FileIO(#[from] std::io::Error),
}

/// Convenience type alias for Results in Glasspane
pub type Result<T> = std::result::Result<T, PaneError>;

/// Extension trait for converting other errors to PaneError
pub trait IntoPaneError<T> {
    /// Convert this error into a PaneError with the given context
    fn window_err(self, context: &str) -> Result<T>;
    fn renderer_err(self, context: &str) -> Result<T>;
    fn config_err(self, context: &str) -> Result<T>;
}

impl<T, E: std::fmt::Display> IntoPaneError<T> for std::result::Result<T, E> {
    fn window_err(self, context: &str) -> Result<T> {
        self.map_err(|e| PaneError::Window(format!("{}: {}", context, e)))
    }

    fn renderer_err(self, context: &str) -> Result<T> {
        self.map_err(|e| PaneError::Renderer(format!("{}: {}", context, e)))
    }

    fn config_err(self, context: &str) -> Result<T> {
        self.map_err(|e| PaneError::Config(format!("{}: {}", context, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PaneError::Window("Failed to create window".to_string());
        assert_eq!(err.to_string(), "Window error: Failed to create window");

        let err = PaneError::Config("width must be non-zero".to_string());
        assert_eq!(err.to_string(), "Configuration error: width must be non-zero");
    }

    #[test]
    fn test_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let pane_err: PaneError = io_err.into();
        assert!(matches!(pane_err, PaneError::FileIO(_)));
    }

    #[test]
    fn test_into_pane_error_trait() {
        let result: std::result::Result<(), &str> = Err("no adapter");
        let converted = result.renderer_err("Requesting adapter");

        match converted {
            Err(PaneError::Renderer(msg)) => {
                assert_eq!(msg, "Requesting adapter: no adapter");
            }
            _ => panic!("Expected Renderer error"),
        }
    }
}
