//! Utility module for Glasspane
//!
//! This module provides common utilities used throughout the application:
//! - Error handling with custom error types
//! - Configuration management

pub mod config;
pub mod error;

// Re-export commonly used items
pub use config::{BoxStyle, ButtonStyle, Config, GeneralConfig, Rgba, StyleConfig, WindowConfig};
pub use error::{PaneError, Result};
