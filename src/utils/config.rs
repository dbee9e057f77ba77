//! Configuration management for Glasspane
//!
//! This module handles loading and managing application configuration
//! from config files and environment variables. The defaults reproduce
//! the look of the classic translucent pane: a nearly invisible white body
//! with a red outline and a blue "Close" button.

use crate::utils::error::{IntoPaneError, PaneError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Log levels accepted by `general.log_level`
const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Window configuration
    pub window: WindowConfig,

    /// Colors and metrics of the drawn widgets
    pub style: StyleConfig,

    /// General application settings
    pub general: GeneralConfig,
}

/// Window configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window width in logical pixels
    pub width: u32,

    /// Window height in logical pixels
    pub height: u32,

    /// Window title, shown by task switchers only since the pane has no title bar
    pub title: String,

    /// Keep the pane above other windows
    pub always_on_top: bool,
}

/// Widget styling
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// The pane body
    pub body: BoxStyle,

    /// The close button
    pub button: ButtonStyle,
}

/// Fill and outline of a rounded box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxStyle {
    pub background: Rgba,
    pub border_color: Rgba,

    /// Outline width in logical pixels, drawn inside the box
    pub border_width: f32,

    /// Corner radius in logical pixels
    pub border_radius: f32,
}

/// Close button styling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonStyle {
    pub label: String,
    pub width: u32,
    pub height: u32,
    pub text_color: Rgba,
    pub frame: BoxStyle,
}

/// General application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

/// 8-bit sRGB color with straight alpha, written as `[r, g, b, a]` in TOML
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[u8; 4]", into = "[u8; 4]")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Linear-light RGB with straight alpha, as the shader expects
    pub fn to_linear(self) -> [f32; 4] {
        [
            srgb_to_linear(self.r),
            srgb_to_linear(self.g),
            srgb_to_linear(self.b),
            self.a as f32 / 255.0,
        ]
    }
}

impl From<[u8; 4]> for Rgba {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Rgba> for [u8; 4] {
    fn from(c: Rgba) -> Self {
        [c.r, c.g, c.b, c.a]
    }
}

fn srgb_to_linear(channel: u8) -> f32 {
    let c = channel as f32 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 300,
            height: 200,
            title: "Glasspane".to_string(),
            always_on_top: false,
        }
    }
}

impl Default for BoxStyle {
    fn default() -> Self {
        // Fully transparent pixels may not receive pointer input everywhere; keep alpha at 2
        Self {
            background: Rgba::new(255, 255, 255, 2),
            border_color: Rgba::new(255, 0, 0, 255),
            border_width: 2.0,
            border_radius: 2.0,
        }
    }
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            label: "Close".to_string(),
            width: 85,
            height: 30,
            text_color: Rgba::new(255, 255, 255, 255),
            frame: BoxStyle {
                background: Rgba::new(6, 104, 249, 255),
                border_color: Rgba::new(151, 222, 247, 50),
                border_width: 1.0,
                border_radius: 5.0,
            },
        }
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from various sources
    ///
    /// Configuration is loaded in the following order (later sources override earlier):
    /// 1. Default values
    /// 2. `explicit` if given (it must exist), otherwise the user config file if present
    ///    (~/.config/glasspane/config.toml on Linux)
    /// 3. Environment variables (GLASSPANE_* prefix)
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match explicit {
            Some(path) => Self::from_file(path)?,
            None => match Self::user_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Read a TOML file; keys it leaves out keep their default values
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .config_err(&format!("Failed to read {}", path.display()))?;

        toml::from_str(&contents).config_err(&format!("Failed to parse {}", path.display()))
    }

    /// Render the configuration as pretty TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).config_err("Failed to serialize config")
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(width) = lookup("GLASSPANE_WINDOW_WIDTH") {
            self.window.width = width
                .parse()
                .map_err(|_| PaneError::Config("Invalid GLASSPANE_WINDOW_WIDTH".to_string()))?;
        }

        if let Some(height) = lookup("GLASSPANE_WINDOW_HEIGHT") {
            self.window.height = height
                .parse()
                .map_err(|_| PaneError::Config("Invalid GLASSPANE_WINDOW_HEIGHT".to_string()))?;
        }

        if let Some(log_level) = lookup("GLASSPANE_LOG_LEVEL") {
            self.general.log_level = log_level;
        }

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(PaneError::Config("Window dimensions must be non-zero".to_string()));
        }

        let button = &self.style.button;
        if button.width == 0 || button.height == 0 {
            return Err(PaneError::Config("Button dimensions must be non-zero".to_string()));
        }
        if button.width > self.window.width || button.height > self.window.height {
            return Err(PaneError::Config(format!(
                "Button ({}x{}) does not fit in the window ({}x{})",
                button.width, button.height, self.window.width, self.window.height
            )));
        }

        for (name, style) in [("style.body", &self.style.body), ("style.button.frame", &button.frame)] {
            for (field, value) in [("border_width", style.border_width), ("border_radius", style.border_radius)] {
                if !value.is_finite() || value < 0.0 {
                    return Err(PaneError::Config(format!(
                        "{}.{} must be a non-negative number, got {}",
                        name, field, value
                    )));
                }
            }
        }

        if !VALID_LOG_LEVELS.contains(&self.general.log_level.as_str()) {
            return Err(PaneError::Config(format!(
                "Invalid log level '{}', must be one of: {:?}",
                self.general.log_level, VALID_LOG_LEVELS
            )));
        }

        Ok(())
    }

    /// Get user config file path
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("glasspane").join("config.toml"))
    }
}
