//! Integration tests for configuration loading
//!
//! These tests verify:
//! - Loading an explicit config file
//! - Environment variable overrides
//! - Validation of loaded values

use anyhow::Result;
use glasspane::{Config, PaneError};
use glasspane_integration_tests::ConfigFixture;
use serial_test::serial;

fn clear_env() {
    for key in [
        "GLASSPANE_WINDOW_WIDTH",
        "GLASSPANE_WINDOW_HEIGHT",
        "GLASSPANE_LOG_LEVEL",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_load_explicit_file() -> Result<()> {
    clear_env();
    let fixture = ConfigFixture::new(
        r#"
[window]
width = 480
always_on_top = true

[style.body]
border_color = [0, 255, 0, 255]
"#,
    )?;

    let config = Config::load(Some(fixture.path()))?;

    assert_eq!(config.window.width, 480);
    assert_eq!(config.window.height, 200);
    assert!(config.window.always_on_top);
    assert_eq!(config.style.body.border_color.g, 255);
    assert_eq!(config.style.button.label, "Close");

    Ok(())
}

#[test]
#[serial]
fn test_env_overrides_file() -> Result<()> {
    clear_env();
    let fixture = ConfigFixture::new("[window]\nwidth = 480\n")?;

    std::env::set_var("GLASSPANE_WINDOW_WIDTH", "512");
    std::env::set_var("GLASSPANE_LOG_LEVEL", "trace");
    let loaded = Config::load(Some(fixture.path()));
    clear_env();

    let config = loaded?;
    assert_eq!(config.window.width, 512);
    assert_eq!(config.general.log_level, "trace");

    Ok(())
}

#[test]
#[serial]
fn test_invalid_values_are_rejected() -> Result<()> {
    clear_env();
    let fixture = ConfigFixture::new("[window]\nwidth = 50\n")?;

    let result = Config::load(Some(fixture.path()));
    assert!(matches!(result, Err(PaneError::Config(_))));

    Ok(())
}

#[test]
#[serial]
fn test_malformed_file_is_a_config_error() -> Result<()> {
    clear_env();
    let fixture = ConfigFixture::new("[window\nwidth = ")?;

    let result = Config::load(Some(fixture.path()));
    assert!(matches!(result, Err(PaneError::Config(_))));

    Ok(())
}
