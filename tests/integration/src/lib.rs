//! Integration test utilities for Glasspane
//!
//! This module provides common utilities for integration testing including:
//! - A mocked window host
//! - Scripted pointer sequences
//! - Config file fixtures

use anyhow::Result;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub use mock_host::MockHost;

/// Mocked window host
pub mod mock_host {
    use glasspane::{CursorShape, WindowHost};
    use mockall::mock;

    mock! {
        pub Host {}

        impl WindowHost for Host {
            fn set_window_position(&mut self, x: i32, y: i32);
            fn set_cursor_shape(&mut self, shape: CursorShape);
        }
    }
}

/// Scripted pointer input for the drag controller
pub mod mock_events {
    use glasspane::{DragController, WindowHost};

    /// One pointer event, as delivered to the controller
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum PointerStep {
        /// Window-local press position
        Press(i32, i32),
        Release,
        /// Global position and whether the primary button is held
        Move(i32, i32, bool),
    }

    /// Feed `steps` to `controller`, returning the consumed flag of every move
    pub fn replay(
        controller: &mut DragController,
        host: &mut dyn WindowHost,
        steps: &[PointerStep],
    ) -> Vec<bool> {
        let mut consumed = Vec::new();
        for step in steps {
            match *step {
                PointerStep::Press(x, y) => controller.on_primary_press(x, y),
                PointerStep::Release => controller.on_primary_release(host),
                PointerStep::Move(x, y, held) => {
                    consumed.push(controller.on_pointer_move(x, y, held, host))
                }
            }
        }
        consumed
    }

    /// Grab at (10, 10), drag through three points, let go, then hover
    pub fn generate_drag_sequence() -> Vec<PointerStep> {
        vec![
            PointerStep::Press(10, 10),
            PointerStep::Move(100, 100, true),
            PointerStep::Move(150, 120, true),
            PointerStep::Move(200, 140, true),
            PointerStep::Release,
            PointerStep::Move(260, 180, false),
        ]
    }
}

/// Test fixture holding a config file in a temporary directory
pub struct ConfigFixture {
    pub temp_dir: TempDir,
    pub config_path: PathBuf,
}

impl ConfigFixture {
    /// Write `contents` to `config.toml` in a fresh temporary directory
    pub fn new(contents: &str) -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, contents)?;

        Ok(Self {
            temp_dir,
            config_path,
        })
    }

    /// Get the path to the config file
    pub fn path(&self) -> &Path {
        &self.config_path
    }
}
