//! Glasspane: a frameless, translucent desktop pane moved by dragging its body
//!
//! The interesting part lives in [`window::drag`] and [`window::router`];
//! everything else opens the window, draws it and feeds it events.

pub mod renderer;
pub mod utils;
pub mod window;

pub use utils::{Config, PaneError, Result};
pub use window::{CursorShape, DragController, DragState, PointerAction, PointerRouter, WindowHost};
