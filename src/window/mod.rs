//! Window management module for Glasspane
//!
//! This module handles window creation, event translation, layout and the
//! drag-to-move behaviour of the frameless pane. The pane has no title bar,
//! so the window manager offers no way to move it; dragging anywhere in the
//! body does that instead.

pub mod drag;
pub mod events;
pub mod layout;
pub mod router;
pub mod winit_window;

pub use drag::{DragController, DragState};
pub use events::EventHandler;
pub use layout::{Layout, Rect};
pub use router::{PointerAction, PointerRouter};
pub use winit_window::{run, PaneApp, WinitHost};

use winit::window::CursorIcon;

/// Outbound calls the drag controller makes on the windowing system
///
/// Implementations must not fail: a host that cannot move its window
/// (because it is already gone, or the platform forbids it) ignores the call.
pub trait WindowHost {
    /// Move the window's top-left corner to a global position in physical pixels
    fn set_window_position(&mut self, x: i32, y: i32);

    /// Set the pointer shape shown over the window
    fn set_cursor_shape(&mut self, shape: CursorShape);
}

/// Pointer shapes used by the pane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorShape {
    /// The standard arrow
    #[default]
    Default,

    /// Four-way arrow shown while the window is being dragged
    MoveAll,
}

impl CursorShape {
    /// Convert to cursor icon
    pub fn to_cursor_icon(self) -> CursorIcon {
        match self {
            CursorShape::Default => CursorIcon::Default,
            CursorShape::MoveAll => CursorIcon::Move,
        }
    }
}

/// Window events that the pane reacts to
///
/// Pointer coordinates are window-local physical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WindowEvent {
    /// Window close requested
    CloseRequested,

    /// Window resized
    Resized { width: u32, height: u32 },

    /// Display scale changed
    ScaleFactorChanged { scale_factor: f64 },

    /// Window contents need repainting
    RedrawRequested,

    /// Primary (left) button went down
    PrimaryPressed { x: i32, y: i32 },

    /// Primary (left) button went up
    PrimaryReleased { x: i32, y: i32 },

    /// Pointer moved
    PointerMoved { x: i32, y: i32, primary_held: bool },

    /// Window gained focus
    Focused,

    /// Window lost focus
    Unfocused,
}

/// Host that records every call, for unit tests
#[cfg(test)]
pub(crate) mod test_host {
    use super::{CursorShape, WindowHost};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum HostCall {
        Position(i32, i32),
        Cursor(CursorShape),
    }

    #[derive(Debug, Default)]
    pub struct RecordingHost {
        pub calls: Vec<HostCall>,
    }

    impl RecordingHost {
        pub fn positions(&self) -> Vec<(i32, i32)> {
            self.calls
                .iter()
                .filter_map(|call| match call {
                    HostCall::Position(x, y) => Some((*x, *y)),
                    HostCall::Cursor(_) => None,
                })
                .collect()
        }
    }

    impl WindowHost for RecordingHost {
        fn set_window_position(&mut self, x: i32, y: i32) {
            self.calls.push(HostCall::Position(x, y));
        }

        fn set_cursor_shape(&mut self, shape: CursorShape) {
            self.calls.push(HostCall::Cursor(shape));
        }
    }
}
