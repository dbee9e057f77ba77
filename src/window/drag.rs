//! Drag-to-move implementation
//!
//! This module handles left-click dragging anywhere in the body of the
//! borderless window. On press the pointer's window-local position is kept
//! as the anchor; every held move then places the window so the anchor
//! stays under the pointer.

use crate::window::{CursorShape, WindowHost};
use log::{debug, trace};

/// Anchor captured at the last primary press
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragState {
    /// Whether a press has been seen since the last release
    is_active: bool,

    /// Pointer x in window-local coordinates at press time
    anchor_x: i32,

    /// Pointer y in window-local coordinates at press time
    anchor_y: i32,
}

impl DragState {
    /// Whether a press has been seen since the last release
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Window-local press position; only meaningful while active
    pub fn anchor(&self) -> Option<(i32, i32)> {
        self.is_active.then_some((self.anchor_x, self.anchor_y))
    }
}

/// Moves the window rigidly with the pointer while the primary button is held
#[derive(Debug, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    /// Create a new drag controller
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the window-local press position as the new anchor
    ///
    /// A second press without a release in between replaces the anchor.
    pub fn on_primary_press(&mut self, window_local_x: i32, window_local_y: i32) {
        self.state = DragState {
            is_active: true,
            anchor_x: window_local_x,
            anchor_y: window_local_y,
        };
        debug!("Drag anchored at ({}, {})", window_local_x, window_local_y);
    }

    /// Restore the arrow cursor and end the drag
    pub fn on_primary_release(&mut self, host: &mut dyn WindowHost) {
        if self.state.is_active {
            debug!("Drag released");
        }
        self.state.is_active = false;
        host.set_cursor_shape(CursorShape::Default);
    }

    /// Follow the pointer while the primary button is held
    ///
    /// Returns whether the event was consumed. Unheld moves are left to the
    /// caller and never touch the host.
    pub fn on_pointer_move(
        &mut self,
        global_x: i32,
        global_y: i32,
        primary_button_held: bool,
        host: &mut dyn WindowHost,
    ) -> bool {
        if !primary_button_held {
            return false;
        }

        let x = global_x.saturating_sub(self.state.anchor_x);
        let y = global_y.saturating_sub(self.state.anchor_y);

        host.set_cursor_shape(CursorShape::MoveAll);
        host.set_window_position(x, y);
        trace!("Drag moved window to ({}, {})", x, y);

        true
    }

    /// Current anchor state
    pub fn state(&self) -> DragState {
        self.state
    }

    /// Check if currently dragging
    pub fn is_dragging(&self) -> bool {
        self.state.is_active
    }
}
