//! Event handling for the winit window
//!
//! This module converts winit events to Glasspane WindowEvent types.
//! winit reports cursor motion without button state, so the handler keeps
//! track of the primary button itself.

use crate::window::WindowEvent;
use winit::event::{ElementState, MouseButton as WinitMouseButton, WindowEvent as WinitWindowEvent};

/// Event handler for converting winit events to Glasspane events
#[derive(Debug, Default)]
pub struct EventHandler {
    /// Last known cursor position, window-local physical pixels
    cursor_position: (f64, f64),

    /// Whether the primary button is currently down
    primary_held: bool,
}

impl EventHandler {
    /// Create a new event handler
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a winit window event and convert to a Glasspane event
    pub fn handle_event(&mut self, event: &WinitWindowEvent) -> Option<WindowEvent> {
        match event {
            WinitWindowEvent::CloseRequested => Some(WindowEvent::CloseRequested),

            WinitWindowEvent::Resized(size) => Some(WindowEvent::Resized {
                width: size.width,
                height: size.height,
            }),

            WinitWindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                Some(WindowEvent::ScaleFactorChanged {
                    scale_factor: *scale_factor,
                })
            }

            WinitWindowEvent::RedrawRequested => Some(WindowEvent::RedrawRequested),

            WinitWindowEvent::CursorMoved { position, .. } => {
                Some(self.cursor_moved(position.x, position.y))
            }

            WinitWindowEvent::MouseInput { state, button, .. } => self.mouse_input(*state, *button),

            WinitWindowEvent::Focused(focused) => Some(self.focus_changed(*focused)),

            _ => None,
        }
    }

    fn cursor_moved(&mut self, x: f64, y: f64) -> WindowEvent {
        self.cursor_position = (x, y);
        let (x, y) = self.cursor_pixel();
        WindowEvent::PointerMoved {
            x,
            y,
            primary_held: self.primary_held,
        }
    }

    fn mouse_input(&mut self, state: ElementState, button: WinitMouseButton) -> Option<WindowEvent> {
        if !is_primary(button) {
            return None;
        }

        let (x, y) = self.cursor_pixel();
        match state {
            ElementState::Pressed => {
                self.primary_held = true;
                Some(WindowEvent::PrimaryPressed { x, y })
            }
            ElementState::Released => {
                self.primary_held = false;
                Some(WindowEvent::PrimaryReleased { x, y })
            }
        }
    }

    fn focus_changed(&mut self, focused: bool) -> WindowEvent {
        if focused {
            WindowEvent::Focused
        } else {
            // The release may be delivered elsewhere; never leave a drag stuck
            self.primary_held = false;
            WindowEvent::Unfocused
        }
    }

    fn cursor_pixel(&self) -> (i32, i32) {
        (
            self.cursor_position.0.round() as i32,
            self.cursor_position.1.round() as i32,
        )
    }

    /// Get current cursor position
    pub fn cursor_position(&self) -> (f64, f64) {
        self.cursor_position
    }

    /// Check if the primary button is held
    pub fn is_primary_held(&self) -> bool {
        self.primary_held
    }
}

fn is_primary(button: WinitMouseButton) -> bool {
    button == WinitMouseButton::Left
}
