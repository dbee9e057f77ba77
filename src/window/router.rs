//! Pointer routing between the close button and the drag controller
//!
//! A press on the button arms it and the button then owns the pointer until
//! the release: no press, move or release reaches the drag controller.
//! Everything else is a drag of the body.

use crate::window::{CursorShape, DragController, Layout, WindowHost};
use log::debug;

/// What the shell should do after a routed pointer event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerAction {
    /// Nothing beyond what the host was already told
    None,

    /// The press landed on the close button
    ButtonArmed,

    /// The press started a drag of the body
    DragAnchored,

    /// A held move repositioned the window
    WindowMoved,

    /// The close button was clicked
    Close,
}

/// Routes window-local pointer events for one pane
#[derive(Debug)]
pub struct PointerRouter {
    layout: Layout,
    drag: DragController,

    /// A press landed on the close button; it owns the pointer until release
    button_armed: bool,

    /// Where the last held move put the window
    ///
    /// The platform reports its position asynchronously, so a move queued
    /// before the last reposition would otherwise land on a stale origin.
    commanded_origin: Option<(i32, i32)>,
}

impl PointerRouter {
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            drag: DragController::new(),
            button_armed: false,
            commanded_origin: None,
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn set_layout(&mut self, layout: Layout) {
        self.layout = layout;
    }

    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    pub fn is_button_armed(&self) -> bool {
        self.button_armed
    }

    /// Primary press at a window-local position
    pub fn pressed(&mut self, x: i32, y: i32) -> PointerAction {
        self.commanded_origin = None;

        if self.layout.hit_button(x as f64, y as f64) {
            self.button_armed = true;
            debug!("Close button armed");
            return PointerAction::ButtonArmed;
        }

        self.drag.on_primary_press(x, y);
        PointerAction::DragAnchored
    }

    /// Primary release at a window-local position
    pub fn released(&mut self, x: i32, y: i32, host: &mut dyn WindowHost) -> PointerAction {
        self.commanded_origin = None;

        if std::mem::take(&mut self.button_armed) {
            if self.layout.hit_button(x as f64, y as f64) {
                return PointerAction::Close;
            }
            return PointerAction::None;
        }

        self.drag.on_primary_release(host);
        PointerAction::None
    }

    /// Pointer motion at a window-local position
    ///
    /// `origin` is the window's client-area position as the platform reports
    /// it, or `None` where positions are hidden.
    pub fn moved(
        &mut self,
        x: i32,
        y: i32,
        primary_held: bool,
        origin: Option<(i32, i32)>,
        host: &mut dyn WindowHost,
    ) -> PointerAction {
        if self.button_armed {
            return PointerAction::None;
        }

        let origin = match self.commanded_origin {
            Some(commanded) if primary_held && self.drag.is_dragging() => Some(commanded),
            _ => origin,
        };
        let Some((ox, oy)) = origin else {
            return PointerAction::None;
        };

        let mut tracking = TrackingHost {
            inner: host,
            moved_to: None,
        };
        let consumed = self.drag.on_pointer_move(
            ox.saturating_add(x),
            oy.saturating_add(y),
            primary_held,
            &mut tracking,
        );

        if let Some(position) = tracking.moved_to {
            self.commanded_origin = Some(position);
        }

        if consumed {
            PointerAction::WindowMoved
        } else {
            PointerAction::None
        }
    }

    /// Focus left the window; a drag in progress ends as if released
    pub fn focus_lost(&mut self, host: &mut dyn WindowHost) {
        if self.drag.is_dragging() {
            self.drag.on_primary_release(host);
        }
        self.button_armed = false;
        self.commanded_origin = None;
    }
}

/// Forwards to the real host and remembers the last commanded position
struct TrackingHost<'a, H: WindowHost + ?Sized> {
    inner: &'a mut H,
    moved_to: Option<(i32, i32)>,
}

impl<H: WindowHost + ?Sized> WindowHost for TrackingHost<'_, H> {
    fn set_window_position(&mut self, x: i32, y: i32) {
        self.moved_to = Some((x, y));
        self.inner.set_window_position(x, y);
    }

    fn set_cursor_shape(&mut self, shape: CursorShape) {
        self.inner.set_cursor_shape(shape);
    }
}
