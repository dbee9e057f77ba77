//! Widget placement inside the pane
//!
//! The body fills the whole window. The close button is centred
//! horizontally and pushed to the bottom edge, inside the layout margin.
//! Everything is computed in physical pixels.

use crate::utils::config::ButtonStyle;

/// Space between the body edge and the button, in logical pixels
pub const LAYOUT_MARGIN: f64 = 11.0;

/// Axis-aligned rectangle in physical pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Half-open containment test: the right and bottom edges are outside
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Where each widget sits for a given window size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub body: Rect,
    pub button: Rect,
    pub scale_factor: f64,
}

impl Layout {
    /// Lay out the pane for a window of `size` physical pixels
    pub fn compute(size: (u32, u32), scale_factor: f64, button: &ButtonStyle) -> Self {
        let (width, height) = (size.0 as f64, size.1 as f64);
        let body = Rect::new(0.0, 0.0, width, height);

        let margin = LAYOUT_MARGIN * scale_factor;
        let button_width = button.width as f64 * scale_factor;
        let button_height = button.height as f64 * scale_factor;

        let x = ((width - button_width) / 2.0).floor();
        // The stretch above the button absorbs spare height; never crowd the top margin
        let y = (height - margin - button_height).max(margin.min(height - button_height)).floor();

        Self {
            body,
            button: Rect::new(x, y, button_width, button_height),
            scale_factor,
        }
    }

    /// Whether a window-local point lands on the close button
    pub fn hit_button(&self, x: f64, y: f64) -> bool {
        self.button.contains(x, y)
    }
}
