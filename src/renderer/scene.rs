//! Shape list for one frame
//!
//! The pane is drawn as a handful of rounded boxes: the body, the button,
//! and one square per lit pixel of the button label.

use crate::renderer::glyphs::{self, GLYPH_HEIGHT};
use crate::utils::config::{BoxStyle, Rgba, StyleConfig};
use crate::window::layout::{Layout, Rect};
use bytemuck::{Pod, Zeroable};

/// Label pixel size in logical pixels
const LABEL_PIXEL: f64 = 2.0;

/// Per-instance data for the shape shader
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct ShapeInstance {
    /// x, y, width, height in physical pixels
    pub rect: [f32; 4],
    /// Interior color, linear RGB with straight alpha
    pub fill: [f32; 4],
    /// Outline color, linear RGB with straight alpha
    pub stroke: [f32; 4],
    /// corner radius, outline width, unused, unused
    pub params: [f32; 4],
}

impl ShapeInstance {
    const ATTRIBS: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
        0 => Float32x4,  // rect
        1 => Float32x4,  // fill
        2 => Float32x4,  // stroke
        3 => Float32x4,  // params
    ];

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ShapeInstance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBS,
        }
    }

    fn styled_box(rect: Rect, style: &BoxStyle, scale: f64) -> Self {
        Self {
            rect: rect_array(rect),
            fill: style.background.to_linear(),
            stroke: style.border_color.to_linear(),
            params: [
                (style.border_radius as f64 * scale) as f32,
                (style.border_width as f64 * scale) as f32,
                0.0,
                0.0,
            ],
        }
    }

    fn solid(rect: Rect, color: Rgba) -> Self {
        let color = color.to_linear();
        Self {
            rect: rect_array(rect),
            fill: color,
            stroke: color,
            params: [0.0; 4],
        }
    }
}

fn rect_array(rect: Rect) -> [f32; 4] {
    [rect.x as f32, rect.y as f32, rect.width as f32, rect.height as f32]
}

/// Everything drawn in one frame, in paint order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub instances: Vec<ShapeInstance>,
}

impl Scene {
    /// Build the pane: body, button, then the label on top
    pub fn build(layout: &Layout, style: &StyleConfig) -> Self {
        let scale = layout.scale_factor;
        let mut instances = vec![
            ShapeInstance::styled_box(layout.body, &style.body, scale),
            ShapeInstance::styled_box(layout.button, &style.button.frame, scale),
        ];

        let pixel = (LABEL_PIXEL * scale).round().max(1.0);
        let label = &style.button.label;
        let (cx, cy) = layout.button.center();
        let origin_x = (cx - glyphs::text_width(label) as f64 * pixel / 2.0).round();
        let origin_y = (cy - GLYPH_HEIGHT as f64 * pixel / 2.0).round();

        instances.extend(glyphs::lit_pixels(label).map(|(col, row)| {
            let rect = Rect::new(
                origin_x + col as f64 * pixel,
                origin_y + row as f64 * pixel,
                pixel,
                pixel,
            );
            ShapeInstance::solid(rect, style.button.text_color)
        }));

        Self { instances }
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}
