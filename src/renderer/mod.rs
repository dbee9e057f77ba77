//! Renderer module for Glasspane
//!
//! This module handles GPU-based rendering using wgpu. The pane is a flat
//! list of rounded boxes drawn by a single instanced pipeline onto a
//! transparent surface.

use crate::utils::error::Result;

// Export submodules
pub mod glyphs;
pub mod pipeline;
pub mod scene;
pub mod wgpu_renderer;

// Re-export main types
pub use scene::{Scene, ShapeInstance};
pub use wgpu_renderer::WgpuRenderer;

/// Renderer trait defining the interface for drawing the pane
pub trait Renderer {
    /// Handle window resize
    ///
    /// # Arguments
    ///
    /// * `width` - New surface width in physical pixels
    /// * `height` - New surface height in physical pixels
    fn resize(&mut self, width: u32, height: u32);

    /// Draw a scene and present it
    fn render(&mut self, scene: &Scene) -> Result<()>;
}
