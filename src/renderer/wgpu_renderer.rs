//! WGPU-based renderer implementation for Glasspane
//!
//! This module owns the surface, device and queue, and picks a surface
//! alpha mode that lets the pane blend with whatever is behind it.

use crate::renderer::pipeline::ShapePipeline;
use crate::renderer::scene::Scene;
use crate::renderer::Renderer;
use crate::utils::error::{IntoPaneError, PaneError, Result};
use std::sync::Arc;
use winit::window::Window as WinitWindow;

/// WGPU renderer implementation
pub struct WgpuRenderer {
    /// WGPU device
    device: wgpu::Device,

    /// WGPU queue for submitting commands
    queue: wgpu::Queue,

    /// Surface configuration
    surface_config: wgpu::SurfaceConfiguration,

    /// Render surface
    surface: wgpu::Surface<'static>,

    /// Render pipeline
    pipeline: ShapePipeline,
}

impl WgpuRenderer {
    /// Create a renderer drawing into `window`
    pub fn new(window: Arc<WinitWindow>) -> Result<Self> {
        pollster::block_on(Self::init_wgpu(window))
    }

    async fn init_wgpu(window: Arc<WinitWindow>) -> Result<Self> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window)
            .renderer_err("Failed to create surface")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .renderer_err("Failed to find suitable GPU adapter")?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Glasspane GPU Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_webgl2_defaults()
                    .using_resolution(adapter.limits()),
                memory_hints: wgpu::MemoryHints::MemoryUsage,
                ..Default::default()
            })
            .await
            .renderer_err("Failed to create GPU device")?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first())
            .copied()
            .ok_or_else(|| PaneError::Renderer("Surface reports no formats".to_string()))?;
        let alpha_mode = choose_alpha_mode(&surface_caps.alpha_modes);

        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &surface_config);

        log::info!(
            "Renderer ready: {:?} on {}, alpha {:?}",
            surface_format,
            adapter.get_info().name,
            alpha_mode
        );

        let pipeline = ShapePipeline::new(&device, surface_format);

        Ok(Self {
            device,
            queue,
            surface_config,
            surface,
            pipeline,
        })
    }

    /// Reconfigure the surface (e.g., after resize or lost surface)
    fn reconfigure_surface(&mut self) {
        self.surface.configure(&self.device, &self.surface_config);
    }
}

impl Renderer for WgpuRenderer {
    fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        self.surface_config.width = width;
        self.surface_config.height = height;
        self.reconfigure_surface();
    }

    fn render(&mut self, scene: &Scene) -> Result<()> {
        let surface_texture = match self.surface.get_current_texture() {
            Ok(texture) => texture,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.reconfigure_surface();
                return Ok(());
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                return Err(PaneError::Renderer("Out of GPU memory".to_string()));
            }
            Err(e) => {
                log::warn!("Surface texture acquisition failed: {:?}", e);
                return Ok(());
            }
        };

        let view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        self.pipeline.render_scene(
            &self.device,
            &self.queue,
            &mut encoder,
            &view,
            scene,
            (self.surface_config.width, self.surface_config.height),
        );

        self.queue.submit(std::iter::once(encoder.finish()));
        surface_texture.present();

        Ok(())
    }
}

/// Pick the first alpha mode that composites against the desktop
pub fn choose_alpha_mode(supported: &[wgpu::CompositeAlphaMode]) -> wgpu::CompositeAlphaMode {
    use wgpu::CompositeAlphaMode::{Inherit, Opaque, PostMultiplied, PreMultiplied};

    for preferred in [PreMultiplied, PostMultiplied, Inherit] {
        if supported.contains(&preferred) {
            return preferred;
        }
    }

    log::warn!("Surface has no translucent alpha mode; the pane will be opaque");
    supported.first().copied().unwrap_or(Opaque)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wgpu::CompositeAlphaMode;

    #[test]
    fn test_alpha_mode_preference() {
        assert_eq!(
            choose_alpha_mode(&[CompositeAlphaMode::Opaque, CompositeAlphaMode::PreMultiplied]),
            CompositeAlphaMode::PreMultiplied
        );
        assert_eq!(
            choose_alpha_mode(&[CompositeAlphaMode::Opaque, CompositeAlphaMode::Inherit]),
            CompositeAlphaMode::Inherit
        );
        assert_eq!(
            choose_alpha_mode(&[CompositeAlphaMode::Opaque]),
            CompositeAlphaMode::Opaque
        );
        assert_eq!(choose_alpha_mode(&[]), CompositeAlphaMode::Opaque);
    }
}
