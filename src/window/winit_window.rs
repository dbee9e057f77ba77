//! Winit window implementation for Glasspane
//!
//! This module provides the frameless, transparent pane on top of winit:
//! it opens the window, routes pointer events to the close button or the
//! drag controller, and repaints on demand.

use crate::renderer::{Renderer, Scene, WgpuRenderer};
use crate::utils::config::Config;
use crate::utils::error::{IntoPaneError, PaneError, Result};
use crate::window::{
    CursorShape, EventHandler, Layout, PointerAction, PointerRouter, WindowEvent, WindowHost,
};
use log::{debug, error, info};
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    dpi::{LogicalSize, PhysicalPosition},
    event::WindowEvent as WinitWindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window as WinitWindow, WindowId, WindowLevel},
};

/// Open the pane and run the event loop until it is closed
pub fn run(config: Config) -> Result<()> {
    let event_loop = EventLoop::new().window_err("Failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = PaneApp::new(config);
    event_loop.run_app(&mut app).window_err("Event loop error")?;

    match app.error.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// `WindowHost` backed by a live winit window
///
/// Positions are client-area positions; winit moves the outer frame, so
/// the frame offset is subtracted first. Failures are ignored.
pub struct WinitHost<'a> {
    window: &'a WinitWindow,
}

impl<'a> WinitHost<'a> {
    pub fn new(window: &'a WinitWindow) -> Self {
        Self { window }
    }
}

impl WindowHost for WinitHost<'_> {
    fn set_window_position(&mut self, x: i32, y: i32) {
        let (dx, dy) = match (self.window.inner_position(), self.window.outer_position()) {
            (Ok(inner), Ok(outer)) => (inner.x - outer.x, inner.y - outer.y),
            _ => (0, 0),
        };
        self.window
            .set_outer_position(PhysicalPosition::new(x.saturating_sub(dx), y.saturating_sub(dy)));
    }

    fn set_cursor_shape(&mut self, shape: CursorShape) {
        self.window.set_cursor(shape.to_cursor_icon());
    }
}

/// Application handler driving the pane
pub struct PaneApp {
    config: Config,

    /// Created on the first `resumed`
    pane: Option<PaneWindow>,

    /// Fatal error that stopped the loop
    error: Option<PaneError>,
}

/// Everything tied to the open window
struct PaneWindow {
    /// The underlying winit window
    window: Arc<WinitWindow>,

    renderer: WgpuRenderer,

    /// Converts winit events and tracks the primary button
    events: EventHandler,

    /// Splits pointer input between the close button and dragging
    router: PointerRouter,
}

impl PaneApp {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            pane: None,
            error: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: PaneError) {
        error!("{}", err);
        self.error = Some(err);
        event_loop.exit();
    }
}

impl PaneWindow {
    fn create(event_loop: &ActiveEventLoop, config: &Config) -> Result<Self> {
        let level = if config.window.always_on_top {
            WindowLevel::AlwaysOnTop
        } else {
            WindowLevel::Normal
        };

        let attributes = WinitWindow::default_attributes()
            .with_title(config.window.title.clone())
            .with_decorations(false) // Frameless: no title bar to drag by
            .with_transparent(true)
            .with_resizable(false)
            .with_inner_size(LogicalSize::new(
                config.window.width as f64,
                config.window.height as f64,
            ))
            .with_window_level(level);

        let window = Arc::new(
            event_loop
                .create_window(attributes)
                .window_err("Failed to create window")?,
        );

        let renderer = WgpuRenderer::new(window.clone())?;
        let size = window.inner_size();
        let layout = Layout::compute((size.width, size.height), window.scale_factor(), &config.style.button);

        info!(
            "Opened {}x{} pane (scale {:.2})",
            size.width,
            size.height,
            window.scale_factor()
        );

        Ok(Self {
            window,
            renderer,
            events: EventHandler::new(),
            router: PointerRouter::new(layout),
        })
    }

    fn relayout(&mut self, config: &Config) {
        let size = self.window.inner_size();
        self.router.set_layout(Layout::compute(
            (size.width, size.height),
            self.window.scale_factor(),
            &config.style.button,
        ));
    }

    /// Client-area origin, if the platform reveals it
    fn origin(&self) -> Option<(i32, i32)> {
        self.window.inner_position().ok().map(|p| (p.x, p.y))
    }
}

impl ApplicationHandler for PaneApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.pane.is_some() {
            return;
        }

        match PaneWindow::create(event_loop, &self.config) {
            Ok(pane) => {
                pane.window.request_redraw();
                self.pane = Some(pane);
            }
            Err(err) => self.fail(event_loop, err),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WinitWindowEvent) {
        let Some(pane) = self.pane.as_mut() else {
            return;
        };
        if pane.window.id() != window_id {
            return;
        }
        let Some(event) = pane.events.handle_event(&event) else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                info!("Close requested");
                event_loop.exit();
            }

            WindowEvent::Resized { width, height } => {
                pane.renderer.resize(width, height);
                pane.relayout(&self.config);
                pane.window.request_redraw();
            }

            WindowEvent::ScaleFactorChanged { scale_factor } => {
                debug!("Scale factor changed to {}", scale_factor);
                pane.relayout(&self.config);
                pane.window.request_redraw();
            }

            WindowEvent::RedrawRequested => {
                let scene = Scene::build(pane.router.layout(), &self.config.style);
                if let Err(err) = pane.renderer.render(&scene) {
                    self.fail(event_loop, err);
                }
            }

            WindowEvent::PrimaryPressed { x, y } => {
                // Wayland hides window positions; let the compositor move us instead
                if pane.router.pressed(x, y) == PointerAction::DragAnchored && pane.origin().is_none() {
                    if let Err(err) = pane.window.drag_window() {
                        debug!("Compositor drag unavailable: {}", err);
                    }
                }
            }

            WindowEvent::PrimaryReleased { x, y } => {
                let action = pane.router.released(x, y, &mut WinitHost::new(&pane.window));
                if action == PointerAction::Close {
                    info!("Close button clicked");
                    event_loop.exit();
                }
            }

            WindowEvent::PointerMoved { x, y, primary_held } => {
                let origin = pane.origin();
                pane.router
                    .moved(x, y, primary_held, origin, &mut WinitHost::new(&pane.window));
            }

            WindowEvent::Unfocused => {
                // Counts as a release: the button state was already dropped
                pane.router.focus_lost(&mut WinitHost::new(&pane.window));
            }

            WindowEvent::Focused => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        info!("Pane closed");
        self.pane = None;
    }
}
