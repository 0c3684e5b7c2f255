use anyhow::Result;
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::ActiveEventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::config::{SceneKind, ViewerConfig};
use crate::context::SceneContext;
use crate::frame_loop::CancelToken;
use crate::loaders;
use crate::render::surface::{RenderMode, WgpuRenderer};
use crate::scenes;
use crate::viewport::Viewport;

/// Default assets for the loader-based variants
const DEFAULT_MODEL: &str = "assets/models/ship.gltf";
const DEFAULT_SHADER: &str = "assets/shaders/raymarch.wgsl";

/// Windowed application: owns the one window, context and cancel token
pub struct App {
    config: ViewerConfig,
    window: Option<Arc<Window>>,
    ctx: Option<SceneContext<WgpuRenderer>>,
    token: CancelToken,
}

impl App {
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            config,
            window: None,
            ctx: None,
            token: CancelToken::new(),
        }
    }

    /// Token shared with e.g. a signal handler to stop the loop
    pub fn cancel_token(&self) -> CancelToken {
        self.token.clone()
    }

    /// Initialization: surface, projection source and scene content.
    /// A failed asset load aborts here; the loop is never entered.
    fn build_context(
        &self,
        window: Arc<Window>,
    ) -> Result<SceneContext<WgpuRenderer>> {
        let size = window.inner_size();
        let viewport = Viewport::new(size.width.max(1), size.height.max(1))?;

        match self.config.scene {
            SceneKind::Basic => {
                let renderer =
                    pollster::block_on(WgpuRenderer::new(window, RenderMode::Mesh, false))?;
                Ok(scenes::bootstrap_basic(renderer, viewport))
            }
            SceneKind::Cube => {
                let renderer = pollster::block_on(WgpuRenderer::new(
                    window,
                    RenderMode::Mesh,
                    self.config.show_ui,
                ))?;
                Ok(scenes::bootstrap_cube(renderer, viewport))
            }
            SceneKind::Mesh => {
                let path = self
                    .config
                    .asset
                    .clone()
                    .unwrap_or_else(|| DEFAULT_MODEL.into());
                let renderer =
                    pollster::block_on(WgpuRenderer::new(window, RenderMode::Mesh, false))?;
                scenes::bootstrap_mesh(renderer, viewport, path)
            }
            SceneKind::Raymarch => {
                let path = self
                    .config
                    .asset
                    .clone()
                    .unwrap_or_else(|| DEFAULT_SHADER.into());
                let shader = loaders::load_shader_source(path)?;
                let renderer = pollster::block_on(WgpuRenderer::new(
                    window,
                    RenderMode::Raymarch(shader.clone()),
                    false,
                ))?;
                Ok(scenes::bootstrap_raymarch(renderer, viewport, &shader))
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attributes = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.width,
                self.config.height,
            ));

        let window = match event_loop.create_window(attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        match self.build_context(window.clone()) {
            Ok(ctx) => {
                self.window = Some(window);
                self.ctx = Some(ctx);
            }
            Err(e) => {
                log::error!("initialization failed: {e:#}");
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // The overlay gets first refusal on pointer and keyboard events
        if let Some(ctx) = &mut self.ctx {
            if ctx.renderer_mut().handle_window_event(&event) {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => {
                self.token.cancel();
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Some(ctx) = &mut self.ctx {
                    ctx.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => {
                if let Some(ctx) = &mut self.ctx {
                    if let Err(e) = ctx.render_step() {
                        log::error!("render step failed: {e:#}");
                        self.token.cancel();
                        event_loop.exit();
                    }
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.token.is_cancelled() {
            event_loop.exit();
            return;
        }
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
