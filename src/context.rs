use anyhow::Result;

use crate::camera::Camera;
use crate::controls::ControlState;
use crate::frame_loop::{self, CancelToken, FrameScheduler};
use crate::render::{FrameInput, RaymarchSettings, Renderer};
use crate::scene::Scene;
use crate::stats::FrameStats;
use crate::viewport::Viewport;

/// Name of the controllable node in the cube variant
pub const CONTROLLED_NODE: &str = "cube";

/// Explicit state bundle for one bootstrapped scene
///
/// Owns everything the render step and the resize handler touch: viewport,
/// camera, scene, renderer, optional control state and stats. Constructed by
/// the `scenes` bootstrap functions; threaded explicitly instead of living
/// in module-level globals.
pub struct SceneContext<R: Renderer> {
    viewport: Viewport,
    camera: Camera,
    scene: Scene,
    renderer: R,
    controls: Option<ControlState>,
    raymarch: Option<RaymarchSettings>,
    stats: FrameStats,
}

impl<R: Renderer> SceneContext<R> {
    pub fn new(renderer: R, viewport: Viewport, scene: Scene) -> Self {
        Self {
            viewport,
            camera: Camera::new(viewport),
            scene,
            renderer,
            controls: None,
            raymarch: None,
            stats: FrameStats::new(),
        }
    }

    /// Attach live controls (cube variant)
    pub fn with_controls(mut self, controls: ControlState) -> Self {
        self.controls = Some(controls);
        self
    }

    /// Attach raymarch settings (raymarch variant)
    pub fn with_raymarch(mut self, settings: RaymarchSettings) -> Self {
        self.raymarch = Some(settings);
        self
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn controls(&self) -> Option<&ControlState> {
        self.controls.as_ref()
    }

    pub fn controls_mut(&mut self) -> Option<&mut ControlState> {
        self.controls.as_mut()
    }

    pub fn raymarch(&self) -> Option<&RaymarchSettings> {
        self.raymarch.as_ref()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }

    /// Resize handler: keep viewport, camera aspect and output surface in
    /// agreement. Idempotent; zero-sized events (minimized window) are
    /// ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        let Ok(viewport) = Viewport::new(width, height) else {
            log::debug!("ignoring zero-sized resize {}x{}", width, height);
            return;
        };
        if viewport == self.viewport {
            return;
        }

        self.viewport = viewport;
        self.camera.set_aspect(viewport.aspect());
        self.renderer.resize(viewport);
    }

    /// One render-loop step: sample controls onto the scene, draw once,
    /// tick the performance counter. Rescheduling belongs to the driver.
    pub fn render_step(&mut self) -> Result<()> {
        if let Some(controls) = self.controls {
            if let Some(node) = self.scene.node_mut(CONTROLLED_NODE) {
                node.transform.rotation.y += controls.rotation_speed;
                if let Some(material) = node.material_mut() {
                    material.opacity = controls.opacity;
                    material.color = controls.color;
                }
            }
        }

        let fps = self.stats.fps();
        let mut frame = FrameInput {
            scene: &self.scene,
            camera: &self.camera,
            raymarch: self.raymarch.as_ref(),
            controls: self.controls.as_mut(),
            fps,
        };
        self.renderer.draw(&mut frame)?;

        self.stats.tick();
        Ok(())
    }

    /// Drive the render loop from an explicit scheduler until it runs dry
    /// or the token is cancelled. Returns the number of frames rendered.
    pub fn run(
        &mut self,
        scheduler: &mut dyn FrameScheduler,
        token: &CancelToken,
    ) -> Result<u64> {
        frame_loop::run(scheduler, token, || self.render_step())
    }
}
