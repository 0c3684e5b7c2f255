pub mod gpu;
pub mod surface;

use anyhow::Result;

use crate::camera::Camera;
use crate::controls::ControlState;
use crate::scene::Scene;
use crate::viewport::Viewport;

/// Marching parameters for the raymarch variant, re-applied every frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaymarchSettings {
    /// How far a ray may travel before it is considered a miss
    pub max_distance: f32,
    /// Hit threshold for the distance field
    pub precision: f32,
}

impl Default for RaymarchSettings {
    fn default() -> Self {
        Self {
            max_distance: 50.0,
            precision: 0.01,
        }
    }
}

/// Everything the renderer may sample for one frame
pub struct FrameInput<'a> {
    pub scene: &'a Scene,
    pub camera: &'a Camera,
    pub raymarch: Option<&'a RaymarchSettings>,
    /// Present when a control panel is attached; the overlay edits these
    /// for the following frame
    pub controls: Option<&'a mut ControlState>,
    pub fps: f32,
}

/// The draw seam between the orchestration core and the rendering stack
///
/// One draw call per render step; the surface-backed implementation lives in
/// [`surface`], tests substitute counting mocks.
pub trait Renderer {
    /// Draw the current scene state into the output surface
    fn draw(&mut self, frame: &mut FrameInput<'_>) -> Result<()>;

    /// Resize the output surface to the viewport
    fn resize(&mut self, viewport: Viewport);

    /// Current output surface dimensions in pixels
    fn dimensions(&self) -> (u32, u32);
}
