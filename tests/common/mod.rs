use anyhow::Result;

use scene_viewer::render::{FrameInput, RaymarchSettings, Renderer};
use scene_viewer::viewport::Viewport;

/// Renderer double that counts draws and records what it sampled
pub struct CountingRenderer {
    pub draw_calls: usize,
    pub resize_calls: usize,
    pub width: u32,
    pub height: u32,
    pub sampled_opacity: Vec<f32>,
    pub sampled_colors: Vec<[f32; 3]>,
    pub last_raymarch: Option<RaymarchSettings>,
}

impl CountingRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            draw_calls: 0,
            resize_calls: 0,
            width,
            height,
            sampled_opacity: Vec::new(),
            sampled_colors: Vec::new(),
            last_raymarch: None,
        }
    }
}

impl Renderer for CountingRenderer {
    fn draw(&mut self, frame: &mut FrameInput<'_>) -> Result<()> {
        self.draw_calls += 1;
        if let Some(material) = frame.scene.node("cube").and_then(|n| n.material()) {
            self.sampled_opacity.push(material.opacity);
            self.sampled_colors.push(material.color);
        }
        self.last_raymarch = frame.raymarch.copied();
        Ok(())
    }

    fn resize(&mut self, viewport: Viewport) {
        self.resize_calls += 1;
        self.width = viewport.width;
        self.height = viewport.height;
    }

    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
