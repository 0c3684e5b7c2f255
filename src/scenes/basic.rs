use crate::context::SceneContext;
use crate::render::Renderer;
use crate::scene::Scene;
use crate::viewport::Viewport;

/// Empty scene, default camera; the loop starts immediately
pub fn bootstrap_basic<R: Renderer>(renderer: R, viewport: Viewport) -> SceneContext<R> {
    SceneContext::new(renderer, viewport, Scene::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::test_support::MockRenderer;

    #[test]
    fn test_basic_scene_is_empty() {
        let viewport = Viewport::new(800, 600).unwrap();
        let ctx = bootstrap_basic(MockRenderer::new(800, 600), viewport);

        assert!(ctx.scene().is_empty());
        assert_eq!(ctx.camera().aspect(), 800.0 / 600.0);
        assert!(ctx.controls().is_none());
        assert!(ctx.raymarch().is_none());
    }
}
