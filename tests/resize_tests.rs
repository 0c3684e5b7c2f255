mod common;

use common::CountingRenderer;
use scene_viewer::render::Renderer;
use scene_viewer::scenes::bootstrap_basic;
use scene_viewer::viewport::Viewport;

fn viewport(w: u32, h: u32) -> Viewport {
    Viewport::new(w, h).unwrap()
}

#[test]
fn test_resize_updates_surface_and_aspect() {
    let mut ctx = bootstrap_basic(CountingRenderer::new(800, 600), viewport(800, 600));

    ctx.resize(1024, 768);

    assert_eq!(ctx.renderer().dimensions(), (1024, 768));
    assert_eq!(ctx.camera().aspect(), 1024.0 / 768.0);
}

#[test]
fn test_resize_is_idempotent() {
    let mut ctx = bootstrap_basic(CountingRenderer::new(800, 600), viewport(800, 600));

    ctx.resize(1024, 768);
    let aspect = ctx.camera().aspect();
    let resizes = ctx.renderer().resize_calls;

    ctx.resize(1024, 768);

    assert_eq!(ctx.camera().aspect(), aspect);
    assert_eq!(ctx.renderer().dimensions(), (1024, 768));
    assert_eq!(ctx.renderer().resize_calls, resizes);
}

#[test]
fn test_viewport_and_aspect_agree_after_any_resize() {
    let mut ctx = bootstrap_basic(CountingRenderer::new(800, 600), viewport(800, 600));

    for (w, h) in [(1024, 768), (640, 480), (1920, 1080), (333, 777)] {
        ctx.resize(w, h);
        assert_eq!(ctx.camera().aspect(), ctx.viewport().aspect());
        assert_eq!(ctx.renderer().dimensions(), (w, h));
    }
}

#[test]
fn test_minimized_window_resize_is_ignored() {
    let mut ctx = bootstrap_basic(CountingRenderer::new(800, 600), viewport(800, 600));

    ctx.resize(0, 0);
    ctx.resize(0, 600);
    ctx.resize(800, 0);

    assert_eq!(ctx.renderer().dimensions(), (800, 600));
    assert_eq!(ctx.camera().aspect(), 800.0 / 600.0);
    assert_eq!(ctx.renderer().resize_calls, 0);
}
