mod common;

use common::CountingRenderer;
use scene_viewer::controls::ControlState;
use scene_viewer::scenes::bootstrap_cube;
use scene_viewer::viewport::Viewport;

fn viewport(w: u32, h: u32) -> Viewport {
    Viewport::new(w, h).unwrap()
}

#[test]
fn test_opacity_is_sampled_not_cached() {
    let mut ctx = bootstrap_cube(CountingRenderer::new(800, 600), viewport(800, 600));

    ctx.controls_mut().unwrap().set_opacity(0.4);
    ctx.render_step().unwrap();

    assert_eq!(ctx.renderer().sampled_opacity, vec![0.4]);

    ctx.controls_mut().unwrap().set_opacity(0.8);
    ctx.render_step().unwrap();

    assert_eq!(ctx.renderer().sampled_opacity, vec![0.4, 0.8]);
}

#[test]
fn test_color_applies_to_cube_material() {
    let mut ctx = bootstrap_cube(CountingRenderer::new(800, 600), viewport(800, 600));

    ctx.controls_mut().unwrap().color = [0.0, 0.5, 1.0];
    ctx.render_step().unwrap();

    assert_eq!(ctx.renderer().sampled_colors.last(), Some(&[0.0, 0.5, 1.0]));
}

#[test]
fn test_rotation_speed_turns_the_cube() {
    let mut ctx = bootstrap_cube(CountingRenderer::new(800, 600), viewport(800, 600));

    ctx.controls_mut().unwrap().set_rotation_speed(0.01);
    for _ in 0..5 {
        ctx.render_step().unwrap();
    }

    let rotation = ctx.scene().node("cube").unwrap().transform.rotation.y;
    assert!((rotation - 0.05).abs() < 1e-6);
}

#[test]
fn test_setters_clamp_to_declared_ranges() {
    let mut controls = ControlState::default();

    controls.set_opacity(5.0);
    assert_eq!(controls.opacity, 1.0);

    controls.set_opacity(-5.0);
    assert_eq!(controls.opacity, 0.1);

    controls.set_rotation_speed(1.0);
    assert_eq!(controls.rotation_speed, 0.01);
}

#[test]
fn test_controls_untouched_between_steps() {
    let mut ctx = bootstrap_cube(CountingRenderer::new(800, 600), viewport(800, 600));

    ctx.render_step().unwrap();
    ctx.render_step().unwrap();

    // The step samples controls; it never writes them back
    let controls = ctx.controls().unwrap();
    assert_eq!(controls.opacity, 0.6);
    assert_eq!(controls.rotation_speed, 0.005);
}
