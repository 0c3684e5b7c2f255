use glam::Vec3;

use crate::context::SceneContext;
use crate::controls::ControlState;
use crate::render::Renderer;
use crate::scene::{LightSource, Material, MeshData, Scene, SceneNode, Transform};
use crate::viewport::Viewport;

const CUBE_COLOR: [f32; 3] = [1.0, 0.0, 0.0];
const PLANE_COLOR: [f32; 3] = [0.8, 0.8, 0.8];

/// Red cube over a ground plane under a single white light, with live
/// controls and the FPS counter attached
pub fn bootstrap_cube<R: Renderer>(renderer: R, viewport: Viewport) -> SceneContext<R> {
    let mut scene = Scene::new();

    let controls = ControlState {
        color: CUBE_COLOR,
        ..ControlState::default()
    };

    scene.add(SceneNode::mesh(
        "cube",
        MeshData::cuboid(6.0, 4.0, 6.0),
        Material::new(CUBE_COLOR).with_transparency(controls.opacity),
    ));

    // Quad faces +Z; lay it flat under the cube
    let mut plane_transform = Transform::at(Vec3::new(0.0, -2.0, 0.0));
    plane_transform.rotation.x = -std::f32::consts::FRAC_PI_2;
    scene.add(
        SceneNode::mesh(
            "ground",
            MeshData::plane(20.0, 20.0),
            Material::new(PLANE_COLOR),
        )
        .with_transform(plane_transform),
    );

    scene.add(SceneNode::light(
        "spot",
        LightSource::white(Vec3::new(10.0, 20.0, 20.0)),
    ));

    SceneContext::new(renderer, viewport, scene).with_controls(controls)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::test_support::MockRenderer;
    use crate::scene::NodeKind;

    fn ctx() -> SceneContext<MockRenderer> {
        let viewport = Viewport::new(800, 600).unwrap();
        bootstrap_cube(MockRenderer::new(800, 600), viewport)
    }

    #[test]
    fn test_scene_contents() {
        let ctx = ctx();
        assert_eq!(ctx.scene().len(), 3);
        assert_eq!(ctx.scene().meshes().count(), 2);
        assert_eq!(ctx.scene().lights().count(), 1);
    }

    #[test]
    fn test_cube_is_transparent_red() {
        let ctx = ctx();
        let material = ctx.scene().node("cube").unwrap().material().unwrap();
        assert_eq!(material.color, [1.0, 0.0, 0.0]);
        assert!(material.transparent);
        assert_eq!(material.opacity, 0.6);
    }

    #[test]
    fn test_ground_lies_below_cube() {
        let ctx = ctx();
        let ground = ctx.scene().node("ground").unwrap();
        assert_eq!(ground.transform.translation.y, -2.0);
        assert!((ground.transform.rotation.x + std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_light_position() {
        let ctx = ctx();
        let light = ctx.scene().lights().next().unwrap();
        assert_eq!(light.position, Vec3::new(10.0, 20.0, 20.0));
    }

    #[test]
    fn test_controls_attached_with_cube_color() {
        let ctx = ctx();
        let controls = ctx.controls().unwrap();
        assert_eq!(controls.color, [1.0, 0.0, 0.0]);
        assert_eq!(controls.rotation_speed, 0.005);
    }

    #[test]
    fn test_light_node_has_no_material() {
        let ctx = ctx();
        let spot = ctx.scene().node("spot").unwrap();
        assert!(matches!(spot.kind, NodeKind::Light(_)));
        assert!(spot.material().is_none());
    }
}
