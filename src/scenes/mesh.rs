use anyhow::Result;
use glam::Vec3;
use std::path::Path;

use crate::context::SceneContext;
use crate::loaders;
use crate::render::Renderer;
use crate::scene::{LightSource, Material, Scene, SceneNode, Transform};
use crate::viewport::Viewport;

const MODEL_COLOR: [f32; 3] = [0.7, 0.7, 0.75];
const MODEL_SCALE: f32 = 3.0;

/// Loads a model from disk and places it at the origin, scaled up
///
/// Initialization fails if the load fails; the loop is never entered with a
/// half-built scene.
pub fn bootstrap_mesh<R: Renderer>(
    renderer: R,
    viewport: Viewport,
    model_path: impl AsRef<Path>,
) -> Result<SceneContext<R>> {
    let mesh = loaders::load_mesh(model_path)?;

    let mut scene = Scene::new();
    scene.add(
        SceneNode::mesh("model", mesh, Material::new(MODEL_COLOR))
            .with_transform(Transform::at(Vec3::ZERO).with_scale(MODEL_SCALE)),
    );
    scene.add(SceneNode::light(
        "key",
        LightSource::white(Vec3::new(10.0, 20.0, 20.0)),
    ));

    Ok(SceneContext::new(renderer, viewport, scene))
}
