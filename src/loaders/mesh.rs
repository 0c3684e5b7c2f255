use anyhow::{ensure, Context, Result};
use glam::{Mat4, Vec3};
use std::path::Path;

use crate::scene::MeshData;

/// Loads a glTF file and flattens every mesh primitive into one MeshData
///
/// Node transforms are baked into the vertices so the caller can place the
/// result with a single scene transform. A file with no usable geometry is
/// a load failure, not a placeholder.
pub fn load_mesh(path: impl AsRef<Path>) -> Result<MeshData> {
    let path = path.as_ref();
    log::info!("loading mesh: {}", path.display());

    let (document, buffers, _images) =
        gltf::import(path).with_context(|| format!("failed to load glTF file {}", path.display()))?;

    let mut mesh = MeshData::new(Vec::new(), Vec::new(), Vec::new());

    for gltf_scene in document.scenes() {
        for node in gltf_scene.nodes() {
            collect_node(&node, &buffers, &Mat4::IDENTITY, &mut mesh)?;
        }
    }

    ensure!(
        !mesh.is_empty(),
        "no mesh geometry found in {}",
        path.display()
    );

    log::info!(
        "mesh loaded: {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.index_count() / 3
    );
    Ok(mesh)
}

/// Walks a node hierarchy accumulating transforms
fn collect_node(
    node: &gltf::Node,
    buffers: &[gltf::buffer::Data],
    parent_transform: &Mat4,
    out: &mut MeshData,
) -> Result<()> {
    let local = Mat4::from_cols_array_2d(&node.transform().matrix());
    let global = *parent_transform * local;

    if let Some(mesh) = node.mesh() {
        collect_mesh(&mesh, buffers, &global, out)?;
    }

    for child in node.children() {
        collect_node(&child, buffers, &global, out)?;
    }

    Ok(())
}

fn collect_mesh(
    mesh: &gltf::Mesh,
    buffers: &[gltf::buffer::Data],
    transform: &Mat4,
    out: &mut MeshData,
) -> Result<()> {
    // Rotation/scale part for normals; positions get the full transform
    let normal_matrix = glam::Mat3::from_mat4(*transform);

    for primitive in mesh.primitives() {
        let reader = primitive.reader(|buffer| Some(&buffers[buffer.index()]));

        let positions = reader
            .read_positions()
            .context("mesh primitive has no positions")?;
        let positions: Vec<Vec3> = positions
            .map(|p| transform.transform_point3(Vec3::from_array(p)))
            .collect();

        if positions.is_empty() {
            continue;
        }

        let normals: Vec<Vec3> = match reader.read_normals() {
            Some(normals) => normals
                .map(|n| (normal_matrix * Vec3::from_array(n)).normalize_or_zero())
                .collect(),
            // Accept meshes without normals; light them as unshaded
            None => vec![Vec3::Y; positions.len()],
        };

        let indices: Vec<u32> = match reader.read_indices() {
            Some(indices) => indices.into_u32().collect(),
            None => (0..positions.len() as u32).collect(),
        };

        let base = out.vertex_count() as u32;
        out.positions.extend(positions.iter().map(|p| p.to_array()));
        out.normals.extend(normals.iter().map(|n| n.to_array()));
        out.indices.extend(indices.iter().map(|i| base + i));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_an_error() {
        let result = load_mesh("does/not/exist.gltf");
        assert!(result.is_err());
        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("exist.gltf"));
    }

    #[test]
    fn test_garbage_file_is_an_error() {
        let dir = std::env::temp_dir();
        let path = dir.join("scene_viewer_not_gltf.gltf");
        std::fs::write(&path, b"not a gltf document").unwrap();

        assert!(load_mesh(&path).is_err());

        std::fs::remove_file(&path).ok();
    }
}
