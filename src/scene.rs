use glam::{EulerRot, Mat4, Quat, Vec3};

/// Triangle mesh geometry in object space
#[derive(Debug, Clone)]
pub struct MeshData {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn new(positions: Vec<[f32; 3]>, normals: Vec<[f32; 3]>, indices: Vec<u32>) -> Self {
        Self {
            positions,
            normals,
            indices,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Axis-aligned box centered at the origin with per-face normals
    pub fn cuboid(width: f32, height: f32, depth: f32) -> Self {
        let (hw, hh, hd) = (width * 0.5, height * 0.5, depth * 0.5);

        // One quad per face so each face keeps a flat normal
        let faces: [([f32; 3], [[f32; 3]; 4]); 6] = [
            // +X
            (
                [1.0, 0.0, 0.0],
                [
                    [hw, -hh, -hd],
                    [hw, hh, -hd],
                    [hw, hh, hd],
                    [hw, -hh, hd],
                ],
            ),
            // -X
            (
                [-1.0, 0.0, 0.0],
                [
                    [-hw, -hh, hd],
                    [-hw, hh, hd],
                    [-hw, hh, -hd],
                    [-hw, -hh, -hd],
                ],
            ),
            // +Y
            (
                [0.0, 1.0, 0.0],
                [
                    [-hw, hh, -hd],
                    [-hw, hh, hd],
                    [hw, hh, hd],
                    [hw, hh, -hd],
                ],
            ),
            // -Y
            (
                [0.0, -1.0, 0.0],
                [
                    [-hw, -hh, hd],
                    [-hw, -hh, -hd],
                    [hw, -hh, -hd],
                    [hw, -hh, hd],
                ],
            ),
            // +Z
            (
                [0.0, 0.0, 1.0],
                [
                    [-hw, -hh, hd],
                    [hw, -hh, hd],
                    [hw, hh, hd],
                    [-hw, hh, hd],
                ],
            ),
            // -Z
            (
                [0.0, 0.0, -1.0],
                [
                    [hw, -hh, -hd],
                    [-hw, -hh, -hd],
                    [-hw, hh, -hd],
                    [hw, hh, -hd],
                ],
            ),
        ];

        let mut positions = Vec::with_capacity(24);
        let mut normals = Vec::with_capacity(24);
        let mut indices = Vec::with_capacity(36);

        for (normal, corners) in faces {
            let base = positions.len() as u32;
            positions.extend_from_slice(&corners);
            normals.extend_from_slice(&[normal; 4]);
            indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        }

        Self::new(positions, normals, indices)
    }

    /// Flat quad in the XY plane facing +Z; orient it with the node transform
    pub fn plane(width: f32, height: f32) -> Self {
        let (hw, hh) = (width * 0.5, height * 0.5);

        let positions = vec![
            [-hw, -hh, 0.0],
            [hw, -hh, 0.0],
            [hw, hh, 0.0],
            [-hw, hh, 0.0],
        ];
        let normals = vec![[0.0, 0.0, 1.0]; 4];
        let indices = vec![0, 1, 2, 0, 2, 3];

        Self::new(positions, normals, indices)
    }
}

/// Surface appearance sampled by the renderer each frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub color: [f32; 3],
    pub opacity: f32,
    pub transparent: bool,
}

impl Material {
    pub fn new(color: [f32; 3]) -> Self {
        Self {
            color,
            opacity: 1.0,
            transparent: false,
        }
    }

    pub fn with_transparency(mut self, opacity: f32) -> Self {
        self.transparent = true;
        self.opacity = opacity;
        self
    }
}

/// Node placement: translation, XYZ euler rotation (radians), scale
#[derive(Debug, Clone, Copy)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn at(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::default()
        }
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = Vec3::splat(scale);
        self
    }

    pub fn matrix(&self) -> Mat4 {
        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        Mat4::from_scale_rotation_translation(self.scale, rotation, self.translation)
    }
}

/// Point light with a falloff-free intensity, white by default
#[derive(Debug, Clone, Copy)]
pub struct LightSource {
    pub position: Vec3,
    pub color: [f32; 3],
    pub intensity: f32,
}

impl LightSource {
    pub fn white(position: Vec3) -> Self {
        Self {
            position,
            color: [1.0, 1.0, 1.0],
            intensity: 1.0,
        }
    }
}

/// What a scene node contributes to the frame
#[derive(Debug, Clone)]
pub enum NodeKind {
    Mesh { mesh: MeshData, material: Material },
    Light(LightSource),
}

/// Named node in the scene
#[derive(Debug, Clone)]
pub struct SceneNode {
    pub name: String,
    pub transform: Transform,
    pub kind: NodeKind,
}

impl SceneNode {
    pub fn mesh(name: impl Into<String>, mesh: MeshData, material: Material) -> Self {
        Self {
            name: name.into(),
            transform: Transform::default(),
            kind: NodeKind::Mesh { mesh, material },
        }
    }

    pub fn light(name: impl Into<String>, light: LightSource) -> Self {
        Self {
            name: name.into(),
            transform: Transform::at(light.position),
            kind: NodeKind::Light(light),
        }
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn material(&self) -> Option<&Material> {
        match &self.kind {
            NodeKind::Mesh { material, .. } => Some(material),
            NodeKind::Light(_) => None,
        }
    }

    pub fn material_mut(&mut self) -> Option<&mut Material> {
        match &mut self.kind {
            NodeKind::Mesh { material, .. } => Some(material),
            NodeKind::Light(_) => None,
        }
    }
}

/// Insertion-ordered collection of drawable and lightable nodes
#[derive(Debug, Clone, Default)]
pub struct Scene {
    nodes: Vec<SceneNode>,
    /// Clear color for the output surface, black like the original scenes
    pub clear_color: [f32; 3],
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, node: SceneNode) {
        self.nodes.push(node);
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SceneNode> {
        self.nodes.iter()
    }

    /// First node with the given name, in insertion order
    pub fn node(&self, name: &str) -> Option<&SceneNode> {
        self.nodes.iter().find(|n| n.name == name)
    }

    pub fn node_mut(&mut self, name: &str) -> Option<&mut SceneNode> {
        self.nodes.iter_mut().find(|n| n.name == name)
    }

    pub fn meshes(&self) -> impl Iterator<Item = &SceneNode> {
        self.nodes
            .iter()
            .filter(|n| matches!(n.kind, NodeKind::Mesh { .. }))
    }

    pub fn lights(&self) -> impl Iterator<Item = &LightSource> {
        self.nodes.iter().filter_map(|n| match &n.kind {
            NodeKind::Light(light) => Some(light),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_preserves_insertion_order() {
        let mut scene = Scene::new();
        scene.add(SceneNode::mesh(
            "first",
            MeshData::cuboid(1.0, 1.0, 1.0),
            Material::new([1.0, 0.0, 0.0]),
        ));
        scene.add(SceneNode::mesh(
            "second",
            MeshData::plane(2.0, 2.0),
            Material::new([0.0, 1.0, 0.0]),
        ));

        let names: Vec<_> = scene.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second"]);
    }

    #[test]
    fn test_node_lookup_by_name() {
        let mut scene = Scene::new();
        scene.add(SceneNode::mesh(
            "cube",
            MeshData::cuboid(6.0, 4.0, 6.0),
            Material::new([1.0, 0.0, 0.0]),
        ));

        assert!(scene.node("cube").is_some());
        assert!(scene.node("missing").is_none());
    }

    #[test]
    fn test_node_mut_allows_material_update() {
        let mut scene = Scene::new();
        scene.add(SceneNode::mesh(
            "cube",
            MeshData::cuboid(1.0, 1.0, 1.0),
            Material::new([1.0, 0.0, 0.0]).with_transparency(0.6),
        ));

        let node = scene.node_mut("cube").unwrap();
        node.material_mut().unwrap().opacity = 0.4;

        assert_eq!(scene.node("cube").unwrap().material().unwrap().opacity, 0.4);
    }

    #[test]
    fn test_lights_iterator_skips_meshes() {
        let mut scene = Scene::new();
        scene.add(SceneNode::mesh(
            "cube",
            MeshData::cuboid(1.0, 1.0, 1.0),
            Material::new([1.0, 0.0, 0.0]),
        ));
        scene.add(SceneNode::light(
            "sun",
            LightSource::white(Vec3::new(10.0, 20.0, 20.0)),
        ));

        assert_eq!(scene.lights().count(), 1);
        assert_eq!(scene.meshes().count(), 1);
    }

    #[test]
    fn test_cuboid_geometry_counts() {
        let mesh = MeshData::cuboid(6.0, 4.0, 6.0);
        assert_eq!(mesh.vertex_count(), 24);
        assert_eq!(mesh.index_count(), 36);
        assert!(!mesh.is_empty());
    }

    #[test]
    fn test_cuboid_spans_requested_extent() {
        let mesh = MeshData::cuboid(6.0, 4.0, 6.0);
        let max_x = mesh
            .positions
            .iter()
            .map(|p| p[0])
            .fold(f32::NEG_INFINITY, f32::max);
        let min_y = mesh
            .positions
            .iter()
            .map(|p| p[1])
            .fold(f32::INFINITY, f32::min);
        assert_eq!(max_x, 3.0);
        assert_eq!(min_y, -2.0);
    }

    #[test]
    fn test_plane_faces_positive_z() {
        let mesh = MeshData::plane(20.0, 20.0);
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.index_count(), 6);
        for normal in &mesh.normals {
            assert_eq!(*normal, [0.0, 0.0, 1.0]);
        }
    }

    #[test]
    fn test_transform_matrix_applies_scale_and_translation() {
        let transform = Transform::at(Vec3::new(1.0, 2.0, 3.0)).with_scale(3.0);
        let point = transform.matrix().transform_point3(Vec3::ONE);
        assert!((point - Vec3::new(4.0, 5.0, 6.0)).length() < 1e-6);
    }

    #[test]
    fn test_default_transform_is_identity() {
        let transform = Transform::default();
        let point = transform.matrix().transform_point3(Vec3::new(1.0, 2.0, 3.0));
        assert!((point - Vec3::new(1.0, 2.0, 3.0)).length() < 1e-6);
    }
}
