pub mod mesh;
pub mod shader;

pub use mesh::load_mesh;
pub use shader::{load_shader_source, ShaderSource};
