use anyhow::{ensure, Context, Result};
use std::path::Path;

/// Entry points the raymarch pipeline expects from the loaded module
const REQUIRED_ENTRY_POINTS: [&str; 2] = ["vs_main", "fs_main"];

/// WGSL source loaded from disk and sanity-checked
///
/// Holding this type is proof the load succeeded; the raymarch bootstrap
/// takes it instead of a path so a failed load can never reach the loop.
#[derive(Debug, Clone)]
pub struct ShaderSource {
    source: String,
}

impl ShaderSource {
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

/// Loads a WGSL shader module from a file
pub fn load_shader_source(path: impl AsRef<Path>) -> Result<ShaderSource> {
    let path = path.as_ref();
    log::info!("loading shader: {}", path.display());

    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read shader {}", path.display()))?;

    ensure!(
        !source.trim().is_empty(),
        "shader {} is empty",
        path.display()
    );

    for entry in REQUIRED_ENTRY_POINTS {
        ensure!(
            source.contains(entry),
            "shader {} is missing entry point `{}`",
            path.display(),
            entry
        );
    }

    Ok(ShaderSource { source })
}
