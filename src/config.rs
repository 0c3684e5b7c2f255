use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Which bootstrap variant to run
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SceneKind {
    /// Empty scene, default camera
    Basic,
    /// Model loaded from disk
    Mesh,
    /// Red cube with live controls and FPS counter
    #[default]
    Cube,
    /// Fullscreen raymarched shader
    Raymarch,
}

/// Launch options, readable from a JSON file and overridden by CLI flags
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub scene: SceneKind,
    /// Model or shader path for the loader-based variants
    pub asset: Option<PathBuf>,
    pub show_ui: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: "Scene Viewer".to_string(),
            width: 800,
            height: 600,
            scene: SceneKind::default(),
            asset: None,
            show_ui: true,
        }
    }
}

impl ViewerConfig {
    /// Read a config file; missing keys fall back to the defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("failed to parse config {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_defaults() {
        let config = ViewerConfig::default();
        assert_eq!(config.width, 800);
        assert_eq!(config.height, 600);
        assert_eq!(config.scene, SceneKind::Cube);
        assert!(config.show_ui);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let path = std::env::temp_dir().join("scene_viewer_partial.json");
        fs::write(&path, r#"{ "scene": "raymarch", "width": 1280 }"#).unwrap();

        let config = ViewerConfig::load(&path).unwrap();
        assert_eq!(config.scene, SceneKind::Raymarch);
        assert_eq!(config.width, 1280);
        assert_eq!(config.height, 600);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(ViewerConfig::load("no/such/config.json").is_err());
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let path = std::env::temp_dir().join("scene_viewer_bad.json");
        fs::write(&path, "{ not json").unwrap();

        let err = format!("{:#}", ViewerConfig::load(&path).unwrap_err());
        assert!(err.contains("parse"));

        fs::remove_file(&path).ok();
    }
}
