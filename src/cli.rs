// cli.rs - Command-line interface configuration
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::config::{SceneKind, ViewerConfig};

#[derive(Parser, Debug, Clone)]
#[command(name = "scene-viewer")]
#[command(about = "Windowed 3D scene viewer", long_about = None)]
pub struct Cli {
    /// Scene variant to bootstrap
    #[arg(long, value_enum)]
    pub scene: Option<SceneKind>,

    /// Model or shader path for the loader-based variants
    #[arg(long)]
    pub asset: Option<PathBuf>,

    /// JSON config file; CLI flags override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable UI elements and console output
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,
}

impl Cli {
    /// Resolve launch options: config file first, then CLI overrides
    pub fn resolve(&self) -> Result<ViewerConfig> {
        let mut config = match &self.config {
            Some(path) => ViewerConfig::load(path)?,
            None => ViewerConfig::default(),
        };

        if let Some(scene) = self.scene {
            config.scene = scene;
        }
        if let Some(asset) = &self.asset {
            config.asset = Some(asset.clone());
        }
        if self.no_ui {
            config.show_ui = false;
        }

        Ok(config)
    }
}
