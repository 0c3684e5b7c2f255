pub mod app;
pub mod camera;
pub mod cli;
pub mod config;
pub mod context;
pub mod controls;
pub mod frame_loop;
pub mod loaders;
pub mod panel;
pub mod render;
pub mod scene;
pub mod scenes;
pub mod stats;
pub mod viewport;

pub use context::SceneContext;
pub use frame_loop::{CancelToken, FixedFrames, FrameScheduler};
pub use scenes::{bootstrap_basic, bootstrap_cube, bootstrap_mesh, bootstrap_raymarch};
