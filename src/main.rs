use anyhow::Result;
use clap::Parser;
use winit::event_loop::EventLoop;

use scene_viewer::app::App;
use scene_viewer::cli::Cli;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = cli.resolve()?;

    if config.show_ui {
        println!("Scene Viewer - Escape to quit");
    }

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;

    Ok(())
}
