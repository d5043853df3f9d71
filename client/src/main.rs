//! Two-player Pong on a native window.
//!
//! Left paddle: W / S. Right paddle: Up / Down. Escape quits.

mod app;
mod camera;
mod error;
mod input;
mod mesh;
mod renderer;
mod report;
mod window;

use std::process::ExitCode;

use game_core::Config;
use winit::event_loop::{ControlFlow, EventLoop};

use app::App;
use error::SetupError;
use window::WindowConfig;

fn run() -> Result<(), SetupError> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(Config::new(), WindowConfig::default());
    event_loop.run_app(&mut app)?;

    match app.take_error() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Pong starting...");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Fatal: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}
