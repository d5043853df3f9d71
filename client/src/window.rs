use std::path::PathBuf;
use std::sync::Arc;

use game_core::Params;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes};

use crate::error::SetupError;

pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub shader_path: PathBuf,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Pong".to_string(),
            width: Params::ARENA_WIDTH as u32,
            height: Params::ARENA_HEIGHT as u32,
            shader_path: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/shaders/pong.wgsl")),
        }
    }
}

/// Fixed-size window matching the arena
pub fn create_window(
    event_loop: &ActiveEventLoop,
    config: &WindowConfig,
) -> Result<Arc<Window>, SetupError> {
    let attrs = WindowAttributes::default()
        .with_title(&config.title)
        .with_inner_size(winit::dpi::LogicalSize::new(config.width, config.height))
        .with_resizable(false);

    let window = event_loop.create_window(attrs)?;
    Ok(Arc::new(window))
}
