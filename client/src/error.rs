use std::path::PathBuf;

use thiserror::Error;

/// Process exit codes for setup failures
pub mod exit_code {
    pub const WINDOW: u8 = 1;
    pub const UNSUPPORTED_GPU: u8 = 2;
    pub const SHADER: u8 = 3;
    pub const GPU_INIT: u8 = 4;
}

/// Anything that stops the game from reaching its first frame
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("no suitable GPU adapter found")]
    NoAdapter,

    #[error("failed to create device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("unsupported GPU '{adapter}': {reason}")]
    UnsupportedGpu { adapter: String, reason: String },

    #[error("failed to read shader '{}': {source}", .path.display())]
    ShaderRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to build pipeline from '{}': {message}", .path.display())]
    ShaderCompile { path: PathBuf, message: String },
}

impl SetupError {
    pub fn exit_code(&self) -> u8 {
        match self {
            SetupError::EventLoop(_) | SetupError::Window(_) => exit_code::WINDOW,
            SetupError::Surface(_) | SetupError::NoAdapter | SetupError::Device(_) => {
                exit_code::GPU_INIT
            }
            SetupError::UnsupportedGpu { .. } => exit_code::UNSUPPORTED_GPU,
            SetupError::ShaderRead { .. } | SetupError::ShaderCompile { .. } => exit_code::SHADER,
        }
    }
}
