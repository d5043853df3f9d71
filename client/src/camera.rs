//! Camera for Pong game
//!
//! Fixed 2D orthographic camera over the arena, one unit per pixel

use glam::Mat4;

/// Camera struct
pub struct Camera {
    pub projection: Mat4,
}

impl Camera {
    /// Create an orthographic camera with (0, 0) at the bottom-left and
    /// (`width`, `height`) at the top-right
    pub fn orthographic(width: f32, height: f32) -> Self {
        let projection = Mat4::orthographic_rh(0.0, width, 0.0, height, -1.0, 1.0);
        Self { projection }
    }
}

/// Camera uniform data (matches WGSL `Camera`)
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn from_camera(camera: &Camera) -> Self {
        Self {
            view_proj: camera.projection.to_cols_array_2d(),
        }
    }
}
