pub mod draw;
pub mod init;
pub mod pipeline;
pub mod resources;

use std::sync::Arc;

use game_core::{Config, RenderSnapshot};
use winit::window::Window;
use wgpu::*;

use crate::camera::Camera;
use crate::error::SetupError;
use crate::mesh::{ball_geometry, paddle_geometry, Mesh};
use crate::window::WindowConfig;
use resources::InstanceBuffers;

pub struct Renderer {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub surface_config: SurfaceConfiguration,
    pub size: (u32, u32),

    pub pipeline: RenderPipeline,
    pub camera_bind_group: BindGroup,

    pub buffers: InstanceBuffers,
    pub ball_mesh: Mesh,
    pub paddle_mesh: Mesh,
}

impl Renderer {
    pub fn new(
        window: Arc<Window>,
        config: &Config,
        window_config: &WindowConfig,
        initial: &RenderSnapshot,
    ) -> Result<Self, SetupError> {
        let ctx = init::init_wgpu(window)?;
        let camera = Camera::orthographic(config.arena_width, config.arena_height);

        let pipes =
            pipeline::create_pipeline(&ctx.device, ctx.config.format, &window_config.shader_path)?;
        let buffers = resources::create_buffers(&ctx.device, &camera, config, initial);

        let (vertices, indices) = ball_geometry(config.ball_triangles);
        let ball_mesh = Mesh::new(&ctx.device, "Ball", &vertices, &indices);
        let (vertices, indices) = paddle_geometry();
        let paddle_mesh = Mesh::new(&ctx.device, "Paddle", &vertices, &indices);

        let camera_bind_group = ctx.device.create_bind_group(&BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &pipes.camera_layout,
            entries: &[BindGroupEntry {
                binding: 0,
                resource: buffers.camera.as_entire_binding(),
            }],
        });

        log::info!(
            "Renderer ready: {}x{} {:?}",
            ctx.size.0,
            ctx.size.1,
            ctx.config.format
        );

        Ok(Self {
            device: ctx.device,
            queue: ctx.queue,
            surface: ctx.surface,
            surface_config: ctx.config,
            size: ctx.size,
            pipeline: pipes.pipeline,
            camera_bind_group,
            buffers,
            ball_mesh,
            paddle_mesh,
        })
    }

    pub fn render(&mut self, snapshot: &RenderSnapshot) {
        draw::draw_frame(self, snapshot);
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.size = (width, height);
        self.surface_config.width = width;
        self.surface_config.height = height;
        self.surface.configure(&self.device, &self.surface_config);
    }
}

impl Drop for Renderer {
    fn drop(&mut self) {
        log::debug!("Releasing GPU buffers");
        self.buffers.destroy();
        self.ball_mesh.destroy();
        self.paddle_mesh.destroy();
    }
}
