use game_core::{Config, RenderSnapshot};
use wgpu::util::DeviceExt;
use wgpu::*;

use crate::camera::{Camera, CameraUniform};

/// Per-instance position (matches shader `InstanceInput.offset`)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceOffset {
    pub offset: [f32; 2],
}

impl InstanceOffset {
    pub fn layout() -> VertexBufferLayout<'static> {
        VertexBufferLayout {
            array_stride: std::mem::size_of::<InstanceOffset>() as BufferAddress,
            step_mode: VertexStepMode::Instance,
            attributes: &[VertexAttribute {
                offset: 0,
                shader_location: 1,
                format: VertexFormat::Float32x2,
            }],
        }
    }
}

/// Per-instance scale (matches shader `InstanceInput.size`)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceSize {
    pub size: [f32; 2],
}

impl InstanceSize {
    pub fn layout() -> VertexBufferLayout<'static> {
        VertexBufferLayout {
            array_stride: std::mem::size_of::<InstanceSize>() as BufferAddress,
            step_mode: VertexStepMode::Instance,
            attributes: &[VertexAttribute {
                offset: 0,
                shader_location: 2,
                format: VertexFormat::Float32x2,
            }],
        }
    }
}

pub fn ball_offsets(snapshot: &RenderSnapshot) -> [InstanceOffset; 1] {
    [InstanceOffset {
        offset: snapshot.ball.to_array(),
    }]
}

/// Left paddle first, then right
pub fn paddle_offsets(snapshot: &RenderSnapshot) -> [InstanceOffset; 2] {
    snapshot.paddles.map(|pos| InstanceOffset {
        offset: pos.to_array(),
    })
}

pub fn ball_sizes(config: &Config) -> [InstanceSize; 1] {
    [InstanceSize {
        size: [config.ball_diameter, config.ball_diameter],
    }]
}

pub fn paddle_sizes(config: &Config) -> [InstanceSize; 2] {
    [InstanceSize {
        size: [config.paddle_width, config.paddle_height],
    }; 2]
}

/// GPU buffers fed by the simulation.
///
/// Sizes and the camera are written once; only offsets change per frame.
pub struct InstanceBuffers {
    pub camera: Buffer,
    pub ball_offsets: Buffer,
    pub ball_sizes: Buffer,
    pub paddle_offsets: Buffer,
    pub paddle_sizes: Buffer,
}

pub fn create_buffers(
    device: &Device,
    camera: &Camera,
    config: &Config,
    initial: &RenderSnapshot,
) -> InstanceBuffers {
    let camera_uniform = CameraUniform::from_camera(camera);
    let camera = device.create_buffer_init(&util::BufferInitDescriptor {
        label: Some("Camera Buffer"),
        contents: bytemuck::cast_slice(&[camera_uniform]),
        usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
    });

    let ball_offsets = device.create_buffer_init(&util::BufferInitDescriptor {
        label: Some("Ball Offset Buffer"),
        contents: bytemuck::cast_slice(&ball_offsets(initial)),
        usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
    });

    let ball_sizes = device.create_buffer_init(&util::BufferInitDescriptor {
        label: Some("Ball Size Buffer"),
        contents: bytemuck::cast_slice(&ball_sizes(config)),
        usage: BufferUsages::VERTEX,
    });

    let paddle_offsets = device.create_buffer_init(&util::BufferInitDescriptor {
        label: Some("Paddle Offset Buffer"),
        contents: bytemuck::cast_slice(&paddle_offsets(initial)),
        usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
    });

    let paddle_sizes = device.create_buffer_init(&util::BufferInitDescriptor {
        label: Some("Paddle Size Buffer"),
        contents: bytemuck::cast_slice(&paddle_sizes(config)),
        usage: BufferUsages::VERTEX,
    });

    InstanceBuffers {
        camera,
        ball_offsets,
        ball_sizes,
        paddle_offsets,
        paddle_sizes,
    }
}

impl InstanceBuffers {
    /// Overwrite the offset buffers with this frame's positions
    pub fn sync_positions(&self, queue: &Queue, snapshot: &RenderSnapshot) {
        queue.write_buffer(
            &self.ball_offsets,
            0,
            bytemuck::cast_slice(&ball_offsets(snapshot)),
        );
        queue.write_buffer(
            &self.paddle_offsets,
            0,
            bytemuck::cast_slice(&paddle_offsets(snapshot)),
        );
    }

    pub fn destroy(&self) {
        self.camera.destroy();
        self.ball_offsets.destroy();
        self.ball_sizes.destroy();
        self.paddle_offsets.destroy();
        self.paddle_sizes.destroy();
    }
}
