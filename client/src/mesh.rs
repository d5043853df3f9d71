//! GPU meshes for the ball disc and the paddle quad

use game_core::mesh::{generate_disc, unit_quad};
use glam::Vec2;
use wgpu::util::DeviceExt;
use wgpu::*;

/// Vertex data for meshes
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
}

impl Vertex {
    pub fn layout() -> VertexBufferLayout<'static> {
        VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as BufferAddress,
            step_mode: VertexStepMode::Vertex,
            attributes: &[VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: VertexFormat::Float32x2,
            }],
        }
    }
}

impl From<Vec2> for Vertex {
    fn from(v: Vec2) -> Self {
        Self {
            position: v.to_array(),
        }
    }
}

/// Ball mesh with unit diameter; the instance size scales it to the ball
pub fn ball_geometry(triangles: u32) -> (Vec<Vertex>, Vec<u32>) {
    let (vertices, indices) = generate_disc(triangles, 0.5);
    (vertices.into_iter().map(Vertex::from).collect(), indices)
}

/// Unit paddle quad
pub fn paddle_geometry() -> (Vec<Vertex>, Vec<u32>) {
    let (vertices, indices) = unit_quad();
    (
        vertices.into_iter().map(Vertex::from).collect(),
        indices.to_vec(),
    )
}

/// Mesh data with GPU buffers
pub struct Mesh {
    pub vertex_buffer: Buffer,
    pub index_buffer: Buffer,
    pub index_count: u32,
}

impl Mesh {
    pub fn new(device: &Device, label: &str, vertices: &[Vertex], indices: &[u32]) -> Self {
        let vertex_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
            label: Some(&format!("{label} Vertex Buffer")),
            contents: bytemuck::cast_slice(vertices),
            usage: BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
            label: Some(&format!("{label} Index Buffer")),
            contents: bytemuck::cast_slice(indices),
            usage: BufferUsages::INDEX,
        });

        Self {
            vertex_buffer,
            index_buffer,
            index_count: indices.len() as u32,
        }
    }

    pub fn destroy(&self) {
        self.vertex_buffer.destroy();
        self.index_buffer.destroy();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ball_geometry_has_unit_diameter() {
        let (vertices, indices) = ball_geometry(20);
        assert_eq!(vertices.len(), 21);
        assert_eq!(indices.len(), 60);
        assert_eq!(vertices[0], Vertex { position: [0.0, 0.0] });
        assert!((vertices[1].position[0] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_paddle_geometry_is_two_triangles() {
        let (vertices, indices) = paddle_geometry();
        assert_eq!(vertices.len(), 4);
        assert_eq!(indices, vec![0, 1, 2, 2, 3, 0]);
    }
}
