use std::path::Path;

use wgpu::*;

use super::resources::{InstanceOffset, InstanceSize};
use crate::error::SetupError;
use crate::mesh::Vertex;

pub struct PipelineState {
    pub pipeline: RenderPipeline,
    pub camera_layout: BindGroupLayout,
}

/// Load the WGSL source from disk and build the instanced pipeline.
///
/// Compile and link problems surface as `ShaderCompile` instead of a
/// device panic.
pub fn create_pipeline(
    device: &Device,
    format: TextureFormat,
    shader_path: &Path,
) -> Result<PipelineState, SetupError> {
    let source = std::fs::read_to_string(shader_path).map_err(|source| SetupError::ShaderRead {
        path: shader_path.to_path_buf(),
        source,
    })?;
    log::debug!("Loaded shader {}", shader_path.display());

    device.push_error_scope(ErrorFilter::Validation);

    let camera_layout = device.create_bind_group_layout(&BindGroupLayoutDescriptor {
        label: Some("Camera Bind Group Layout"),
        entries: &[BindGroupLayoutEntry {
            binding: 0,
            visibility: ShaderStages::VERTEX,
            ty: BindingType::Buffer {
                ty: BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
    });

    let shader = device.create_shader_module(ShaderModuleDescriptor {
        label: Some("Pong Shader"),
        source: ShaderSource::Wgsl(source.into()),
    });

    let layout = device.create_pipeline_layout(&PipelineLayoutDescriptor {
        label: Some("Render Pipeline Layout"),
        bind_group_layouts: &[&camera_layout],
        push_constant_ranges: &[],
    });

    let pipeline = device.create_render_pipeline(&RenderPipelineDescriptor {
        label: Some("Render Pipeline"),
        layout: Some(&layout),
        vertex: VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[Vertex::layout(), InstanceOffset::layout(), InstanceSize::layout()],
            compilation_options: Default::default(),
        },
        fragment: Some(FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(ColorTargetState {
                format,
                blend: Some(BlendState::REPLACE),
                write_mask: ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: PrimitiveState {
            topology: PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: FrontFace::Ccw,
            cull_mode: None,
            unclipped_depth: false,
            polygon_mode: PolygonMode::Fill,
            conservative: false,
        },
        depth_stencil: None,
        multisample: MultisampleState::default(),
        multiview: None,
        cache: None,
    });

    if let Some(err) = pollster::block_on(device.pop_error_scope()) {
        return Err(SetupError::ShaderCompile {
            path: shader_path.to_path_buf(),
            message: err.to_string(),
        });
    }

    Ok(PipelineState {
        pipeline,
        camera_layout,
    })
}
