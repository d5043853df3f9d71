use game_core::RenderSnapshot;
use wgpu::*;

use super::Renderer;
use crate::mesh::Mesh;

pub fn draw_frame(renderer: &mut Renderer, snapshot: &RenderSnapshot) {
    renderer.buffers.sync_positions(&renderer.queue, snapshot);

    let output = match renderer.surface.get_current_texture() {
        Ok(output) => output,
        Err(SurfaceError::Lost | SurfaceError::Outdated) => {
            let (width, height) = renderer.size;
            renderer.resize(width, height);
            return;
        }
        Err(SurfaceError::OutOfMemory) => {
            log::error!("GPU out of memory, skipping frame");
            return;
        }
        Err(e) => {
            log::warn!("Surface error: {e:?}");
            return;
        }
    };

    let view = output.texture.create_view(&TextureViewDescriptor::default());
    let mut encoder = renderer.device.create_command_encoder(&CommandEncoderDescriptor {
        label: Some("Render Encoder"),
    });

    {
        let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Main Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(Color::BLACK),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        pass.set_pipeline(&renderer.pipeline);
        pass.set_bind_group(0, &renderer.camera_bind_group, &[]);

        // Ball
        draw_instanced(
            &mut pass,
            &renderer.ball_mesh,
            &renderer.buffers.ball_offsets,
            &renderer.buffers.ball_sizes,
            1,
        );

        // Paddles
        draw_instanced(
            &mut pass,
            &renderer.paddle_mesh,
            &renderer.buffers.paddle_offsets,
            &renderer.buffers.paddle_sizes,
            2,
        );
    }

    renderer.queue.submit(std::iter::once(encoder.finish()));
    output.present();
}

fn draw_instanced(
    pass: &mut RenderPass<'_>,
    mesh: &Mesh,
    offsets: &Buffer,
    sizes: &Buffer,
    instances: u32,
) {
    pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
    pass.set_vertex_buffer(1, offsets.slice(..));
    pass.set_vertex_buffer(2, sizes.slice(..));
    pass.set_index_buffer(mesh.index_buffer.slice(..), IndexFormat::Uint32);
    pass.draw_indexed(0..mesh.index_count, 0, 0..instances);
}
