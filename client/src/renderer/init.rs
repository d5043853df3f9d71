use std::sync::Arc;

use winit::window::Window;
use wgpu::*;

use crate::error::SetupError;

/// Vertex buffer slots the pipeline binds: mesh, offsets, sizes
pub const REQUIRED_VERTEX_BUFFERS: u32 = 3;

pub struct WgpuContext {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub config: SurfaceConfiguration,
    pub size: (u32, u32),
}

pub fn init_wgpu(window: Arc<Window>) -> Result<WgpuContext, SetupError> {
    let size = window.inner_size();
    let instance = Instance::new(&InstanceDescriptor {
        backends: Backends::PRIMARY,
        ..Default::default()
    });

    let surface = instance.create_surface(window)?;

    let adapter = pollster::block_on(instance.request_adapter(&RequestAdapterOptions {
        power_preference: PowerPreference::default(),
        compatible_surface: Some(&surface),
        force_fallback_adapter: false,
    }))
    .ok_or(SetupError::NoAdapter)?;

    let info = adapter.get_info();
    log::info!("GPU adapter: {} ({:?})", info.name, info.backend);
    log::info!("GPU driver: {} {}", info.driver, info.driver_info);

    let surface_caps = surface.get_capabilities(&adapter);
    check_support(&info.name, adapter.limits().max_vertex_buffers, &surface_caps.formats)?;

    let (device, queue) = pollster::block_on(adapter.request_device(
        &DeviceDescriptor {
            label: Some("Pong Device"),
            required_features: Features::empty(),
            required_limits: Limits::downlevel_defaults().using_resolution(adapter.limits()),
            memory_hints: MemoryHints::default(),
        },
        None,
    ))?;

    let surface_format = surface_caps
        .formats
        .iter()
        .copied()
        .find(|f| f.is_srgb())
        .unwrap_or(surface_caps.formats[0]);

    let config = SurfaceConfiguration {
        usage: TextureUsages::RENDER_ATTACHMENT,
        format: surface_format,
        width: size.width.max(1),
        height: size.height.max(1),
        // Fifo is v-sync; the simulation timestep is tuned for it
        present_mode: PresentMode::Fifo,
        alpha_mode: CompositeAlphaMode::Auto,
        view_formats: vec![],
        desired_maximum_frame_latency: 2,
    };
    surface.configure(&device, &config);

    Ok(WgpuContext {
        device,
        queue,
        surface,
        config,
        size: (size.width, size.height),
    })
}

/// Reject adapters that cannot run the instanced pipeline
pub fn check_support(
    adapter_name: &str,
    max_vertex_buffers: u32,
    formats: &[TextureFormat],
) -> Result<(), SetupError> {
    if formats.is_empty() {
        return Err(SetupError::UnsupportedGpu {
            adapter: adapter_name.to_string(),
            reason: "surface reports no supported formats".to_string(),
        });
    }
    if max_vertex_buffers < REQUIRED_VERTEX_BUFFERS {
        return Err(SetupError::UnsupportedGpu {
            adapter: adapter_name.to_string(),
            reason: format!(
                "needs {REQUIRED_VERTEX_BUFFERS} vertex buffers, adapter allows {max_vertex_buffers}"
            ),
        });
    }
    Ok(())
}
