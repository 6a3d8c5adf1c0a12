use crate::core::sphere::FrameFault;
use crate::core::{SphereMotion, SphereUniforms};
use web_sys as web;

mod helpers;
mod sphere_pass;

use sphere_pass::{create_sphere_resources, SphereResources};

// ===================== WebGPU state for the hero sphere =====================

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    sphere: SphereResources,
    // Kept alive for `depth_view`
    _depth_tex: wgpu::Texture,
    depth_view: wgpu::TextureView,
    width: u32,
    height: u32,
    // The surface gamma-encodes on write, so shader colours must be linear
    linear_output: bool,
}

fn fault_of(e: &wgpu::SurfaceError) -> FrameFault {
    match e {
        wgpu::SurfaceError::Lost => FrameFault::Lost,
        wgpu::SurfaceError::Outdated => FrameFault::Outdated,
        wgpu::SurfaceError::Timeout => FrameFault::Timeout,
        wgpu::SurfaceError::OutOfMemory => FrameFault::OutOfMemory,
        _ => FrameFault::Other,
    }
}

impl GpuState {
    pub async fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = helpers::pick_surface_format(&caps)
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: helpers::pick_alpha_mode(&caps),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let (depth_tex, depth_view) =
            helpers::create_depth_texture(&device, "sphere_depth", width, height);
        let sphere = create_sphere_resources(&device, format);
        log::info!(
            "[sphere] gpu ready {}x{} format={:?} indices={}",
            width,
            height,
            format,
            sphere.index_count
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            sphere,
            _depth_tex: depth_tex,
            depth_view,
            width,
            height,
            linear_output: format.is_srgb(),
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            let (tex, view) =
                helpers::create_depth_texture(&self.device, "sphere_depth", width, height);
            self._depth_tex = tex;
            self.depth_view = view;
        }
    }

    /// Configure the surface again after it was lost or went stale.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    pub fn render(&mut self, motion: &SphereMotion, time_sec: f32) -> Result<(), FrameFault> {
        let aspect = self.width as f32 / self.height.max(1) as f32;
        let uniforms = SphereUniforms::new(motion, aspect, time_sec, self.linear_output);
        self.queue.write_buffer(
            &self.sphere.uniform_buffer,
            0,
            bytemuck::bytes_of(&uniforms),
        );

        let frame = self
            .surface
            .get_current_texture()
            .map_err(|e| fault_of(&e))?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("sphere_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.sphere.pipeline);
            rpass.set_bind_group(0, &self.sphere.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.sphere.vertex_buffer.slice(..));
            rpass.set_index_buffer(self.sphere.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            rpass.draw_indexed(0..self.sphere.index_count, 0, 0..1);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
