use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use raw_window_handle::{HasDisplayHandle, HasWindowHandle};
use wgpu::util::DeviceExt;
use winit::dpi::PhysicalSize;

use fieldconfig::FieldConfig;

use crate::camera::Camera;
use crate::gpu::context::GpuContext;
use crate::gpu::pipeline::FieldPipeline;
use crate::gpu::uniforms::FieldUniforms;
use crate::particles::{self, ParticleBuffers};
use crate::types::FieldParams;

/// Everything the GPU needs to draw one frame of the field.
///
/// Field order matters: pipeline, attribute buffers, and bind group are
/// declared before `context` so drop releases them ahead of the device and
/// surface they were created from.
pub(crate) struct GpuState {
    pipeline: FieldPipeline,
    position_buffer: wgpu::Buffer,
    seed_buffer: wgpu::Buffer,
    color_buffer: wgpu::Buffer,
    uniform_buffer: wgpu::Buffer,
    uniform_bind_group: wgpu::BindGroup,
    uniforms: FieldUniforms,
    particle_count: u32,
    camera: Camera,
    context: GpuContext,
}

impl GpuState {
    pub(crate) fn new<T>(
        target: &T,
        initial_size: PhysicalSize<u32>,
        config: &FieldConfig,
    ) -> Result<Self>
    where
        T: HasDisplayHandle + HasWindowHandle,
    {
        let context = GpuContext::new(target, initial_size)?;
        let pipeline = FieldPipeline::new(&context.device, context.surface_format);

        let mut rng = StdRng::from_entropy();
        let buffers = particles::generate(config.particle_count, &config.palette, &mut rng);
        let (position_buffer, seed_buffer, color_buffer) =
            Self::create_attribute_buffers(&context.device, &buffers);

        let camera = Camera::new(config.camera_distance, context.size);
        let mut uniforms = FieldUniforms::new(context.size);
        uniforms.set_camera(camera.view(), camera.projection());
        uniforms.set_params(&FieldParams::from_config(config));

        let uniform_buffer = context
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("field uniforms"),
                contents: bytemuck::bytes_of(&uniforms),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            });

        let uniform_bind_group = context
            .device
            .create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("field uniform bind group"),
                layout: &pipeline.uniform_layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buffer.as_entire_binding(),
                }],
            });

        tracing::debug!(
            particle_count = config.particle_count,
            "created particle field resources"
        );

        Ok(Self {
            pipeline,
            position_buffer,
            seed_buffer,
            color_buffer,
            uniform_buffer,
            uniform_bind_group,
            uniforms,
            particle_count: config.particle_count,
            camera,
            context,
        })
    }

    fn create_attribute_buffers(
        device: &wgpu::Device,
        buffers: &ParticleBuffers,
    ) -> (wgpu::Buffer, wgpu::Buffer, wgpu::Buffer) {
        let position_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("particle positions"),
            contents: bytemuck::cast_slice(&buffers.positions),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });
        let seed_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("particle seeds"),
            contents: bytemuck::cast_slice(&buffers.seeds),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });
        let color_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("particle colors"),
            contents: bytemuck::cast_slice(&buffers.colors),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });
        (position_buffer, seed_buffer, color_buffer)
    }

    pub(crate) fn resize(&mut self, new_size: PhysicalSize<u32>) {
        self.context.resize(new_size);
        self.camera.set_viewport(self.context.size);
        self.uniforms.set_resolution(self.context.size);
    }

    pub(crate) fn set_camera_distance(&mut self, distance: f32) {
        self.camera.set_distance(distance);
    }

    /// Re-uploads only the color attribute buffer.
    pub(crate) fn upload_colors(&mut self, colors: &[[f32; 3]]) {
        self.context
            .queue
            .write_buffer(&self.color_buffer, 0, bytemuck::cast_slice(colors));
    }

    /// Regenerates every attribute buffer for a new particle count. The
    /// pipeline and uniform block survive untouched.
    pub(crate) fn rebuild_particles(&mut self, count: u32, palette: &[String]) {
        let mut rng = StdRng::from_entropy();
        let buffers = particles::generate(count, palette, &mut rng);
        let (position_buffer, seed_buffer, color_buffer) =
            Self::create_attribute_buffers(&self.context.device, &buffers);
        self.position_buffer = position_buffer;
        self.seed_buffer = seed_buffer;
        self.color_buffer = color_buffer;
        self.particle_count = count;
        tracing::debug!(particle_count = count, "regenerated particle buffers");
    }

    pub(crate) fn render(
        &mut self,
        params: &FieldParams,
        translation: [f32; 2],
        time_seconds: f32,
    ) -> std::result::Result<(), wgpu::SurfaceError> {
        self.uniforms.set_camera(self.camera.view(), self.camera.projection());
        self.uniforms.set_translation(translation);
        self.uniforms.set_time(time_seconds);
        self.uniforms.set_params(params);
        self.context
            .queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&self.uniforms));

        let frame = self.context.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder =
            self.context
                .device
                .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                    label: Some("field encoder"),
                });
        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("field pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    depth_slice: None,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            pass.set_pipeline(&self.pipeline.pipeline);
            pass.set_bind_group(0, &self.uniform_bind_group, &[]);
            pass.set_vertex_buffer(0, self.position_buffer.slice(..));
            pass.set_vertex_buffer(1, self.seed_buffer.slice(..));
            pass.set_vertex_buffer(2, self.color_buffer.slice(..));
            pass.draw(0..4, 0..self.particle_count);
        }

        self.context.queue.submit(std::iter::once(encoder.finish()));
        frame.present();
        Ok(())
    }
}
