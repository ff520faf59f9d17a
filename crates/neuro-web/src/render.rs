mod helpers;
pub mod instances;
mod post;
mod scene;
mod targets;

use crate::constants::{
    BLOOM_STRENGTH, BLOOM_THRESHOLD, CLEAR_RGB, PARTICLE_RINGS, PARTICLE_SEGMENTS,
    POINT_LIGHT_INTENSITY, SPHERE_RINGS, SPHERE_SEGMENTS,
};
use glam::Vec3;
use instances::{InstanceData, FIRST_PARTICLE_SLOT, GLOW_SLOT, SPHERE_SLOT};
use neuro_core::constants::{AMBIENT_INTENSITY, MAX_PARTICLES, POINT_LIGHT_POS};
use neuro_core::{Camera, SphereMesh};
use post::{PostBindGroups, PostResources, PostUniforms};
use scene::{GpuMesh, ScenePipelines, SceneUniforms};
use targets::RenderTargets;
use web_sys as web;

const INSTANCE_CAPACITY: usize = 2 + MAX_PARTICLES;

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    scene: ScenePipelines,
    scene_uniform_buffer: wgpu::Buffer,
    scene_bind_group: wgpu::BindGroup,
    sphere_mesh: GpuMesh,
    particle_mesh: GpuMesh,
    instance_buffer: wgpu::Buffer,

    targets: RenderTargets,
    post: PostResources,
    post_groups: PostBindGroups,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl GpuState {
    /// The surface owns its own handle to the canvas.
    pub async fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!("request_device error: {:?}", e))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let scene_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(neuro_core::SCENE_WGSL.into()),
        });
        let scene = scene::create_scene_pipelines(&device, &scene_shader);
        let scene_uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene_uniforms"),
            size: std::mem::size_of::<SceneUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let scene_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_bg"),
            layout: &scene.bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: scene_uniform_buffer.as_entire_binding(),
            }],
        });
        let sphere_mesh = GpuMesh::upload(
            &device,
            "sphere_mesh",
            &SphereMesh::new(SPHERE_SEGMENTS, SPHERE_RINGS),
        );
        let particle_mesh = GpuMesh::upload(
            &device,
            "particle_mesh",
            &SphereMesh::new(PARTICLE_SEGMENTS, PARTICLE_RINGS),
        );
        let instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("instances"),
            size: (INSTANCE_CAPACITY * std::mem::size_of::<InstanceData>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let post_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("post_shader"),
            source: wgpu::ShaderSource::Wgsl(neuro_core::POST_WGSL.into()),
        });
        let post = post::create_post_resources(&device, &post_shader, format);
        let targets = RenderTargets::new(&device, width, height);
        let post_groups = post.bind_groups(&device, &targets);

        log::info!("[render] WebGPU ready {}x{} {:?}", width, height, format);
        Ok(Self {
            surface,
            device,
            queue,
            config,
            scene,
            scene_uniform_buffer,
            scene_bind_group,
            sphere_mesh,
            particle_mesh,
            instance_buffer,
            targets,
            post,
            post_groups,
            width,
            height,
            clear_color: wgpu::Color {
                r: CLEAR_RGB[0],
                g: CLEAR_RGB[1],
                b: CLEAR_RGB[2],
                a: 1.0,
            },
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 || (width == self.width && height == self.height) {
            return;
        }
        self.width = width;
        self.height = height;
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
        self.targets = RenderTargets::new(&self.device, width, height);
        self.post_groups = self.post.bind_groups(&self.device, &self.targets);
    }

    fn write_scene_uniforms(&self, camera: &Camera) {
        let light = Vec3::from(POINT_LIGHT_POS);
        let u = SceneUniforms {
            view_proj: camera.view_proj().to_cols_array_2d(),
            eye: camera.eye.extend(1.0).to_array(),
            light_pos: light.extend(1.0).to_array(),
            light: [AMBIENT_INTENSITY, POINT_LIGHT_INTENSITY, 0.0, 0.0],
        };
        self.queue
            .write_buffer(&self.scene_uniform_buffer, 0, bytemuck::bytes_of(&u));
    }

    fn write_post_uniforms(&self) {
        let base = PostUniforms {
            resolution: RenderTargets::bloom_size(self.width, self.height),
            _pad: [0.0; 2],
            blur_dir: [0.0, 0.0],
            bloom_strength: BLOOM_STRENGTH,
            threshold: BLOOM_THRESHOLD,
        };
        let bufs = &self.post.uniforms;
        self.queue
            .write_buffer(&bufs.base, 0, bytemuck::bytes_of(&base));
        let h = PostUniforms {
            blur_dir: [1.0, 0.0],
            ..base
        };
        self.queue
            .write_buffer(&bufs.blur_h, 0, bytemuck::bytes_of(&h));
        let v = PostUniforms {
            blur_dir: [0.0, 1.0],
            ..base
        };
        self.queue
            .write_buffer(&bufs.blur_v, 0, bytemuck::bytes_of(&v));
    }

    /// Draw one frame. `instances` follows the layout of
    /// [`instances::pack_instances`]; particles past capacity are not drawn.
    pub fn render(
        &mut self,
        camera: &Camera,
        instances: &[InstanceData],
    ) -> Result<(), wgpu::SurfaceError> {
        if instances.len() < FIRST_PARTICLE_SLOT as usize {
            return Ok(());
        }
        let instances = &instances[..instances.len().min(INSTANCE_CAPACITY)];
        self.write_scene_uniforms(camera);
        self.write_post_uniforms();
        self.queue
            .write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(instances));

        let frame = self.surface.get_current_texture()?;
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
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.hdr_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.scene_bind_group, &[]);
            rpass.set_vertex_buffer(1, self.instance_buffer.slice(..));

            // Opaque sphere
            rpass.set_pipeline(&self.scene.solid);
            draw_mesh(&mut rpass, &self.sphere_mesh, SPHERE_SLOT..SPHERE_SLOT + 1);

            // Particles, then the glow shell over them
            rpass.set_pipeline(&self.scene.translucent);
            let end = instances.len() as u32;
            if end > FIRST_PARTICLE_SLOT {
                draw_mesh(&mut rpass, &self.particle_mesh, FIRST_PARTICLE_SLOT..end);
            }
            draw_mesh(&mut rpass, &self.sphere_mesh, GLOW_SLOT..GLOW_SLOT + 1);
        }

        let g = &self.post_groups;
        post::blit(
            &mut encoder,
            "bright_pass",
            &self.targets.bloom_a_view,
            wgpu::Color::BLACK,
            &self.post.bright_pipeline,
            &g.hdr,
            None,
        );
        post::blit(
            &mut encoder,
            "blur_h",
            &self.targets.bloom_b_view,
            wgpu::Color::BLACK,
            &self.post.blur_pipeline,
            &g.from_bloom_a,
            None,
        );
        post::blit(
            &mut encoder,
            "blur_v",
            &self.targets.bloom_a_view,
            wgpu::Color::BLACK,
            &self.post.blur_pipeline,
            &g.from_bloom_b,
            None,
        );
        post::blit(
            &mut encoder,
            "composite",
            &view,
            self.clear_color,
            &self.post.composite_pipeline,
            &g.hdr,
            Some(&g.bloom_a_only),
        );

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn draw_mesh(rpass: &mut wgpu::RenderPass<'_>, mesh: &GpuMesh, instances: std::ops::Range<u32>) {
    rpass.set_vertex_buffer(0, mesh.vertices.slice(..));
    rpass.set_index_buffer(mesh.indices.slice(..), wgpu::IndexFormat::Uint16);
    rpass.draw_indexed(0..mesh.index_count, 0, instances);
}
