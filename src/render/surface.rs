use anyhow::{bail, Context as _, Result};
use bytemuck::Zeroable;
use std::sync::Arc;
use std::time::Instant;
use wgpu::util::DeviceExt;
use winit::window::Window;

use super::gpu::GpuContext;
use super::{FrameInput, Renderer};
use crate::controls::ControlState;
use crate::loaders::ShaderSource;
use crate::panel;
use crate::scene::{LightSource, NodeKind, Scene};
use crate::viewport::Viewport;

/// Which pipeline the renderer is built around
pub enum RenderMode {
    /// Rasterized scene nodes with lambert shading
    Mesh,
    /// Fullscreen pass from a runtime-loaded shader module
    Raymarch(ShaderSource),
}

/// Per-frame globals shared by every mesh node
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
struct Globals {
    view_proj: [[f32; 4]; 4],
    light_pos: [f32; 4],
    /// rgb color, alpha = intensity
    light_color: [f32; 4],
    camera_pos: [f32; 4],
}

/// Per-node uniform: placement plus sampled material values
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
struct NodeUniform {
    model: [[f32; 4]; 4],
    /// rgb tint, alpha = opacity
    color: [f32; 4],
}

/// Uniform contract shared with the loaded raymarch shader
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
struct MarchUniform {
    inv_view_proj: [[f32; 4]; 4],
    camera_pos: [f32; 4],
    /// x: max distance, y: precision, z: time in seconds, w: unused
    params: [f32; 4],
    /// xy: viewport size in pixels
    resolution: [f32; 4],
}

/// Interleaved vertex as uploaded to the GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
struct Vertex {
    position: [f32; 3],
    normal: [f32; 3],
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

    const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &Self::ATTRIBUTES,
    };
}

/// One uploaded mesh node, in scene insertion order
struct GpuNode {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    node_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    transparent: bool,
}

struct MeshPipeline {
    pipeline: wgpu::RenderPipeline,
    globals_buffer: wgpu::Buffer,
    globals_bind_group: wgpu::BindGroup,
    node_layout: wgpu::BindGroupLayout,
    nodes: Vec<GpuNode>,
}

struct RaymarchPipeline {
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    started: Instant,
}

enum PipelineKind {
    Mesh(MeshPipeline),
    Raymarch(RaymarchPipeline),
}

/// egui plumbing for the FPS overlay and the control panel
struct UiOverlay {
    ctx: egui::Context,
    state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
}

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Surface-backed renderer: owns the one output surface of the process
pub struct WgpuRenderer {
    window: Arc<Window>,
    gpu: GpuContext,
    surface: wgpu::Surface<'static>,
    config: wgpu::SurfaceConfiguration,
    depth_view: wgpu::TextureView,
    pipeline: PipelineKind,
    ui: Option<UiOverlay>,
}

impl WgpuRenderer {
    /// Create the surface, GPU context and pipeline for the given mode
    pub async fn new(window: Arc<Window>, mode: RenderMode, show_ui: bool) -> Result<Self> {
        let size = window.inner_size();
        let viewport = Viewport::new(size.width.max(1), size.height.max(1))
            .context("window has no drawable area")?;

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .context("failed to create output surface")?;
        let gpu = GpuContext::new_with_surface(&instance, &surface).await?;

        let surface_caps = surface.get_capabilities(&Self::surface_adapter(&instance, &surface)?);
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .unwrap_or(surface_caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: viewport.width,
            height: viewport.height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(gpu.device(), &config);

        let depth_view = Self::create_depth_view(gpu.device(), viewport.width, viewport.height);

        let pipeline = match mode {
            RenderMode::Mesh => {
                PipelineKind::Mesh(Self::create_mesh_pipeline(gpu.device(), surface_format))
            }
            RenderMode::Raymarch(shader) => PipelineKind::Raymarch(Self::create_raymarch_pipeline(
                gpu.device(),
                surface_format,
                &shader,
            )),
        };

        let ui = show_ui.then(|| {
            let ctx = egui::Context::default();
            let state = egui_winit::State::new(
                ctx.clone(),
                egui::ViewportId::ROOT,
                &window,
                Some(window.scale_factor() as f32),
                None,
                None,
            );
            let renderer = egui_wgpu::Renderer::new(
                gpu.device(),
                surface_format,
                egui_wgpu::RendererOptions::default(),
            );
            UiOverlay {
                ctx,
                state,
                renderer,
            }
        });

        Ok(Self {
            window,
            gpu,
            surface,
            config,
            depth_view,
            pipeline,
            ui,
        })
    }

    /// Forward a window event to the overlay; true when consumed
    pub fn handle_window_event(&mut self, event: &winit::event::WindowEvent) -> bool {
        match &mut self.ui {
            Some(ui) => ui.state.on_window_event(&self.window, event).consumed,
            None => false,
        }
    }

    fn surface_adapter(
        instance: &wgpu::Instance,
        surface: &wgpu::Surface<'_>,
    ) -> Result<wgpu::Adapter> {
        pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            compatible_surface: Some(surface),
            force_fallback_adapter: false,
        }))
        .map_err(|e| anyhow::anyhow!("no compatible GPU adapter: {e:?}"))
    }

    fn create_depth_view(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("depth texture"),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        texture.create_view(&wgpu::TextureViewDescriptor::default())
    }

    fn create_mesh_pipeline(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
    ) -> MeshPipeline {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("mesh shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/mesh.wgsl").into()),
        });

        let globals_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("globals bind group layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let node_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("node bind group layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let globals_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("globals buffer"),
            contents: bytemuck::cast_slice(&[Globals::zeroed()]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let globals_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals bind group"),
            layout: &globals_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("mesh pipeline layout"),
            bind_group_layouts: &[&globals_layout, &node_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("mesh pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[Vertex::LAYOUT],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        MeshPipeline {
            pipeline,
            globals_buffer,
            globals_bind_group,
            node_layout,
            nodes: Vec::new(),
        }
    }

    fn create_raymarch_pipeline(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        shader_source: &ShaderSource,
    ) -> RaymarchPipeline {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("raymarch shader"),
            source: wgpu::ShaderSource::Wgsl(shader_source.as_str().into()),
        });

        let layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("raymarch bind group layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("raymarch uniform buffer"),
            contents: bytemuck::cast_slice(&[MarchUniform::zeroed()]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("raymarch bind group"),
            layout: &layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("raymarch pipeline layout"),
            bind_group_layouts: &[&layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("raymarch pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        RaymarchPipeline {
            pipeline,
            uniform_buffer,
            bind_group,
            started: Instant::now(),
        }
    }

    /// Upload scene meshes once; materials and transforms stream through
    /// uniforms every frame
    fn ensure_nodes_uploaded(
        device: &wgpu::Device,
        pipeline: &mut MeshPipeline,
        scene: &Scene,
    ) {
        let mesh_count = scene.meshes().count();
        if pipeline.nodes.len() == mesh_count {
            return;
        }
        pipeline.nodes.clear();

        for node in scene.meshes() {
            let NodeKind::Mesh { mesh, material } = &node.kind else {
                continue;
            };

            let vertices: Vec<Vertex> = mesh
                .positions
                .iter()
                .zip(&mesh.normals)
                .map(|(position, normal)| Vertex {
                    position: *position,
                    normal: *normal,
                })
                .collect();

            let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("node vertex buffer"),
                contents: bytemuck::cast_slice(&vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });

            let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("node index buffer"),
                contents: bytemuck::cast_slice(&mesh.indices),
                usage: wgpu::BufferUsages::INDEX,
            });

            let node_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("node uniform buffer"),
                contents: bytemuck::cast_slice(&[NodeUniform::zeroed()]),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            });

            let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("node bind group"),
                layout: &pipeline.node_layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: node_buffer.as_entire_binding(),
                }],
            });

            pipeline.nodes.push(GpuNode {
                vertex_buffer,
                index_buffer,
                index_count: mesh.index_count() as u32,
                node_buffer,
                bind_group,
                transparent: material.transparent,
            });
        }
    }

    /// Acquire the next surface texture, recovering from transient loss
    fn acquire_frame(&mut self) -> Result<Option<wgpu::SurfaceTexture>> {
        match self.surface.get_current_texture() {
            Ok(texture) => Ok(Some(texture)),
            Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                log::warn!("output surface lost, reconfiguring");
                self.surface.configure(self.gpu.device(), &self.config);
                Ok(None)
            }
            Err(wgpu::SurfaceError::Timeout) => {
                log::warn!("surface frame timed out, skipping");
                Ok(None)
            }
            Err(e) => bail!("failed to acquire surface frame: {e}"),
        }
    }

    fn paint_ui(
        ui: &mut UiOverlay,
        gpu: &GpuContext,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        window: &Window,
        size: [u32; 2],
        fps: f32,
        mut controls: Option<&mut ControlState>,
    ) {
        let raw_input = ui.state.take_egui_input(window);
        let full_output = ui.ctx.run(raw_input, |ctx| {
            panel::draw_panel(ctx, fps, controls.as_deref_mut());
        });

        ui.state
            .handle_platform_output(window, full_output.platform_output);

        let tris = ui
            .ctx
            .tessellate(full_output.shapes, ui.ctx.pixels_per_point());
        for (id, image_delta) in &full_output.textures_delta.set {
            ui.renderer
                .update_texture(gpu.device(), gpu.queue(), *id, image_delta);
        }

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: size,
            pixels_per_point: window.scale_factor() as f32,
        };

        ui.renderer
            .update_buffers(gpu.device(), gpu.queue(), encoder, &tris, &screen_descriptor);

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("ui pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            // SAFETY: the render pass lifetime is tied to the encoder, but
            // egui-wgpu requires 'static. The pass is dropped before the
            // encoder is used again.
            let render_pass_static = unsafe {
                std::mem::transmute::<&mut wgpu::RenderPass<'_>, &mut wgpu::RenderPass<'static>>(
                    &mut render_pass,
                )
            };

            ui.renderer
                .render(render_pass_static, &tris, &screen_descriptor);
        }

        for id in &full_output.textures_delta.free {
            ui.renderer.free_texture(id);
        }
    }
}

impl Renderer for WgpuRenderer {
    fn draw(&mut self, frame: &mut FrameInput<'_>) -> Result<()> {
        let Some(output) = self.acquire_frame()? else {
            return Ok(());
        };
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder =
            self.gpu
                .device()
                .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                    label: Some("frame encoder"),
                });

        let clear = frame.scene.clear_color;
        let clear_color = wgpu::Color {
            r: clear[0] as f64,
            g: clear[1] as f64,
            b: clear[2] as f64,
            a: 1.0,
        };

        match &mut self.pipeline {
            PipelineKind::Mesh(pipeline) => {
                let light = frame
                    .scene
                    .lights()
                    .next()
                    .copied()
                    .unwrap_or_else(|| LightSource::white(glam::Vec3::new(10.0, 20.0, 20.0)));

                let globals = Globals {
                    view_proj: frame.camera.view_projection().to_cols_array_2d(),
                    light_pos: [light.position.x, light.position.y, light.position.z, 1.0],
                    light_color: [
                        light.color[0],
                        light.color[1],
                        light.color[2],
                        light.intensity,
                    ],
                    camera_pos: [
                        frame.camera.position.x,
                        frame.camera.position.y,
                        frame.camera.position.z,
                        1.0,
                    ],
                };
                self.gpu.queue().write_buffer(
                    &pipeline.globals_buffer,
                    0,
                    bytemuck::cast_slice(&[globals]),
                );

                Self::ensure_nodes_uploaded(self.gpu.device(), pipeline, frame.scene);

                for (gpu_node, node) in pipeline.nodes.iter().zip(frame.scene.meshes()) {
                    let NodeKind::Mesh { material, .. } = &node.kind else {
                        continue;
                    };
                    let uniform = NodeUniform {
                        model: node.transform.matrix().to_cols_array_2d(),
                        color: [
                            material.color[0],
                            material.color[1],
                            material.color[2],
                            if material.transparent {
                                material.opacity
                            } else {
                                1.0
                            },
                        ],
                    };
                    self.gpu.queue().write_buffer(
                        &gpu_node.node_buffer,
                        0,
                        bytemuck::cast_slice(&[uniform]),
                    );
                }

                {
                    let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                        label: Some("mesh pass"),
                        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                            view: &view,
                            resolve_target: None,
                            ops: wgpu::Operations {
                                load: wgpu::LoadOp::Clear(clear_color),
                                store: wgpu::StoreOp::Store,
                            },
                            depth_slice: None,
                        })],
                        depth_stencil_attachment: Some(
                            wgpu::RenderPassDepthStencilAttachment {
                                view: &self.depth_view,
                                depth_ops: Some(wgpu::Operations {
                                    load: wgpu::LoadOp::Clear(1.0),
                                    store: wgpu::StoreOp::Store,
                                }),
                                stencil_ops: None,
                            },
                        ),
                        occlusion_query_set: None,
                        timestamp_writes: None,
                    });

                    render_pass.set_pipeline(&pipeline.pipeline);
                    render_pass.set_bind_group(0, &pipeline.globals_bind_group, &[]);

                    // Opaque nodes first, then transparent ones blend over
                    for pass_transparent in [false, true] {
                        for node in pipeline
                            .nodes
                            .iter()
                            .filter(|n| n.transparent == pass_transparent)
                        {
                            render_pass.set_bind_group(1, &node.bind_group, &[]);
                            render_pass.set_vertex_buffer(0, node.vertex_buffer.slice(..));
                            render_pass.set_index_buffer(
                                node.index_buffer.slice(..),
                                wgpu::IndexFormat::Uint32,
                            );
                            render_pass.draw_indexed(0..node.index_count, 0, 0..1);
                        }
                    }
                }
            }
            PipelineKind::Raymarch(pipeline) => {
                let settings = frame.raymarch.copied().unwrap_or_default();
                let uniform = MarchUniform {
                    inv_view_proj: frame.camera.view_projection().inverse().to_cols_array_2d(),
                    camera_pos: [
                        frame.camera.position.x,
                        frame.camera.position.y,
                        frame.camera.position.z,
                        1.0,
                    ],
                    params: [
                        settings.max_distance,
                        settings.precision,
                        pipeline.started.elapsed().as_secs_f32(),
                        0.0,
                    ],
                    resolution: [
                        self.config.width as f32,
                        self.config.height as f32,
                        0.0,
                        0.0,
                    ],
                };
                self.gpu.queue().write_buffer(
                    &pipeline.uniform_buffer,
                    0,
                    bytemuck::cast_slice(&[uniform]),
                );

                {
                    let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                        label: Some("raymarch pass"),
                        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                            view: &view,
                            resolve_target: None,
                            ops: wgpu::Operations {
                                load: wgpu::LoadOp::Clear(clear_color),
                                store: wgpu::StoreOp::Store,
                            },
                            depth_slice: None,
                        })],
                        depth_stencil_attachment: None,
                        occlusion_query_set: None,
                        timestamp_writes: None,
                    });

                    render_pass.set_pipeline(&pipeline.pipeline);
                    render_pass.set_bind_group(0, &pipeline.bind_group, &[]);
                    render_pass.draw(0..3, 0..1);
                }
            }
        }

        if let Some(ui) = &mut self.ui {
            Self::paint_ui(
                ui,
                &self.gpu,
                &mut encoder,
                &view,
                &self.window,
                [self.config.width, self.config.height],
                frame.fps,
                frame.controls.as_deref_mut(),
            );
        }

        self.gpu.queue().submit(std::iter::once(encoder.finish()));
        output.present();
        Ok(())
    }

    fn resize(&mut self, viewport: Viewport) {
        self.config.width = viewport.width;
        self.config.height = viewport.height;
        self.surface.configure(self.gpu.device(), &self.config);
        self.depth_view =
            Self::create_depth_view(self.gpu.device(), viewport.width, viewport.height);
    }

    fn dimensions(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }
}
