use crate::camera::OrbitCamera;
use crate::mesh::{self, CardVertex, SimpleVertex};
use crate::shaders;
use crate::texture::GpuTexture;
use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2, Vec3};
use holocard_assets::TextureAsset;
use holocard_render::RenderSettings;
use holocard_scene::{
    CardFaces, LightingParams, NodeKind, PhysicalMaterial, Scene, Showcase, Starfield,
};
use wgpu::util::DeviceExt;

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub(crate) struct FrameUniform {
    view_proj: [[f32; 4]; 4],
    camera_pos: [f32; 4],
    ambient: [f32; 4],
    key_dir: [f32; 4],
    key_color: [f32; 4],
    rim_pos: [f32; 4],
    rim_color: [f32; 4],
}

impl FrameUniform {
    pub(crate) fn new(camera: &OrbitCamera, lighting: &LightingParams) -> Self {
        let scaled = |rgb: [f32; 3], intensity: f32, w: f32| {
            [rgb[0] * intensity, rgb[1] * intensity, rgb[2] * intensity, w]
        };
        let key_dir = lighting.key.direction();
        let rim = &lighting.rim;
        Self {
            view_proj: camera.view_projection().to_cols_array_2d(),
            camera_pos: camera.position().extend(1.0).to_array(),
            ambient: scaled(lighting.ambient.color.to_linear(), lighting.ambient.intensity, 0.0),
            key_dir: key_dir.extend(0.0).to_array(),
            key_color: scaled(lighting.key.color.to_linear(), lighting.key.intensity, 0.0),
            rim_pos: rim.position.extend(rim.distance).to_array(),
            rim_color: scaled(rim.color.to_linear(), rim.intensity, rim.decay),
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub(crate) struct MaterialUniform {
    base_color: [f32; 4],
    params: [f32; 4],
    flags: [f32; 4],
}

impl From<&PhysicalMaterial> for MaterialUniform {
    fn from(m: &PhysicalMaterial) -> Self {
        let [r, g, b] = m.color.to_linear();
        Self {
            base_color: [r, g, b, 1.0],
            params: [m.metalness, m.roughness, m.clearcoat, m.reflectivity],
            flags: [if m.textured { 1.0 } else { 0.0 }, 0.0, 0.0, 0.0],
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub(crate) struct CardUniform {
    model: [[f32; 4]; 4],
    normal_matrix: [[f32; 4]; 4],
    materials: [MaterialUniform; 3],
}

impl CardUniform {
    pub(crate) fn new(model: Mat4, faces: &CardFaces) -> Self {
        let [edge, front, back] = faces.slots();
        Self {
            model: model.to_cols_array_2d(),
            normal_matrix: model.inverse().transpose().to_cols_array_2d(),
            materials: [edge.into(), front.into(), back.into()],
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub(crate) struct UnlitUniform {
    model: [[f32; 4]; 4],
    tint: [f32; 4],
}

impl UnlitUniform {
    pub(crate) fn new(model: Mat4, tint: [f32; 4]) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            tint,
        }
    }
}

/// Size and capabilities of the surface being drawn to.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceTarget {
    pub format: wgpu::TextureFormat,
    pub width: u32,
    pub height: u32,
    /// Whether the surface composites alpha, so a transparent clear shows what is behind.
    pub supports_alpha: bool,
}

/// Images used by the showcase.
#[derive(Clone, Copy)]
pub struct ShowcaseTextures<'a> {
    pub card: &'a TextureAsset,
    pub glow: &'a TextureAsset,
}

/// A per-object uniform buffer and the bind group exposing it.
struct ObjectBinding {
    buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

struct MeshBuffers {
    vertices: wgpu::Buffer,
    indices: wgpu::Buffer,
    index_count: u32,
}

impl MeshBuffers {
    fn new<V: Pod>(device: &wgpu::Device, label: &str, vertices: &[V], indices: &[u16]) -> Self {
        Self {
            vertices: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(format!("{label}_vertex_buffer").as_str()),
                contents: bytemuck::cast_slice(vertices),
                usage: wgpu::BufferUsages::VERTEX,
            }),
            indices: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(format!("{label}_index_buffer").as_str()),
                contents: bytemuck::cast_slice(indices),
                usage: wgpu::BufferUsages::INDEX,
            }),
            index_count: indices.len() as u32,
        }
    }

    fn destroy(&self) {
        self.vertices.destroy();
        self.indices.destroy();
    }
}

/// wgpu renderer for the card showcase: star spheres, the lit card and its glow.
pub struct CardRenderer {
    card_pipeline: wgpu::RenderPipeline,
    star_pipeline: wgpu::RenderPipeline,
    glow_pipeline: wgpu::RenderPipeline,
    frame_buffer: wgpu::Buffer,
    frame_bind_group: wgpu::BindGroup,
    card: ObjectBinding,
    stars: ObjectBinding,
    glow: ObjectBinding,
    card_mesh: MeshBuffers,
    star_mesh: MeshBuffers,
    glow_mesh: MeshBuffers,
    star_instances: wgpu::Buffer,
    star_count: u32,
    card_texture: GpuTexture,
    glow_texture: GpuTexture,
    depth: GpuTexture,
    msaa: Option<GpuTexture>,
    sample_count: u32,
    surface_format: wgpu::TextureFormat,
    clear_color: wgpu::Color,
}

impl CardRenderer {
    pub fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        target: SurfaceTarget,
        settings: &RenderSettings,
        showcase: &Showcase,
        textures: ShowcaseTextures<'_>,
    ) -> Self {
        let sample_count = supported_sample_count(device, target.format, settings.msaa_samples);
        let [r, g, b, a] = settings.clear_color(target.supports_alpha);
        let clear_color = wgpu::Color { r, g, b, a };

        // Frame uniforms (group 0)
        let frame_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("frame_uniform_buffer"),
            size: std::mem::size_of::<FrameUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let frame_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("frame_bind_group_layout"),
            entries: &[uniform_entry(0, wgpu::ShaderStages::VERTEX_FRAGMENT)],
        });
        let frame_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("frame_bind_group"),
            layout: &frame_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: frame_buffer.as_entire_binding(),
            }],
        });

        // Object layouts (group 1)
        let textured_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("textured_object_layout"),
            entries: &[
                uniform_entry(0, wgpu::ShaderStages::VERTEX_FRAGMENT),
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });
        let unlit_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("unlit_object_layout"),
            entries: &[uniform_entry(0, wgpu::ShaderStages::VERTEX_FRAGMENT)],
        });

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("linear_clamp_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        let card_texture = GpuTexture::upload(device, queue, textures.card);
        let glow_texture = GpuTexture::upload(device, queue, textures.glow);

        let card = textured_binding(
            device,
            "card",
            &textured_layout,
            std::mem::size_of::<CardUniform>() as u64,
            &card_texture,
            &sampler,
        );
        let glow = textured_binding(
            device,
            "glow",
            &textured_layout,
            std::mem::size_of::<UnlitUniform>() as u64,
            &glow_texture,
            &sampler,
        );
        let stars_buffer = uniform_buffer(device, "stars", std::mem::size_of::<UnlitUniform>() as u64);
        let stars = ObjectBinding {
            bind_group: device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("stars_bind_group"),
                layout: &unlit_layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: stars_buffer.as_entire_binding(),
                }],
            }),
            buffer: stars_buffer,
        };

        let textured_pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("textured_pipeline_layout"),
            bind_group_layouts: &[&frame_layout, &textured_layout],
            push_constant_ranges: &[],
        });
        let unlit_pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("unlit_pipeline_layout"),
            bind_group_layouts: &[&frame_layout, &unlit_layout],
            push_constant_ranges: &[],
        });

        let multisample = wgpu::MultisampleState {
            count: sample_count,
            ..Default::default()
        };

        // Card pipeline
        let card_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("card_shader"),
            source: wgpu::ShaderSource::Wgsl(shaders::card_shader().into()),
        });
        let card_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("card_pipeline"),
            layout: Some(&textured_pipeline_layout),
            vertex: wgpu::VertexState {
                module: &card_shader,
                entry_point: Some("vs_card"),
                compilation_options: Default::default(),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<CardVertex>() as u64,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &wgpu::vertex_attr_array![
                        0 => Float32x3,
                        1 => Float32x3,
                        2 => Float32x2,
                        3 => Uint32,
                    ],
                }],
            },
            fragment: Some(wgpu::FragmentState {
                module: &card_shader,
                entry_point: Some("fs_card"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: target.format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: Some(wgpu::Face::Back),
                ..Default::default()
            },
            depth_stencil: Some(depth_state(true)),
            multisample,
            multiview: None,
            cache: None,
        });

        // Star pipeline
        let star_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("star_shader"),
            source: wgpu::ShaderSource::Wgsl(shaders::star_shader().into()),
        });
        let star_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("star_pipeline"),
            layout: Some(&unlit_pipeline_layout),
            vertex: wgpu::VertexState {
                module: &star_shader,
                entry_point: Some("vs_star"),
                compilation_options: Default::default(),
                buffers: &[
                    simple_vertex_layout(),
                    wgpu::VertexBufferLayout {
                        array_stride: std::mem::size_of::<[f32; 4]>() as u64,
                        step_mode: wgpu::VertexStepMode::Instance,
                        attributes: &wgpu::vertex_attr_array![2 => Float32x4],
                    },
                ],
            },
            fragment: Some(wgpu::FragmentState {
                module: &star_shader,
                entry_point: Some("fs_star"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: target.format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: Some(wgpu::Face::Back),
                ..Default::default()
            },
            depth_stencil: Some(depth_state(true)),
            multisample,
            multiview: None,
            cache: None,
        });

        // Glow pipeline: blended, depth-tested but never occludes
        let glow_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("glow_shader"),
            source: wgpu::ShaderSource::Wgsl(shaders::glow_shader().into()),
        });
        let glow_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("glow_pipeline"),
            layout: Some(&textured_pipeline_layout),
            vertex: wgpu::VertexState {
                module: &glow_shader,
                entry_point: Some("vs_glow"),
                compilation_options: Default::default(),
                buffers: &[simple_vertex_layout()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &glow_shader,
                entry_point: Some("fs_glow"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: target.format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: Some(wgpu::Face::Back),
                ..Default::default()
            },
            depth_stencil: Some(depth_state(false)),
            multisample,
            multiview: None,
            cache: None,
        });

        // Meshes, sized from the scene nodes
        let (card_size, glow_size, starfield) = showcase_geometry(showcase);
        let (card_verts, card_indices) = mesh::card_box(card_size.x, card_size.y, card_size.z);
        let card_mesh = MeshBuffers::new(device, "card", &card_verts, &card_indices);
        let (glow_verts, glow_indices) = mesh::plane(glow_size.x, glow_size.y);
        let glow_mesh = MeshBuffers::new(device, "glow", &glow_verts, &glow_indices);

        let (radius, segments, offsets): (f32, u32, Vec<[f32; 4]>) = match starfield {
            Some(stars) => (
                stars.radius,
                stars.segments,
                stars.positions.iter().map(|p| p.extend(0.0).to_array()).collect(),
            ),
            None => (0.0, 1, Vec::new()),
        };
        let (star_verts, star_indices) = mesh::uv_sphere(radius, segments, segments);
        let star_mesh = MeshBuffers::new(device, "star", &star_verts, &star_indices);
        let star_count = offsets.len() as u32;
        let star_instances = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("star_instance_buffer"),
            // wgpu rejects empty vertex buffers
            contents: if offsets.is_empty() {
                bytemuck::cast_slice(&[[0.0f32; 4]])
            } else {
                bytemuck::cast_slice(&offsets)
            },
            usage: wgpu::BufferUsages::VERTEX,
        });

        let depth = GpuTexture::attachment(
            device,
            "depth_texture",
            DEPTH_FORMAT,
            target.width,
            target.height,
            sample_count,
        );
        let msaa = create_msaa_target(device, target.format, target.width, target.height, sample_count);

        tracing::info!(
            format = ?target.format,
            width = target.width,
            height = target.height,
            sample_count,
            stars = star_count,
            "card renderer ready"
        );

        Self {
            card_pipeline,
            star_pipeline,
            glow_pipeline,
            frame_buffer,
            frame_bind_group,
            card,
            stars,
            glow,
            card_mesh,
            star_mesh,
            glow_mesh,
            star_instances,
            star_count,
            card_texture,
            glow_texture,
            depth,
            msaa,
            sample_count,
            surface_format: target.format,
            clear_color,
        }
    }

    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        self.depth.destroy();
        self.depth = GpuTexture::attachment(
            device,
            "depth_texture",
            DEPTH_FORMAT,
            width,
            height,
            self.sample_count,
        );
        if let Some(msaa) = self.msaa.take() {
            msaa.destroy();
        }
        self.msaa = create_msaa_target(device, self.surface_format, width, height, self.sample_count);
    }

    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.surface_format
    }

    pub fn sample_count(&self) -> u32 {
        self.sample_count
    }

    /// Render one frame: stars, then the card, then the glow blended over what is behind it.
    pub fn render(
        &self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        view: &wgpu::TextureView,
        camera: &OrbitCamera,
        scene: &Scene,
    ) {
        queue.write_buffer(
            &self.frame_buffer,
            0,
            bytemuck::bytes_of(&FrameUniform::new(camera, &scene.lighting)),
        );

        let mut draw_card = false;
        let mut draw_glow = false;
        let mut draw_stars = false;
        for node in scene.nodes().values() {
            let model = node.transform.matrix();
            match &node.kind {
                NodeKind::Card(card) => {
                    queue.write_buffer(
                        &self.card.buffer,
                        0,
                        bytemuck::bytes_of(&CardUniform::new(model, &card.faces)),
                    );
                    draw_card = true;
                }
                NodeKind::Glow(_) => {
                    queue.write_buffer(
                        &self.glow.buffer,
                        0,
                        bytemuck::bytes_of(&UnlitUniform::new(model, [1.0; 4])),
                    );
                    draw_glow = true;
                }
                NodeKind::Starfield(stars) => {
                    let [r, g, b] = stars.color.to_linear();
                    queue.write_buffer(
                        &self.stars.buffer,
                        0,
                        bytemuck::bytes_of(&UnlitUniform::new(model, [r, g, b, 1.0])),
                    );
                    draw_stars = self.star_count > 0;
                }
            }
        }

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("card_render_encoder"),
        });

        {
            let (color_view, resolve_target) = match &self.msaa {
                Some(msaa) => (&msaa.view, Some(view)),
                None => (view, None),
            };
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("card_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: color_view,
                    resolve_target,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                ..Default::default()
            });

            pass.set_bind_group(0, &self.frame_bind_group, &[]);

            if draw_stars {
                pass.set_pipeline(&self.star_pipeline);
                pass.set_bind_group(1, &self.stars.bind_group, &[]);
                pass.set_vertex_buffer(0, self.star_mesh.vertices.slice(..));
                pass.set_vertex_buffer(1, self.star_instances.slice(..));
                pass.set_index_buffer(self.star_mesh.indices.slice(..), wgpu::IndexFormat::Uint16);
                pass.draw_indexed(0..self.star_mesh.index_count, 0, 0..self.star_count);
            }

            if draw_card {
                pass.set_pipeline(&self.card_pipeline);
                pass.set_bind_group(1, &self.card.bind_group, &[]);
                pass.set_vertex_buffer(0, self.card_mesh.vertices.slice(..));
                pass.set_index_buffer(self.card_mesh.indices.slice(..), wgpu::IndexFormat::Uint16);
                pass.draw_indexed(0..self.card_mesh.index_count, 0, 0..1);
            }

            if draw_glow {
                pass.set_pipeline(&self.glow_pipeline);
                pass.set_bind_group(1, &self.glow.bind_group, &[]);
                pass.set_vertex_buffer(0, self.glow_mesh.vertices.slice(..));
                pass.set_index_buffer(self.glow_mesh.indices.slice(..), wgpu::IndexFormat::Uint16);
                pass.draw_indexed(0..self.glow_mesh.index_count, 0, 0..1);
            }
        }

        queue.submit(std::iter::once(encoder.finish()));
    }

    /// Release every GPU buffer and texture owned by the renderer.
    pub fn dispose(self) {
        self.card_mesh.destroy();
        self.star_mesh.destroy();
        self.glow_mesh.destroy();
        self.star_instances.destroy();
        self.frame_buffer.destroy();
        self.card.buffer.destroy();
        self.stars.buffer.destroy();
        self.glow.buffer.destroy();
        self.card_texture.destroy();
        self.glow_texture.destroy();
        self.depth.destroy();
        if let Some(msaa) = &self.msaa {
            msaa.destroy();
        }
        tracing::info!("card renderer disposed");
    }
}

/// Card box size, glow quad size and the star field, read from the scene nodes.
fn showcase_geometry(showcase: &Showcase) -> (Vec3, Vec2, Option<&Starfield>) {
    let card = showcase
        .card_node()
        .map(|c| Vec3::new(c.width, c.height, c.thickness))
        .unwrap_or(Vec3::ZERO);
    let glow = showcase.glow_node().map(|g| g.size).unwrap_or_default();
    (card, glow, showcase.starfield())
}

/// The requested sample count if the format supports it, otherwise 1.
fn supported_sample_count(device: &wgpu::Device, format: wgpu::TextureFormat, requested: u32) -> u32 {
    let requested = requested.max(1);
    if requested == 1 {
        return 1;
    }
    let features = format.guaranteed_format_features(device.features());
    if features.flags.sample_count_supported(requested) {
        requested
    } else {
        tracing::warn!(requested, ?format, "msaa sample count unsupported, disabling antialiasing");
        1
    }
}

fn create_msaa_target(
    device: &wgpu::Device,
    format: wgpu::TextureFormat,
    width: u32,
    height: u32,
    sample_count: u32,
) -> Option<GpuTexture> {
    (sample_count > 1).then(|| GpuTexture::attachment(device, "msaa_color", format, width, height, sample_count))
}

fn uniform_entry(binding: u32, visibility: wgpu::ShaderStages) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: None,
        },
        count: None,
    }
}

fn uniform_buffer(device: &wgpu::Device, label: &str, size: u64) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(format!("{label}_uniform_buffer").as_str()),
        size,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

fn textured_binding(
    device: &wgpu::Device,
    label: &str,
    layout: &wgpu::BindGroupLayout,
    size: u64,
    texture: &GpuTexture,
    sampler: &wgpu::Sampler,
) -> ObjectBinding {
    let buffer = uniform_buffer(device, label, size);
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(format!("{label}_bind_group").as_str()),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::TextureView(&texture.view),
            },
            wgpu::BindGroupEntry {
                binding: 2,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
        ],
    });
    ObjectBinding { buffer, bind_group }
}

fn simple_vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x2];
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<SimpleVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &ATTRIBUTES,
    }
}

fn depth_state(write: bool) -> wgpu::DepthStencilState {
    wgpu::DepthStencilState {
        format: DEPTH_FORMAT,
        depth_write_enabled: write,
        depth_compare: wgpu::CompareFunction::Less,
        stencil: Default::default(),
        bias: Default::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use holocard_scene::{CameraParams, FaceSlot};

    #[test]
    fn uniform_sizes_match_wgsl_layout() {
        // WGSL uniform structs round to 16 bytes; array elements of Material are 48.
        assert_eq!(std::mem::size_of::<FrameUniform>(), 64 + 6 * 16);
        assert_eq!(std::mem::size_of::<MaterialUniform>(), 48);
        assert_eq!(std::mem::size_of::<CardUniform>(), 128 + 3 * 48);
        assert_eq!(std::mem::size_of::<UnlitUniform>(), 80);
    }

    #[test]
    fn frame_uniform_packs_lights() {
        let camera = OrbitCamera::from_params(&CameraParams::default(), 1.0);
        let lighting = LightingParams::default();
        let frame = FrameUniform::new(&camera, &lighting);

        assert!((frame.ambient[0] - 0.6).abs() < 1e-6);
        assert!((frame.key_color[1] - 0.8).abs() < 1e-6);
        let key = Vec3::new(frame.key_dir[0], frame.key_dir[1], frame.key_dir[2]);
        assert!((key.length() - 1.0).abs() < 1e-5);
        assert_eq!(frame.rim_pos[3], 6.0);
        assert_eq!(frame.rim_color[3], 1.0);
        assert!((frame.camera_pos[2] - 2.5).abs() < 1e-4);
    }

    #[test]
    fn card_uniform_orders_materials_by_slot() {
        let faces = CardFaces::default();
        let uniform = CardUniform::new(Mat4::IDENTITY, &faces);
        let front = FaceSlot::Front.index() as usize;
        assert_eq!(uniform.materials[front].flags[0], 1.0);
        for slot in [FaceSlot::Edge, FaceSlot::Back] {
            assert_eq!(uniform.materials[slot.index() as usize].flags[0], 0.0);
        }
        assert_eq!(uniform.normal_matrix, Mat4::IDENTITY.to_cols_array_2d());
    }
}
