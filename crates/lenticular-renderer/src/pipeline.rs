//! wgpu render pipeline for one lenticular slice.
//!
//! Construction compiles the WGSL lowered from a [`LenticularGraph`] and binds
//! that graph's two textures; this is the rebuild path. Parameter edits go
//! through [`LenticularPipeline::update_uniforms`], which writes the existing
//! uniform buffer in place.

use lenticular_common::TextureKey;
use tracing::debug;
use wgpu::util::DeviceExt;

use crate::gpu::{LenticularUniforms, RendererError, SliceUniforms};
use crate::plane::PlaneVertex;
use crate::shader_graph::{wgsl, LenticularGraph};

/// GPU resources for drawing one slice.
pub struct LenticularPipeline {
    pub pipeline: wgpu::RenderPipeline,
    pub vertex_buffer: wgpu::Buffer,
    pub vertex_count: u32,
    pub lenticular_buffer: wgpu::Buffer,
    pub slice_buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
    key: TextureKey,
}

impl LenticularPipeline {
    /// Create the pipeline for `graph`.
    ///
    /// - `format`: colour target format
    /// - `depth_format`: depth attachment format, if the pass has one
    /// - `texture_a`/`texture_b`: views for the graph's two texture handles
    /// - `vertices`: slice plane mesh, generated once at max divisions
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        depth_format: Option<wgpu::TextureFormat>,
        graph: &LenticularGraph,
        texture_a: &wgpu::TextureView,
        texture_b: &wgpu::TextureView,
        vertices: &[PlaneVertex],
    ) -> Result<Self, RendererError> {
        if vertices.is_empty() {
            return Err(RendererError::DeviceError("slice mesh has no vertices".into()));
        }
        let source = wgsl::emit_module(graph)?;

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("lenticular shader"),
            source: wgpu::ShaderSource::Wgsl(source.into()),
        });

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("lenticular vertex buffer"),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let lenticular_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("lenticular uniforms"),
            contents: bytemuck::bytes_of(graph.uniforms()),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let slice_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("slice uniforms"),
            size: std::mem::size_of::<SliceUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("lenticular sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("lenticular bind group layout"),
            entries: &bind_group_layout_entries(),
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("lenticular bind group"),
            layout: &bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: lenticular_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: slice_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::TextureView(texture_a),
                },
                wgpu::BindGroupEntry {
                    binding: 3,
                    resource: wgpu::BindingResource::TextureView(texture_b),
                },
                wgpu::BindGroupEntry {
                    binding: 4,
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("lenticular pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("lenticular pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[PlaneVertex::LAYOUT],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            // Both faces are visible as the ring turns.
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: depth_format.map(|format| wgpu::DepthStencilState {
                format,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        debug!(key = %graph.key(), vertices = vertices.len(), "lenticular pipeline created");

        Ok(Self {
            pipeline,
            vertex_buffer,
            vertex_count: vertices.len() as u32,
            lenticular_buffer,
            slice_buffer,
            bind_group,
            key: graph.key().clone(),
        })
    }

    /// Texture set this pipeline was built for.
    pub fn key(&self) -> &TextureKey {
        &self.key
    }

    /// Whether `graph` binds different textures than this pipeline.
    pub fn needs_rebuild(&self, graph: &LenticularGraph) -> bool {
        graph.key() != &self.key
    }

    /// Upload the graph's current parameter values. No reallocation.
    pub fn update_uniforms(&self, queue: &wgpu::Queue, graph: &LenticularGraph) {
        queue.write_buffer(&self.lenticular_buffer, 0, bytemuck::bytes_of(graph.uniforms()));
    }

    /// Upload this slice's MVP and model matrices.
    pub fn update_slice(&self, queue: &wgpu::Queue, uniforms: &SliceUniforms) {
        queue.write_buffer(&self.slice_buffer, 0, bytemuck::bytes_of(uniforms));
    }

    /// Record the slice draw into an open render pass.
    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &self.bind_group, &[]);
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        pass.draw(0..self.vertex_count, 0..1);
    }
}

/// Group 0 as declared by the generated shader's prelude.
fn bind_group_layout_entries() -> [wgpu::BindGroupLayoutEntry; 5] {
    [
        uniform_entry::<LenticularUniforms>(0, wgpu::ShaderStages::VERTEX_FRAGMENT),
        uniform_entry::<SliceUniforms>(1, wgpu::ShaderStages::VERTEX),
        texture_entry(2),
        texture_entry(3),
        wgpu::BindGroupLayoutEntry {
            binding: 4,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
            count: None,
        },
    ]
}

fn uniform_entry<T>(binding: u32, visibility: wgpu::ShaderStages) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: std::num::NonZeroU64::new(std::mem::size_of::<T>() as u64),
        },
        count: None,
    }
}

fn texture_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Texture {
            sample_type: wgpu::TextureSampleType::Float { filterable: true },
            view_dimension: wgpu::TextureViewDimension::D2,
            multisampled: false,
        },
        count: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shader_graph::{LenticularParameters, ShaderGraphBuilder};
    use lenticular_common::{SliceTexturePair, TextureHandle};

    fn module_for(params: &LenticularParameters) -> naga::Module {
        let graph = ShaderGraphBuilder::new()
            .build(
                &SliceTexturePair::new("nostalgia", TextureHandle(1), TextureHandle(2)),
                params,
            )
            .unwrap();
        let source = wgsl::emit_module(&graph).unwrap();
        naga::front::wgsl::parse_str(&source)
            .unwrap_or_else(|e| panic!("{}", e.emit_to_string(&source)))
    }

    #[test]
    fn generated_shader_validates() {
        for params in [
            LenticularParameters::default(),
            LenticularParameters::new(1, 0.0, 0.0).unwrap(),
            LenticularParameters::new(100, 0.2, 1.0).unwrap(),
        ] {
            let module = module_for(&params);
            naga::valid::Validator::new(
                naga::valid::ValidationFlags::all(),
                naga::valid::Capabilities::empty(),
            )
            .validate(&module)
            .unwrap_or_else(|e| panic!("{e:?}"));
        }
    }

    #[test]
    fn layout_covers_every_shader_binding() {
        let module = module_for(&LenticularParameters::default());
        let entries = bind_group_layout_entries();
        let mut bound: Vec<u32> = module
            .global_variables
            .iter()
            .filter_map(|(_, var)| var.binding.as_ref())
            .map(|b| {
                assert_eq!(b.group, 0);
                b.binding
            })
            .collect();
        bound.sort_unstable();
        let declared: Vec<u32> = entries.iter().map(|e| e.binding).collect();
        assert_eq!(bound, declared);
    }

    #[test]
    fn vertex_inputs_match_plane_vertex_layout() {
        let module = module_for(&LenticularParameters::default());
        let vs = module
            .entry_points
            .iter()
            .find(|ep| ep.name == "vs_main")
            .expect("vs_main");
        let mut locations = Vec::new();
        for arg in &vs.function.arguments {
            if let naga::TypeInner::Struct { members, .. } = &module.types[arg.ty].inner {
                for member in members {
                    if let Some(naga::Binding::Location { location, .. }) = member.binding {
                        locations.push(location);
                    }
                }
            }
        }
        locations.sort_unstable();
        let expected: Vec<u32> = PlaneVertex::LAYOUT
            .attributes
            .iter()
            .map(|a| a.shader_location)
            .collect();
        assert_eq!(locations, expected);
    }
}
