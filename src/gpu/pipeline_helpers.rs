//! Shared wgpu boilerplate helpers for the scene and overlay pipelines.

use super::texture::DEPTH_FORMAT;

/// Uniform buffer binding visible to the given stages.
pub fn uniform_buffer(
    binding: u32,
    visibility: wgpu::ShaderStages,
) -> wgpu::BindGroupLayoutEntry {
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

/// Depth-stencil state used by the 3D pipelines. Wireframes pass
/// `LessEqual` so edges drawn over their own faces stay visible.
pub fn depth_stencil_state(
    depth_compare: wgpu::CompareFunction,
) -> wgpu::DepthStencilState {
    wgpu::DepthStencilState {
        format: DEPTH_FORMAT,
        depth_write_enabled: true,
        depth_compare,
        stencil: wgpu::StencilState::default(),
        bias: wgpu::DepthBiasState::default(),
    }
}

/// Everything that varies between the render pipelines this crate builds.
pub struct PipelineSpec<'a> {
    /// Debug label prefix.
    pub label: &'a str,
    /// Compiled shader exposing `vs_main` / `fs_main`.
    pub shader: &'a wgpu::ShaderModule,
    /// Single color target format.
    pub format: wgpu::TextureFormat,
    /// Vertex buffer layout (one buffer).
    pub vertex_layout: wgpu::VertexBufferLayout<'a>,
    /// Bind group layouts in group order.
    pub bind_group_layouts: &'a [&'a wgpu::BindGroupLayout],
    /// Primitive topology.
    pub topology: wgpu::PrimitiveTopology,
    /// Depth testing; `None` for overlays.
    pub depth_stencil: Option<wgpu::DepthStencilState>,
    /// Multisample count of the color target.
    pub sample_count: u32,
}

/// Create a render pipeline with `vs_main` / `fs_main` entry points,
/// alpha blending and a single color target.
pub fn create_pipeline(
    device: &wgpu::Device,
    spec: PipelineSpec<'_>,
) -> wgpu::RenderPipeline {
    let pipeline_layout =
        device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some(&format!("{} Pipeline Layout", spec.label)),
            bind_group_layouts: spec.bind_group_layouts,
            push_constant_ranges: &[],
        });
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(&format!("{} Pipeline", spec.label)),
        layout: Some(&pipeline_layout),
        vertex: wgpu::VertexState {
            module: spec.shader,
            entry_point: Some("vs_main"),
            buffers: &[spec.vertex_layout],
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: spec.shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format: spec.format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology: spec.topology,
            ..Default::default()
        },
        depth_stencil: spec.depth_stencil,
        multisample: wgpu::MultisampleState {
            count: spec.sample_count,
            ..Default::default()
        },
        multiview: None,
        cache: None,
    })
}
