//! Draws the static world and the per-frame markers.
//!
//! Two pipelines share one shader and one vertex format:
//! - **Triangle pass**: filled boxes, spheres and the lit ground
//! - **Line pass**: wireframe outlines, depth-tested with `LessEqual`

use wgpu::util::DeviceExt;

use crate::camera::{Camera, CameraUniform};
use crate::gpu::dynamic_buffer::DynamicBuffer;
use crate::gpu::pipeline_helpers::{
    create_pipeline, depth_stencil_state, uniform_buffer, PipelineSpec,
};
use crate::lighting::{Lighting, PointLight};
use crate::options::{CameraOptions, LightingOptions};
use crate::scene::{scene_vertex_buffer_layout, SceneMesh, SceneVertex};

/// Triangle and line vertex buffers for one [`SceneMesh`].
struct MeshBuffers {
    triangles: DynamicBuffer,
    lines: DynamicBuffer,
}

impl MeshBuffers {
    fn new(device: &wgpu::Device, label: &str, mesh: &SceneMesh) -> Self {
        Self {
            triangles: DynamicBuffer::new_with_data(
                device,
                &format!("{label} Triangles"),
                &mesh.triangles,
                wgpu::BufferUsages::VERTEX,
            ),
            lines: DynamicBuffer::new_with_data(
                device,
                &format!("{label} Lines"),
                &mesh.lines,
                wgpu::BufferUsages::VERTEX,
            ),
        }
    }

    fn write(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        mesh: &SceneMesh,
    ) {
        let _ = self.triangles.write(device, queue, &mesh.triangles);
        let _ = self.lines.write(device, queue, &mesh.lines);
    }
}

fn draw(pass: &mut wgpu::RenderPass<'_>, buffer: &DynamicBuffer) {
    if buffer.is_empty() {
        return;
    }
    let count = (buffer.len() / size_of::<SceneVertex>()) as u32;
    pass.set_vertex_buffer(0, buffer.filled_slice());
    pass.draw(0..count, 0..1);
}

/// Scene uploads that change every frame.
pub struct FrameScene<'a> {
    /// Camera to render through.
    pub camera: &'a Camera,
    /// Surface width over height.
    pub aspect: f32,
    /// Current light state.
    pub light: &'a PointLight,
    /// Player cube and light marker.
    pub markers: &'a SceneMesh,
}

/// Renders the 3D scene into the scene targets.
pub struct SceneRenderer {
    triangle_pipeline: wgpu::RenderPipeline,
    line_pipeline: wgpu::RenderPipeline,
    camera_uniform: CameraUniform,
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    lighting: Lighting,
    static_mesh: MeshBuffers,
    markers: MeshBuffers,
    znear: f32,
    zfar: f32,
}

impl SceneRenderer {
    /// Build pipelines for a color target of `format` at `sample_count`,
    /// and upload the static mesh once.
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        sample_count: u32,
        static_mesh: &SceneMesh,
        light: &PointLight,
        camera_options: &CameraOptions,
        lighting_options: &LightingOptions,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Scene Shader"),
            source: wgpu::ShaderSource::Wgsl(
                include_str!("../../assets/shaders/scene.wgsl").into(),
            ),
        });

        let camera_uniform = CameraUniform::new();
        let camera_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Camera Buffer"),
                contents: bytemuck::cast_slice(&[camera_uniform]),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            });
        let camera_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Camera Bind Group Layout"),
                entries: &[uniform_buffer(
                    0,
                    wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                )],
            });
        let camera_bind_group =
            device.create_bind_group(&wgpu::BindGroupDescriptor {
                layout: &camera_layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: camera_buffer.as_entire_binding(),
                }],
                label: Some("Camera Bind Group"),
            });

        let lighting = Lighting::new(device, light, lighting_options);
        let layouts = [&camera_layout, &lighting.layout];

        let pipeline = |label: &str,
                        topology: wgpu::PrimitiveTopology,
                        compare: wgpu::CompareFunction| {
            create_pipeline(
                device,
                PipelineSpec {
                    label,
                    shader: &shader,
                    format,
                    vertex_layout: scene_vertex_buffer_layout(),
                    bind_group_layouts: &layouts,
                    topology,
                    depth_stencil: Some(depth_stencil_state(compare)),
                    sample_count,
                },
            )
        };
        let triangle_pipeline = pipeline(
            "Scene Triangles",
            wgpu::PrimitiveTopology::TriangleList,
            wgpu::CompareFunction::Less,
        );
        let line_pipeline = pipeline(
            "Scene Lines",
            wgpu::PrimitiveTopology::LineList,
            wgpu::CompareFunction::LessEqual,
        );

        Self {
            triangle_pipeline,
            line_pipeline,
            camera_uniform,
            camera_buffer,
            camera_bind_group,
            lighting,
            static_mesh: MeshBuffers::new(device, "Static Scene", static_mesh),
            markers: MeshBuffers::new(device, "Markers", &SceneMesh::new()),
            znear: camera_options.znear,
            zfar: camera_options.zfar,
        }
    }

    /// Upload this frame's camera, light and marker geometry.
    pub fn prepare(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        frame: &FrameScene<'_>,
    ) {
        self.camera_uniform.update_view_proj(
            frame.camera,
            frame.aspect,
            self.znear,
            self.zfar,
        );
        queue.write_buffer(
            &self.camera_buffer,
            0,
            bytemuck::cast_slice(&[self.camera_uniform]),
        );

        self.lighting.update(frame.light);
        self.lighting.update_gpu(queue);

        self.markers.write(device, queue, frame.markers);
    }

    /// Record the scene draws: filled geometry first, then wireframes so
    /// the translucent light marker blends over everything opaque.
    pub fn render(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_bind_group(0, &self.camera_bind_group, &[]);
        pass.set_bind_group(1, &self.lighting.bind_group, &[]);

        pass.set_pipeline(&self.triangle_pipeline);
        draw(pass, &self.static_mesh.triangles);
        draw(pass, &self.markers.triangles);

        pass.set_pipeline(&self.line_pipeline);
        draw(pass, &self.static_mesh.lines);
        draw(pass, &self.markers.lines);
    }
}
