//! GPU side of the HUD: translucent panel rectangles plus glyphon text,
//! drawn on top of the resolved scene.

use glyphon::{
    Attrs, Buffer, Cache, Color as TextColor, Family, FontSystem, Metrics,
    Resolution, Shaping, SwashCache, TextArea, TextAtlas, TextBounds,
    TextRenderer as GlyphonRenderer, Viewport,
};
use wgpu::util::DeviceExt;

use super::{
    HudText, Panel, CONTROLS_PANEL, FONT_SIZE, LINE_PITCH, OUTLINE_WIDTH,
    PANEL_ALPHA, STATUS_PANEL,
};
use crate::gpu::dynamic_buffer::DynamicBuffer;
use crate::gpu::pipeline_helpers::{create_pipeline, uniform_buffer, PipelineSpec};
use crate::scene::palette::{self, Color};

/// 24-byte overlay vertex in physical pixels.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
struct HudVertex {
    position: [f32; 2],
    color: [f32; 4],
}

fn hud_vertex_buffer_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: size_of::<HudVertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x2,
                offset: 0,
                shader_location: 0,
            },
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x4,
                offset: 8,
                shader_location: 1,
            },
        ],
    }
}

/// Surface size for the pixel-to-NDC transform (16 bytes).
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
struct ScreenUniform {
    size: [f32; 2],
    _pad: [f32; 2],
}

fn push_rect(
    out: &mut Vec<HudVertex>,
    (x, y, w, h): (f32, f32, f32, f32),
    color: Color,
) {
    let color = color.to_srgb_f32();
    let corners = [
        [x, y],
        [x + w, y],
        [x + w, y + h],
        [x, y],
        [x + w, y + h],
        [x, y + h],
    ];
    out.extend(corners.map(|position| HudVertex { position, color }));
}

/// Filled panel plus a one-pixel outline, scaled to physical pixels.
fn push_panel(out: &mut Vec<HudVertex>, panel: &Panel, scale: f32) {
    let (x, y) = (panel.x * scale, panel.y * scale);
    let (w, h) = (panel.width * scale, panel.height * scale);
    let t = OUTLINE_WIDTH * scale;

    push_rect(out, (x, y, w, h), palette::SKYBLUE.fade(PANEL_ALPHA));
    push_rect(out, (x, y, w, t), palette::BLUE);
    push_rect(out, (x, y + h - t, w, t), palette::BLUE);
    push_rect(out, (x, y, t, h), palette::BLUE);
    push_rect(out, (x + w - t, y, t, h), palette::BLUE);
}

fn panel_vertices(scale: f32) -> Vec<HudVertex> {
    let mut vertices = Vec::with_capacity(2 * 5 * 6);
    push_panel(&mut vertices, &CONTROLS_PANEL, scale);
    push_panel(&mut vertices, &STATUS_PANEL, scale);
    vertices
}

fn text_color(color: Color) -> TextColor {
    TextColor::rgba(color.r, color.g, color.b, color.a)
}

/// One panel's text block.
struct PanelText {
    panel: Panel,
    buffer: Buffer,
    lines: Vec<String>,
}

impl PanelText {
    fn new(font_system: &mut FontSystem, panel: Panel) -> Self {
        let mut buffer =
            Buffer::new(font_system, Metrics::new(FONT_SIZE, LINE_PITCH));
        buffer.set_size(font_system, Some(panel.width), Some(panel.height));
        Self {
            panel,
            buffer,
            lines: Vec::new(),
        }
    }

    /// Reshape only when the text changed.
    fn set_lines(&mut self, font_system: &mut FontSystem, lines: &[String]) {
        if self.lines == lines {
            return;
        }
        self.lines = lines.to_vec();
        let attrs = Attrs::new().family(Family::SansSerif);
        self.buffer.set_text(
            font_system,
            &self.lines.join("\n"),
            &attrs,
            Shaping::Advanced,
        );
        self.buffer.shape_until_scroll(font_system, false);
    }

    fn area(&self, scale: f32, (width, height): (u32, u32)) -> TextArea<'_> {
        TextArea {
            buffer: &self.buffer,
            left: self.panel.text_left() * scale,
            top: self.panel.text_top() * scale,
            scale,
            bounds: TextBounds {
                left: 0,
                top: 0,
                right: width as i32,
                bottom: height as i32,
            },
            default_color: text_color(palette::BLACK),
            custom_glyphs: &[],
        }
    }
}

/// Draws the two HUD panels and their text.
pub struct HudRenderer {
    pipeline: wgpu::RenderPipeline,
    screen_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    vertex_buffer: DynamicBuffer,
    vertex_count: u32,
    scale: f32,

    font_system: FontSystem,
    swash_cache: SwashCache,
    atlas: TextAtlas,
    text_renderer: GlyphonRenderer,
    viewport: Viewport,
    controls: PanelText,
    status: PanelText,
    text_ready: bool,
}

impl HudRenderer {
    /// Build the overlay pipeline and text atlas for a surface `format`.
    pub fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        format: wgpu::TextureFormat,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("HUD Shader"),
            source: wgpu::ShaderSource::Wgsl(
                include_str!("../../assets/shaders/hud.wgsl").into(),
            ),
        });

        let screen_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("HUD Screen Buffer"),
                contents: bytemuck::cast_slice(&[ScreenUniform {
                    size: [1.0, 1.0],
                    _pad: [0.0; 2],
                }]),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            });
        let layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("HUD Bind Group Layout"),
                entries: &[uniform_buffer(0, wgpu::ShaderStages::VERTEX)],
            });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: screen_buffer.as_entire_binding(),
            }],
            label: Some("HUD Bind Group"),
        });

        let pipeline = create_pipeline(
            device,
            PipelineSpec {
                label: "HUD",
                shader: &shader,
                format,
                vertex_layout: hud_vertex_buffer_layout(),
                bind_group_layouts: &[&layout],
                topology: wgpu::PrimitiveTopology::TriangleList,
                depth_stencil: None,
                sample_count: 1,
            },
        );

        let vertex_buffer = DynamicBuffer::new(
            device,
            "HUD Vertex Buffer",
            size_of::<HudVertex>() * 60,
            wgpu::BufferUsages::VERTEX,
        );

        let mut font_system = FontSystem::new();
        let swash_cache = SwashCache::new();
        let cache = Cache::new(device);
        let mut atlas = TextAtlas::new(device, queue, &cache, format);
        let text_renderer = GlyphonRenderer::new(
            &mut atlas,
            device,
            wgpu::MultisampleState::default(),
            None,
        );
        let viewport = Viewport::new(device, &cache);
        let controls = PanelText::new(&mut font_system, CONTROLS_PANEL);
        let status = PanelText::new(&mut font_system, STATUS_PANEL);

        Self {
            pipeline,
            screen_buffer,
            bind_group,
            vertex_buffer,
            vertex_count: 0,
            scale: 0.0,
            font_system,
            swash_cache,
            atlas,
            text_renderer,
            viewport,
            controls,
            status,
            text_ready: false,
        }
    }

    /// Upload this frame's panels and text for a surface of `size` physical
    /// pixels at DPI `scale`.
    pub fn prepare(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        size: (u32, u32),
        scale: f32,
        text: &HudText,
    ) {
        queue.write_buffer(
            &self.screen_buffer,
            0,
            bytemuck::cast_slice(&[ScreenUniform {
                size: [size.0 as f32, size.1 as f32],
                _pad: [0.0; 2],
            }]),
        );

        if (scale - self.scale).abs() > f32::EPSILON {
            self.scale = scale;
            let vertices = panel_vertices(scale);
            let _ = self.vertex_buffer.write(device, queue, &vertices);
            self.vertex_count = vertices.len() as u32;
        }

        self.controls.set_lines(&mut self.font_system, &text.controls);
        self.status.set_lines(&mut self.font_system, &text.status);

        self.viewport.update(
            queue,
            Resolution {
                width: size.0,
                height: size.1,
            },
        );

        let areas = [
            self.controls.area(scale, size),
            self.status.area(scale, size),
        ];
        self.text_ready = match self.text_renderer.prepare(
            device,
            queue,
            &mut self.font_system,
            &mut self.atlas,
            &self.viewport,
            areas,
            &mut self.swash_cache,
        ) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("HUD text prepare failed: {e}");
                false
            }
        };
    }

    /// Draw panels, then text, into a pass that loads the scene image.
    pub fn render(&self, pass: &mut wgpu::RenderPass<'_>) {
        if !self.vertex_buffer.is_empty() {
            pass.set_pipeline(&self.pipeline);
            pass.set_bind_group(0, &self.bind_group, &[]);
            pass.set_vertex_buffer(0, self.vertex_buffer.filled_slice());
            pass.draw(0..self.vertex_count, 0..1);
        }

        if self.text_ready {
            if let Err(e) =
                self.text_renderer.render(&self.atlas, &self.viewport, pass)
            {
                log::warn!("HUD text render failed: {e}");
            }
        }
    }

    /// Evict glyphs unused this frame. Call after submitting.
    pub fn trim(&mut self) {
        self.atlas.trim();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panels_are_fill_plus_four_edges() {
        let vertices = panel_vertices(1.0);
        assert_eq!(vertices.len(), 2 * 5 * 6);
        let fill = &vertices[0];
        assert_eq!(fill.position, [5.0, 5.0]);
        assert_eq!(fill.color, palette::SKYBLUE.fade(PANEL_ALPHA).to_srgb_f32());
        assert_eq!(vertices[6].color, palette::BLUE.to_srgb_f32());
    }

    #[test]
    fn panels_scale_with_dpi() {
        let vertices = panel_vertices(2.0);
        let status_fill = &vertices[30..36];
        assert_eq!(status_fill[0].position, [1200.0, 10.0]);
        assert_eq!(status_fill[2].position, [1720.0, 210.0]);
    }

    #[test]
    fn panel_text_reshapes_on_change() {
        let mut font_system = FontSystem::new();
        let mut text = PanelText::new(&mut font_system, STATUS_PANEL);
        let lines = vec!["Camera status:".to_owned(), "- Mode: FREE".to_owned()];
        text.set_lines(&mut font_system, &lines);
        assert_eq!(text.lines, lines);
        assert_eq!(text.buffer.lines.len(), 2);

        text.set_lines(&mut font_system, &lines[..1]);
        assert_eq!(text.buffer.lines.len(), 1);
    }

    #[test]
    fn text_uses_the_palette_black() {
        let color = text_color(palette::BLACK);
        assert_eq!(color, TextColor::rgb(0, 0, 0));
        assert_eq!(color.a(), 255);
    }

    #[test]
    fn vertex_is_24_bytes() {
        assert_eq!(size_of::<HudVertex>(), 24);
        assert_eq!(size_of::<ScreenUniform>(), 16);
    }
}
