//! The scene's single point light and its GPU uniform.

use glam::Vec3;
use wgpu::util::DeviceExt;

use crate::gpu::pipeline_helpers::uniform_buffer;
use crate::options::LightingOptions;
use crate::scene::palette::Color;

/// A point light that can be switched on and off.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    /// World-space position.
    pub position: Vec3,
    /// Light color.
    pub color: Color,
    /// Whether the light contributes diffuse and specular terms.
    pub enabled: bool,
}

impl Default for PointLight {
    fn default() -> Self {
        Self::from_options(&LightingOptions::default())
    }
}

impl PointLight {
    /// Light as configured in the lighting options.
    #[must_use]
    pub fn from_options(options: &LightingOptions) -> Self {
        Self {
            position: Vec3::from(options.position),
            color: Color::from(options.color),
            enabled: options.enabled,
        }
    }

    /// Flip the enabled flag.
    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
        log::debug!(
            "light {}",
            if self.enabled { "enabled" } else { "disabled" }
        );
    }
}

/// Point light parameters for the scene shader.
/// NOTE: Must match WGSL struct layout exactly (64 bytes)
///
/// WGSL layout:
///   position: vec3<f32>   (offset 0, align 16)
///   enabled: u32          (offset 12)
///   color: vec4<f32>      (offset 16)
///   ambient: vec4<f32>    (offset 32)
///   shininess: f32        (offset 48)
///   (implicit padding to 64)
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightUniform {
    /// Light position in world space
    pub position: [f32; 3],
    /// Nonzero when the light is on
    pub enabled: u32,
    /// Light color (sRGB, 0.0-1.0)
    pub color: [f32; 4],
    /// Ambient color; the shader uses a tenth of it
    pub ambient: [f32; 4],
    /// Specular exponent
    pub shininess: f32,
    /// Pads the struct to a 16-byte multiple.
    pub _pad: [f32; 3],
}

impl LightUniform {
    /// Uniform for `light` with the configured ambient and shininess.
    #[must_use]
    pub fn new(light: &PointLight, options: &LightingOptions) -> Self {
        Self {
            position: light.position.to_array(),
            enabled: u32::from(light.enabled),
            color: light.color.to_srgb_f32(),
            ambient: options.ambient,
            shininess: options.shininess,
            _pad: [0.0; 3],
        }
    }
}

/// GPU side of the point light: uniform buffer plus its bind group.
pub struct Lighting {
    /// CPU copy of the uniform, uploaded by [`update_gpu`](Self::update_gpu).
    pub uniform: LightUniform,
    /// Uniform buffer backing the bind group.
    pub buffer: wgpu::Buffer,
    /// Layout of bind group 1 in the scene shader.
    pub layout: wgpu::BindGroupLayout,
    /// Bind group holding the light uniform.
    pub bind_group: wgpu::BindGroup,
}

impl Lighting {
    /// Allocate the uniform buffer and bind group for `light`.
    pub fn new(
        device: &wgpu::Device,
        light: &PointLight,
        options: &LightingOptions,
    ) -> Self {
        let uniform = LightUniform::new(light, options);

        let buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Light Buffer"),
                contents: bytemuck::cast_slice(&[uniform]),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            });

        let layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Light Bind Group Layout"),
                entries: &[uniform_buffer(0, wgpu::ShaderStages::FRAGMENT)],
            });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
            label: Some("Light Bind Group"),
        });

        Self {
            uniform,
            buffer,
            layout,
            bind_group,
        }
    }

    /// Refresh position, color and the enabled flag from `light`.
    pub fn update(&mut self, light: &PointLight) {
        self.uniform.position = light.position.to_array();
        self.uniform.color = light.color.to_srgb_f32();
        self.uniform.enabled = u32::from(light.enabled);
    }

    /// Upload the CPU uniform.
    pub fn update_gpu(&self, queue: &wgpu::Queue) {
        queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(&[self.uniform]));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_is_64_bytes() {
        assert_eq!(size_of::<LightUniform>(), 64);
    }

    #[test]
    fn default_light_matches_options() {
        let light = PointLight::default();
        assert_eq!(light.position, Vec3::new(-2.0, 1.75, -2.0));
        assert!(light.enabled);

        let uniform = LightUniform::new(&light, &LightingOptions::default());
        assert_eq!(uniform.enabled, 1);
        assert_eq!(uniform.color, [1.0; 4]);
        assert_eq!(uniform.ambient, [0.1, 0.1, 0.1, 1.0]);
        assert_eq!(uniform.shininess, 16.0);
    }

    #[test]
    fn toggle_flips_enabled() {
        let mut light = PointLight::default();
        light.toggle();
        assert!(!light.enabled);
        light.toggle();
        assert!(light.enabled);
    }
}
