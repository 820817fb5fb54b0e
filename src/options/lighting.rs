use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Point light and ambient term for lit geometry.
pub struct LightingOptions {
    /// Ambient color; the shader applies a tenth of it.
    pub ambient: [f32; 4],
    /// Light position in world space.
    pub position: [f32; 3],
    /// Light color (sRGB, 0-255).
    pub color: [u8; 4],
    /// Whether the light starts switched on.
    pub enabled: bool,
    /// Specular exponent.
    pub shininess: f32,
}

impl Default for LightingOptions {
    fn default() -> Self {
        Self {
            ambient: [0.1, 0.1, 0.1, 1.0],
            position: [-2.0, 1.75, -2.0],
            color: [255, 255, 255, 255],
            enabled: true,
            shininess: 16.0,
        }
    }
}
