//! 8-bit sRGB colors used by the scene and the HUD.

use serde::{Deserialize, Serialize};

/// An sRGB color with straight alpha, 0-255 per channel.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
pub struct Color {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha (255 = opaque).
    pub a: u8,
}

impl Color {
    /// Opaque color from red, green and blue.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Same color with alpha set to `alpha` (0.0-1.0, clamped).
    #[must_use]
    pub fn fade(self, alpha: f32) -> Self {
        Self {
            a: (alpha.clamp(0.0, 1.0) * 255.0) as u8,
            ..self
        }
    }

    /// Channels as sRGB floats in 0.0-1.0; shaders linearize on read.
    #[must_use]
    pub fn to_srgb_f32(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a].map(|c| f32::from(c) / 255.0)
    }

    /// Linear-space color for clear values on an sRGB surface.
    #[must_use]
    pub fn to_linear(self) -> wgpu::Color {
        let [r, g, b, a] = self.to_srgb_f32();
        let lin = |c: f32| f64::from(c.powf(2.2));
        wgpu::Color {
            r: lin(r),
            g: lin(g),
            b: lin(b),
            a: f64::from(a),
        }
    }
}

impl From<[u8; 4]> for Color {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self { r, g, b, a }
    }
}

/// Background.
pub const RAYWHITE: Color = Color::rgb(245, 245, 245);
/// Ground plane.
pub const LIGHTGRAY: Color = Color::rgb(200, 200, 200);
/// Left wall, HUD panel outlines.
pub const BLUE: Color = Color::rgb(0, 121, 241);
/// Right wall.
pub const LIME: Color = Color::rgb(0, 158, 47);
/// Back wall.
pub const GOLD: Color = Color::rgb(255, 203, 0);
/// Column wireframes.
pub const MAROON: Color = Color::rgb(190, 33, 55);
/// Player cube.
pub const PURPLE: Color = Color::rgb(200, 122, 255);
/// Player cube wireframe.
pub const DARKPURPLE: Color = Color::rgb(112, 31, 126);
/// HUD panel fill.
pub const SKYBLUE: Color = Color::rgb(102, 191, 255);
/// HUD text.
pub const BLACK: Color = Color::rgb(0, 0, 0);
/// Default light color.
pub const WHITE: Color = Color::rgb(255, 255, 255);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_keeps_rgb() {
        let faded = SKYBLUE.fade(0.5);
        assert_eq!((faded.r, faded.g, faded.b), (102, 191, 255));
        assert_eq!(faded.a, 127);
        assert_eq!(WHITE.fade(0.3).a, 76);
        assert_eq!(WHITE.fade(4.0).a, 255);
    }

    #[test]
    fn linear_conversion_keeps_extremes() {
        let white = WHITE.to_linear();
        assert!((white.r - 1.0).abs() < 1e-9);
        let black = BLACK.to_linear();
        assert!(black.g.abs() < 1e-9);
        // Mid-grey darkens when linearized.
        assert!(RAYWHITE.to_linear().r < f64::from(RAYWHITE.to_srgb_f32()[0]));
    }
}
