//! Heads-up display: two translucent panels listing the controls and the
//! live camera state.
//!
//! [`HudText::compose`] is a pure function of the camera and mode so it can
//! be tested without a GPU; [`HudRenderer`] turns it into draw calls.

mod renderer;

use glam::Vec3;
pub use renderer::HudRenderer;

use crate::camera::{Camera, CameraMode};

/// A screen-space rectangle in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Panel {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Panel {
    /// Left edge of the panel's text column.
    #[must_use]
    pub fn text_left(&self) -> f32 {
        self.x + TEXT_INSET
    }

    /// Top of the panel's first text line.
    #[must_use]
    pub fn text_top(&self) -> f32 {
        self.y + TEXT_INSET
    }
}

/// Controls help panel.
pub const CONTROLS_PANEL: Panel = Panel {
    x: 5.0,
    y: 5.0,
    width: 330.0,
    height: 100.0,
};

/// Camera status panel. Wide enough for three zero-padded coordinates.
pub const STATUS_PANEL: Panel = Panel {
    x: 600.0,
    y: 5.0,
    width: 260.0,
    height: 100.0,
};

/// Text offset from a panel's top-left corner.
pub const TEXT_INSET: f32 = 10.0;
/// Font size in logical pixels.
pub const FONT_SIZE: f32 = 10.0;
/// Distance between consecutive text lines.
pub const LINE_PITCH: f32 = 15.0;
/// Panel outline thickness.
pub const OUTLINE_WIDTH: f32 = 1.0;
/// Panel fill opacity.
pub const PANEL_ALPHA: f32 = 0.5;

const CONTROL_LINES: [&str; 6] = [
    "Camera controls:",
    "- Move keys: W, A, S, D, Space, Left-Ctrl",
    "- Look around: arrow keys or mouse",
    "- Camera mode keys: 1, 2, 3, 4",
    "- Zoom keys: num-plus, num-minus or mouse scroll",
    "- Camera projection key: P",
];

/// The text of both panels for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudText {
    /// Lines of the controls panel (fixed).
    pub controls: Vec<String>,
    /// Lines of the status panel.
    pub status: Vec<String>,
}

fn format_vec3(v: Vec3) -> String {
    format!("({:06.3}, {:06.3}, {:06.3})", v.x, v.y, v.z)
}

impl HudText {
    /// Describe `camera` in `mode`.
    #[must_use]
    pub fn compose(camera: &Camera, mode: CameraMode) -> Self {
        Self {
            controls: CONTROL_LINES.iter().map(|&line| line.to_owned()).collect(),
            status: vec![
                "Camera status:".to_owned(),
                format!("- Mode: {}", mode.label()),
                format!("- Projection: {}", camera.projection.label()),
                format!("- Position: {}", format_vec3(camera.position)),
                format!("- Target: {}", format_vec3(camera.target)),
                format!("- Up: {}", format_vec3(camera.up)),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::{mode::isometric_preset, Projection};

    #[test]
    fn status_describes_the_starting_camera() {
        let text = HudText::compose(&Camera::default(), CameraMode::FirstPerson);
        assert_eq!(text.controls.len(), 6);
        assert_eq!(text.controls[0], "Camera controls:");
        assert_eq!(
            text.status,
            [
                "Camera status:",
                "- Mode: FIRST_PERSON",
                "- Projection: PERSPECTIVE",
                "- Position: (00.000, 02.000, 04.000)",
                "- Target: (00.000, 02.000, 00.000)",
                "- Up: (00.000, 01.000, 00.000)",
            ]
        );
    }

    #[test]
    fn negative_and_wide_values_keep_their_sign() {
        assert_eq!(
            format_vec3(Vec3::new(-2.5, 12.25, -0.125)),
            "(-2.500, 12.250, -0.125)"
        );
        assert_eq!(format_vec3(Vec3::new(-57.735, 0.0, 100.0)), "(-57.735, 00.000, 100.000)");
    }

    #[test]
    fn compose_is_deterministic() {
        let camera = isometric_preset();
        let a = HudText::compose(&camera, CameraMode::ThirdPerson);
        let b = HudText::compose(&camera, CameraMode::ThirdPerson);
        assert_eq!(a, b);
        assert_eq!(a.status[1], "- Mode: THIRD_PERSON");
        assert_eq!(a.status[2], format!("- Projection: {}", Projection::Orthographic.label()));
    }

    #[test]
    fn status_panel_clears_the_controls_panel() {
        assert!(CONTROLS_PANEL.x + CONTROLS_PANEL.width < STATUS_PANEL.x);
        let bottom = CONTROLS_PANEL.text_top() + LINE_PITCH * (CONTROL_LINES.len() - 1) as f32 + FONT_SIZE;
        assert!(bottom <= CONTROLS_PANEL.y + CONTROLS_PANEL.height);
    }
}
