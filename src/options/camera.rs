use serde::{Deserialize, Serialize};

use crate::camera::CameraMode;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Camera control speeds and clip planes.
pub struct CameraOptions {
    /// Mode the demo starts in.
    pub initial_mode: CameraMode,
    /// Walk/fly speed in world units per second.
    pub move_speed: f32,
    /// Keyboard look and roll speed in radians per second.
    pub rotation_speed: f32,
    /// Middle-mouse pan speed in world units per second.
    pub pan_speed: f32,
    /// Orbital mode angular speed in radians per second.
    pub orbital_speed: f32,
    /// Mouse-look radians per pixel of motion.
    pub mouse_sensitivity: f32,
    /// World units per scroll notch.
    pub scroll_sensitivity: f32,
    /// World units per zoom key press.
    pub zoom_step: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            initial_mode: CameraMode::FirstPerson,
            move_speed: 5.4,
            rotation_speed: 1.8,
            pan_speed: 12.0,
            orbital_speed: 0.5,
            mouse_sensitivity: 0.003,
            scroll_sensitivity: 1.0,
            zoom_step: 2.0,
            znear: 0.01,
            zfar: 1000.0,
        }
    }
}
