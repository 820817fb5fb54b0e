//! Camera interaction modes and the two projection presets.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::core::{Camera, Projection};

/// How input drives the camera each frame.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum CameraMode {
    /// Free flight: unlocked pitch, vertical movement, mouse panning.
    Free,
    /// Walk on the ground plane and look around from the eye.
    #[default]
    FirstPerson,
    /// Walk on the ground plane while the eye orbits the target.
    ThirdPerson,
    /// Automatic orbit around the target.
    Orbital,
}

impl CameraMode {
    /// All modes, in key order 1-4.
    pub const ALL: [Self; 4] =
        [Self::Free, Self::FirstPerson, Self::ThirdPerson, Self::Orbital];

    /// Upper-case name shown in the HUD.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Free => "FREE",
            Self::FirstPerson => "FIRST_PERSON",
            Self::ThirdPerson => "THIRD_PERSON",
            Self::Orbital => "ORBITAL",
        }
    }

    /// Movement is projected onto the ground plane.
    #[must_use]
    pub const fn moves_in_world_plane(self) -> bool {
        matches!(self, Self::FirstPerson | Self::ThirdPerson)
    }

    /// Rotations swing the eye around the target instead of the target
    /// around the eye.
    #[must_use]
    pub const fn rotates_around_target(self) -> bool {
        matches!(self, Self::ThirdPerson | Self::Orbital)
    }

    /// Pitch is clamped short of the up axis.
    #[must_use]
    pub const fn locks_view(self) -> bool {
        !matches!(self, Self::Free)
    }

    /// Mouse wheel and zoom keys change the target distance.
    #[must_use]
    pub const fn can_zoom(self) -> bool {
        !matches!(self, Self::FirstPerson)
    }
}

/// Canonical up vector restored on every mode switch.
pub const WORLD_UP: Vec3 = Vec3::Y;

/// Eye height and look-at point shared by both presets.
const PRESET_TARGET: Vec3 = Vec3::new(0.0, 2.0, 0.0);

/// The perspective configuration the camera starts in and returns to.
#[must_use]
pub fn perspective_preset() -> Camera {
    Camera {
        position: Vec3::new(0.0, 2.0, 4.0),
        target: PRESET_TARGET,
        up: WORLD_UP,
        fovy: 60.0,
        projection: Projection::Perspective,
    }
}

/// Isometric orthographic configuration: the eye starts far behind the
/// target (the distance bounds what the orthographic view can see), then
/// swings 135 degrees around and 45 degrees above it.
#[must_use]
pub fn isometric_preset() -> Camera {
    let mut camera = Camera {
        position: Vec3::new(0.0, 2.0, -100.0),
        target: PRESET_TARGET,
        up: WORLD_UP,
        fovy: 20.0,
        projection: Projection::Orthographic,
    };
    camera.yaw((-135.0_f32).to_radians(), true);
    camera.pitch((-45.0_f32).to_radians(), true, true, false);
    camera
}

/// Switch between the perspective and isometric presets, replacing the
/// whole camera. Returns the mode the demo switches to (always third
/// person).
pub fn toggle_projection(camera: &mut Camera) -> CameraMode {
    *camera = match camera.projection {
        Projection::Perspective => isometric_preset(),
        Projection::Orthographic => perspective_preset(),
    };
    CameraMode::ThirdPerson
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_near(a: Vec3, b: Vec3) {
        assert!((a - b).length() < 1e-3, "{a:?} != {b:?}");
    }

    #[test]
    fn labels_match_hud_names() {
        let labels: Vec<_> = CameraMode::ALL.iter().map(|m| m.label()).collect();
        assert_eq!(labels, ["FREE", "FIRST_PERSON", "THIRD_PERSON", "ORBITAL"]);
    }

    #[test]
    fn isometric_preset_looks_down_at_the_target() {
        let camera = isometric_preset();
        assert_eq!(camera.projection, Projection::Orthographic);
        assert_eq!(camera.fovy, 20.0);
        assert_eq!(camera.target, PRESET_TARGET);
        assert_eq!(camera.up, WORLD_UP);
        // Distance to the target is preserved by both rotations.
        assert!((camera.position.distance(camera.target) - 100.0).abs() < 1e-3);
        // 45 degrees of elevation, diagonally over the +X/+Z quadrant.
        let offset = camera.position - camera.target;
        let elevation = offset.y.atan2(offset.x.hypot(offset.z));
        assert!((elevation.to_degrees() - 45.0).abs() < 1e-3);
        assert!((offset.x - offset.z).abs() < 1e-3);
        assert!(offset.x > 0.0);
    }

    #[test]
    fn toggle_twice_restores_the_starting_view() {
        let start = Camera::default();
        let mut camera = start;

        assert_eq!(toggle_projection(&mut camera), CameraMode::ThirdPerson);
        assert_eq!(camera.projection, Projection::Orthographic);

        assert_eq!(toggle_projection(&mut camera), CameraMode::ThirdPerson);
        assert_eq!(camera.projection, Projection::Perspective);
        assert_near(camera.position, start.position);
        assert_near(camera.target, start.target);
        assert_near(camera.up, start.up);
        assert!((camera.fovy - start.fovy).abs() < 1e-6);
    }

    #[test]
    fn toggle_discards_user_motion() {
        let mut camera = Camera::default();
        camera.move_forward(7.0, true);
        camera.roll(0.3);
        let _ = toggle_projection(&mut camera);
        assert_eq!(camera, isometric_preset());
    }
}
