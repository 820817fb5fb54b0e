use glam::{Quat, Vec2};

use super::core::{Camera, Projection};
use super::mode::CameraMode;
use crate::options::CameraOptions;

/// Orthographic view height limits when zooming.
const ORTHO_MIN_HEIGHT: f32 = 1.0;
const ORTHO_MAX_HEIGHT: f32 = 200.0;

/// One frame's worth of camera input, already resolved from key bindings.
///
/// Held keys are booleans; mouse motion and scroll are accumulated over the
/// frame; zoom key presses count edges, not holds.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[allow(clippy::struct_excessive_bools)]
pub struct CameraControls {
    /// Move along the view direction.
    pub forward: bool,
    /// Move against the view direction.
    pub back: bool,
    /// Strafe left.
    pub left: bool,
    /// Strafe right.
    pub right: bool,
    /// Rise (free mode only).
    pub up: bool,
    /// Sink (free mode only).
    pub down: bool,
    /// Pitch up.
    pub look_up: bool,
    /// Pitch down.
    pub look_down: bool,
    /// Yaw left.
    pub look_left: bool,
    /// Yaw right.
    pub look_right: bool,
    /// Roll counter-clockwise.
    pub roll_left: bool,
    /// Roll clockwise.
    pub roll_right: bool,
    /// Middle mouse button held (free-mode panning).
    pub pan: bool,
    /// Zoom-in key pressed this frame.
    pub zoom_in: bool,
    /// Zoom-out key pressed this frame.
    pub zoom_out: bool,
    /// Mouse motion in pixels since the last frame.
    pub mouse_delta: Vec2,
    /// Scroll since the last frame (positive = toward the target).
    pub scroll: f32,
}

/// Per-mode camera update driven by [`CameraControls`].
#[derive(Debug, Clone, PartialEq)]
pub struct CameraController {
    move_speed: f32,
    rotation_speed: f32,
    pan_speed: f32,
    orbital_speed: f32,
    mouse_sensitivity: f32,
    scroll_sensitivity: f32,
    zoom_step: f32,
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new(&CameraOptions::default())
    }
}

impl CameraController {
    /// Build a controller from the camera options' speed settings.
    #[must_use]
    pub fn new(options: &CameraOptions) -> Self {
        Self {
            move_speed: options.move_speed,
            rotation_speed: options.rotation_speed,
            pan_speed: options.pan_speed,
            orbital_speed: options.orbital_speed,
            mouse_sensitivity: options.mouse_sensitivity,
            scroll_sensitivity: options.scroll_sensitivity,
            zoom_step: options.zoom_step,
        }
    }

    /// Advance the camera by one frame of `dt` seconds.
    pub fn update(
        &self,
        camera: &mut Camera,
        mode: CameraMode,
        controls: &CameraControls,
        dt: f32,
    ) {
        if mode == CameraMode::Orbital {
            self.orbit(camera, dt);
        } else {
            self.look(camera, mode, controls, dt);
            self.walk(camera, mode, controls, dt);
        }

        if mode.can_zoom() {
            self.zoom(camera, controls);
        }
    }

    fn orbit(&self, camera: &mut Camera, dt: f32) {
        let rotation =
            Quat::from_axis_angle(camera.up_dir(), self.orbital_speed * dt);
        let view = rotation * (camera.position - camera.target);
        camera.position = camera.target + view;
    }

    fn look(
        &self,
        camera: &mut Camera,
        mode: CameraMode,
        controls: &CameraControls,
        dt: f32,
    ) {
        let around = mode.rotates_around_target();
        let lock = mode.locks_view();
        let step = self.rotation_speed * dt;

        if controls.look_down {
            camera.pitch(-step, lock, around, false);
        }
        if controls.look_up {
            camera.pitch(step, lock, around, false);
        }
        if controls.look_right {
            camera.yaw(-step, around);
        }
        if controls.look_left {
            camera.yaw(step, around);
        }
        if controls.roll_left {
            camera.roll(-step);
        }
        if controls.roll_right {
            camera.roll(step);
        }

        if mode == CameraMode::Free && controls.pan {
            let pan = self.pan_speed * dt;
            let delta = controls.mouse_delta;
            if delta.x != 0.0 {
                camera.move_right(pan.copysign(delta.x), false);
            }
            if delta.y != 0.0 {
                camera.move_up(pan.copysign(-delta.y));
            }
        } else {
            let delta = controls.mouse_delta * self.mouse_sensitivity;
            if delta.x != 0.0 {
                camera.yaw(-delta.x, around);
            }
            if delta.y != 0.0 {
                camera.pitch(-delta.y, lock, around, false);
            }
        }
    }

    fn walk(
        &self,
        camera: &mut Camera,
        mode: CameraMode,
        controls: &CameraControls,
        dt: f32,
    ) {
        let in_plane = mode.moves_in_world_plane();
        let step = self.move_speed * dt;

        if controls.forward {
            camera.move_forward(step, in_plane);
        }
        if controls.left {
            camera.move_right(-step, in_plane);
        }
        if controls.back {
            camera.move_forward(-step, in_plane);
        }
        if controls.right {
            camera.move_right(step, in_plane);
        }

        if mode == CameraMode::Free {
            if controls.up {
                camera.move_up(step);
            }
            if controls.down {
                camera.move_up(-step);
            }
        }
    }

    fn zoom(&self, camera: &mut Camera, controls: &CameraControls) {
        let mut delta = -controls.scroll * self.scroll_sensitivity;
        if controls.zoom_out {
            delta += self.zoom_step;
        }
        if controls.zoom_in {
            delta -= self.zoom_step;
        }
        if delta == 0.0 {
            return;
        }

        match camera.projection {
            Projection::Perspective => camera.move_to_target(delta),
            Projection::Orthographic => {
                camera.fovy = (camera.fovy + delta)
                    .clamp(ORTHO_MIN_HEIGHT, ORTHO_MAX_HEIGHT);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::camera::mode::{isometric_preset, perspective_preset};

    const DT: f32 = 1.0 / 60.0;

    fn controller() -> CameraController {
        CameraController::default()
    }

    #[test]
    fn orbital_mode_circles_the_target() {
        let mut camera = perspective_preset();
        let distance = camera.position.distance(camera.target);
        let controls = CameraControls {
            forward: true,
            mouse_delta: Vec2::new(50.0, 0.0),
            ..Default::default()
        };
        for _ in 0..30 {
            controller().update(&mut camera, CameraMode::Orbital, &controls, DT);
        }
        assert_eq!(camera.target, Vec3::new(0.0, 2.0, 0.0));
        assert!((camera.position.distance(camera.target) - distance).abs() < 1e-4);
        assert!((camera.position.y - 2.0).abs() < 1e-5);
        assert!(camera.position.x.abs() > 0.1, "orbit did not advance");
    }

    #[test]
    fn first_person_walks_on_the_ground_plane() {
        let mut camera = perspective_preset();
        let controls = CameraControls {
            forward: true,
            up: true,
            mouse_delta: Vec2::new(0.0, -40.0),
            ..Default::default()
        };
        for _ in 0..10 {
            controller().update(&mut camera, CameraMode::FirstPerson, &controls, DT);
        }
        assert!((camera.position.y - 2.0).abs() < 1e-5);
        assert!(camera.position.z < 4.0);
        // Mouse moved up: the view pitched up.
        assert!(camera.forward().y > 0.0);
    }

    #[test]
    fn free_mode_flies_vertically() {
        let mut camera = perspective_preset();
        let controls = CameraControls {
            up: true,
            ..Default::default()
        };
        controller().update(&mut camera, CameraMode::Free, &controls, 1.0);
        let expected = CameraOptions::default().move_speed;
        assert!((camera.position.y - (2.0 + expected)).abs() < 1e-4);
        assert!((camera.target.y - (2.0 + expected)).abs() < 1e-4);
    }

    #[test]
    fn free_mode_pans_with_middle_mouse() {
        let mut camera = perspective_preset();
        let controls = CameraControls {
            pan: true,
            mouse_delta: Vec2::new(3.0, 0.0),
            ..Default::default()
        };
        let before = camera.forward();
        controller().update(&mut camera, CameraMode::Free, &controls, DT);
        assert!(camera.position.x > 0.0);
        // Panning translates without turning.
        assert!((camera.forward() - before).length() < 1e-6);
    }

    #[test]
    fn scroll_zooms_except_in_first_person() {
        let controls = CameraControls {
            scroll: 1.0,
            ..Default::default()
        };

        let mut camera = perspective_preset();
        controller().update(&mut camera, CameraMode::ThirdPerson, &controls, DT);
        assert!(camera.position.distance(camera.target) < 4.0);

        let mut camera = perspective_preset();
        controller().update(&mut camera, CameraMode::FirstPerson, &controls, DT);
        assert!((camera.position.distance(camera.target) - 4.0).abs() < 1e-5);
    }

    #[test]
    fn orthographic_zoom_changes_view_height() {
        let mut camera = isometric_preset();
        let controls = CameraControls {
            zoom_out: true,
            ..Default::default()
        };
        controller().update(&mut camera, CameraMode::ThirdPerson, &controls, DT);
        assert_eq!(camera.fovy, 20.0 + CameraOptions::default().zoom_step);

        let controls = CameraControls {
            scroll: 1000.0,
            ..Default::default()
        };
        controller().update(&mut camera, CameraMode::ThirdPerson, &controls, DT);
        assert_eq!(camera.fovy, ORTHO_MIN_HEIGHT);
    }
}
