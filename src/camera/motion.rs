//! Motion primitives for the look-at camera.
//!
//! Every primitive moves or rotates the position/target pair together so the
//! camera keeps looking along the same ray unless the operation is a
//! rotation. Rotations either swing the target around the eye (first-person
//! feel) or swing the eye around the target (third-person/orbital feel).

use glam::{Quat, Vec3};

use super::core::Camera;

/// Margin (radians) kept between the view direction and the up axis when
/// the view is locked, so the camera never flips over the pole.
const PITCH_LOCK_MARGIN: f32 = 0.001;

/// Closest the eye may approach the target when zooming.
pub const MIN_TARGET_DISTANCE: f32 = 0.001;

/// Unsigned angle between two vectors, accurate near 0 and pi.
fn angle_between(a: Vec3, b: Vec3) -> f32 {
    a.cross(b).length().atan2(a.dot(b))
}

fn rotate_about(v: Vec3, axis: Vec3, angle: f32) -> Vec3 {
    let axis = axis.normalize_or_zero();
    if axis == Vec3::ZERO {
        return v;
    }
    Quat::from_axis_angle(axis, angle) * v
}

impl Camera {
    /// Move along the view direction. With `in_world_plane` the motion is
    /// projected onto the horizontal plane so height is preserved.
    pub fn move_forward(&mut self, distance: f32, in_world_plane: bool) {
        let mut forward = self.forward();
        if in_world_plane {
            forward.y = 0.0;
            forward = forward.normalize_or_zero();
        }
        self.translate(forward * distance);
    }

    /// Strafe along the right vector.
    pub fn move_right(&mut self, distance: f32, in_world_plane: bool) {
        let mut right = self.right();
        if in_world_plane {
            right.y = 0.0;
            right = right.normalize_or_zero();
        }
        self.translate(right * distance);
    }

    /// Move along the camera's up vector.
    pub fn move_up(&mut self, distance: f32) {
        self.translate(self.up_dir() * distance);
    }

    /// Change the eye-target distance by `delta` (positive moves away).
    pub fn move_to_target(&mut self, delta: f32) {
        let mut distance = self.position.distance(self.target) + delta;
        if distance <= 0.0 {
            distance = MIN_TARGET_DISTANCE;
        }
        self.position = self.target - self.forward() * distance;
    }

    /// Rotate around the up vector.
    pub fn yaw(&mut self, angle: f32, around_target: bool) {
        let offset = rotate_about(self.target - self.position, self.up, angle);
        self.apply_offset(offset, around_target);
    }

    /// Rotate around the right vector.
    ///
    /// `lock_view` clamps the angle so the view never passes the up axis;
    /// `rotate_up` also rotates the up vector (free-look flight).
    pub fn pitch(
        &mut self,
        angle: f32,
        lock_view: bool,
        around_target: bool,
        rotate_up: bool,
    ) {
        let up = self.up_dir();
        let offset = self.target - self.position;
        let mut turn = angle;

        if lock_view {
            let max_up = angle_between(up, offset) - PITCH_LOCK_MARGIN;
            turn = turn.min(max_up);
            let max_down = -angle_between(-up, offset) + PITCH_LOCK_MARGIN;
            turn = turn.max(max_down);
        }

        let right = self.right();
        let offset = rotate_about(offset, right, turn);
        self.apply_offset(offset, around_target);

        if rotate_up {
            self.up = rotate_about(self.up, right, turn);
        }
    }

    /// Rotate the up vector around the view direction.
    pub fn roll(&mut self, angle: f32) {
        self.up = rotate_about(self.up, self.forward(), angle);
    }

    fn translate(&mut self, delta: Vec3) {
        self.position += delta;
        self.target += delta;
    }

    fn apply_offset(&mut self, offset: Vec3, around_target: bool) {
        if around_target {
            self.position = self.target - offset;
        } else {
            self.target = self.position + offset;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn world_plane_motion_keeps_height() {
        let mut camera = Camera::default();
        camera.target.y = 5.0; // looking up
        let height = camera.position.y;
        camera.move_forward(3.0, true);
        camera.move_right(-2.0, true);
        assert!((camera.position.y - height).abs() < 1e-6);
    }

    #[test]
    fn free_motion_follows_view_direction() {
        let mut camera = Camera::default();
        camera.move_forward(1.0, false);
        assert!(approx(camera.position, Vec3::new(0.0, 2.0, 3.0)));
        assert!(approx(camera.target, Vec3::new(0.0, 2.0, -1.0)));
        camera.move_up(1.0);
        assert!(approx(camera.position, Vec3::new(0.0, 3.0, 3.0)));
    }

    #[test]
    fn yaw_around_target_keeps_distance() {
        let mut camera = Camera::default();
        let distance = camera.position.distance(camera.target);
        camera.yaw(FRAC_PI_2, true);
        assert_eq!(camera.target, Vec3::new(0.0, 2.0, 0.0));
        assert!((camera.position.distance(camera.target) - distance).abs() < 1e-5);
        // The eye swings from +Z to +X around the target.
        assert!(approx(camera.position, Vec3::new(4.0, 2.0, 0.0)));
    }

    #[test]
    fn yaw_in_place_moves_target() {
        let mut camera = Camera::default();
        camera.yaw(FRAC_PI_2, false);
        assert_eq!(camera.position, Vec3::new(0.0, 2.0, 4.0));
        assert!(approx(camera.target, Vec3::new(-4.0, 2.0, 4.0)));
    }

    #[test]
    fn locked_pitch_never_crosses_the_pole() {
        let mut camera = Camera::default();
        camera.pitch(3.0, true, false, false);
        let to_up = angle_between(camera.up_dir(), camera.forward());
        assert!(to_up > 0.0 && to_up < 0.01, "angle to up: {to_up}");
        assert!(camera.forward().z < 0.0);

        camera.pitch(-6.0, true, false, false);
        let to_down = angle_between(-camera.up_dir(), camera.forward());
        assert!(to_down > 0.0 && to_down < 0.01, "angle to down: {to_down}");
        assert!(camera.forward().z < 0.0);
    }

    #[test]
    fn unlocked_pitch_can_rotate_up_vector() {
        let mut camera = Camera::default();
        camera.pitch(FRAC_PI_2, false, false, true);
        assert!(approx(camera.up_dir(), Vec3::Z));
        assert!(approx(camera.forward(), Vec3::Y));
    }

    #[test]
    fn zoom_clamps_to_minimum_distance() {
        let mut camera = Camera::default();
        camera.move_to_target(-100.0);
        assert!(
            (camera.position.distance(camera.target) - MIN_TARGET_DISTANCE).abs()
                < 1e-6
        );
        camera.move_to_target(5.0);
        assert!((camera.position.distance(camera.target) - 5.001).abs() < 1e-4);
    }

    #[test]
    fn roll_tilts_up_vector() {
        let mut camera = Camera::default();
        camera.roll(FRAC_PI_2);
        assert!(approx(camera.up_dir(), Vec3::X) || approx(camera.up_dir(), -Vec3::X));
        assert_eq!(camera.target, Vec3::new(0.0, 2.0, 0.0));
    }
}
