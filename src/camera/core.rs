use glam::{Mat4, Vec3};

/// How the 3D scene is projected onto the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Projection {
    /// Perspective projection; `fovy` is the vertical field of view in
    /// degrees.
    #[default]
    Perspective,
    /// Orthographic projection; `fovy` is the view height in world units.
    Orthographic,
}

impl Projection {
    /// Upper-case name shown in the HUD.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Perspective => "PERSPECTIVE",
            Self::Orthographic => "ORTHOGRAPHIC",
        }
    }
}

/// Look-at camera: eye position, target, up vector and projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub position: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector (not necessarily normalized; rolled by the
    /// controller).
    pub up: Vec3,
    /// Vertical field of view in degrees, or view height for orthographic.
    pub fovy: f32,
    /// Projection kind.
    pub projection: Projection,
}

impl Default for Camera {
    fn default() -> Self {
        super::mode::perspective_preset()
    }
}

impl Camera {
    /// Normalized direction from the eye toward the target.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize_or_zero()
    }

    /// Normalized up vector.
    #[must_use]
    pub fn up_dir(&self) -> Vec3 {
        self.up.normalize_or_zero()
    }

    /// Normalized right vector (`forward x up`).
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.forward().cross(self.up_dir()).normalize_or_zero()
    }

    /// World-to-view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    /// View-to-clip matrix for the given aspect ratio and clip planes.
    ///
    /// Both variants use the [0,1] depth range wgpu expects.
    #[must_use]
    pub fn projection_matrix(&self, aspect: f32, znear: f32, zfar: f32) -> Mat4 {
        match self.projection {
            Projection::Perspective => Mat4::perspective_rh(
                self.fovy.to_radians(),
                aspect,
                znear,
                zfar,
            ),
            Projection::Orthographic => {
                let top = self.fovy * 0.5;
                let right = top * aspect;
                Mat4::orthographic_rh(-right, right, -top, top, znear, zfar)
            }
        }
    }

    /// Combined view-projection matrix.
    #[must_use]
    pub fn view_projection(&self, aspect: f32, znear: f32, zfar: f32) -> Mat4 {
        self.projection_matrix(aspect, znear, zfar) * self.view_matrix()
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the view-projection matrix and eye position.
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position (used as the lighting view position).
    pub position: [f32; 3],
    /// Padding for GPU alignment.
    pub(crate) _pad: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a new camera uniform with identity view-projection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            _pad: 0.0,
        }
    }

    /// Update uniform fields from the given camera's current state.
    pub fn update_view_proj(
        &mut self,
        camera: &Camera,
        aspect: f32,
        znear: f32,
        zfar: f32,
    ) {
        self.view_proj = camera
            .view_projection(aspect, znear, zfar)
            .to_cols_array_2d();
        self.position = camera.position.to_array();
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec4;

    use super::*;

    #[test]
    fn basis_vectors_are_orthonormal() {
        let camera = Camera::default();
        assert!((camera.forward() - Vec3::NEG_Z).length() < 1e-6);
        assert!((camera.right() - Vec3::X).length() < 1e-6);
        assert!(camera.forward().dot(camera.right()).abs() < 1e-6);
    }

    #[test]
    fn target_projects_to_screen_center() {
        for projection in [Projection::Perspective, Projection::Orthographic] {
            let camera = Camera {
                projection,
                ..Camera::default()
            };
            let clip = camera.view_projection(16.0 / 9.0, 0.01, 1000.0)
                * Vec4::from((camera.target, 1.0));
            let ndc = clip / clip.w;
            assert!(ndc.x.abs() < 1e-5, "{projection:?}: {ndc:?}");
            assert!(ndc.y.abs() < 1e-5, "{projection:?}: {ndc:?}");
            assert!((0.0..=1.0).contains(&ndc.z), "{projection:?}: {ndc:?}");
        }
    }

    #[test]
    fn orthographic_height_is_fovy() {
        let camera = Camera {
            fovy: 20.0,
            projection: Projection::Orthographic,
            ..Camera::default()
        };
        // A point 10 units above the target sits on the top edge.
        let top = camera.target + Vec3::Y * 10.0;
        let clip =
            camera.view_projection(1.0, 0.01, 1000.0) * Vec4::from((top, 1.0));
        assert!((clip.y / clip.w - 1.0).abs() < 1e-5);
    }
}
