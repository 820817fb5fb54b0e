//! CPU-side geometry for the 3D scene: boxes, planes and spheres, filled
//! or as wireframes, all in one vertex format.
//!
//! Meshes are unindexed triangle and line lists. Everything is small enough
//! (a few thousand vertices) that indexing buys nothing.

use std::f32::consts::{PI, TAU};

use glam::{Vec2, Vec3};

use super::palette::Color;

// ==================== VERTEX FORMAT ====================

/// 44-byte scene vertex shared by the triangle and line pipelines.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneVertex {
    /// World-space position.
    pub position: [f32; 3],
    /// Unit surface normal; unused for lines.
    pub normal: [f32; 3],
    /// sRGB color with straight alpha.
    pub color: [f32; 4],
    /// 1.0 when the point light shades this vertex, 0.0 for flat color.
    pub lit: f32,
}

/// Vertex buffer layout matching [`SceneVertex`] at locations 0-3.
pub fn scene_vertex_buffer_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: size_of::<SceneVertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 0,
            },
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 12,
                shader_location: 1,
            },
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x4,
                offset: 24,
                shader_location: 2,
            },
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32,
                offset: 40,
                shader_location: 3,
            },
        ],
    }
}

// ==================== MESH ====================

/// Triangle-list and line-list vertices drawn with the same bind groups.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneMesh {
    /// Filled geometry, three vertices per triangle.
    pub triangles: Vec<SceneVertex>,
    /// Wireframes, two vertices per segment.
    pub lines: Vec<SceneVertex>,
}

/// Unit quad corners as (u, v) signs, two triangles.
const QUAD: [(f32, f32); 6] = [
    (-1.0, -1.0),
    (1.0, -1.0),
    (1.0, 1.0),
    (-1.0, -1.0),
    (1.0, 1.0),
    (-1.0, 1.0),
];

fn vertex(position: Vec3, normal: Vec3, color: Color, lit: bool) -> SceneVertex {
    SceneVertex {
        position: position.to_array(),
        normal: normal.to_array(),
        color: color.to_srgb_f32(),
        lit: if lit { 1.0 } else { 0.0 },
    }
}

impl SceneMesh {
    /// Empty mesh.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all vertices, keeping the allocations.
    pub fn clear(&mut self) {
        self.triangles.clear();
        self.lines.clear();
    }

    /// Whether both lists are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty() && self.lines.is_empty()
    }

    /// Solid axis-aligned box.
    pub fn cube(&mut self, center: Vec3, size: Vec3, color: Color) {
        let half = size * 0.5;
        for (axis, u, v) in [
            (Vec3::X, Vec3::Y, Vec3::Z),
            (Vec3::Y, Vec3::Z, Vec3::X),
            (Vec3::Z, Vec3::X, Vec3::Y),
        ] {
            for normal in [axis, -axis] {
                for (s, t) in QUAD {
                    let corner = (normal + u * s + v * t) * half;
                    self.triangles
                        .push(vertex(center + corner, normal, color, false));
                }
            }
        }
    }

    /// The twelve edges of an axis-aligned box.
    pub fn cube_wires(&mut self, center: Vec3, size: Vec3, color: Color) {
        let half = size * 0.5;
        let corner = |i: u32| {
            let sign = |bit: u32| if i & bit == 0 { -1.0 } else { 1.0 };
            center + Vec3::new(sign(1), sign(2), sign(4)) * half
        };
        for i in 0..8 {
            for bit in [1, 2, 4] {
                if i & bit == 0 {
                    self.line(corner(i), corner(i | bit), color);
                }
            }
        }
    }

    /// Horizontal plane facing +Y, split into `subdivisions` cells per side.
    pub fn plane(
        &mut self,
        center: Vec3,
        size: Vec2,
        subdivisions: (u32, u32),
        color: Color,
        lit: bool,
    ) {
        let (nx, nz) = (subdivisions.0.max(1), subdivisions.1.max(1));
        let cell = Vec2::new(size.x / nx as f32, size.y / nz as f32);
        let origin = center - Vec3::new(size.x, 0.0, size.y) * 0.5;

        for iz in 0..nz {
            for ix in 0..nx {
                let cell_center = origin
                    + Vec3::new(
                        (ix as f32 + 0.5) * cell.x,
                        0.0,
                        (iz as f32 + 0.5) * cell.y,
                    );
                for (s, t) in QUAD {
                    let offset = Vec3::new(s * cell.x, 0.0, t * cell.y) * 0.5;
                    self.triangles.push(vertex(
                        cell_center + offset,
                        Vec3::Y,
                        color,
                        lit,
                    ));
                }
            }
        }
    }

    /// Solid UV sphere with `rings` interior latitude rings and `slices`
    /// meridians.
    pub fn sphere(
        &mut self,
        center: Vec3,
        radius: f32,
        rings: u32,
        slices: u32,
        color: Color,
    ) {
        let grid = SphereGrid::new(rings, slices);
        for band in 0..grid.bands {
            for slice in 0..grid.slices {
                let quad = [
                    grid.point(band, slice),
                    grid.point(band + 1, slice),
                    grid.point(band + 1, slice + 1),
                    grid.point(band, slice),
                    grid.point(band + 1, slice + 1),
                    grid.point(band, slice + 1),
                ];
                for dir in quad {
                    self.triangles.push(vertex(
                        center + dir * radius,
                        dir,
                        color,
                        false,
                    ));
                }
            }
        }
    }

    /// UV sphere drawn as latitude and longitude segments.
    pub fn sphere_wires(
        &mut self,
        center: Vec3,
        radius: f32,
        rings: u32,
        slices: u32,
        color: Color,
    ) {
        let grid = SphereGrid::new(rings, slices);
        let at = |band, slice| center + grid.point(band, slice) * radius;
        for band in 0..grid.bands {
            for slice in 0..grid.slices {
                self.line(at(band, slice), at(band + 1, slice), color);
                self.line(at(band, slice), at(band, slice + 1), color);
            }
        }
    }

    fn line(&mut self, a: Vec3, b: Vec3, color: Color) {
        self.lines.push(vertex(a, Vec3::Y, color, false));
        self.lines.push(vertex(b, Vec3::Y, color, false));
    }
}

/// Latitude/longitude parameterization of the unit sphere. The poles are
/// band edges, so `rings` interior rings give `rings + 2` bands.
struct SphereGrid {
    bands: u32,
    slices: u32,
}

impl SphereGrid {
    fn new(rings: u32, slices: u32) -> Self {
        Self {
            bands: rings + 2,
            slices: slices.max(3),
        }
    }

    fn point(&self, band: u32, slice: u32) -> Vec3 {
        let theta = PI * band as f32 / self.bands as f32;
        let phi = TAU * slice as f32 / self.slices as f32;
        Vec3::new(theta.sin() * phi.cos(), theta.cos(), theta.sin() * phi.sin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::palette::{BLUE, MAROON};

    #[test]
    fn vertex_is_44_bytes() {
        assert_eq!(size_of::<SceneVertex>(), 44);
        assert_eq!(
            scene_vertex_buffer_layout().array_stride,
            size_of::<SceneVertex>() as u64
        );
    }

    #[test]
    fn cube_has_six_faces_within_bounds() {
        let mut mesh = SceneMesh::new();
        let center = Vec3::new(-16.0, 2.5, 0.0);
        let size = Vec3::new(1.0, 5.0, 32.0);
        mesh.cube(center, size, BLUE);
        assert_eq!(mesh.triangles.len(), 36);
        assert!(mesh.lines.is_empty());
        for v in &mesh.triangles {
            let local = (Vec3::from(v.position) - center).abs();
            assert!(local.cmple(size * 0.5 + 1e-5).all(), "{local:?}");
            // Every vertex sits on the face its normal points out of.
            let n = Vec3::from(v.normal);
            let depth = (Vec3::from(v.position) - center).dot(n);
            assert!((depth - (size * 0.5).dot(n.abs())).abs() < 1e-4);
        }
    }

    #[test]
    fn cube_wires_has_twelve_axis_aligned_edges() {
        let mut mesh = SceneMesh::new();
        mesh.cube_wires(Vec3::ZERO, Vec3::splat(2.0), MAROON);
        assert_eq!(mesh.lines.len(), 24);
        for edge in mesh.lines.chunks(2) {
            let d = Vec3::from(edge[1].position) - Vec3::from(edge[0].position);
            assert!((d.length() - 2.0).abs() < 1e-6);
        }
    }

    #[test]
    fn plane_covers_requested_area() {
        let mut mesh = SceneMesh::new();
        mesh.plane(Vec3::ZERO, Vec2::splat(32.0), (3, 3), BLUE, true);
        assert_eq!(mesh.triangles.len(), 9 * 6);
        let max_x = mesh
            .triangles
            .iter()
            .map(|v| v.position[0])
            .fold(f32::MIN, f32::max);
        assert!((max_x - 16.0).abs() < 1e-4);
        assert!(mesh.triangles.iter().all(|v| v.position[1] == 0.0));
        assert!(mesh.triangles.iter().all(|v| v.lit == 1.0));
    }

    #[test]
    fn sphere_vertices_lie_on_the_radius() {
        let mut mesh = SceneMesh::new();
        let center = Vec3::new(-2.0, 1.75, -2.0);
        mesh.sphere(center, 0.2, 8, 8, BLUE);
        mesh.sphere_wires(center, 0.2, 8, 8, BLUE);
        assert_eq!(mesh.triangles.len(), 10 * 8 * 6);
        assert_eq!(mesh.lines.len(), 10 * 8 * 4);
        for v in mesh.triangles.iter().chain(&mesh.lines) {
            let r = Vec3::from(v.position).distance(center);
            assert!((r - 0.2).abs() < 1e-5);
        }
    }
}
