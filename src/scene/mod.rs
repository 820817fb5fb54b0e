//! The demo's static world: ground, walls, random columns, plus the
//! per-frame markers (player cube and light sphere).

mod columns;
pub mod mesh_gen;
pub mod palette;

pub use columns::{generate_columns, Column, COLUMN_WIDTH};
use glam::{Vec2, Vec3};
pub use mesh_gen::{scene_vertex_buffer_layout, SceneMesh, SceneVertex};
use palette::Color;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::lighting::PointLight;
use crate::options::SceneOptions;

/// Number of columns generated at startup.
pub const MAX_COLUMNS: usize = 20;

/// Ground plane extent (x, z) and subdivisions per side.
pub const GROUND_SIZE: Vec2 = Vec2::new(32.0, 32.0);
const GROUND_SUBDIVISIONS: (u32, u32) = (3, 3);

/// Edge length of the third-person player cube.
pub const PLAYER_SIZE: f32 = 0.5;

/// Light marker sphere.
const LIGHT_MARKER_RADIUS: f32 = 0.2;
const LIGHT_MARKER_RINGS: u32 = 8;
const LIGHT_MARKER_SLICES: u32 = 8;
const LIGHT_OFF_ALPHA: f32 = 0.3;

/// An unlit axis-aligned box bounding the play area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wall {
    /// Box center.
    pub center: Vec3,
    /// Full extent on each axis.
    pub size: Vec3,
    /// Fill color.
    pub color: Color,
}

/// Left (blue), right (lime) and back (gold) walls.
pub const WALLS: [Wall; 3] = [
    Wall {
        center: Vec3::new(-16.0, 2.5, 0.0),
        size: Vec3::new(1.0, 5.0, 32.0),
        color: palette::BLUE,
    },
    Wall {
        center: Vec3::new(16.0, 2.5, 0.0),
        size: Vec3::new(1.0, 5.0, 32.0),
        color: palette::LIME,
    },
    Wall {
        center: Vec3::new(0.0, 2.5, 16.0),
        size: Vec3::new(32.0, 5.0, 1.0),
        color: palette::GOLD,
    },
];

/// The static world. Columns are generated once and never change.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    columns: Vec<Column>,
}

impl Scene {
    /// Generate the column field from the scene options. Without a
    /// configured seed one is drawn at random and logged so a layout can be
    /// reproduced.
    #[must_use]
    pub fn new(options: &SceneOptions) -> Self {
        let seed = options.seed.unwrap_or_else(rand::random);
        log::info!("scene seed {seed}, {} columns", options.columns);
        let mut rng = StdRng::seed_from_u64(seed);
        Self::with_columns(generate_columns(&mut rng, options.columns))
    }

    /// Scene with explicit columns.
    #[must_use]
    pub fn with_columns(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// The generated columns.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Geometry that never changes: lit ground, walls, and columns with
    /// maroon outlines.
    #[must_use]
    pub fn static_mesh(&self) -> SceneMesh {
        let mut mesh = SceneMesh::new();
        mesh.plane(
            Vec3::ZERO,
            GROUND_SIZE,
            GROUND_SUBDIVISIONS,
            palette::LIGHTGRAY,
            true,
        );
        for wall in &WALLS {
            mesh.cube(wall.center, wall.size, wall.color);
        }
        for column in &self.columns {
            let size = Vec3::new(COLUMN_WIDTH, column.height, COLUMN_WIDTH);
            mesh.cube(column.position, size, column.color);
            mesh.cube_wires(column.position, size, palette::MAROON);
        }
        mesh
    }
}

/// Rebuild the per-frame markers into `mesh`: the player cube at `player`
/// (third person only) and the light sphere, solid when the light is on and
/// a faded wireframe when it is off.
pub fn build_marker_mesh(
    mesh: &mut SceneMesh,
    player: Option<Vec3>,
    light: &PointLight,
) {
    mesh.clear();
    if let Some(target) = player {
        let size = Vec3::splat(PLAYER_SIZE);
        mesh.cube(target, size, palette::PURPLE);
        mesh.cube_wires(target, size, palette::DARKPURPLE);
    }
    if light.enabled {
        mesh.sphere(
            light.position,
            LIGHT_MARKER_RADIUS,
            LIGHT_MARKER_RINGS,
            LIGHT_MARKER_SLICES,
            light.color,
        );
    } else {
        mesh.sphere_wires(
            light.position,
            LIGHT_MARKER_RADIUS,
            LIGHT_MARKER_RINGS,
            LIGHT_MARKER_SLICES,
            light.color.fade(LIGHT_OFF_ALPHA),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> Scene {
        Scene::new(&SceneOptions {
            seed: Some(seed),
            ..SceneOptions::default()
        })
    }

    #[test]
    fn default_scene_has_max_columns() {
        assert_eq!(seeded(3).columns().len(), MAX_COLUMNS);
        assert_eq!(seeded(3), seeded(3));
    }

    #[test]
    fn static_mesh_contents() {
        let scene = seeded(11);
        let mesh = scene.static_mesh();
        let cubes = WALLS.len() + MAX_COLUMNS;
        assert_eq!(mesh.triangles.len(), 9 * 6 + cubes * 36);
        assert_eq!(mesh.lines.len(), MAX_COLUMNS * 24);
        // Only the ground is lit.
        let lit = mesh.triangles.iter().filter(|v| v.lit > 0.0).count();
        assert_eq!(lit, 9 * 6);
    }

    #[test]
    fn markers_follow_mode_and_light() {
        let mut mesh = SceneMesh::new();
        let mut light = PointLight::default();

        build_marker_mesh(&mut mesh, Some(Vec3::new(0.0, 2.0, 0.0)), &light);
        assert_eq!(mesh.triangles.len(), 36 + 10 * 8 * 6);
        assert_eq!(mesh.lines.len(), 24);

        light.enabled = false;
        build_marker_mesh(&mut mesh, None, &light);
        assert!(mesh.triangles.is_empty());
        assert_eq!(mesh.lines.len(), 10 * 8 * 4);
        let alpha = mesh.lines[0].color[3];
        assert!((alpha - 76.0 / 255.0).abs() < 1e-6);
    }
}
