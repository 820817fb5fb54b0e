use glam::Vec3;
use rand::Rng;

use super::palette::Color;

/// One randomly placed column: a 2 x height x 2 box resting on the ground.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Column {
    /// Height in world units (whole number, 1-12).
    pub height: f32,
    /// Center of the box; `y` is half the height.
    pub position: Vec3,
    /// Fill color.
    pub color: Color,
}

/// Footprint of every column.
pub const COLUMN_WIDTH: f32 = 2.0;

/// Generate `count` columns with integer heights in `[1, 12]`, integer x/z
/// in `[-15, 15]`, and reddish colors.
pub fn generate_columns<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Column> {
    (0..count)
        .map(|_| {
            let height = rng.random_range(1..=12) as f32;
            let x = rng.random_range(-15..=15) as f32;
            let z = rng.random_range(-15..=15) as f32;
            let color = Color::rgb(
                rng.random_range(20..=255),
                rng.random_range(10..=55),
                30,
            );
            Column {
                height,
                position: Vec3::new(x, height / 2.0, z),
                color,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn columns_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let columns = generate_columns(&mut rng, 500);
        assert_eq!(columns.len(), 500);
        for column in &columns {
            assert!((1.0..=12.0).contains(&column.height));
            assert_eq!(column.height.fract(), 0.0);
            assert_eq!(column.position.y, column.height / 2.0);
            assert!((-15.0..=15.0).contains(&column.position.x));
            assert!((-15.0..=15.0).contains(&column.position.z));
            assert_eq!(column.position.x.fract(), 0.0);
            assert!(column.color.r >= 20);
            assert!((10..=55).contains(&column.color.g));
            assert_eq!(column.color.b, 30);
            assert_eq!(column.color.a, 255);
        }
    }

    #[test]
    fn same_seed_same_columns() {
        let a = generate_columns(&mut StdRng::seed_from_u64(7), 20);
        let b = generate_columns(&mut StdRng::seed_from_u64(7), 20);
        assert_eq!(a, b);
    }

    #[test]
    fn zero_columns_is_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(generate_columns(&mut rng, 0).is_empty());
    }
}
