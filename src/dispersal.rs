//! Fixed large-volume scatter used as the fully-expanded blend extreme.
//!
//! Built once at startup and never regenerated. Radii are drawn from an
//! outer shell rather than near the origin, so the cloud stays evenly
//! spread when every particle blends toward it at once instead of clumping
//! at the center.

use crate::shapes::sphere_direction;
use glam::Vec3;
use rand::Rng;

/// Inner radius of the scatter shell.
const SHELL_INNER: f32 = 40.0;
/// Outer radius of the scatter shell.
const SHELL_OUTER: f32 = 100.0;

/// A fixed reference scatter, one position per particle slot.
#[derive(Clone, Debug)]
pub struct DispersalField {
    points: Vec<Vec3>,
}

impl DispersalField {
    /// Build the field for `count` particle slots. Called once per session.
    pub fn build(count: usize, rng: &mut impl Rng) -> Self {
        let points = (0..count)
            .map(|_| {
                let dir = sphere_direction(rng);
                let r = SHELL_INNER + rng.gen::<f32>() * (SHELL_OUTER - SHELL_INNER);
                dir * r
            })
            .collect();
        Self { points }
    }

    /// Build a field from explicit positions; lets tests pin exact scatter
    /// targets.
    #[cfg(test)]
    pub(crate) fn from_points(points: Vec<Vec3>) -> Self {
        Self { points }
    }

    /// All scatter positions, indexed by particle slot.
    #[inline]
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Number of particle slots covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the field is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_build_returns_exact_count() {
        let mut rng = SmallRng::seed_from_u64(1);
        assert_eq!(DispersalField::build(0, &mut rng).len(), 0);
        assert_eq!(DispersalField::build(1234, &mut rng).len(), 1234);
    }

    #[test]
    fn test_points_stay_inside_shell() {
        let mut rng = SmallRng::seed_from_u64(2);
        let field = DispersalField::build(5_000, &mut rng);
        for p in field.points() {
            let r = p.length();
            assert!(
                (SHELL_INNER - 1e-3..=SHELL_OUTER + 1e-3).contains(&r),
                "radius {} outside shell",
                r
            );
        }
    }
}
