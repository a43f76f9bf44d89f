//! Procedural target-shape generators.
//!
//! Each [`ShapeModel`] variant maps to one generator: a pure function from a
//! particle count to a point cloud. Generators are deterministic in structure
//! but stochastic in exact sample positions - every particle draws its own
//! uniform random values, so two calls with the same count produce two
//! different (but statistically identical) clouds. Pass a seeded RNG for
//! reproducible output.
//!
//! Most shapes partition the particle budget across body parts by drawing
//! against fixed probability thresholds, then sample each part with one of
//! three techniques:
//!
//! - sphere volume/surface sampling via inverse-CDF polar angle
//! - layered silhouettes (height band + radius as a function of height)
//! - path tubes (random point on a precomputed centerline + cross-section
//!   offset)
//!
//! The snowflake is the odd one out: it samples a recursive fractal skeleton,
//! see [`crate::fractal`].

use crate::fractal;
use glam::Vec3;
use rand::Rng;
use std::f32::consts::{FRAC_PI_2, PI, TAU};

/// Selectable target shapes.
///
/// Adding a variant means adding a generator here; the blend engine never
/// looks at the model, only at the cloud it produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeModel {
    /// Layered cone tree with a cylindrical trunk.
    Tree,
    /// Six-armed fractal crystal with fuzzy 3-D thickness.
    Snowflake,
    /// Body, head, beard, hat and limbs as a weighted mixture.
    Santa,
    /// Bell silhouette with clapper and top handle.
    Bell,
    /// Stocking sampled as a tube along a J-shaped centerline.
    Sock,
}

impl ShapeModel {
    /// All selectable models, in menu order.
    pub const ALL: [ShapeModel; 5] = [
        ShapeModel::Tree,
        ShapeModel::Snowflake,
        ShapeModel::Santa,
        ShapeModel::Bell,
        ShapeModel::Sock,
    ];

    /// Look up a model by its wire name. Returns `None` for unknown names.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "tree" => Some(ShapeModel::Tree),
            "snowflake" => Some(ShapeModel::Snowflake),
            "santa" => Some(ShapeModel::Santa),
            "bell" => Some(ShapeModel::Bell),
            "sock" => Some(ShapeModel::Sock),
            _ => None,
        }
    }

    /// The wire name used by the model-selection interface.
    pub fn name(self) -> &'static str {
        match self {
            ShapeModel::Tree => "tree",
            ShapeModel::Snowflake => "snowflake",
            ShapeModel::Santa => "santa",
            ShapeModel::Bell => "bell",
            ShapeModel::Sock => "sock",
        }
    }

    /// Generate a target cloud of exactly `count` points for this model.
    ///
    /// `count = 0` yields an empty cloud. The returned cloud is never
    /// touched again by the library; callers own it outright.
    pub fn generate(self, count: usize, rng: &mut impl Rng) -> Vec<Vec3> {
        match self {
            ShapeModel::Tree => tree(count, rng),
            ShapeModel::Snowflake => fractal::snowflake(count, rng),
            ShapeModel::Santa => santa(count, rng),
            ShapeModel::Bell => bell(count, rng),
            ShapeModel::Sock => sock(count, rng),
        }
    }
}

impl std::fmt::Display for ShapeModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Layered cone tree: 15% trunk, the rest spread over 4 stacked crown layers.
///
/// Crown radius tapers linearly to zero across each layer's height band, and
/// upper layers start narrower, giving the classic stepped-conifer outline.
fn tree(count: usize, rng: &mut impl Rng) -> Vec<Vec3> {
    const LAYERS: u32 = 4;
    const BAND_HEIGHT: f32 = 6.0;

    let trunk_count = (count as f32 * 0.15) as usize;
    let mut points = Vec::with_capacity(count);

    for i in 0..count {
        if i < trunk_count {
            // Trunk: cylinder below the crown
            let h = rng.gen::<f32>() * 8.0;
            let r = rng.gen::<f32>() * 2.0;
            let angle = rng.gen_range(0.0..TAU);
            points.push(Vec3::new(angle.cos() * r, h - 14.0, angle.sin() * r));
        } else {
            let layer = rng.gen_range(0..LAYERS) as f32;
            let y_base = -6.0 + layer * 4.0;
            let y_rel = rng.gen::<f32>() * BAND_HEIGHT;

            let max_r = 9.0 - layer * 1.5;
            let r = (1.0 - y_rel / BAND_HEIGHT) * max_r;

            let angle = rng.gen_range(0.0..TAU);
            points.push(Vec3::new(angle.cos() * r, y_base + y_rel, angle.sin() * r));
        }
    }

    points
}

/// Santa: weighted mixture of body parts selected per particle.
///
/// Budget split 35% body / 20% head / 15% beard / 15% hat / 15% limbs.
fn santa(count: usize, rng: &mut impl Rng) -> Vec<Vec3> {
    let mut points = Vec::with_capacity(count);

    for _ in 0..count {
        let part = rng.gen::<f32>();

        let point = if part < 0.35 {
            // Belly: sphere squashed on Y, lower half stretched
            let dir = sphere_direction(rng);
            let rad = 6.0;
            let mut y = rad * 0.8 * dir.y - 5.0;
            if y < -5.0 {
                y *= 1.1;
            }
            Vec3::new(rad * dir.x, y, rad * dir.z)
        } else if part < 0.55 {
            // Head
            let dir = sphere_direction(rng);
            let rad = 3.0;
            Vec3::new(rad * dir.x, rad * dir.y + 3.0, rad * dir.z)
        } else if part < 0.7 {
            // Beard: inverted cone on the front of the face
            let theta = (rng.gen::<f32>() - 0.5) * PI;
            let h = rng.gen::<f32>() * 4.0;
            let w = (1.0 - h / 4.0) * 3.0;
            Vec3::new(theta.sin() * w, 2.0 - h, theta.cos() * w + 1.5)
        } else if part < 0.85 {
            // Hat: cone above the head, tip bent backward, pompom at the top
            let h = rng.gen::<f32>() * 6.0;
            let rad = (1.0 - h / 6.0) * 3.2;
            let angle = rng.gen_range(0.0..TAU);
            let mut p = Vec3::new(angle.cos() * rad, h + 5.5, angle.sin() * rad - h * 0.5);
            if h > 5.5 {
                p += Vec3::new(
                    rng.gen::<f32>() - 0.5,
                    rng.gen::<f32>() - 0.5,
                    rng.gen::<f32>() - 0.5,
                );
            }
            p
        } else if rng.gen::<f32>() > 0.5 {
            // Arms, spread wide
            let arm_len = rng.gen::<f32>() * 5.0;
            let side = if rng.gen::<f32>() > 0.5 { 1.0 } else { -1.0 };
            Vec3::new(
                side * (5.0 + arm_len),
                (rng.gen::<f32>() - 0.5) * 2.0,
                (rng.gen::<f32>() - 0.5) * 2.0,
            )
        } else {
            // Boots
            let side = if rng.gen::<f32>() > 0.5 { 1.0 } else { -1.0 };
            Vec3::new(
                side * 2.5 + (rng.gen::<f32>() - 0.5) * 1.5,
                -10.0 - rng.gen::<f32>() * 3.0,
                (rng.gen::<f32>() - 0.5) * 2.0,
            )
        };

        points.push(point);
    }

    points
}

/// Bell: 80% bell-curve surface, 10% clapper, 10% half-ring handle.
fn bell(count: usize, rng: &mut impl Rng) -> Vec<Vec3> {
    let mut points = Vec::with_capacity(count);

    for _ in 0..count {
        let part = rng.gen::<f32>();

        let point = if part < 0.8 {
            // Bell body: wide at the mouth, narrowing toward the crown
            let angle = rng.gen_range(0.0..TAU);
            let h = rng.gen::<f32>() * 10.0;
            let norm_h = 1.0 - h / 10.0;
            let radius = 6.0 * (0.3 + 0.7 * norm_h.powf(1.5));
            Vec3::new(angle.cos() * radius, h - 5.0, angle.sin() * radius)
        } else if part < 0.9 {
            // Clapper: small sphere at the mouth
            let dir = sphere_direction(rng);
            let rad = 1.5;
            Vec3::new(rad * dir.x, rad * dir.y - 5.0, rad * dir.z)
        } else {
            // Handle: upper half of a thin ring in the XY plane
            let angle = rng.gen::<f32>() * PI;
            let ring_r = 1.5;
            Vec3::new(
                angle.cos() * ring_r,
                angle.sin() * ring_r + 5.0,
                (rng.gen::<f32>() - 0.5) * 0.5,
            )
        };

        points.push(point);
    }

    points
}

/// Number of centerline samples for the sock tube.
const SOCK_PATH_STEPS: usize = 50;

/// Sock: tube sampled around a J-shaped centerline.
///
/// The centerline is a straight vertical run for the leg followed by a
/// quarter-circle bend into the foot, precomputed once per call.
fn sock(count: usize, rng: &mut impl Rng) -> Vec<Vec3> {
    let path: Vec<(f32, f32)> = (0..=SOCK_PATH_STEPS)
        .map(|i| {
            let t = i as f32 / SOCK_PATH_STEPS as f32;
            if t < 0.6 {
                (0.0, 8.0 - (t / 0.6) * 12.0)
            } else {
                let a = (t - 0.6) / 0.4 * FRAC_PI_2;
                (a.sin() * 6.0, -4.0 - (1.0 - a.cos()) * 2.0)
            }
        })
        .collect();

    let mut points = Vec::with_capacity(count);

    for _ in 0..count {
        let (cx, cy) = path[rng.gen_range(0..path.len())];

        // Cross-section disk; not strictly perpendicular to the path, the
        // tube is fat enough that the shear is invisible
        let angle = rng.gen_range(0.0..TAU);
        let r = rng.gen::<f32>() * 3.5;

        points.push(Vec3::new(
            cx + angle.cos() * r,
            cy,
            cx * 0.2 + angle.sin() * r,
        ));
    }

    points
}

/// Uniform random direction on the unit sphere via inverse-CDF polar angle.
pub(crate) fn sphere_direction(rng: &mut impl Rng) -> Vec3 {
    let theta = rng.gen_range(0.0..TAU);
    let phi = (2.0 * rng.gen::<f32>() - 1.0).acos();
    Vec3::new(
        phi.sin() * theta.cos(),
        phi.sin() * theta.sin(),
        phi.cos(),
    )
}
