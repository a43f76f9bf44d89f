//! Swarm configuration.
//!
//! All tuning constants live here as named defaults. The blend and
//! smoothing factors are visually tuned values carried over from the
//! interactive installation this engine drives; they have no analytical
//! derivation.

use crate::shapes::ShapeModel;

/// Configuration for a [`Swarm`](crate::Swarm).
///
/// Chain `with_*` calls off [`SwarmConfig::default`], then pass to
/// [`Swarm::new`](crate::Swarm::new):
///
/// ```
/// use swarmorph::{Swarm, SwarmConfig};
///
/// let swarm = Swarm::new(
///     SwarmConfig::default()
///         .with_particle_count(5_000)
///         .with_seed(42),
/// )
/// .unwrap();
/// assert_eq!(swarm.positions().len(), 5_000);
/// ```
#[derive(Clone, Debug)]
pub struct SwarmConfig {
    /// Number of particle slots, fixed for the session. Must be nonzero.
    pub particle_count: usize,
    /// Shape the swarm boots into.
    pub initial_model: ShapeModel,
    /// Exponential smoothing factor for scale and dispersion, per frame.
    pub smoothing: f32,
    /// Fraction of the remaining distance each particle covers per frame.
    pub ease: f32,
    /// Dispersion target while no signal is present; keeps the swarm from
    /// looking frozen.
    pub idle_dispersion: f32,
    /// Base magnitude of the ambient per-particle noise.
    pub noise_scale: f32,
    /// Fingertip/palm ratio treated as a fully closed hand.
    pub closed_ratio: f32,
    /// Fingertip/palm ratio treated as a fully open hand.
    pub open_ratio: f32,
    /// Whole-cloud yaw increment per frame, in radians.
    pub rotation_speed: f32,
    /// Seed for all stochastic sampling; `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Fixed frame duration in seconds for deterministic stepping; `None`
    /// uses wall-clock time.
    pub fixed_step: Option<f32>,
}

impl Default for SwarmConfig {
    fn default() -> Self {
        Self {
            particle_count: 15_000,
            initial_model: ShapeModel::Tree,
            smoothing: 0.08,
            ease: 0.08,
            idle_dispersion: 0.05,
            noise_scale: 0.15,
            closed_ratio: 1.0,
            open_ratio: 2.2,
            rotation_speed: 0.002,
            seed: None,
            fixed_step: None,
        }
    }
}

impl SwarmConfig {
    /// Set the number of particle slots.
    pub fn with_particle_count(mut self, count: usize) -> Self {
        self.particle_count = count;
        self
    }

    /// Set the shape the swarm boots into.
    pub fn with_initial_model(mut self, model: ShapeModel) -> Self {
        self.initial_model = model;
        self
    }

    /// Set the exponential smoothing factor.
    pub fn with_smoothing(mut self, alpha: f32) -> Self {
        self.smoothing = alpha;
        self
    }

    /// Set the per-frame position ease fraction.
    pub fn with_ease(mut self, ease: f32) -> Self {
        self.ease = ease;
        self
    }

    /// Set the idle dispersion constant.
    pub fn with_idle_dispersion(mut self, idle: f32) -> Self {
        self.idle_dispersion = idle;
        self
    }

    /// Set the ambient noise magnitude.
    pub fn with_noise_scale(mut self, scale: f32) -> Self {
        self.noise_scale = scale;
        self
    }

    /// Set the closed/open fingertip ratio bounds for the openness remap.
    pub fn with_openness_ratios(mut self, closed: f32, open: f32) -> Self {
        self.closed_ratio = closed;
        self.open_ratio = open;
        self
    }

    /// Set the whole-cloud rotation speed.
    pub fn with_rotation_speed(mut self, speed: f32) -> Self {
        self.rotation_speed = speed;
        self
    }

    /// Seed all stochastic sampling for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Step with a fixed frame duration instead of wall-clock time.
    pub fn with_fixed_step(mut self, step: f32) -> Self {
        self.fixed_step = Some(step);
        self
    }
}
