//! The swarm session context.
//!
//! A [`Swarm`] owns everything with per-session lifetime: the particle
//! buffer, the dispersal field, the interaction smoother, the blend engine,
//! the frame clock and the RNG behind all stochastic sampling. The host's
//! frame loop calls [`advance`](Swarm::advance) once per display refresh;
//! the detection pipeline publishes into the handle returned by
//! [`signal`](Swarm::signal); the renderer reads
//! [`positions_flat`](Swarm::positions_flat) whenever
//! [`take_dirty`](Swarm::take_dirty) says an upload is due.

use crate::buffer::ParticleBuffer;
use crate::config::SwarmConfig;
use crate::dispersal::DispersalField;
use crate::engine::BlendEngine;
use crate::error::SwarmError;
use crate::interaction::{HandReading, InteractionSmoother, SignalCell};
use crate::shapes::ShapeModel;
use crate::time::FrameClock;
use glam::Vec3;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Initial scatter spans: the live buffer boots as a loose random cloud
/// filling the view, wider in X/Y than in Z.
const SCATTER_SPAN_XY: f32 = 100.0;
const SCATTER_SPAN_Z: f32 = 50.0;

/// A running particle swarm session.
#[derive(Debug)]
pub struct Swarm {
    config: SwarmConfig,
    buffer: ParticleBuffer,
    dispersal: DispersalField,
    smoother: InteractionSmoother,
    engine: BlendEngine,
    clock: FrameClock,
    signal: SignalCell,
    rng: SmallRng,
}

impl Swarm {
    /// Build a session from a configuration.
    ///
    /// Generates the dispersal field, the initial random scatter and the
    /// initial model's target cloud. Fails fast on a zero particle count;
    /// nothing else about construction can fail.
    pub fn new(config: SwarmConfig) -> Result<Self, SwarmError> {
        if config.particle_count == 0 {
            return Err(SwarmError::InvalidParticleCount);
        }

        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };

        let count = config.particle_count;
        let dispersal = DispersalField::build(count, &mut rng);

        let initial: Vec<Vec3> = (0..count)
            .map(|_| {
                Vec3::new(
                    (rng.gen::<f32>() - 0.5) * SCATTER_SPAN_XY,
                    (rng.gen::<f32>() - 0.5) * SCATTER_SPAN_XY,
                    (rng.gen::<f32>() - 0.5) * SCATTER_SPAN_Z,
                )
            })
            .collect();

        let target = config.initial_model.generate(count, &mut rng);
        let buffer = ParticleBuffer::new(initial, target, config.initial_model);

        let clock = match config.fixed_step {
            Some(step) => FrameClock::with_fixed_step(step),
            None => FrameClock::new(),
        };

        Ok(Self {
            smoother: InteractionSmoother::new(config.smoothing, config.idle_dispersion),
            engine: BlendEngine::new(config.ease, config.noise_scale, config.rotation_speed),
            dispersal,
            buffer,
            clock,
            signal: SignalCell::new(),
            rng,
            config,
        })
    }

    /// A cloneable handle for the detection pipeline to publish into.
    pub fn signal(&self) -> SignalCell {
        self.signal.clone()
    }

    /// Switch the morph target by model name.
    ///
    /// Unknown names leave the active target and the animation completely
    /// untouched. On success the swarm starts morphing toward the new
    /// shape over the following frames; live positions are never reset.
    pub fn select_model(&mut self, name: &str) -> Result<(), SwarmError> {
        let model = ShapeModel::from_name(name)
            .ok_or_else(|| SwarmError::UnknownModel(name.to_string()))?;
        self.set_model(model);
        Ok(())
    }

    /// Switch the morph target to a model. Always resamples, so selecting
    /// the active model re-rolls its stochastic cloud.
    pub fn set_model(&mut self, model: ShapeModel) {
        let cloud = model.generate(self.config.particle_count, &mut self.rng);
        self.buffer.set_target(model, cloud);
    }

    /// Re-roll the active model's target cloud.
    pub fn regenerate_target(&mut self) {
        self.set_model(self.buffer.active_model());
    }

    /// Advance one frame, sampling the signal cell for the latest detector
    /// report.
    pub fn advance(&mut self) {
        let reading = self.signal.latest();
        self.advance_with(reading);
    }

    /// Advance one frame with an explicit detector report instead of
    /// sampling the signal cell. `None` means "no hand this frame".
    pub fn advance_with(&mut self, reading: Option<HandReading>) {
        match reading {
            Some(r) => {
                match r.openness(self.config.closed_ratio, self.config.open_ratio) {
                    Some(openness) => self.smoother.update(Some(openness)),
                    // Degenerate palm reference: skip this frame's openness
                    // update and keep the previous smoothed values
                    None => {}
                }
            }
            None => self.smoother.update(None),
        }
        self.step_engine();
    }

    /// Advance one frame with a pre-reduced openness value. Handy for
    /// tests and for hosts whose detector already yields a scalar.
    pub fn advance_with_openness(&mut self, openness: Option<f32>) {
        self.smoother.update(openness);
        self.step_engine();
    }

    fn step_engine(&mut self) {
        let (elapsed, _) = self.clock.update();
        self.engine.step(
            &mut self.buffer,
            &self.dispersal,
            self.smoother.scale(),
            self.smoother.dispersion(),
            elapsed,
        );
    }

    /// Live positions, indexed by particle slot.
    #[inline]
    pub fn positions(&self) -> &[Vec3] {
        self.buffer.positions()
    }

    /// Live positions as a flat float stream of length `3 * count`, for
    /// renderer upload.
    #[inline]
    pub fn positions_flat(&self) -> &[f32] {
        self.buffer.positions_flat()
    }

    /// Consume the buffer's dirty flag; `true` means the renderer should
    /// re-upload.
    pub fn take_dirty(&mut self) -> bool {
        self.buffer.take_dirty()
    }

    /// The model the swarm is currently morphing toward.
    #[inline]
    pub fn active_model(&self) -> ShapeModel {
        self.buffer.active_model()
    }

    /// The live buffer and its target, for hosts that need both.
    #[inline]
    pub fn buffer(&self) -> &ParticleBuffer {
        &self.buffer
    }

    /// The fixed dispersal field.
    #[inline]
    pub fn dispersal(&self) -> &DispersalField {
        &self.dispersal
    }

    /// Smoothed uniform scale applied to the target shape.
    #[inline]
    pub fn smoothed_scale(&self) -> f32 {
        self.smoother.scale()
    }

    /// Smoothed blend weight toward the dispersal field.
    #[inline]
    pub fn smoothed_dispersion(&self) -> f32 {
        self.smoother.dispersion()
    }

    /// Whether the last frame saw a detector signal.
    #[inline]
    pub fn signal_present(&self) -> bool {
        self.smoother.signal_present()
    }

    /// Accumulated whole-cloud yaw for the renderer's model transform.
    #[inline]
    pub fn rotation_y(&self) -> f32 {
        self.engine.rotation_y()
    }

    /// Frames advanced so far.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.clock.frame()
    }

    /// The configuration the session was built with.
    #[inline]
    pub fn config(&self) -> &SwarmConfig {
        &self.config
    }
}
