//! Per-frame blending and animation pass.
//!
//! One [`step`](BlendEngine::step) per rendered frame. For every particle
//! slot the engine blends the scaled target position toward the dispersal
//! field position with a smoothstep-eased weight, layers on deterministic
//! ambient noise, then moves the live position a fixed fraction of the
//! remaining distance toward that destination. The fractional move is what
//! turns a model switch into a gradual morph instead of a jump cut.
//!
//! The engine also accumulates a slow whole-cloud yaw for visual depth.
//! That rotation is a transform for the renderer to apply; stored positions
//! are never rotated.

use crate::buffer::ParticleBuffer;
use crate::dispersal::DispersalField;
use glam::Vec3;

/// Ambient noise fades by this much as dispersion saturates.
const NOISE_DAMPING: f32 = 0.8;
/// Noise runs at twice wall-clock speed.
const NOISE_TIME_RATE: f32 = 2.0;
/// Per-axis index phase offsets, chosen to decorrelate the axes.
const NOISE_PHASES: Vec3 = Vec3::new(0.1, 0.2, 0.3);

/// The per-frame position integrator.
#[derive(Clone, Debug)]
pub struct BlendEngine {
    ease: f32,
    noise_scale: f32,
    rotation_speed: f32,
    rotation_y: f32,
}

impl BlendEngine {
    /// Create an engine with the given per-frame ease fraction, ambient
    /// noise magnitude, and per-frame yaw increment.
    pub fn new(ease: f32, noise_scale: f32, rotation_speed: f32) -> Self {
        Self {
            ease,
            noise_scale,
            rotation_speed,
            rotation_y: 0.0,
        }
    }

    /// Advance the buffer by one frame.
    ///
    /// `scale` and `dispersion` are the smoothed interaction outputs;
    /// `elapsed` is wall-clock seconds driving the ambient noise. Mutates
    /// `buffer` in place and flags it dirty.
    pub fn step(
        &mut self,
        buffer: &mut ParticleBuffer,
        field: &DispersalField,
        scale: f32,
        dispersion: f32,
        elapsed: f32,
    ) {
        let t = smoothstep(dispersion);
        let wobble = self.noise_scale * (1.0 - dispersion * NOISE_DAMPING);
        let phase = elapsed * NOISE_TIME_RATE;

        for ((i, current), (target, scatter)) in buffer
            .current
            .iter_mut()
            .enumerate()
            .zip(buffer.target.iter().zip(field.points()))
        {
            let model = *target * scale;
            let blended = model + (*scatter - model) * t;

            let offsets = NOISE_PHASES * i as f32;
            let noise = Vec3::new(
                (phase + offsets.x).sin(),
                (phase + offsets.y).cos(),
                (phase + offsets.z).sin(),
            ) * wobble;

            let dest = blended + noise;
            *current += (dest - *current) * self.ease;
        }

        buffer.mark_dirty();
        self.rotation_y += self.rotation_speed;
    }

    /// Accumulated whole-cloud yaw in radians, for the renderer's model
    /// transform.
    #[inline]
    pub fn rotation_y(&self) -> f32 {
        self.rotation_y
    }
}

/// C1-continuous cubic ease `d^2 (3 - 2d)`, avoiding the abrupt endpoints
/// of a linear cross-fade.
#[inline]
pub fn smoothstep(d: f32) -> f32 {
    d * d * (3.0 - 2.0 * d)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::ShapeModel;

    fn fixed_field(points: Vec<Vec3>) -> DispersalField {
        DispersalField::from_points(points)
    }

    #[test]
    fn test_smoothstep_boundaries() {
        assert_eq!(smoothstep(0.0), 0.0);
        assert_eq!(smoothstep(1.0), 1.0);
        assert_eq!(smoothstep(0.5), 0.5);
        // Eases in and out: below linear before the midpoint
        assert!(smoothstep(0.25) < 0.25);
        assert!(smoothstep(0.75) > 0.75);
    }

    #[test]
    fn test_degenerate_clouds_are_a_fixed_point() {
        // current == target == dispersal, unit scale, zero noise: nothing
        // may move, whatever the dispersion
        let p = Vec3::new(1.0, 2.0, 3.0);
        let mut buffer = ParticleBuffer::new(vec![p; 8], vec![p; 8], ShapeModel::Tree);
        let field = fixed_field(vec![p; 8]);
        let mut engine = BlendEngine::new(0.08, 0.0, 0.0);

        for frame in 0..10 {
            engine.step(&mut buffer, &field, 1.0, 0.37, frame as f32 / 60.0);
        }
        for pos in buffer.positions() {
            assert_eq!(*pos, p);
        }
    }

    #[test]
    fn test_zero_dispersion_converges_to_scaled_model() {
        let target = Vec3::new(4.0, 0.0, -2.0);
        let mut buffer =
            ParticleBuffer::new(vec![Vec3::ZERO; 4], vec![target; 4], ShapeModel::Bell);
        let field = fixed_field(vec![Vec3::splat(50.0); 4]);
        let mut engine = BlendEngine::new(0.08, 0.0, 0.0);

        for _ in 0..500 {
            engine.step(&mut buffer, &field, 1.5, 0.0, 0.0);
        }
        for pos in buffer.positions() {
            assert!((*pos - target * 1.5).length() < 1e-2, "pos {:?}", pos);
        }
    }

    #[test]
    fn test_full_dispersion_converges_to_scatter() {
        let scatter = Vec3::new(-30.0, 60.0, 10.0);
        let mut buffer = ParticleBuffer::new(
            vec![Vec3::ZERO; 4],
            vec![Vec3::splat(5.0); 4],
            ShapeModel::Sock,
        );
        let field = fixed_field(vec![scatter; 4]);
        let mut engine = BlendEngine::new(0.08, 0.0, 0.0);

        for _ in 0..500 {
            engine.step(&mut buffer, &field, 1.0, 1.0, 0.0);
        }
        for pos in buffer.positions() {
            assert!((*pos - scatter).length() < 1e-2, "pos {:?}", pos);
        }
    }

    #[test]
    fn test_step_marks_buffer_dirty() {
        let mut buffer =
            ParticleBuffer::new(vec![Vec3::ZERO; 2], vec![Vec3::ONE; 2], ShapeModel::Tree);
        let field = fixed_field(vec![Vec3::ONE; 2]);
        let mut engine = BlendEngine::new(0.08, 0.15, 0.002);

        assert!(buffer.take_dirty());
        engine.step(&mut buffer, &field, 1.0, 0.0, 0.0);
        assert!(buffer.take_dirty());
    }

    #[test]
    fn test_rotation_accumulates_per_frame() {
        let mut buffer =
            ParticleBuffer::new(vec![Vec3::ZERO; 1], vec![Vec3::ZERO; 1], ShapeModel::Tree);
        let field = fixed_field(vec![Vec3::ZERO; 1]);
        let mut engine = BlendEngine::new(0.08, 0.0, 0.002);

        for _ in 0..100 {
            engine.step(&mut buffer, &field, 1.0, 0.0, 0.0);
        }
        assert!((engine.rotation_y() - 0.2).abs() < 1e-5);
    }
}
