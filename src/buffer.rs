//! The live particle position buffer.
//!
//! Owns the only cloud the renderer ever reads (`current`), the cloud the
//! swarm is morphing toward (`target`), and the active model selection.
//! `current` is created once and mutated in place every frame; `target` is
//! replaced wholesale on model switch. Both always have the same fixed
//! length, and particles match by index only.

use crate::shapes::ShapeModel;
use glam::Vec3;

/// Live positions plus the active morph target.
#[derive(Clone, Debug)]
pub struct ParticleBuffer {
    /// Live positions, mutated in place by the blend engine.
    pub(crate) current: Vec<Vec3>,
    /// Positions the swarm is morphing toward, read-only between switches.
    pub(crate) target: Vec<Vec3>,
    active_model: ShapeModel,
    dirty: bool,
}

impl ParticleBuffer {
    /// Create a buffer from an initial scatter and a first target cloud.
    ///
    /// Starts dirty so the renderer uploads the initial state.
    pub(crate) fn new(current: Vec<Vec3>, target: Vec<Vec3>, model: ShapeModel) -> Self {
        debug_assert_eq!(current.len(), target.len());
        Self {
            current,
            target,
            active_model: model,
            dirty: true,
        }
    }

    /// Number of particle slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.current.len()
    }

    /// Whether the buffer holds no particles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    /// Live positions, indexed by particle slot.
    #[inline]
    pub fn positions(&self) -> &[Vec3] {
        &self.current
    }

    /// Live positions as the flat `[x0, y0, z0, x1, ...]` stream a renderer
    /// uploads; length is `3 * len()`.
    #[inline]
    pub fn positions_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.current)
    }

    /// The cloud the swarm is currently morphing toward.
    #[inline]
    pub fn target(&self) -> &[Vec3] {
        &self.target
    }

    /// The model the current target was generated from.
    #[inline]
    pub fn active_model(&self) -> ShapeModel {
        self.active_model
    }

    /// Replace the target wholesale. `current` is untouched, so particle
    /// trajectories stay continuous across the switch.
    pub(crate) fn set_target(&mut self, model: ShapeModel, cloud: Vec<Vec3>) {
        debug_assert_eq!(cloud.len(), self.current.len());
        self.target = cloud;
        self.active_model = model;
    }

    /// Flag the buffer for re-upload after a mutation pass.
    #[inline]
    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Whether the buffer changed since the last [`take_dirty`](Self::take_dirty).
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Consume the dirty flag: returns whether a re-upload is due and clears
    /// the flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(n: usize) -> ParticleBuffer {
        let current = vec![Vec3::ONE; n];
        let target = vec![Vec3::ZERO; n];
        ParticleBuffer::new(current, target, ShapeModel::Tree)
    }

    #[test]
    fn test_flat_view_is_three_floats_per_particle() {
        let buf = buffer(10);
        let flat = buf.positions_flat();
        assert_eq!(flat.len(), 30);
        assert_eq!(flat[0], 1.0);
        assert_eq!(flat[29], 1.0);
    }

    #[test]
    fn test_take_dirty_clears_flag() {
        let mut buf = buffer(4);
        assert!(buf.is_dirty());
        assert!(buf.take_dirty());
        assert!(!buf.is_dirty());
        assert!(!buf.take_dirty());

        buf.mark_dirty();
        assert!(buf.take_dirty());
    }

    #[test]
    fn test_set_target_leaves_current_untouched() {
        let mut buf = buffer(4);
        let before = buf.positions().to_vec();
        buf.set_target(ShapeModel::Bell, vec![Vec3::splat(9.0); 4]);
        assert_eq!(buf.positions(), before.as_slice());
        assert_eq!(buf.active_model(), ShapeModel::Bell);
        assert_eq!(buf.target()[0], Vec3::splat(9.0));
    }
}
