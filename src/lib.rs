//! # Swarmorph
//!
//! Particle swarm morphing engine: a large fixed-size point cloud morphs
//! between procedurally generated 3-D shapes and reacts in real time to a
//! continuous external control signal (a hand-openness estimate).
//!
//! Swarmorph renders nothing itself. It owns the live position buffer and
//! the per-frame math; the host plugs in a renderer (upload the flat
//! position stream when the dirty flag says so), a detection pipeline
//! (publish hand readings into the signal cell at any rate), and a model
//! selector (switch targets by name).
//!
//! ## Quick start
//!
//! ```
//! use swarmorph::prelude::*;
//!
//! let mut swarm = Swarm::new(
//!     SwarmConfig::default()
//!         .with_particle_count(5_000)
//!         .with_seed(1)
//!         .with_fixed_step(1.0 / 60.0),
//! )
//! .unwrap();
//!
//! swarm.select_model("snowflake").unwrap();
//!
//! // Frame loop: feed the latest openness, advance, upload if dirty.
//! for _ in 0..60 {
//!     swarm.advance_with_openness(Some(0.8));
//!     if swarm.take_dirty() {
//!         let _positions: &[f32] = swarm.positions_flat();
//!     }
//! }
//! assert!(swarm.smoothed_dispersion() > 0.0);
//! ```
//!
//! ## Core concepts
//!
//! ### Shapes
//!
//! Each [`ShapeModel`] maps to one generator producing a target cloud of
//! exactly `particle_count` points. Positions match across clouds by index
//! only; there is no spatial correspondence between slot `i` in two clouds.
//!
//! ### Blending
//!
//! Every frame, each particle's destination is the scaled target position
//! blended toward a fixed [`DispersalField`] scatter with a
//! smoothstep-eased weight, plus deterministic ambient noise. The particle
//! then covers a fixed fraction of the remaining distance, which is what
//! makes model switches morph smoothly instead of jump-cutting.
//!
//! ### Interaction
//!
//! The detector publishes [`HandReading`]s into a [`SignalCell`]; the
//! frame loop samples once per frame and low-passes the derived openness
//! into the scale and dispersion the blend consumes. Signal absence
//! relaxes the swarm to a faint idle drift. There is no particle physics
//! here: no velocities, no forces, no births or deaths - only positions
//! evolve.

pub mod buffer;
pub mod config;
pub mod dispersal;
pub mod engine;
pub mod error;
pub mod fractal;
pub mod interaction;
pub mod shapes;
pub mod swarm;
pub mod time;

pub use buffer::ParticleBuffer;
pub use config::SwarmConfig;
pub use dispersal::DispersalField;
pub use engine::BlendEngine;
pub use error::SwarmError;
pub use fractal::Segment;
pub use glam::{Vec2, Vec3};
pub use interaction::{HandReading, InteractionSmoother, SignalCell};
pub use shapes::ShapeModel;
pub use swarm::Swarm;
pub use time::FrameClock;

/// Convenient re-exports for common usage.
///
/// ```
/// use swarmorph::prelude::*;
/// ```
pub mod prelude {
    pub use crate::buffer::ParticleBuffer;
    pub use crate::config::SwarmConfig;
    pub use crate::dispersal::DispersalField;
    pub use crate::engine::BlendEngine;
    pub use crate::error::SwarmError;
    pub use crate::interaction::{HandReading, InteractionSmoother, SignalCell};
    pub use crate::shapes::ShapeModel;
    pub use crate::swarm::Swarm;
    pub use crate::time::FrameClock;
    pub use crate::{Vec2, Vec3};
}
