//! Error types for swarmorph.
//!
//! Construction and model selection are the only fallible operations;
//! geometry generation and the per-frame blend pass are pure arithmetic
//! and cannot fail.

use crate::shapes::ShapeModel;
use std::fmt;

/// Errors that can occur when building or driving a swarm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwarmError {
    /// The configured particle count was zero.
    InvalidParticleCount,
    /// A model name did not match any known shape.
    UnknownModel(String),
}

impl fmt::Display for SwarmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwarmError::InvalidParticleCount => {
                write!(f, "Particle count must be greater than zero. Use SwarmConfig::with_particle_count() to set one.")
            }
            SwarmError::UnknownModel(name) => {
                write!(f, "Unknown shape model '{}'. Available models:", name)?;
                for model in ShapeModel::ALL {
                    write!(f, " {}", model.name())?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for SwarmError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_model_lists_available() {
        let err = SwarmError::UnknownModel("reindeer".to_string());
        let msg = err.to_string();
        assert!(msg.contains("reindeer"));
        assert!(msg.contains("tree"));
        assert!(msg.contains("snowflake"));
    }
}
