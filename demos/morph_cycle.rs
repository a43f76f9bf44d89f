//! Headless morph cycle: steps a swarm through every model and reports how
//! far the cloud sits from each target as it converges.
//!
//! Run with: `cargo run --example morph_cycle`

use swarmorph::prelude::*;

const FRAMES_PER_MODEL: usize = 240;

fn mean_distance(points: &[Vec3], reference: &[Vec3]) -> f32 {
    let total: f32 = points
        .iter()
        .zip(reference)
        .map(|(p, r)| p.distance(*r))
        .sum();
    total / points.len() as f32
}

fn main() {
    let mut swarm = Swarm::new(
        SwarmConfig::default()
            .with_particle_count(5_000)
            .with_seed(2024)
            .with_fixed_step(1.0 / 60.0),
    )
    .expect("valid config");

    println!(
        "{} particles, {} frames per model",
        swarm.positions().len(),
        FRAMES_PER_MODEL
    );

    for model in ShapeModel::ALL {
        swarm.select_model(model.name()).expect("known model");

        let start = mean_distance(swarm.positions(), swarm.buffer().target());
        for _ in 0..FRAMES_PER_MODEL {
            swarm.advance_with_openness(None);
        }
        let end = mean_distance(swarm.positions(), swarm.buffer().target());

        println!(
            "{:>9}: mean distance {:6.2} -> {:5.2}  (rotation {:.3} rad)",
            model.name(),
            start,
            end,
            swarm.rotation_y()
        );
    }
}
