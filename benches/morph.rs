//! Benchmarks for shape generation and the per-frame blend pass.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use swarmorph::{fractal, ShapeModel, Swarm, SwarmConfig};

const PARTICLES: usize = 15_000;

fn bench_generators(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_15k");
    for model in ShapeModel::ALL {
        group.bench_function(model.name(), |b| {
            let mut rng = SmallRng::seed_from_u64(0);
            b.iter(|| black_box(model.generate(PARTICLES, &mut rng)));
        });
    }
    group.finish();
}

fn bench_skeleton(c: &mut Criterion) {
    c.bench_function("snowflake_skeleton_depth4", |b| {
        b.iter(|| black_box(fractal::build_skeleton(4)));
    });
}

fn bench_blend_step(c: &mut Criterion) {
    c.bench_function("advance_15k", |b| {
        let mut swarm = Swarm::new(
            SwarmConfig::default()
                .with_particle_count(PARTICLES)
                .with_seed(0)
                .with_fixed_step(1.0 / 60.0),
        )
        .unwrap();
        b.iter(|| {
            swarm.advance_with_openness(black_box(Some(0.5)));
        });
    });
}

criterion_group!(benches, bench_generators, bench_skeleton, bench_blend_step);
criterion_main!(benches);
