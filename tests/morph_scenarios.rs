//! End-to-end scenarios driving a full swarm session headlessly.
//!
//! These tests exercise the whole pipeline the way a host frame loop
//! would: build a session, feed (or withhold) interaction readings, and
//! assert on the steady states and transitions the animation contract
//! promises.

use swarmorph::prelude::*;

fn session(count: usize, seed: u64) -> Swarm {
    Swarm::new(
        SwarmConfig::default()
            .with_particle_count(count)
            .with_seed(seed)
            .with_fixed_step(1.0 / 60.0),
    )
    .unwrap()
}

fn mean_distance_to(points: &[Vec3], reference: &[Vec3]) -> f32 {
    let total: f32 = points
        .iter()
        .zip(reference)
        .map(|(p, r)| p.distance(*r))
        .sum();
    total / points.len() as f32
}

/// A reading whose fingertips all sit at `ratio` palm-lengths from the
/// wrist, matching the detector's normalized coordinates.
fn reading(ratio: f32) -> HandReading {
    HandReading {
        wrist: Vec2::ZERO,
        middle_knuckle: Vec2::new(0.0, 0.1),
        fingertips: [Vec2::new(0.0, 0.1 * ratio); 5],
    }
}

#[test]
fn idle_session_settles_on_idle_targets() {
    let mut swarm = session(500, 1);

    // Detector never fires: permanent signal absence
    for _ in 0..600 {
        swarm.advance();
    }

    assert!(!swarm.signal_present());
    assert!((swarm.smoothed_dispersion() - 0.05).abs() < 0.01);
    assert!((swarm.smoothed_scale() - 1.0).abs() < 0.01);
}

#[test]
fn open_hand_disperses_the_swarm() {
    let mut swarm = session(500, 2);
    let cell = swarm.signal();
    cell.publish(Some(reading(2.2)));

    let mut last_mean = f32::INFINITY;
    for frame in 0..900 {
        swarm.advance();

        // Distance to the dispersal field shrinks monotonically, modulo
        // the ambient noise amplitude
        if frame % 100 == 99 {
            let mean = mean_distance_to(swarm.positions(), swarm.dispersal().points());
            assert!(
                mean < last_mean + 0.2,
                "frame {}: mean distance grew {} -> {}",
                frame,
                last_mean,
                mean
            );
            last_mean = mean;
        }
    }

    assert!((swarm.smoothed_scale() - 1.5).abs() < 0.01);
    assert!((swarm.smoothed_dispersion() - 1.0).abs() < 0.01);
    // Within ambient-noise reach of the scatter positions
    let mean = mean_distance_to(swarm.positions(), swarm.dispersal().points());
    assert!(mean < 0.5, "mean distance to dispersal {}", mean);
}

#[test]
fn closed_hand_gathers_the_swarm_onto_the_model() {
    let mut swarm = session(500, 3);
    let cell = swarm.signal();
    cell.publish(Some(reading(1.0)));

    for _ in 0..900 {
        swarm.advance();
    }

    assert!(swarm.smoothed_dispersion() < 0.01);
    assert!((swarm.smoothed_scale() - 1.0).abs() < 0.01);
    // Particles hover around the target shape, noise-deep at most
    let mean = mean_distance_to(swarm.positions(), swarm.buffer().target());
    assert!(mean < 0.5, "mean distance to target {}", mean);
}

#[test]
fn model_switch_is_continuous_and_eventually_converges() {
    let mut swarm = session(500, 4);

    for _ in 0..300 {
        swarm.advance_with_openness(None);
    }

    let before = swarm.positions().to_vec();
    swarm.select_model("santa").unwrap();

    // The switch itself moves nothing
    assert_eq!(swarm.positions(), before.as_slice());

    // One frame later every particle has moved at most ease * distance,
    // so the trajectory is continuous (no teleporting)
    swarm.advance_with_openness(None);
    for (now, prev) in swarm.positions().iter().zip(&before) {
        assert!(now.distance(*prev) < 25.0, "jump from {:?} to {:?}", prev, now);
    }

    for _ in 0..900 {
        swarm.advance_with_openness(None);
    }
    let mean = mean_distance_to(swarm.positions(), swarm.buffer().target());
    // Idle dispersion keeps a faint drift; close is close enough
    assert!(mean < 6.0, "mean distance to santa target {}", mean);
}

#[test]
fn detector_flicker_is_absorbed_by_smoothing() {
    let mut swarm = session(200, 5);

    // Steady tracking first
    for _ in 0..300 {
        swarm.advance_with(Some(reading(2.2)));
    }
    let settled = swarm.smoothed_dispersion();

    // One dropped frame barely dents the smoothed output
    swarm.advance_with(None);
    assert!((swarm.smoothed_dispersion() - settled).abs() < 0.1);

    // Sustained absence eventually relaxes to idle
    for _ in 0..600 {
        swarm.advance_with(None);
    }
    assert!((swarm.smoothed_dispersion() - 0.05).abs() < 0.01);
}

#[test]
fn detector_thread_feeds_a_running_loop() {
    let mut swarm = session(200, 6);
    let cell = swarm.signal();

    let publisher = std::thread::spawn(move || {
        for i in 0..50 {
            let ratio = 1.0 + (i as f32 / 49.0) * 1.2;
            cell.publish(Some(reading(ratio)));
        }
    });
    publisher.join().unwrap();

    for _ in 0..120 {
        swarm.advance();
    }

    // Last published reading was fully open
    assert!(swarm.signal_present());
    assert!(swarm.smoothed_dispersion() > 0.5);
}

#[test]
fn every_model_is_selectable_by_name() {
    let mut swarm = session(100, 7);
    for model in ShapeModel::ALL {
        swarm.select_model(model.name()).unwrap();
        assert_eq!(swarm.active_model(), model);
        assert_eq!(swarm.buffer().target().len(), 100);
        swarm.advance_with_openness(None);
    }
}

#[test]
fn flat_positions_view_tracks_the_live_buffer() {
    let mut swarm = session(50, 8);
    swarm.advance_with_openness(Some(0.5));

    let flat = swarm.positions_flat();
    let points = swarm.positions();
    assert_eq!(flat.len(), points.len() * 3);
    for (i, p) in points.iter().enumerate() {
        assert_eq!(flat[i * 3], p.x);
        assert_eq!(flat[i * 3 + 1], p.y);
        assert_eq!(flat[i * 3 + 2], p.z);
    }
}
