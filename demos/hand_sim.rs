//! Simulated hand detector driving a swarm from a second thread.
//!
//! A publisher thread plays the role of the detection pipeline: it posts
//! synthetic hand readings into the signal cell at its own rate (slower
//! than the frame loop), sweeps the hand open and closed, then goes
//! silent. The frame loop just samples once per frame, as a host would.
//!
//! Run with: `cargo run --example hand_sim`

use std::thread;
use std::time::Duration;
use swarmorph::prelude::*;

/// A reading whose fingertips sit `ratio` palm-lengths from the wrist.
fn synthetic_reading(ratio: f32) -> HandReading {
    HandReading {
        wrist: Vec2::ZERO,
        middle_knuckle: Vec2::new(0.0, 0.1),
        fingertips: [Vec2::new(0.0, 0.1 * ratio); 5],
    }
}

fn main() {
    let mut swarm = Swarm::new(
        SwarmConfig::default()
            .with_particle_count(3_000)
            .with_seed(7)
            .with_fixed_step(1.0 / 60.0),
    )
    .expect("valid config");
    swarm.select_model("snowflake").expect("known model");

    let cell = swarm.signal();
    let publisher = thread::spawn(move || {
        // Sweep closed -> open -> closed at ~30 readings per second
        for i in 0..120 {
            let phase = i as f32 / 120.0 * std::f32::consts::TAU;
            let openness = 0.5 - 0.5 * phase.cos();
            let ratio = 1.0 + openness * 1.2;
            cell.publish(Some(synthetic_reading(ratio)));
            thread::sleep(Duration::from_millis(33));
        }
        // Hand leaves the frame
        cell.clear();
    });

    for frame in 0..360 {
        swarm.advance();
        if frame % 30 == 0 {
            let status = if swarm.signal_present() {
                "tracking"
            } else {
                "idle"
            };
            println!(
                "frame {:3} [{}] scale {:.3} dispersion {:.3}",
                frame,
                status,
                swarm.smoothed_scale(),
                swarm.smoothed_dispersion()
            );
        }
        thread::sleep(Duration::from_millis(16));
    }

    publisher.join().expect("publisher thread");
    println!(
        "final: dispersion {:.3} (relaxing toward idle)",
        swarm.smoothed_dispersion()
    );
}
