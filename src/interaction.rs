//! Interaction signal: landmark reduction, smoothing, and the detector seam.
//!
//! The detection collaborator (a camera/ML pipeline) runs at its own rate
//! and publishes its latest result into a [`SignalCell`]. The frame loop
//! samples the cell once per frame, reduces the landmarks to a single
//! "openness" scalar, and feeds it to the [`InteractionSmoother`], which
//! low-passes the instantaneous targets into the scale and dispersion
//! values the blend engine consumes.
//!
//! There is no debouncing anywhere: a single frame's absence starts
//! relaxing toward the idle targets, a single frame's presence starts
//! pursuing the tracking targets. Robustness against detector flicker comes
//! entirely from the filter's inertia.

use glam::Vec2;
use std::sync::{Arc, Mutex};

/// How much a fully open hand grows the target shape.
const SCALE_GAIN: f32 = 0.5;
/// Palm reference distances below this are degenerate; the reading is
/// discarded for the frame rather than divided by.
const PALM_EPSILON: f32 = 1e-4;

/// One hand observation, in the detector's normalized image coordinates.
///
/// Carries exactly the landmarks the openness reduction needs: the wrist,
/// the middle-finger knuckle (palm-scale reference) and the five
/// fingertips.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandReading {
    pub wrist: Vec2,
    pub middle_knuckle: Vec2,
    pub fingertips: [Vec2; 5],
}

impl HandReading {
    /// Reduce the landmarks to an openness scalar in `[0, 1]`.
    ///
    /// The mean fingertip-to-wrist distance is normalized by the
    /// wrist-to-middle-knuckle distance, making the ratio invariant to hand
    /// size and camera distance. The ratio is then remapped affinely from
    /// `[closed_ratio, open_ratio]` and clamped.
    ///
    /// Returns `None` when the palm reference distance is degenerate
    /// (near-zero); callers must skip the frame's openness update and keep
    /// the previous smoothed values.
    pub fn openness(&self, closed_ratio: f32, open_ratio: f32) -> Option<f32> {
        let palm = self.wrist.distance(self.middle_knuckle);
        if palm < PALM_EPSILON {
            return None;
        }

        let mean_tip: f32 = self
            .fingertips
            .iter()
            .map(|tip| self.wrist.distance(*tip))
            .sum::<f32>()
            / self.fingertips.len() as f32;

        let ratio = mean_tip / palm;
        Some(((ratio - closed_ratio) / (open_ratio - closed_ratio)).clamp(0.0, 1.0))
    }
}

/// Latest-value cell between the detector and the frame loop.
///
/// Single conceptual writer (the detection pipeline), single reader (the
/// frame loop). The writer overwrites at any rate; the reader samples once
/// per frame and never blocks on new data. A detector that never fires, or
/// that publishes `None` ("no hand") and stops, leaves the swarm idling.
#[derive(Clone, Debug, Default)]
pub struct SignalCell {
    inner: Arc<Mutex<Option<HandReading>>>,
}

impl SignalCell {
    /// Create an empty cell (no signal yet).
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish the latest detection result: `Some` for an observed hand,
    /// `None` for an explicit "no hand detected" report.
    pub fn publish(&self, reading: Option<HandReading>) {
        *self.inner.lock().unwrap() = reading;
    }

    /// The most recently published reading, if any hand is currently
    /// reported.
    pub fn latest(&self) -> Option<HandReading> {
        *self.inner.lock().unwrap()
    }

    /// Drop any published reading, e.g. when the detection stream is torn
    /// down. Equivalent to `publish(None)`.
    pub fn clear(&self) {
        self.publish(None);
    }
}

/// Exponential low-pass over the interaction targets.
///
/// Holds the per-frame interaction state: whether a signal was present this
/// frame, the raw openness it carried, and the smoothed scale/dispersion
/// outputs the blend engine reads.
#[derive(Clone, Debug)]
pub struct InteractionSmoother {
    alpha: f32,
    idle_dispersion: f32,
    signal_present: bool,
    raw_openness: Option<f32>,
    scale: f32,
    dispersion: f32,
}

impl InteractionSmoother {
    /// Create a smoother at rest: scale 1, dispersion 0, no signal.
    pub fn new(alpha: f32, idle_dispersion: f32) -> Self {
        Self {
            alpha,
            idle_dispersion,
            signal_present: false,
            raw_openness: None,
            scale: 1.0,
            dispersion: 0.0,
        }
    }

    /// Advance one frame with the latest openness (or `None` for signal
    /// absence).
    ///
    /// Present: target scale `1 + openness * 0.5`, target dispersion
    /// `openness`. Absent: target scale 1, target dispersion the idle
    /// constant, so the swarm keeps a faint drift instead of freezing.
    /// Both outputs move a fixed fraction `alpha` of the remaining distance
    /// per call.
    pub fn update(&mut self, openness: Option<f32>) {
        let (target_scale, target_dispersion) = match openness {
            Some(raw) => {
                let open = raw.clamp(0.0, 1.0);
                (1.0 + open * SCALE_GAIN, open)
            }
            None => (1.0, self.idle_dispersion),
        };

        self.signal_present = openness.is_some();
        self.raw_openness = openness;

        self.scale += (target_scale - self.scale) * self.alpha;
        self.dispersion += (target_dispersion - self.dispersion) * self.alpha;
    }

    /// Smoothed uniform scale applied to the target shape.
    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Smoothed blend weight toward the dispersal field, in `[0, 1]`.
    #[inline]
    pub fn dispersion(&self) -> f32 {
        self.dispersion
    }

    /// Whether the last update saw a signal.
    #[inline]
    pub fn signal_present(&self) -> bool {
        self.signal_present
    }

    /// The raw openness of the last update, if a signal was present.
    #[inline]
    pub fn raw_openness(&self) -> Option<f32> {
        self.raw_openness
    }
}
