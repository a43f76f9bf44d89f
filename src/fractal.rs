//! Recursive fractal skeleton for the snowflake shape.
//!
//! The skeleton is a fixed, deterministic tree of 2-D line segments grown
//! from six primary axes spaced 60 degrees apart. Each branch emits one
//! segment, forks twice at its midpoint and once at its tip, shrinking by a
//! fixed factor per generation. Particle sampling then picks segments with
//! probability proportional to their length, so long trunk segments receive
//! proportionally more particles than the filigree at the tips.
//!
//! Segments carry their recursion depth: shallow (thick) branches get more
//! perpendicular jitter and out-of-plane offset than deep (thin) ones, which
//! turns the flat skeleton into a fuzzy 3-D crystal.

use glam::{Vec2, Vec3};
use rand::Rng;
use std::f32::consts::FRAC_PI_3;

/// Number of primary arms.
const PRIMARY_AXES: u32 = 6;
/// Length of each primary arm.
const SEED_LENGTH: f32 = 10.0;
/// Child branches shrink to this fraction of their parent.
const BRANCH_SCALE: f32 = 0.4;
/// Fork angle between a branch and its midpoint children (60 degrees).
const FORK_ANGLE: f32 = FRAC_PI_3;
/// Recursion depth of the full snowflake.
pub const SNOWFLAKE_DEPTH: u32 = 4;

/// One line segment of the skeleton, tagged with the recursion depth that
/// emitted it (seed depth at the trunk, 1 at the outermost tips).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub start: Vec2,
    pub end: Vec2,
    pub depth: u32,
}

impl Segment {
    /// Euclidean length of the segment.
    #[inline]
    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }

    /// Sampling thickness: thicker for shallow branches, floored so the
    /// outermost tips still have some body.
    #[inline]
    pub fn thickness(&self) -> f32 {
        (self.depth as f32 * 0.8).max(0.5)
    }
}

/// Build the full skeleton for a given recursion depth.
///
/// The result is deterministic and independent of particle count:
/// `6 * (3^depth - 1) / 2` segments, since every branch call emits one
/// segment and spawns three children until the depth runs out.
pub fn build_skeleton(depth: u32) -> Vec<Segment> {
    let mut segments = Vec::new();
    for axis in 0..PRIMARY_AXES {
        let angle = axis as f32 * FORK_ANGLE;
        grow(&mut segments, Vec2::ZERO, angle, SEED_LENGTH, depth);
    }
    segments
}

fn grow(segments: &mut Vec<Segment>, start: Vec2, angle: f32, length: f32, depth: u32) {
    if depth == 0 {
        return;
    }

    let dir = Vec2::new(angle.cos(), angle.sin());
    let end = start + dir * length;
    segments.push(Segment { start, end, depth });

    let child_len = length * BRANCH_SCALE;
    let mid = start + dir * (length * 0.5);

    // Two forks at the midpoint, one continuation at the tip
    grow(segments, mid, angle + FORK_ANGLE, child_len, depth - 1);
    grow(segments, mid, angle - FORK_ANGLE, child_len, depth - 1);
    grow(segments, end, angle, child_len, depth - 1);
}

/// Generate the snowflake cloud: build the skeleton and scatter `count`
/// particles over it.
pub(crate) fn snowflake(count: usize, rng: &mut impl Rng) -> Vec<Vec3> {
    let segments = build_skeleton(SNOWFLAKE_DEPTH);
    sample_skeleton(&segments, count, rng)
}

/// Scatter `count` particles over a skeleton, length-weighted.
///
/// Each particle picks a segment by cumulative-length draw, lands at a
/// uniform position along it, then fuzzes out: a perpendicular in-plane
/// offset and an independent Z offset, both scaled by the segment's
/// thickness.
pub fn sample_skeleton(segments: &[Segment], count: usize, rng: &mut impl Rng) -> Vec<Vec3> {
    if segments.is_empty() || count == 0 {
        return Vec::new();
    }

    let total_length: f32 = segments.iter().map(Segment::length).sum();
    let mut points = Vec::with_capacity(count);

    for _ in 0..count {
        let seg = &segments[pick_weighted(segments, rng.gen::<f32>() * total_length)];

        let t = rng.gen::<f32>();
        let along = seg.start + (seg.end - seg.start) * t;

        let thickness = seg.thickness();
        let z = (rng.gen::<f32>() - 0.5) * thickness * 4.0;

        let perp = (seg.end - seg.start).normalize().perp();
        let offset = (rng.gen::<f32>() - 0.5) * thickness * 0.5;
        let fuzzed = along + perp * offset;

        points.push(Vec3::new(fuzzed.x, fuzzed.y, z));
    }

    points
}

/// Draw-and-subtract scan: the first segment whose cumulative length
/// reaches `draw` wins. Float residue can exhaust the scan; fall back to
/// the first segment.
pub(crate) fn pick_weighted(segments: &[Segment], mut draw: f32) -> usize {
    for (i, seg) in segments.iter().enumerate() {
        draw -= seg.length();
        if draw <= 0.0 {
            return i;
        }
    }
    0
}
