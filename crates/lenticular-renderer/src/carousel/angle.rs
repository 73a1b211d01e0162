//! Wrap-aware angle arithmetic for the carousel ring.

use std::f32::consts::{PI, TAU};
use std::num::NonZeroUsize;

use lenticular_common::{LenticularError, Result};

/// Euclidean modulus: result in `[0, m)` for positive `m`.
pub fn wrap(n: f32, m: f32) -> f32 {
    ((n % m) + m) % m
}

/// Map any finite angle into `[0, 2π)`.
pub fn normalize_angle(radians: f32) -> f32 {
    wrap(radians, TAU)
}

/// Signed difference `to - from` along the shorter arc, in `[-π, π)`.
pub fn shortest_arc(from: f32, to: f32) -> f32 {
    wrap(to - from + PI, TAU) - PI
}

/// Guard a slice count before any slot arithmetic.
pub fn slot_count(count: usize) -> Result<NonZeroUsize> {
    NonZeroUsize::new(count).ok_or_else(|| {
        LenticularError::Configuration("carousel needs at least one slice".into())
    })
}

/// Angular width of one slot.
pub fn slot_angle(count: NonZeroUsize) -> f32 {
    TAU / count.get() as f32
}

/// Index of the slot nearest to `rotation`.
pub fn nearest_slot(rotation: f32, count: NonZeroUsize) -> usize {
    let slots = (normalize_angle(rotation) / slot_angle(count)).round() as usize;
    slots % count.get()
}

/// Unwrapped snap target for `rotation`: the nearest slot angle, reached
/// from `rotation` along the shorter arc.
pub fn snap_target(rotation: f32, count: NonZeroUsize) -> f32 {
    let target = nearest_slot(rotation, count) as f32 * slot_angle(count);
    rotation + shortest_arc(rotation, target)
}

/// One frame-rate independent exponential step of `current` towards `target`.
pub fn damp(current: f32, target: f32, coefficient: f32, dt: f32) -> f32 {
    current + (target - current) * (1.0 - (-coefficient * dt).exp())
}
