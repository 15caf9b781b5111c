//! Pure geometry helpers shared by the combat and movement code.
//!
//! Everything in this module is a stateless function over world-unit
//! coordinates. Collision tests operate on squared distances so callers
//! never pay for a square root they do not need.

use crate::Position;

/// Euclidean distance between two points in world units.
#[must_use]
pub fn distance(a: Position, b: Position) -> f32 {
    distance_squared(a, b).sqrt()
}

/// Squared Euclidean distance between two points.
#[must_use]
pub fn distance_squared(a: Position, b: Position) -> f32 {
    let dx = b.x() - a.x();
    let dy = b.y() - a.y();
    dx * dx + dy * dy
}

/// Unit direction vector pointing from `from` toward `to`.
///
/// Returns `(0.0, 0.0)` when the points coincide so callers never divide
/// by zero while homing onto a target they already overlap.
#[must_use]
pub fn direction(from: Position, to: Position) -> (f32, f32) {
    let dist = distance(from, to);
    if dist == 0.0 {
        return (0.0, 0.0);
    }
    ((to.x() - from.x()) / dist, (to.y() - from.y()) / dist)
}

/// Reports whether two circles overlap.
///
/// The boundary case counts as a collision: circles whose centre distance
/// equals the sum of their radii are touching and therefore overlap.
#[must_use]
pub fn circles_overlap(a: Position, radius_a: f32, b: Position, radius_b: f32) -> bool {
    let radius_sum = radius_a + radius_b;
    distance_squared(a, b) <= radius_sum * radius_sum
}

/// Clamps `value` into the inclusive `[min, max]` range.
#[must_use]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

/// Linear interpolation between `start` and `end` at parameter `t`.
#[must_use]
pub fn lerp(start: f32, end: f32, t: f32) -> f32 {
    start + (end - start) * t
}
