//! Absolute-tolerance scalar and point comparisons.
//!
//! Every comparison uses the fixed [`TOLERANCE`]; there is no per-call
//! override.

use super::{Point2, Vector2, TOLERANCE};

/// Returns `true` if `|a - b| <= TOLERANCE`.
#[must_use]
pub fn are_equal(a: f64, b: f64) -> bool {
    (a - b).abs() <= TOLERANCE
}

/// Returns `true` if `|value| <= TOLERANCE`.
#[must_use]
pub fn is_zero(value: f64) -> bool {
    are_equal(value, 0.0)
}

/// Returns `true` if `value < -TOLERANCE`.
///
/// Values within tolerance of zero are not negative.
#[must_use]
pub fn is_negative(value: f64) -> bool {
    value < -TOLERANCE
}

/// Returns `true` if `a >= b` within tolerance, i.e. `a - b >= -TOLERANCE`.
#[must_use]
pub fn is_greater_or_equals(a: f64, b: f64) -> bool {
    a - b >= -TOLERANCE
}

/// Component-wise tolerant point equality.
#[must_use]
pub fn points_equal(a: &Point2, b: &Point2) -> bool {
    are_equal(a.x, b.x) && are_equal(a.y, b.y)
}

/// Component-wise tolerant vector equality.
#[must_use]
pub fn vectors_equal(a: &Vector2, b: &Vector2) -> bool {
    are_equal(a.x, b.x) && are_equal(a.y, b.y)
}

/// Returns `true` if both components of `v` are within tolerance of zero.
#[must_use]
pub fn is_zero_vector(v: &Vector2) -> bool {
    is_zero(v.x) && is_zero(v.y)
}
