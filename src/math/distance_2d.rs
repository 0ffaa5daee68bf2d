use super::tolerance::is_zero_vector;
use super::Point2;

/// Distance from `point` to the closed segment `a`–`b`.
///
/// Collapses to the distance to `a` when the endpoints coincide.
#[must_use]
pub fn point_to_segment_dist(point: &Point2, a: &Point2, b: &Point2) -> f64 {
    let ab = b - a;
    if is_zero_vector(&ab) {
        return (point - a).norm();
    }

    let t = ((point - a).dot(&ab) / ab.norm_squared()).clamp(0.0, 1.0);
    (point - (a + ab * t)).norm()
}

/// Squared Euclidean distance, for ordering points by proximity.
#[must_use]
pub fn squared_distance(a: &Point2, b: &Point2) -> f64 {
    (b - a).norm_squared()
}
