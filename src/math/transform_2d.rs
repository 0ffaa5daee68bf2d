//! Point and vector transforms shared by the ray transform family.
//!
//! Matrices follow the column-vector convention: a point `p` maps to
//! `M * [p.x, p.y, 1]`.

use nalgebra::{Rotation2, Vector3};

use super::{Matrix3, Point2, Vector2};

/// Transforms a point by a 3x3 homogeneous matrix.
#[must_use]
pub fn transform_point(matrix: &Matrix3, point: &Point2) -> Point2 {
    let v = matrix * Vector3::new(point.x, point.y, 1.0);
    Point2::new(v.x, v.y)
}

/// Transforms a vector by a 3x3 homogeneous matrix (ignoring translation).
#[must_use]
pub fn transform_vector(matrix: &Matrix3, v: &Vector2) -> Vector2 {
    let r = matrix * Vector3::new(v.x, v.y, 0.0);
    Vector2::new(r.x, r.y)
}

/// Transforms a point by a matrix applied relative to `pivot`.
#[must_use]
pub fn transform_point_with_pivot(matrix: &Matrix3, point: &Point2, pivot: &Point2) -> Point2 {
    let local = Point2::from(point - pivot);
    transform_point(matrix, &local) + pivot.coords
}

/// Rotates a vector counter-clockwise by `angle` radians.
#[must_use]
pub fn rotate_vector(angle: f64, v: &Vector2) -> Vector2 {
    Rotation2::new(angle) * v
}

/// Rotates a point counter-clockwise by `angle` radians about `pivot`.
#[must_use]
pub fn rotate_point_with_pivot(angle: f64, point: &Point2, pivot: &Point2) -> Point2 {
    pivot + rotate_vector(angle, &(point - pivot))
}

/// Scales a vector component-wise.
#[must_use]
pub fn scale_vector(scale: &Vector2, v: &Vector2) -> Vector2 {
    v.component_mul(scale)
}

/// Scales a point component-wise relative to `pivot`.
#[must_use]
pub fn scale_point_with_pivot(scale: &Vector2, point: &Point2, pivot: &Point2) -> Point2 {
    pivot + scale_vector(scale, &(point - pivot))
}
