use super::{unit_or_zero, Ray2D};
use crate::math::transform_2d::{
    rotate_point_with_pivot, rotate_vector, scale_point_with_pivot, scale_vector,
    transform_point, transform_point_with_pivot, transform_vector,
};
use crate::math::{Matrix3, Point2, Vector2};

impl Ray2D {
    /// Applies an affine transform.
    ///
    /// The origin receives the full transform, the direction only its linear
    /// part. The resulting direction is renormalized.
    #[must_use]
    pub fn transform(&self, matrix: &Matrix3) -> Self {
        Self::new(
            transform_point(matrix, &self.origin),
            unit_or_zero(&transform_vector(matrix, &self.direction)),
        )
    }

    /// Applies an affine transform to the origin relative to `pivot`.
    #[must_use]
    pub fn transform_with_pivot(&self, matrix: &Matrix3, pivot: &Point2) -> Self {
        Self::new(
            transform_point_with_pivot(matrix, &self.origin, pivot),
            unit_or_zero(&transform_vector(matrix, &self.direction)),
        )
    }

    /// Rotates origin and direction counter-clockwise about the coordinate origin.
    #[must_use]
    pub fn rotate(&self, angle: f64) -> Self {
        self.rotate_with_pivot(angle, &Point2::origin())
    }

    /// Rotates the origin about `pivot`, and the direction by the same angle.
    /// The direction is renormalized.
    #[must_use]
    pub fn rotate_with_pivot(&self, angle: f64, pivot: &Point2) -> Self {
        Self::new(
            rotate_point_with_pivot(angle, &self.origin, pivot),
            unit_or_zero(&rotate_vector(angle, &self.direction)),
        )
    }

    /// Moves the origin by `translation`. The direction is unaffected.
    #[must_use]
    pub fn translate(&self, translation: &Vector2) -> Self {
        Self::new(self.origin + translation, self.direction)
    }

    /// Moves the origin by `(x, y)`.
    #[must_use]
    pub fn translate_xy(&self, x: f64, y: f64) -> Self {
        self.translate(&Vector2::new(x, y))
    }

    /// Scales origin and direction component-wise; the direction is renormalized.
    #[must_use]
    pub fn scale(&self, scale: &Vector2) -> Self {
        self.scale_with_pivot(scale, &Point2::origin())
    }

    /// Component-wise scale by `(x, y)`.
    #[must_use]
    pub fn scale_xy(&self, x: f64, y: f64) -> Self {
        self.scale(&Vector2::new(x, y))
    }

    /// Scales the origin relative to `pivot` and the direction as in [`scale`](Self::scale).
    #[must_use]
    pub fn scale_with_pivot(&self, scale: &Vector2, pivot: &Point2) -> Self {
        Self::new(
            scale_point_with_pivot(scale, &self.origin, pivot),
            unit_or_zero(&scale_vector(scale, &self.direction)),
        )
    }

    /// Component-wise scale by `(x, y)` relative to `pivot`.
    #[must_use]
    pub fn scale_xy_with_pivot(&self, x: f64, y: f64, pivot: &Point2) -> Self {
        self.scale_with_pivot(&Vector2::new(x, y), pivot)
    }
}
