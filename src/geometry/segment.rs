use crate::error::{GeometryError, Result};
use crate::math::distance_2d::point_to_segment_dist;
use crate::math::polygon_2d::segment_direction;
use crate::math::tolerance::points_equal;
use crate::math::{Point2, Vector2};

/// A bounded line segment between two endpoints.
///
/// Operations consuming a segment expect `a != b`; use [`validate`](Self::validate)
/// to check this up front.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment2D {
    pub a: Point2,
    pub b: Point2,
}

impl LineSegment2D {
    /// Creates a new segment. No validation is performed.
    #[must_use]
    pub fn new(a: Point2, b: Point2) -> Self {
        Self { a, b }
    }

    /// Checks that the endpoints are distinct.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DegenerateSegment` if `a` and `b` coincide.
    pub fn validate(&self) -> Result<()> {
        if self.is_degenerate() {
            return Err(GeometryError::DegenerateSegment {
                x: self.a.x,
                y: self.a.y,
            }
            .into());
        }
        Ok(())
    }

    /// Returns `true` if the endpoints coincide within tolerance.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        points_equal(&self.a, &self.b)
    }

    /// Unit direction from `a` to `b`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DegenerateSegment` for a zero-length segment.
    pub fn direction(&self) -> Result<Vector2> {
        segment_direction(&self.a, &self.b)
    }

    /// Vector from `a` to `b` (not normalized).
    #[must_use]
    pub fn vector(&self) -> Vector2 {
        self.b - self.a
    }

    /// Euclidean length of the segment.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.vector().norm()
    }

    /// Minimum distance from `point` to any point of the segment.
    #[must_use]
    pub fn min_distance(&self, point: &Point2) -> f64 {
        point_to_segment_dist(point, &self.a, &self.b)
    }
}
