use super::{ensure_distinct_vertices, LineSegment2D};
use crate::error::Result;
use crate::math::polygon_2d::point_inside_triangle;
use crate::math::Point2;

/// A triangle given by three vertices in winding order.
///
/// Edges are `A-B`, `B-C` and `C-A`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle2D {
    pub a: Point2,
    pub b: Point2,
    pub c: Point2,
}

impl Triangle2D {
    /// Creates a new triangle. No validation is performed.
    #[must_use]
    pub fn new(a: Point2, b: Point2, c: Point2) -> Self {
        Self { a, b, c }
    }

    /// Checks that the vertices are pairwise distinct.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::CoincidentVertices` naming the first pair that coincides.
    pub fn validate(&self) -> Result<()> {
        ensure_distinct_vertices("triangle", &self.vertices())
    }

    /// Vertices in winding order.
    #[must_use]
    pub fn vertices(&self) -> [Point2; 3] {
        [self.a, self.b, self.c]
    }

    /// Edges in winding order.
    #[must_use]
    pub fn edges(&self) -> [LineSegment2D; 3] {
        [
            LineSegment2D::new(self.a, self.b),
            LineSegment2D::new(self.b, self.c),
            LineSegment2D::new(self.c, self.a),
        ]
    }

    /// Returns `true` if `point` is inside the triangle or on its boundary.
    #[must_use]
    pub fn contains_point(&self, point: &Point2) -> bool {
        point_inside_triangle(point, &self.a, &self.b, &self.c)
    }
}
