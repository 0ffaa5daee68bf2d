use super::{ensure_distinct_vertices, LineSegment2D};
use crate::error::Result;
use crate::math::polygon_2d::point_inside_quadrilateral;
use crate::math::Point2;

/// A simple quadrilateral given by four vertices in winding order.
///
/// Edges are `A-B`, `B-C`, `C-D` and `D-A`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quadrilateral2D {
    pub a: Point2,
    pub b: Point2,
    pub c: Point2,
    pub d: Point2,
}

impl Quadrilateral2D {
    /// Creates a new quadrilateral. No validation is performed.
    #[must_use]
    pub fn new(a: Point2, b: Point2, c: Point2, d: Point2) -> Self {
        Self { a, b, c, d }
    }

    /// Checks that the vertices are pairwise distinct.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::CoincidentVertices` naming the first pair that coincides.
    pub fn validate(&self) -> Result<()> {
        ensure_distinct_vertices("quadrilateral", &self.vertices())
    }

    /// Vertices in winding order.
    #[must_use]
    pub fn vertices(&self) -> [Point2; 4] {
        [self.a, self.b, self.c, self.d]
    }

    /// Edges in winding order.
    #[must_use]
    pub fn edges(&self) -> [LineSegment2D; 4] {
        [
            LineSegment2D::new(self.a, self.b),
            LineSegment2D::new(self.b, self.c),
            LineSegment2D::new(self.c, self.d),
            LineSegment2D::new(self.d, self.a),
        ]
    }

    /// Returns `true` if `point` is inside the quadrilateral or on its boundary.
    #[must_use]
    pub fn contains_point(&self, point: &Point2) -> bool {
        point_inside_quadrilateral(point, &self.a, &self.b, &self.c, &self.d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Quadrilateral2D {
        Quadrilateral2D::new(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        )
    }

    #[test]
    fn edges_close_the_loop() {
        let q = unit_square();
        let e = q.edges();
        assert_eq!(e[3].a, q.d);
        assert_eq!(e[3].b, q.a);
    }

    #[test]
    fn validate_detects_repeated_vertex() {
        assert!(unit_square().validate().is_ok());
        let mut q = unit_square();
        q.d = q.b;
        assert!(q.validate().is_err());
    }

    #[test]
    fn contains_point_boundary_inclusive() {
        let q = unit_square();
        assert!(q.contains_point(&Point2::new(0.5, 0.5)));
        assert!(q.contains_point(&Point2::new(1.0, 0.5)));
        assert!(!q.contains_point(&Point2::new(1.5, 0.5)));
    }
}
