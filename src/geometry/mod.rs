pub mod intersections;
pub mod quadrilateral;
pub mod ray;
pub mod segment;
pub mod triangle;

pub use intersections::Intersections;
pub use quadrilateral::Quadrilateral2D;
pub use ray::{Ray2D, RayTarget};
pub use segment::LineSegment2D;
pub use triangle::Triangle2D;

use crate::error::{GeometryError, Result};
use crate::math::tolerance::points_equal;
use crate::math::Point2;

/// Checks that no two vertices of a polygon coincide.
fn ensure_distinct_vertices(kind: &str, vertices: &[Point2]) -> Result<()> {
    for (i, a) in vertices.iter().enumerate() {
        for (j, b) in vertices.iter().enumerate().skip(i + 1) {
            if points_equal(a, b) {
                return Err(GeometryError::CoincidentVertices(format!(
                    "{kind} vertices {i} and {j} at ({}, {})",
                    a.x, a.y
                ))
                .into());
            }
        }
    }
    Ok(())
}
