use super::tolerance::{is_negative, is_zero};
use super::{Point2, Vector2, TOLERANCE};
use crate::error::{GeometryError, Result};

/// Orientation of `p` relative to the directed line `l1 → l2`.
///
/// Positive when `p` is to the left, negative when to the right.
fn orientation(p: &Point2, l1: &Point2, l2: &Point2) -> f64 {
    (l1.x - p.x) * (l2.y - p.y) - (l1.y - p.y) * (l2.x - p.x)
}

/// Half-plane test: returns `true` if `p1` and `p2` lie on the same side of
/// the infinite line through `l1` and `l2`.
///
/// A point on the line counts as being on either side.
#[must_use]
pub fn points_in_same_side_of_line(p1: &Point2, p2: &Point2, l1: &Point2, l2: &Point2) -> bool {
    let o1 = orientation(p1, l1, l2);
    let o2 = orientation(p2, l1, l2);

    is_zero(o1) || is_zero(o2) || is_negative(o1) == is_negative(o2)
}

/// Returns `true` if `p` is inside the triangle `abc` or on its boundary.
#[must_use]
pub fn point_inside_triangle(p: &Point2, a: &Point2, b: &Point2, c: &Point2) -> bool {
    points_in_same_side_of_line(p, a, b, c)
        && points_in_same_side_of_line(p, b, c, a)
        && points_in_same_side_of_line(p, c, a, b)
}

/// Returns `true` if `p` is inside the quadrilateral `abcd` or on its boundary.
///
/// Each edge is tested against a vertex known to be on the inner side of it,
/// so the test is exact for convex quadrilaterals.
#[must_use]
pub fn point_inside_quadrilateral(
    p: &Point2,
    a: &Point2,
    b: &Point2,
    c: &Point2,
    d: &Point2,
) -> bool {
    points_in_same_side_of_line(p, c, a, b)
        && points_in_same_side_of_line(p, a, b, c)
        && points_in_same_side_of_line(p, a, c, d)
        && points_in_same_side_of_line(p, c, d, a)
}

/// Computes the normalized direction from point `a` to point `b`.
///
/// # Errors
///
/// Returns `GeometryError::DegenerateSegment` if the segment has zero length.
pub fn segment_direction(a: &Point2, b: &Point2) -> Result<Vector2> {
    let d = b - a;
    let len = d.norm();
    if len < TOLERANCE {
        return Err(GeometryError::DegenerateSegment { x: a.x, y: a.y }.into());
    }
    Ok(d / len)
}

/// Returns the left-pointing normal of a direction vector.
#[must_use]
pub fn left_normal(dir: &Vector2) -> Vector2 {
    Vector2::new(-dir.y, dir.x)
}
