//! Ray intersection with triangles and quadrilaterals.
//!
//! Both shapes share one algorithm over their vertex list. The ray origin is
//! first classified against the polygon, then each location is resolved by
//! testing the edges that can still hold an intersection.

use tracing::{trace, warn};

use super::Ray2D;
use crate::geometry::{Intersections, LineSegment2D, Quadrilateral2D, Triangle2D};
use crate::math::distance_2d::squared_distance;
use crate::math::tolerance::{is_zero, points_equal};
use crate::math::Point2;

/// Where the ray origin sits relative to a polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OriginLocation {
    /// On vertex `i`.
    Vertex(usize),
    /// On edge `i` (from vertex `i` to vertex `i + 1`), away from its vertices.
    Edge(usize),
    /// Strictly inside.
    Interior,
    /// Outside.
    Exterior,
}

/// Edge `i` of a closed polygon.
fn edge(vertices: &[Point2], i: usize) -> LineSegment2D {
    let n = vertices.len();
    LineSegment2D::new(vertices[i % n], vertices[(i + 1) % n])
}

fn classify_origin(origin: &Point2, vertices: &[Point2], inside: bool) -> OriginLocation {
    if !inside {
        return OriginLocation::Exterior;
    }
    if let Some(i) = vertices.iter().position(|v| points_equal(v, origin)) {
        return OriginLocation::Vertex(i);
    }
    (0..vertices.len())
        .find(|&i| is_zero(edge(vertices, i).min_distance(origin)))
        .map_or(OriginLocation::Interior, OriginLocation::Edge)
}

/// `Two(p, q)` with the point closer to `origin` first.
fn closer_first(origin: &Point2, p: Point2, q: Point2) -> Intersections {
    if squared_distance(origin, &p) < squared_distance(origin, &q) {
        Intersections::Two(p, q)
    } else {
        Intersections::Two(q, p)
    }
}

impl Ray2D {
    /// Computes the points where the ray meets the boundary of `triangle`.
    ///
    /// When the origin lies on the boundary it is reported first. When the
    /// origin is outside, two points are ordered nearest first.
    #[must_use]
    pub fn intersection_with_triangle(&self, triangle: &Triangle2D) -> Intersections {
        self.debug_assert_valid();
        debug_assert!(triangle.validate().is_ok(), "triangle vertices must be distinct");

        let inside = triangle.contains_point(&self.origin);
        self.polygon_intersection(&triangle.vertices(), inside)
    }

    /// Computes the points where the ray meets the boundary of `quad`.
    ///
    /// Same conventions as [`intersection_with_triangle`](Self::intersection_with_triangle).
    #[must_use]
    pub fn intersection_with_quadrilateral(&self, quad: &Quadrilateral2D) -> Intersections {
        self.debug_assert_valid();
        debug_assert!(quad.validate().is_ok(), "quadrilateral vertices must be distinct");

        let inside = quad.contains_point(&self.origin);
        self.polygon_intersection(&quad.vertices(), inside)
    }

    fn polygon_intersection(&self, vertices: &[Point2], inside: bool) -> Intersections {
        let location = classify_origin(&self.origin, vertices, inside);
        trace!(?location, origin = ?self.origin, "classified ray origin");

        let n = vertices.len();
        match location {
            // Edges touching vertex `i` can only meet the ray at the origin.
            OriginLocation::Vertex(i) => self.origin_and_exit(vertices, (1..n - 1).map(|k| i + k)),
            OriginLocation::Edge(i) => self.origin_and_exit(vertices, (1..n).map(|k| i + k)),
            OriginLocation::Interior => self.interior_exit(vertices),
            OriginLocation::Exterior => self.exterior_hits(vertices),
        }
    }

    /// Origin on the boundary: the origin, plus the first point found on one
    /// of `candidates` (edge indices, tested in order).
    fn origin_and_exit(
        &self,
        vertices: &[Point2],
        candidates: impl Iterator<Item = usize>,
    ) -> Intersections {
        for i in candidates {
            if let Intersections::One(p) = self.edge_contact(&edge(vertices, i)) {
                if !points_equal(&p, &self.origin) {
                    return Intersections::Two(self.origin, p);
                }
            }
        }
        Intersections::One(self.origin)
    }

    /// Origin strictly inside: exactly one edge is crossed on the way out.
    fn interior_exit(&self, vertices: &[Point2]) -> Intersections {
        let exit = (0..vertices.len()).find_map(|i| {
            match self.edge_contact(&edge(vertices, i)) {
                Intersections::One(p) => Some(p),
                _ => None,
            }
        });

        if let Some(p) = exit {
            Intersections::One(p)
        } else {
            warn!(ray = %self, "interior ray origin found no exit edge");
            Intersections::None
        }
    }

    /// Origin outside: up to two distinct boundary points, nearest first.
    ///
    /// An edge lying on the ray resolves to its two vertices.
    fn exterior_hits(&self, vertices: &[Point2]) -> Intersections {
        let hits: Vec<Intersections> = (0..vertices.len())
            .map(|i| self.edge_contact(&edge(vertices, i)))
            .collect();

        if let Some(i) = hits.iter().position(Intersections::is_infinite) {
            let e = edge(vertices, i);
            trace!(edge = i, "ray runs along polygon edge");
            return closer_first(&self.origin, e.a, e.b);
        }

        let mut first: Option<Point2> = None;
        for hit in &hits {
            let Intersections::One(p) = *hit else {
                continue;
            };
            match first {
                None => first = Some(p),
                // A shared vertex shows up on both of its edges.
                Some(q) if !points_equal(&p, &q) => return closer_first(&self.origin, q, p),
                Some(_) => {}
            }
        }

        first.map_or(Intersections::None, Intersections::One)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vector2;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn ray(ox: f64, oy: f64, dx: f64, dy: f64) -> Ray2D {
        Ray2D::new(p(ox, oy), Vector2::new(dx, dy))
    }

    fn right_triangle() -> Triangle2D {
        // Legs of length 4 on the axes.
        Triangle2D::new(p(0.0, 0.0), p(4.0, 0.0), p(0.0, 4.0))
    }

    fn square() -> Quadrilateral2D {
        Quadrilateral2D::new(p(0.0, 0.0), p(2.0, 0.0), p(2.0, 2.0), p(0.0, 2.0))
    }

    fn assert_points(actual: Intersections, expected: Intersections) {
        let close = |a: Option<Point2>, b: Option<Point2>| match (a, b) {
            (Some(a), Some(b)) => (a - b).norm() < 1e-9,
            (None, None) => true,
            _ => false,
        };
        assert!(
            actual.count() == expected.count()
                && close(actual.first(), expected.first())
                && close(actual.second(), expected.second()),
            "expected {expected:?}, got {actual:?}"
        );
    }

    // ── classification ──

    #[test]
    fn classify_locations() {
        let v = right_triangle().vertices();
        assert_eq!(classify_origin(&p(4.0, 0.0), &v, true), OriginLocation::Vertex(1));
        assert_eq!(classify_origin(&p(2.0, 2.0), &v, true), OriginLocation::Edge(1));
        assert_eq!(classify_origin(&p(0.0, 1.0), &v, true), OriginLocation::Edge(2));
        assert_eq!(classify_origin(&p(1.0, 1.0), &v, true), OriginLocation::Interior);
        assert_eq!(classify_origin(&p(9.0, 9.0), &v, false), OriginLocation::Exterior);
    }

    // ── triangle ──

    #[test]
    fn triangle_from_outside_crosses_two_edges() {
        let t = Triangle2D::new(p(5.0, -5.0), p(5.0, 5.0), p(10.0, 0.0));
        let r = ray(0.0, 0.0, 1.0, 0.0);
        assert!(r.intersects_triangle(&t));
        assert_points(r.intersection_with_triangle(&t), Intersections::Two(p(5.0, 0.0), p(10.0, 0.0)));
    }

    #[test]
    fn triangle_from_outside_order_is_nearest_first_in_any_direction() {
        let t = Triangle2D::new(p(5.0, -5.0), p(5.0, 5.0), p(10.0, 0.0));
        let r = ray(20.0, 0.0, -1.0, 0.0);
        assert_points(r.intersection_with_triangle(&t), Intersections::Two(p(10.0, 0.0), p(5.0, 0.0)));
    }

    #[test]
    fn triangle_touched_at_a_vertex() {
        let t = Triangle2D::new(p(2.0, 0.0), p(4.0, 2.0), p(4.0, -2.0));
        let r = ray(0.0, 0.0, 1.0, 0.0);
        // Enters through vertex A, leaves through edge BC.
        assert_points(r.intersection_with_triangle(&t), Intersections::Two(p(2.0, 0.0), p(4.0, 0.0)));

        let grazing = ray(0.0, 2.0, 1.0, 0.0);
        let t2 = Triangle2D::new(p(2.0, 0.0), p(4.0, 2.0), p(6.0, 0.0));
        assert_points(r.intersection_with_triangle(&t2), Intersections::Two(p(2.0, 0.0), p(6.0, 0.0)));
        assert_points(grazing.intersection_with_triangle(&t2), Intersections::One(p(4.0, 2.0)));
    }

    #[test]
    fn triangle_edge_along_ray() {
        let t = Triangle2D::new(p(6.0, 0.0), p(3.0, 0.0), p(4.0, 3.0));
        let r = ray(0.0, 0.0, 1.0, 0.0);
        assert_points(r.intersection_with_triangle(&t), Intersections::Two(p(3.0, 0.0), p(6.0, 0.0)));
    }

    #[test]
    fn triangle_missed() {
        let r = ray(0.0, 0.0, -1.0, 0.0);
        let t = Triangle2D::new(p(5.0, -5.0), p(5.0, 5.0), p(10.0, 0.0));
        assert!(!r.intersects_triangle(&t));
        assert_eq!(r.intersection_with_triangle(&t), Intersections::None);
    }

    #[test]
    fn triangle_origin_interior() {
        let r = ray(1.0, 1.0, 1.0, 0.0);
        assert_points(r.intersection_with_triangle(&right_triangle()), Intersections::One(p(3.0, 1.0)));
    }

    #[test]
    fn triangle_origin_at_vertex() {
        let t = right_triangle();
        let s = std::f64::consts::FRAC_1_SQRT_2;
        // From A into the triangle, out through BC.
        assert_points(
            ray(0.0, 0.0, s, s).intersection_with_triangle(&t),
            Intersections::Two(p(0.0, 0.0), p(2.0, 2.0)),
        );
        // From A away from the triangle.
        assert_points(
            ray(0.0, 0.0, -1.0, 0.0).intersection_with_triangle(&t),
            Intersections::One(p(0.0, 0.0)),
        );
        // From A along edge AB.
        assert_points(
            ray(0.0, 0.0, 1.0, 0.0).intersection_with_triangle(&t),
            Intersections::Two(p(0.0, 0.0), p(4.0, 0.0)),
        );
    }

    #[test]
    fn triangle_origin_on_edge() {
        let t = right_triangle();
        // From the middle of AB straight up, out through BC.
        assert_points(
            ray(2.0, 0.0, 0.0, 1.0).intersection_with_triangle(&t),
            Intersections::Two(p(2.0, 0.0), p(2.0, 2.0)),
        );
        // From the middle of AB straight down, leaving immediately.
        assert_points(
            ray(2.0, 0.0, 0.0, -1.0).intersection_with_triangle(&t),
            Intersections::One(p(2.0, 0.0)),
        );
        // Along AB towards B.
        assert_points(
            ray(2.0, 0.0, 1.0, 0.0).intersection_with_triangle(&t),
            Intersections::Two(p(2.0, 0.0), p(4.0, 0.0)),
        );
    }

    // ── quadrilateral ──

    #[test]
    fn quadrilateral_origin_interior() {
        let r = ray(1.0, 1.0, 1.0, 0.0);
        assert!(r.intersects_quadrilateral(&square()));
        assert_points(r.intersection_with_quadrilateral(&square()), Intersections::One(p(2.0, 1.0)));
    }

    #[test]
    fn quadrilateral_from_outside() {
        let r = ray(-1.0, 1.0, 1.0, 0.0);
        assert_points(
            r.intersection_with_quadrilateral(&square()),
            Intersections::Two(p(0.0, 1.0), p(2.0, 1.0)),
        );
        let back = ray(3.0, 1.0, -1.0, 0.0);
        assert_points(
            back.intersection_with_quadrilateral(&square()),
            Intersections::Two(p(2.0, 1.0), p(0.0, 1.0)),
        );
    }

    #[test]
    fn quadrilateral_diagonal_through_corners() {
        let s = std::f64::consts::FRAC_1_SQRT_2;
        let r = ray(-1.0, -1.0, s, s);
        assert_points(
            r.intersection_with_quadrilateral(&square()),
            Intersections::Two(p(0.0, 0.0), p(2.0, 2.0)),
        );
    }

    #[test]
    fn quadrilateral_edge_along_ray() {
        let r = ray(-3.0, 2.0, 1.0, 0.0);
        assert_points(
            r.intersection_with_quadrilateral(&square()),
            Intersections::Two(p(0.0, 2.0), p(2.0, 2.0)),
        );
    }

    #[test]
    fn quadrilateral_origin_at_vertex() {
        let q = square();
        let s = std::f64::consts::FRAC_1_SQRT_2;
        assert_points(
            ray(0.0, 0.0, s, s).intersection_with_quadrilateral(&q),
            Intersections::Two(p(0.0, 0.0), p(2.0, 2.0)),
        );
        assert_points(
            ray(2.0, 0.0, 0.0, 1.0).intersection_with_quadrilateral(&q),
            Intersections::Two(p(2.0, 0.0), p(2.0, 2.0)),
        );
        assert_points(
            ray(2.0, 2.0, 1.0, 1.0).intersection_with_quadrilateral(&q),
            Intersections::One(p(2.0, 2.0)),
        );
    }

    #[test]
    fn quadrilateral_origin_on_edge() {
        let q = square();
        assert_points(
            ray(1.0, 0.0, 0.0, 1.0).intersection_with_quadrilateral(&q),
            Intersections::Two(p(1.0, 0.0), p(1.0, 2.0)),
        );
        assert_points(
            ray(0.0, 1.0, -1.0, 0.0).intersection_with_quadrilateral(&q),
            Intersections::One(p(0.0, 1.0)),
        );
    }

    #[test]
    fn quadrilateral_missed() {
        let r = ray(3.0, 3.0, 1.0, 0.0);
        assert!(!r.intersects_quadrilateral(&square()));
        assert_eq!(r.intersection_with_quadrilateral(&square()), Intersections::None);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "triangle vertices must be distinct")]
    fn triangle_with_repeated_vertex_is_rejected() {
        let t = Triangle2D::new(p(0.0, 0.0), p(4.0, 0.0), p(0.0, 0.0));
        let _ = ray(-1.0, 1.0, 1.0, 0.0).intersection_with_triangle(&t);
    }
}
