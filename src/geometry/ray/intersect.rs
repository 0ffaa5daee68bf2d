use super::Ray2D;
use crate::geometry::{Intersections, LineSegment2D, Quadrilateral2D, Triangle2D};
use crate::math::intersect_2d::{
    line_line_params_2d, param_in_unit_range, param_non_negative, LineParams,
};
use crate::math::tolerance::{is_zero_vector, points_equal};
use crate::math::Point2;

impl Ray2D {
    fn ray_params(&self, other: &Ray2D) -> LineParams {
        line_line_params_2d(&self.origin, &self.direction, &other.origin, &other.direction)
    }

    fn segment_params(&self, segment: &LineSegment2D) -> LineParams {
        line_line_params_2d(&self.origin, &self.direction, &segment.a, &segment.vector())
    }

    /// Returns `true` if this ray and `other` share at least one point.
    #[must_use]
    pub fn intersects_ray(&self, other: &Ray2D) -> bool {
        self.debug_assert_valid();
        other.debug_assert_valid();

        let params = self.ray_params(other);
        if params.is_parallel() {
            return self.contains(&other.origin) || other.contains(&self.origin);
        }

        param_non_negative(params.u_numerator, params.denominator)
            && param_non_negative(params.t_numerator, params.denominator)
    }

    /// Computes the points shared by this ray and `other`.
    ///
    /// Parallel rays:
    /// - same origin, opposite directions: `One` (the shared origin);
    /// - same origin, same direction: `Infinite`;
    /// - each origin lies on the other ray: `Two` (this origin, then the other's);
    /// - only one origin lies on the other ray: `One` (that origin);
    /// - otherwise `None`.
    #[must_use]
    pub fn intersection_with_ray(&self, other: &Ray2D) -> Intersections {
        self.debug_assert_valid();
        other.debug_assert_valid();

        let params = self.ray_params(other);
        if params.is_parallel() {
            if points_equal(&self.origin, &other.origin) {
                // Directions are assumed normalized.
                return if is_zero_vector(&(self.direction + other.direction)) {
                    Intersections::One(self.origin)
                } else {
                    Intersections::Infinite
                };
            }

            return match (self.contains(&other.origin), other.contains(&self.origin)) {
                (true, true) => Intersections::Two(self.origin, other.origin),
                (true, false) => Intersections::One(other.origin),
                (false, true) => Intersections::One(self.origin),
                (false, false) => Intersections::None,
            };
        }

        if param_non_negative(params.u_numerator, params.denominator)
            && param_non_negative(params.t_numerator, params.denominator)
        {
            Intersections::One(self.point_at(params.t()))
        } else {
            Intersections::None
        }
    }

    /// Returns `true` if the ray touches `segment`.
    #[must_use]
    pub fn intersects_segment(&self, segment: &LineSegment2D) -> bool {
        self.debug_assert_valid();
        debug_assert!(!segment.is_degenerate(), "segment endpoints must be distinct");

        let params = self.segment_params(segment);
        if params.is_parallel() {
            return self.contains(&segment.a) || self.contains(&segment.b);
        }

        param_non_negative(params.t_numerator, params.denominator)
            && param_in_unit_range(params.u_numerator, params.denominator)
    }

    /// Single-point ray/segment query: the point of contact nearest the ray
    /// origin.
    ///
    /// For a collinear overlap this is the first point of
    /// [`intersections_with_segment`](Self::intersections_with_segment), so
    /// the result is never `Two` or `Infinite`.
    #[must_use]
    pub fn intersection_with_segment(&self, segment: &LineSegment2D) -> Intersections {
        match self.intersections_with_segment(segment) {
            Intersections::Two(nearest, _) => Intersections::One(nearest),
            other => other,
        }
    }

    /// Edge test used by the polygon queries.
    ///
    /// Like [`intersection_with_segment`](Self::intersection_with_segment),
    /// except that a collinear overlap longer than the ray origin itself is
    /// reported as `Infinite`.
    pub(super) fn edge_contact(&self, segment: &LineSegment2D) -> Intersections {
        self.debug_assert_valid();
        debug_assert!(!segment.is_degenerate(), "segment endpoints must be distinct");

        let params = self.segment_params(segment);
        if params.is_parallel() {
            return match (self.contains(&segment.a), self.contains(&segment.b)) {
                (true, true) => Intersections::Infinite,
                (true, false) => self.endpoint_or_overlap(&segment.a, Intersections::Infinite),
                (false, true) => self.endpoint_or_overlap(&segment.b, Intersections::Infinite),
                (false, false) => Intersections::None,
            };
        }

        self.crossing_point(&params)
    }

    /// Two-point ray/segment query.
    ///
    /// A collinear overlap is reported by its extreme points, closest to the ray
    /// origin first:
    /// - both endpoints on the ray: `Two` (an endpoint at the origin comes first);
    /// - one endpoint on the ray: `One` if it is the origin, else `Two` with the
    ///   origin first and that endpoint second;
    /// - neither: `None`.
    #[must_use]
    pub fn intersections_with_segment(&self, segment: &LineSegment2D) -> Intersections {
        self.debug_assert_valid();
        debug_assert!(!segment.is_degenerate(), "segment endpoints must be distinct");

        let params = self.segment_params(segment);
        if params.is_parallel() {
            return match (self.contains(&segment.a), self.contains(&segment.b)) {
                (true, true) => self.order_collinear_endpoints(segment),
                (true, false) => self.endpoint_or_overlap(
                    &segment.a,
                    Intersections::Two(self.origin, segment.a),
                ),
                (false, true) => self.endpoint_or_overlap(
                    &segment.b,
                    Intersections::Two(self.origin, segment.b),
                ),
                (false, false) => Intersections::None,
            };
        }

        self.crossing_point(&params)
    }

    /// Returns `true` if the ray touches any edge of `triangle`.
    #[must_use]
    pub fn intersects_triangle(&self, triangle: &Triangle2D) -> bool {
        self.debug_assert_valid();
        debug_assert!(triangle.validate().is_ok(), "triangle vertices must be distinct");

        triangle.edges().iter().any(|edge| self.intersects_segment(edge))
    }

    /// Returns `true` if the ray touches any edge of `quad`.
    #[must_use]
    pub fn intersects_quadrilateral(&self, quad: &Quadrilateral2D) -> bool {
        self.debug_assert_valid();
        debug_assert!(quad.validate().is_ok(), "quadrilateral vertices must be distinct");

        quad.edges().iter().any(|edge| self.intersects_segment(edge))
    }

    /// `One` at the endpoint if it is the ray origin, `overlap` otherwise.
    fn endpoint_or_overlap(&self, endpoint: &Point2, overlap: Intersections) -> Intersections {
        if points_equal(endpoint, &self.origin) {
            Intersections::One(*endpoint)
        } else {
            overlap
        }
    }

    /// Orders the endpoints of a segment lying on the ray, nearest first.
    fn order_collinear_endpoints(&self, segment: &LineSegment2D) -> Intersections {
        let (a, b) = (segment.a, segment.b);
        if points_equal(&a, &self.origin) {
            Intersections::Two(a, b)
        } else if points_equal(&b, &self.origin) {
            Intersections::Two(b, a)
        } else if segment.vector().dot(&self.direction) > 0.0 {
            // The segment runs along the ray, so `a` is met first.
            Intersections::Two(a, b)
        } else {
            Intersections::Two(b, a)
        }
    }

    /// The crossing point of non-parallel ray and segment, if admissible.
    fn crossing_point(&self, params: &LineParams) -> Intersections {
        if param_non_negative(params.t_numerator, params.denominator)
            && param_in_unit_range(params.u_numerator, params.denominator)
        {
            Intersections::One(self.point_at(params.t()))
        } else {
            Intersections::None
        }
    }
}

/// A shape a [`Ray2D`] can be intersected with.
///
/// Gives the ray a single generic entry point per query kind, so callers can
/// write `ray.intersects(&shape)` for any supported shape.
pub trait RayTarget {
    /// Returns `true` if `ray` touches this shape.
    fn is_hit_by(&self, ray: &Ray2D) -> bool;

    /// Points shared by `ray` and this shape, in the two-point form.
    fn hits_from(&self, ray: &Ray2D) -> Intersections;
}

impl RayTarget for Ray2D {
    fn is_hit_by(&self, ray: &Ray2D) -> bool {
        ray.intersects_ray(self)
    }

    fn hits_from(&self, ray: &Ray2D) -> Intersections {
        ray.intersection_with_ray(self)
    }
}

impl RayTarget for LineSegment2D {
    fn is_hit_by(&self, ray: &Ray2D) -> bool {
        ray.intersects_segment(self)
    }

    fn hits_from(&self, ray: &Ray2D) -> Intersections {
        ray.intersections_with_segment(self)
    }
}

impl RayTarget for Triangle2D {
    fn is_hit_by(&self, ray: &Ray2D) -> bool {
        ray.intersects_triangle(self)
    }

    fn hits_from(&self, ray: &Ray2D) -> Intersections {
        ray.intersection_with_triangle(self)
    }
}

impl RayTarget for Quadrilateral2D {
    fn is_hit_by(&self, ray: &Ray2D) -> bool {
        ray.intersects_quadrilateral(self)
    }

    fn hits_from(&self, ray: &Ray2D) -> Intersections {
        ray.intersection_with_quadrilateral(self)
    }
}

impl Ray2D {
    /// Returns `true` if the ray touches `target`.
    #[must_use]
    pub fn intersects<T: RayTarget + ?Sized>(&self, target: &T) -> bool {
        target.is_hit_by(self)
    }

    /// Points shared by the ray and `target`.
    #[must_use]
    pub fn intersection_points<T: RayTarget + ?Sized>(&self, target: &T) -> Intersections {
        target.hits_from(self)
    }
}
