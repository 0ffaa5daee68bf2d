mod intersect;
mod polygon;
mod reflect;
mod transform;

use std::fmt;
use std::sync::OnceLock;

pub use intersect::RayTarget;

use crate::error::{GeometryError, Result};
use crate::math::intersect_2d::cross_2d;
use crate::math::tolerance::{is_negative, is_zero, is_zero_vector, points_equal};
use crate::math::{Point2, Vector2, TOLERANCE};

/// A half-line in the plane: every point `origin + t * direction` with `t >= 0`.
///
/// Most queries expect `direction` to be a non-zero unit vector. [`Ray2D::new`]
/// does not enforce this; [`Ray2D::try_new`] normalizes and rejects a zero
/// direction. Queries on a ray with zero direction are checked only by debug
/// assertions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray2D {
    pub origin: Point2,
    pub direction: Vector2,
}

impl Default for Ray2D {
    /// The null ray (zero origin, zero direction). Invalid until both are set.
    fn default() -> Self {
        Self::new(Point2::origin(), Vector2::zeros())
    }
}

impl Ray2D {
    /// Creates a ray from an origin and a direction, as given.
    #[must_use]
    pub fn new(origin: Point2, direction: Vector2) -> Self {
        Self { origin, direction }
    }

    /// Creates a ray with its direction normalized.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVector` if `direction` is zero-length.
    pub fn try_new(origin: Point2, direction: Vector2) -> Result<Self> {
        let direction = direction
            .try_normalize(TOLERANCE)
            .ok_or(GeometryError::ZeroVector)?;
        Ok(Self { origin, direction })
    }

    /// Creates a ray starting at `origin` and passing through `through`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVector` if the two points coincide.
    pub fn from_points(origin: Point2, through: Point2) -> Result<Self> {
        Self::try_new(origin, through - origin)
    }

    /// Zero origin, zero direction. Degenerate; intended as a sentinel.
    #[must_use]
    pub fn null_ray() -> &'static Ray2D {
        static RAY: OnceLock<Ray2D> = OnceLock::new();
        RAY.get_or_init(Ray2D::default)
    }

    /// Ray from the origin along `+X`.
    #[must_use]
    pub fn ray_x() -> &'static Ray2D {
        static RAY: OnceLock<Ray2D> = OnceLock::new();
        RAY.get_or_init(|| Ray2D::new(Point2::origin(), Vector2::x()))
    }

    /// Ray from the origin along `+Y`.
    #[must_use]
    pub fn ray_y() -> &'static Ray2D {
        static RAY: OnceLock<Ray2D> = OnceLock::new();
        RAY.get_or_init(|| Ray2D::new(Point2::origin(), Vector2::y()))
    }

    /// Returns `true` if the direction is zero within tolerance.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        is_zero_vector(&self.direction)
    }

    /// Same origin, opposite direction.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.origin, -self.direction)
    }

    /// Same origin, unit direction. A zero direction stays zero.
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self::new(self.origin, unit_or_zero(&self.direction))
    }

    /// Point reached after travelling `distance` along the direction.
    ///
    /// For a unit direction this is the point at that Euclidean distance
    /// from the origin.
    #[must_use]
    pub fn point_at(&self, distance: f64) -> Point2 {
        self.origin + self.direction * distance
    }

    /// Returns `true` if `point` lies on the ray.
    ///
    /// The origin is always contained, whatever the direction. Elsewhere the
    /// offset from the origin must be parallel to the direction and point the
    /// same way. Both tests are relative to the offset length beyond one unit,
    /// so far points keep the same angular tolerance as near ones.
    #[must_use]
    pub fn contains(&self, point: &Point2) -> bool {
        if points_equal(&self.origin, point) {
            return true;
        }

        let length = self.direction.norm();
        if is_zero(length) {
            return false;
        }
        let offset = point - self.origin;
        let scale = offset.norm().max(1.0) * length;

        is_zero(cross_2d(&self.direction, &offset) / scale)
            && !is_negative(self.direction.dot(&offset) / scale)
    }

    fn debug_assert_valid(&self) {
        debug_assert!(!self.is_degenerate(), "ray direction must be non-zero");
    }
}

impl fmt::Display for Ray2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "R:P({}, {}),D({}, {})",
            self.origin.x, self.origin.y, self.direction.x, self.direction.y
        )
    }
}

/// Normalizes `v`, mapping a zero vector to zero instead of NaN.
fn unit_or_zero(v: &Vector2) -> Vector2 {
    v.try_normalize(TOLERANCE).unwrap_or_else(Vector2::zeros)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::math::polygon_2d::left_normal;

    fn ray(ox: f64, oy: f64, dx: f64, dy: f64) -> Ray2D {
        Ray2D::new(Point2::new(ox, oy), Vector2::new(dx, dy))
    }

    #[test]
    fn try_new_normalizes() {
        let r = Ray2D::try_new(Point2::new(1.0, 1.0), Vector2::new(3.0, 4.0)).unwrap();
        assert_abs_diff_eq!(r.direction, Vector2::new(0.6, 0.8), epsilon = TOLERANCE);
    }

    #[test]
    fn try_new_rejects_zero_direction() {
        let err = Ray2D::try_new(Point2::origin(), Vector2::zeros());
        assert!(err.is_err());
        assert!(Ray2D::from_points(Point2::new(2.0, 2.0), Point2::new(2.0, 2.0)).is_err());
    }

    #[test]
    fn constant_rays() {
        assert!(Ray2D::null_ray().is_degenerate());
        assert_eq!(Ray2D::ray_x().direction, Vector2::new(1.0, 0.0));
        assert_eq!(Ray2D::ray_y().direction, Vector2::new(0.0, 1.0));
        assert_eq!(Ray2D::ray_x().origin, Point2::origin());
        assert_eq!(*Ray2D::null_ray(), Ray2D::default());
    }

    #[test]
    fn contains_origin_regardless_of_direction() {
        assert!(ray(2.0, 3.0, 0.6, 0.8).contains(&Point2::new(2.0, 3.0)));
        assert!(Ray2D::null_ray().contains(&Point2::origin()));
    }

    #[test]
    fn contains_axis_aligned() {
        let r = ray(0.0, 0.0, 0.0, 1.0);
        assert!(r.contains(&Point2::new(0.0, 5.0)));
        assert!(!r.contains(&Point2::new(0.0, -5.0)));
        assert!(!r.contains(&Point2::new(0.1, 5.0)));

        let r = ray(1.0, 1.0, -1.0, 0.0);
        assert!(r.contains(&Point2::new(-4.0, 1.0)));
        assert!(!r.contains(&Point2::new(4.0, 1.0)));
    }

    #[test]
    fn contains_general_direction() {
        let s = std::f64::consts::FRAC_1_SQRT_2;
        let r = ray(1.0, 1.0, s, s);
        assert!(r.contains(&Point2::new(3.0, 3.0)));
        assert!(!r.contains(&Point2::new(-1.0, -1.0)));
        assert!(!r.contains(&Point2::new(3.0, 2.0)));
    }

    #[test]
    fn points_along_ray_are_contained() {
        let r = Ray2D::try_new(Point2::new(-2.0, 7.0), Vector2::new(2.0, -1.0)).unwrap();
        for t in [0.0, 0.25, 1.0, 13.5, 200.0] {
            assert!(r.contains(&r.point_at(t)), "t={t}");
        }
        assert!(!r.contains(&r.point_at(-1.0)));
    }

    #[test]
    fn far_points_along_ray_are_contained() {
        let r = Ray2D::try_new(Point2::new(0.3, -0.7), Vector2::new(1.0, 3.0)).unwrap();
        for t in [1e4, 1e6, 1e7] {
            assert!(r.contains(&r.point_at(t)), "t={t}");
            assert!(!r.contains(&r.point_at(-t)), "t={t}");
        }
        // One unit off the line at a million units out is still off the ray.
        let off = r.point_at(1e6) + left_normal(&r.direction);
        assert!(!r.contains(&off));
    }

    #[test]
    fn contains_ignores_direction_length() {
        let r = ray(1.0, 1.0, 0.0, 4.0);
        assert!(r.contains(&Point2::new(1.0, 3.0)));
        assert!(!r.contains(&Point2::new(1.0, -3.0)));
    }

    #[test]
    fn reversed_and_normalized() {
        let r = ray(1.0, 2.0, 0.0, 3.0);
        assert_eq!(r.reversed().direction, Vector2::new(0.0, -3.0));
        assert_abs_diff_eq!(r.normalized().direction, Vector2::new(0.0, 1.0), epsilon = TOLERANCE);
        assert_eq!(Ray2D::null_ray().normalized().direction, Vector2::zeros());
    }

    #[test]
    fn display_format() {
        let r = ray(1.0, 2.0, 0.0, 1.0);
        assert_eq!(r.to_string(), "R:P(1, 2),D(0, 1)");
    }
}
