use super::{unit_or_zero, Ray2D};
use crate::error::{GeometryError, Result};
use crate::geometry::{Intersections, LineSegment2D};
use crate::math::intersect_2d::cross_2d;
use crate::math::polygon_2d::left_normal;
use crate::math::tolerance::{is_zero, vectors_equal};
use crate::math::Vector2;

impl Ray2D {
    /// Reflects the ray off `segment` treated as a mirror.
    ///
    /// The reflected ray starts at the hit point and has a unit direction. The
    /// ray is returned unchanged
    /// when it is parallel to the segment, misses it, or already starts on the
    /// segment's supporting line.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVector` for a ray with zero direction and
    /// `GeometryError::DegenerateSegment` for a zero-length segment.
    pub fn reflection(&self, segment: &LineSegment2D) -> Result<Ray2D> {
        let Some(axis) = self.mirror_axis(segment)? else {
            return Ok(*self);
        };

        match self.intersection_with_segment(segment) {
            Intersections::One(hit) => Ok(Ray2D::new(hit, reflect(&self.direction, &axis))),
            _ => Ok(*self),
        }
    }

    /// Direction of the ray after bouncing off `segment`.
    ///
    /// Returns the current direction under the same conditions in which
    /// [`reflection`](Self::reflection) leaves the ray unchanged.
    ///
    /// # Errors
    ///
    /// Same as [`reflection`](Self::reflection).
    pub fn reflected_direction(&self, segment: &LineSegment2D) -> Result<Vector2> {
        let Some(axis) = self.mirror_axis(segment)? else {
            return Ok(self.direction);
        };

        if self.intersects_segment(segment) {
            Ok(reflect(&self.direction, &axis))
        } else {
            Ok(self.direction)
        }
    }

    /// Unit direction of `segment`, or `None` when no reflection applies.
    fn mirror_axis(&self, segment: &LineSegment2D) -> Result<Option<Vector2>> {
        if self.is_degenerate() {
            return Err(GeometryError::ZeroVector.into());
        }
        let axis = segment.direction()?;

        let direction = unit_or_zero(&self.direction);
        if vectors_equal(&axis, &direction) || vectors_equal(&axis, &-direction) {
            return Ok(None);
        }
        // An origin on the mirror line would bounce back into the mirror.
        if is_zero(cross_2d(&axis, &(self.origin - segment.a))) {
            return Ok(None);
        }
        Ok(Some(axis))
    }
}

/// `d - 2 (d · n) n` with `n` the unit normal of `axis`, renormalized.
fn reflect(direction: &Vector2, axis: &Vector2) -> Vector2 {
    let normal = left_normal(axis);
    unit_or_zero(&(direction - normal * (2.0 * direction.dot(&normal))))
}
