//! Planar ray geometry: exact-predicate intersection of 2D rays with rays,
//! line segments, triangles and quadrilaterals, plus reflection and affine
//! transforms.
//!
//! All types are small `Copy` values and every query is pure. Floating-point
//! comparisons use the fixed absolute tolerance [`math::TOLERANCE`].

pub mod error;
pub mod geometry;
pub mod math;

pub use error::{GeometryError, PlanarError, Result};
pub use geometry::{Intersections, LineSegment2D, Quadrilateral2D, Ray2D, RayTarget, Triangle2D};
