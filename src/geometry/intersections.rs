use crate::math::Point2;

/// Outcome of an intersection query: how many discrete points two shapes share,
/// together with those points.
///
/// For `Two`, the points are ordered closest-to-ray-origin first wherever the
/// query can establish that order.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Intersections {
    /// The shapes do not meet.
    #[default]
    None,
    /// A single shared point.
    One(Point2),
    /// Two shared points.
    Two(Point2, Point2),
    /// The shapes overlap along a collinear extent.
    Infinite,
}

impl Intersections {
    /// Number of discrete points, or `None` for an infinite overlap.
    #[must_use]
    pub fn count(&self) -> Option<usize> {
        match self {
            Self::None => Some(0),
            Self::One(_) => Some(1),
            Self::Two(..) => Some(2),
            Self::Infinite => None,
        }
    }

    /// First reported point, if any.
    #[must_use]
    pub fn first(&self) -> Option<Point2> {
        match *self {
            Self::One(p) | Self::Two(p, _) => Some(p),
            Self::None | Self::Infinite => None,
        }
    }

    /// Second reported point, present only for `Two`.
    #[must_use]
    pub fn second(&self) -> Option<Point2> {
        match *self {
            Self::Two(_, q) => Some(q),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    #[must_use]
    pub fn is_infinite(&self) -> bool {
        matches!(self, Self::Infinite)
    }
}
