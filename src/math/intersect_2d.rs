use super::tolerance::{is_greater_or_equals, is_negative, is_zero};
use super::{Point2, Vector2};

/// 2D cross product (determinant) `a.x * b.y - a.y * b.x`.
#[must_use]
pub fn cross_2d(a: &Vector2, b: &Vector2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Cramer's-rule terms for the parametric lines `p1 + t * d1` and `p2 + u * d2`.
///
/// The parameters are `t = t_numerator / denominator` and
/// `u = u_numerator / denominator`. Callers test admissibility on the signs of
/// the terms and only divide once a point is actually needed.
#[derive(Debug, Clone, Copy)]
pub struct LineParams {
    pub denominator: f64,
    pub t_numerator: f64,
    pub u_numerator: f64,
}

impl LineParams {
    /// Returns `true` when the two directions are parallel within tolerance.
    #[must_use]
    pub fn is_parallel(&self) -> bool {
        is_zero(self.denominator)
    }

    /// Value of `t`. Only meaningful when the lines are not parallel.
    #[must_use]
    pub fn t(&self) -> f64 {
        self.t_numerator / self.denominator
    }
}

/// Computes the [`LineParams`] of two parametric lines.
#[must_use]
pub fn line_line_params_2d(p1: &Point2, d1: &Vector2, p2: &Point2, d2: &Vector2) -> LineParams {
    let w = p2 - p1;
    LineParams {
        denominator: cross_2d(d1, d2),
        t_numerator: cross_2d(&w, d2),
        u_numerator: cross_2d(&w, d1),
    }
}

/// Returns `true` if `numerator / denominator >= 0` without dividing.
///
/// A numerator within tolerance of zero always qualifies.
#[must_use]
pub fn param_non_negative(numerator: f64, denominator: f64) -> bool {
    is_negative(denominator) == is_negative(numerator) || is_zero(numerator)
}

/// Returns `true` if `numerator / denominator` lies in `[0, 1]` without dividing.
#[must_use]
pub fn param_in_unit_range(numerator: f64, denominator: f64) -> bool {
    (is_negative(denominator) == is_negative(numerator)
        && is_greater_or_equals(denominator.abs(), numerator.abs()))
        || is_zero(numerator)
}
