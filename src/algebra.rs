//! Angle measure and degeneracy predicates for three defining points.

#[cfg(test)]
#[path = "algebra_test.rs"]
mod algebra_test;

use std::f64::consts::TAU;

use crate::coords::Coords;

/// Counter-clockwise angle at `b` from ray `b -> a` to ray `b -> c`, in radians
/// within `[0, 2π)`.
#[must_use]
pub fn rad(a: &Coords, b: &Coords, c: &Coords) -> f64 {
    let phi = (c.y() - b.y()).atan2(c.x() - b.x()) - (a.y() - b.y()).atan2(a.x() - b.x());
    if phi < 0.0 { phi + TAU } else { phi }
}

/// Same as [`rad`], in degrees within `[0, 360)`.
#[must_use]
pub fn true_angle(a: &Coords, b: &Coords, c: &Coords) -> f64 {
    rad(a, b, c).to_degrees()
}

/// An angle is real when every coordinate is finite and neither leg has zero length.
#[must_use]
pub fn is_real(a: &Coords, b: &Coords, c: &Coords) -> bool {
    a.is_finite() && b.is_finite() && c.is_finite() && a.distance(b) > 0.0 && c.distance(b) > 0.0
}
