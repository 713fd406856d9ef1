#[cfg(test)]
#[path = "coords_test.rs"]
mod coords_test;

use serde::{Deserialize, Serialize};

/// A position in homogeneous user coordinates `[1, x, y]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coords {
    pub usr_coords: [f64; 3],
}

impl Coords {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { usr_coords: [1.0, x, y] }
    }

    #[must_use]
    pub fn origin() -> Self {
        Self::new(0.0, 0.0)
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.usr_coords[1]
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.usr_coords[2]
    }

    /// Euclidean distance to `other` in user units.
    #[must_use]
    pub fn distance(&self, other: &Coords) -> f64 {
        (self.x() - other.x()).hypot(self.y() - other.y())
    }

    /// Shift by the x/y components of `offset`.
    #[must_use]
    pub fn translate(&self, offset: &Coords) -> Coords {
        Coords::new(self.x() + offset.x(), self.y() + offset.y())
    }

    /// Returns `true` if both affine components are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x().is_finite() && self.y().is_finite()
    }
}

impl Default for Coords {
    fn default() -> Self {
        Self::origin()
    }
}
