//! 2D point value type
//!
//! One type for every 2D position in the engine: landmarks projected to the
//! image plane, stable hand positions, calibration points, lock positions
//! and mapped screen coordinates.

use serde::{Deserialize, Serialize};

/// A 2D point. Units depend on context: normalized [0,1] camera space for
/// hand positions, absolute pixels for screen positions.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}
