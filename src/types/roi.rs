//! Region of interest: the normalized camera rectangle mapped onto the screen

use serde::{Deserialize, Serialize};

use crate::types::Point;

/// Axis-aligned rectangle in normalized [0,1] camera coordinates.
/// Invariant: x1 <= x2 and y1 <= y2. A degenerate rectangle (zero width or
/// height) is representable and must not crash downstream mapping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Roi {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Roi {
    /// Bounding box of a point set. Empty input yields the degenerate
    /// rectangle at the origin.
    pub fn bounding_box(points: &[Point]) -> Self {
        let mut bounds = Roi {
            x1: f64::INFINITY,
            y1: f64::INFINITY,
            x2: f64::NEG_INFINITY,
            y2: f64::NEG_INFINITY,
        };
        for p in points {
            bounds.x1 = bounds.x1.min(p.x);
            bounds.y1 = bounds.y1.min(p.y);
            bounds.x2 = bounds.x2.max(p.x);
            bounds.y2 = bounds.y2.max(p.y);
        }
        if points.is_empty() {
            return Roi { x1: 0.0, y1: 0.0, x2: 0.0, y2: 0.0 };
        }
        bounds
    }

    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    /// Zero width or height: downstream mapping must bail out, not divide
    pub fn is_degenerate(&self) -> bool {
        self.width() == 0.0 || self.height() == 0.0
    }
}

impl Default for Roi {
    /// Centered working region used until calibration completes
    fn default() -> Self {
        Roi { x1: 0.2, y1: 0.2, x2: 0.8, y2: 0.8 }
    }
}
