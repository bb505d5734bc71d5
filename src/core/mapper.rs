//! Hand-to-screen coordinate mapping
//!
//! Normalizes the stable hand position inside the ROI, applies edge
//! overdrive about the center, clamps, scales to screen pixels and smooths
//! each axis with its own OneEuro filter.

use crate::core::filter::OneEuroFilter;
use crate::types::{Point, Roi};
use crate::OVERDRIVE_FACTOR;

/// Stateful mapper: owns the per-axis smoothing filters and the target
/// screen dimensions.
#[derive(Debug)]
pub struct CoordinateMapper {
    screen_w: f64,
    screen_h: f64,
    filter_x: OneEuroFilter,
    filter_y: OneEuroFilter,
}

impl CoordinateMapper {
    pub fn new(screen_w: u32, screen_h: u32) -> Self {
        Self {
            screen_w: screen_w as f64,
            screen_h: screen_h as f64,
            filter_x: OneEuroFilter::default(),
            filter_y: OneEuroFilter::default(),
        }
    }

    /// Map a normalized hand position to smoothed screen coordinates.
    /// A degenerate ROI maps everything to the origin.
    pub fn map(&mut self, hand_pos: Point, roi: &Roi, now: f64) -> Point {
        if roi.is_degenerate() {
            return Point::new(0.0, 0.0);
        }

        let mut nx = (hand_pos.x - roi.x1) / roi.width();
        let mut ny = (hand_pos.y - roi.y1) / roi.height();

        // Overdrive: scale about the center so the operator reaches the
        // screen edges before the hand reaches the ROI boundary
        nx = (nx - 0.5) * OVERDRIVE_FACTOR + 0.5;
        ny = (ny - 0.5) * OVERDRIVE_FACTOR + 0.5;

        nx = nx.clamp(0.0, 1.0);
        ny = ny.clamp(0.0, 1.0);

        let target_x = nx * self.screen_w;
        let target_y = ny * self.screen_h;

        Point::new(
            self.filter_x.filter(target_x, now),
            self.filter_y.filter(target_y, now),
        )
    }
}
