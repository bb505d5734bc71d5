//! Interactive 4-point region calibration
//!
//! While the system is active and uncalibrated, a held pinky pinch commits
//! the current stable hand position as a corner point and a held fist undoes
//! the last one. Four points close the loop: the ROI becomes their bounding
//! box. A cooldown after each add keeps one long pinch from registering
//! twice.

use crate::core::geometry;
use crate::types::{CalibrationView, DebugInfo, FeedbackEvent, HandFrame, Point, Roi};
use crate::{
    CALIBRATION_COOLDOWN_SECS, CALIBRATION_HOLD_SECS, CALIBRATION_POINT_COUNT,
    PINKY_PINCH_RELEASE, PINKY_PINCH_TRIGGER,
};

/// Calibration state machine. Points accumulate in memory only; nothing is
/// persisted across runs.
#[derive(Debug)]
pub struct CalibrationEngine {
    points: Vec<Point>,
    calibrated: bool,
    roi: Roi,
    /// When the current pinky-pinch hold began
    add_hold_since: Option<f64>,
    /// When the current fist hold began
    undo_hold_since: Option<f64>,
    /// Adds are ignored until this instant
    cooldown_until: Option<f64>,
    /// Pinky-pinch hysteresis latch
    pinky_pinching: bool,
}

impl Default for CalibrationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CalibrationEngine {
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            calibrated: false,
            roi: Roi::default(),
            add_hold_since: None,
            undo_hold_since: None,
            cooldown_until: None,
            pinky_pinching: false,
        }
    }

    pub fn is_calibrated(&self) -> bool {
        self.calibrated
    }

    /// The calibrated ROI; the centered default until calibration completes
    pub fn roi(&self) -> Roi {
        self.roi
    }

    /// Bounding box of the committed points, once two or more exist
    fn roi_preview(&self) -> Option<Roi> {
        if self.points.len() < 2 {
            return None;
        }
        Some(Roi::bounding_box(&self.points))
    }

    fn track_pinky_pinch(&mut self, hand: &HandFrame) {
        let dist = geometry::pinky_pinch_distance(hand);
        if self.pinky_pinching {
            if dist > PINKY_PINCH_RELEASE {
                self.pinky_pinching = false;
            }
        } else if dist < PINKY_PINCH_TRIGGER {
            self.pinky_pinching = true;
        }
    }

    fn complete(&mut self, events: &mut Vec<FeedbackEvent>) {
        self.roi = Roi::bounding_box(&self.points);
        self.calibrated = true;
        events.push(FeedbackEvent::CalibrationDone);
    }

    /// Advance calibration one frame
    pub fn update(
        &mut self,
        hand_pos: Point,
        hand: &HandFrame,
        debug: DebugInfo,
        now: f64,
        events: &mut Vec<FeedbackEvent>,
    ) -> CalibrationView {
        self.track_pinky_pinch(hand);
        let is_fist = geometry::is_fist(hand);

        let next_point = (self.points.len() + 1).min(CALIBRATION_POINT_COUNT);
        let mut message = format!("CALIBRATE POINT {}", next_point);
        let mut progress = 0.0;

        let in_cooldown = self.cooldown_until.map_or(false, |until| now < until);
        if in_cooldown {
            let remaining = self.cooldown_until.unwrap_or(now) - now;
            progress = (1.0 - remaining / CALIBRATION_COOLDOWN_SECS).clamp(0.0, 1.0);
            message = format!("CALIBRATION SUCCESS | PROCEED TO POINT {}", next_point);
        }

        if is_fist {
            if self.undo_hold_since.is_none() {
                self.undo_hold_since = Some(now);
                events.push(FeedbackEvent::CalibrationTick);
            }
            let elapsed = now - self.undo_hold_since.unwrap_or(now);
            progress = (elapsed / CALIBRATION_HOLD_SECS).min(1.0);
            message = "HOLD FIST TO UNDO".to_string();
            if elapsed >= CALIBRATION_HOLD_SECS {
                if self.points.pop().is_some() {
                    events.push(FeedbackEvent::CalibrationTick);
                }
                self.cooldown_until = None;
                self.undo_hold_since = None;
            }
        } else if !in_cooldown && self.pinky_pinching {
            if self.add_hold_since.is_none() {
                self.add_hold_since = Some(now);
                events.push(FeedbackEvent::CalibrationTick);
            }
            let elapsed = now - self.add_hold_since.unwrap_or(now);
            progress = (elapsed / CALIBRATION_HOLD_SECS).min(1.0);
            message = "HOLD PINKY PINCH TO ADD".to_string();
            if elapsed >= CALIBRATION_HOLD_SECS {
                self.points.push(hand_pos);
                events.push(FeedbackEvent::CalibrationTick);
                self.cooldown_until = Some(now + CALIBRATION_COOLDOWN_SECS);
                self.add_hold_since = None;
                if self.points.len() >= CALIBRATION_POINT_COUNT {
                    self.complete(events);
                    message = "CALIBRATION COMPLETE".to_string();
                } else {
                    message = format!(
                        "CALIBRATION SUCCESS | PROCEED TO POINT {}",
                        self.points.len() + 1
                    );
                }
            }
        } else {
            self.add_hold_since = None;
            self.undo_hold_since = None;
            if !in_cooldown {
                message = format!("CALIBRATE POINT {} | PINKY PINCH TO SET", next_point);
            }
        }

        CalibrationView {
            message,
            step: self.points.len(),
            progress,
            hand_pos,
            points: self.points.clone(),
            roi_preview: self.roi_preview(),
            debug,
        }
    }
}
