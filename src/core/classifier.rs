//! Gesture classification with hysteresis and frame debounce
//!
//! Priority order: right pinch, left pinch, middle-click shape, scroll
//! shape, fist, then move. Pinches use separate trigger/release thresholds
//! so a hand hovering at the boundary never flickers; every candidate must
//! survive a run of identical frames before it becomes current.

use crate::core::geometry;
use crate::types::landmark_index::{INDEX_TIP, MIDDLE_TIP, THUMB_TIP};
use crate::types::{Gesture, HandFrame};
use crate::{
    GESTURE_CONFIRM_FRAMES, LEFT_PINCH_RELEASE, LEFT_PINCH_TRIGGER, RIGHT_PINCH_RELEASE,
    RIGHT_PINCH_TRIGGER,
};

/// Per-hand gesture classifier. One long-lived instance; state carries the
/// pinch hysteresis latches and the debounce counter.
#[derive(Debug)]
pub struct GestureClassifier {
    left_pinching: bool,
    right_pinching: bool,
    /// Gesture currently being confirmed
    candidate: Gesture,
    /// Consecutive frames the candidate has been observed
    candidate_frames: u32,
    current: Gesture,
    last_dist_index: f64,
    last_dist_middle: f64,
}

impl Default for GestureClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureClassifier {
    pub fn new() -> Self {
        Self {
            left_pinching: false,
            right_pinching: false,
            candidate: Gesture::Move,
            candidate_frames: 0,
            current: Gesture::Move,
            last_dist_index: 0.0,
            last_dist_middle: 0.0,
        }
    }

    /// Classify one frame and return the debounced current gesture
    pub fn classify(&mut self, hand: &HandFrame) -> Gesture {
        self.last_dist_index = geometry::normalized_distance(hand, THUMB_TIP, INDEX_TIP);
        self.last_dist_middle = geometry::normalized_distance(hand, THUMB_TIP, MIDDLE_TIP);

        let detected = self.detect(hand);

        if detected == self.candidate {
            self.candidate_frames += 1;
        } else {
            self.candidate = detected;
            self.candidate_frames = 1;
        }

        if self.candidate_frames >= GESTURE_CONFIRM_FRAMES {
            self.current = self.candidate;
        }
        self.current
    }

    /// Raw priority-ordered detection for a single frame, before debounce
    fn detect(&mut self, hand: &HandFrame) -> Gesture {
        if self.right_pinching {
            if self.last_dist_middle > RIGHT_PINCH_RELEASE {
                self.right_pinching = false;
            } else {
                return Gesture::RightPinch;
            }
        } else if self.last_dist_middle < RIGHT_PINCH_TRIGGER {
            self.right_pinching = true;
            return Gesture::RightPinch;
        }

        if self.left_pinching {
            if self.last_dist_index > LEFT_PINCH_RELEASE {
                self.left_pinching = false;
            } else {
                return Gesture::LeftPinch;
            }
        } else if self.last_dist_index < LEFT_PINCH_TRIGGER {
            self.left_pinching = true;
            return Gesture::LeftPinch;
        }

        if geometry::is_middle_click_shape(hand) {
            return Gesture::MiddleClick;
        }
        if geometry::is_scroll_shape(hand) {
            return Gesture::Scroll;
        }
        if geometry::is_fist(hand) {
            return Gesture::Fist;
        }
        Gesture::Move
    }

    /// Debounced current gesture without reclassifying
    pub fn current(&self) -> Gesture {
        self.current
    }

    /// Normalized thumb-to-index distance from the last classified frame
    pub fn last_dist_index(&self) -> f64 {
        self.last_dist_index
    }

    /// Normalized thumb-to-middle distance from the last classified frame
    pub fn last_dist_middle(&self) -> f64 {
        self.last_dist_middle
    }
}
