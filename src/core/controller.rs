//! Per-frame orchestration
//!
//! One long-lived `Controller` instance, stepped once per camera frame with
//! the wall clock passed in. Activation gates everything; an active system
//! runs calibration until four points exist, then the running pointer
//! pipeline. The step function always returns a valid snapshot - no input
//! condition escalates to an error.

use crate::core::{
    ActionDispatcher, ActivationEngine, CalibrationEngine, CoordinateMapper, GestureClassifier,
    geometry,
};
use crate::types::landmark_index::{INDEX_TIP, MIDDLE_TIP, THUMB_TIP};
use crate::types::{
    ControlStep, ControllerSnapshot, DebugInfo, Gesture, HandFrame, Point, RunningView,
    SnapshotMode, SystemStatus,
};
use crate::{
    DRAG_DEADZONE_PX, LEFT_PINCH_TRIGGER, SCROLL_SPEED_FACTOR, SCROLL_THRESHOLD_PX,
    TAP_MAX_DURATION,
};

/// The gesture-control engine. Owns every state machine and all cross-frame
/// pointer state; hand frames are borrowed for one call only.
#[derive(Debug)]
pub struct Controller {
    activation: ActivationEngine,
    calibration: CalibrationEngine,
    classifier: GestureClassifier,
    mapper: CoordinateMapper,
    dispatcher: ActionDispatcher,

    current_gesture: Gesture,
    /// Mapped position captured when a pinch or scroll began
    gesture_lock_pos: Option<Point>,
    /// When the current left pinch began, for tap-vs-drag disambiguation
    left_pinch_since: Option<f64>,
    /// Mapped y captured when the scroll gesture began
    scroll_anchor_y: Option<f64>,
    /// Fist double-click already fired for this gesture episode
    double_click_armed: bool,
    /// Middle click already fired for this gesture episode
    middle_click_armed: bool,
}

impl Controller {
    pub fn new(screen_w: u32, screen_h: u32) -> Self {
        Self {
            activation: ActivationEngine::new(),
            calibration: CalibrationEngine::new(),
            classifier: GestureClassifier::new(),
            mapper: CoordinateMapper::new(screen_w, screen_h),
            dispatcher: ActionDispatcher::new(),
            current_gesture: Gesture::Move,
            gesture_lock_pos: None,
            left_pinch_since: None,
            scroll_anchor_y: None,
            double_click_armed: false,
            middle_click_armed: false,
        }
    }

    /// Advance the engine by one camera frame. `now` is monotonic seconds.
    pub fn process(&mut self, hands: &[HandFrame], now: f64) -> ControlStep {
        // Malformed detector output counts as an absent hand, never a fault
        let valid: Vec<&HandFrame> = hands.iter().filter(|h| h.is_valid()).collect();

        let mut feedback = Vec::new();
        let activation = self.activation.update(&valid, now, &mut feedback);
        let system = SystemStatus {
            is_active: self.activation.is_active(),
            state: self.activation.state(),
            progress: activation.progress,
            message: activation.message,
        };

        if !system.is_active || valid.is_empty() {
            return ControlStep {
                snapshot: ControllerSnapshot { system, mode: SnapshotMode::Standby },
                commands: self.dispatcher.take_commands(),
                feedback,
            };
        }

        let hand = valid[0];
        let hand_pos = geometry::stable_hand_pos(hand);
        let debug = Self::debug_info(hand);

        let mode = if !self.calibration.is_calibrated() {
            let view = self.calibration.update(hand_pos, hand, debug, now, &mut feedback);
            SnapshotMode::Calibration(view)
        } else {
            let gesture = self.classifier.classify(hand);
            SnapshotMode::Running(self.run_pointer_pipeline(hand_pos, gesture, debug, now))
        };

        ControlStep {
            snapshot: ControllerSnapshot { system, mode },
            commands: self.dispatcher.take_commands(),
            feedback,
        }
    }

    /// Debounced gesture currently in effect
    pub fn current_gesture(&self) -> Gesture {
        self.current_gesture
    }

    fn debug_info(hand: &HandFrame) -> DebugInfo {
        DebugInfo {
            dist_index: geometry::normalized_distance(hand, THUMB_TIP, INDEX_TIP),
            dist_middle: geometry::normalized_distance(hand, THUMB_TIP, MIDDLE_TIP),
            threshold: LEFT_PINCH_TRIGGER,
            fingers: geometry::finger_states(hand),
        }
    }

    /// Running-mode pipeline: map, react to gesture edges, then apply the
    /// per-gesture cursor behavior.
    fn run_pointer_pipeline(
        &mut self,
        hand_pos: Point,
        gesture: Gesture,
        debug: DebugInfo,
        now: f64,
    ) -> RunningView {
        let roi = self.calibration.roi();
        let target = self.mapper.map(hand_pos, &roi, now);

        if gesture != self.current_gesture {
            self.on_gesture_edge(gesture, target, now);
            self.current_gesture = gesture;
        }

        let mut final_pos = target;
        match self.current_gesture {
            Gesture::LeftPinch => {
                if let Some(lock) = self.gesture_lock_pos {
                    if target.distance_to(lock) < DRAG_DEADZONE_PX {
                        // Hand tremor stays pinned to the lock position
                        final_pos = lock;
                    } else if !self.dispatcher.is_dragging() {
                        self.dispatcher.mouse_down(lock);
                    }
                }
                self.dispatcher.move_cursor(final_pos);
            }
            Gesture::RightPinch => {
                self.dispatcher.move_cursor(final_pos);
            }
            Gesture::Fist => {
                if !self.double_click_armed && self.dispatcher.double_click(now) {
                    self.double_click_armed = true;
                }
                self.dispatcher.move_cursor(final_pos);
            }
            Gesture::MiddleClick => {
                if !self.middle_click_armed && self.dispatcher.middle_click(now) {
                    self.middle_click_armed = true;
                }
                self.dispatcher.move_cursor(final_pos);
            }
            Gesture::Scroll => {
                if let Some(lock) = self.gesture_lock_pos {
                    // Scrolling must not also move the pointer
                    final_pos = lock;
                }
                self.emit_scroll(target);
                self.dispatcher.move_cursor(final_pos);
            }
            Gesture::Move => {
                self.double_click_armed = false;
                self.middle_click_armed = false;
                self.dispatcher.move_cursor(final_pos);
            }
        }

        RunningView {
            screen_pos: final_pos,
            is_dragging: self.dispatcher.is_dragging(),
            roi,
            hand_pos,
            debug,
        }
    }

    /// React once to a gesture transition
    fn on_gesture_edge(&mut self, gesture: Gesture, target: Point, now: f64) {
        match gesture {
            Gesture::LeftPinch => {
                self.gesture_lock_pos = Some(target);
                self.left_pinch_since = Some(now);
            }
            Gesture::RightPinch => {
                self.dispatcher.right_click(target, now);
            }
            Gesture::Scroll => {
                self.scroll_anchor_y = Some(target.y);
                self.gesture_lock_pos = Some(target);
            }
            Gesture::Move => {
                if self.dispatcher.is_dragging() {
                    self.dispatcher.mouse_up();
                } else if self.current_gesture == Gesture::LeftPinch {
                    // Pinch released quickly without dragging: a tap
                    if let (Some(lock), Some(since)) = (self.gesture_lock_pos, self.left_pinch_since)
                    {
                        if now - since <= TAP_MAX_DURATION {
                            self.dispatcher.click(lock, now);
                        }
                    }
                }
                self.gesture_lock_pos = None;
            }
            _ => {}
        }
    }

    /// Scroll proportionally to the vertical offset from the anchor, unless
    /// the hand is on its way back toward it.
    fn emit_scroll(&mut self, target: Point) {
        let Some(anchor) = self.scroll_anchor_y else {
            return;
        };
        let dy = target.y - anchor;
        if dy.abs() <= SCROLL_THRESHOLD_PX {
            return;
        }
        let last_y = self
            .dispatcher
            .last_cursor()
            .map_or(target.y, |(_, y)| y as f64);
        let delta = target.y - last_y;
        // A strongly opposed instantaneous delta means the hand is returning
        // to the anchor; suppress the tick to avoid reversal artifacts
        if dy * delta < -0.1 {
            return;
        }
        let clicks = (dy * SCROLL_SPEED_FACTOR / 10.0) as i32;
        if clicks != 0 {
            self.dispatcher.scroll(clicks * 20);
        }
    }
}
