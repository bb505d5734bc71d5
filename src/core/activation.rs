//! System activation state machine
//!
//! Unlock ritual: seal (ring pinch on either hand) arms a 3-second window,
//! then crossing the wrists and holding for 1.5 s activates. Lock ritual:
//! both palms open for 1.5 s. Everything needs two tracked hands; losing one
//! resets all progress.
//!
//! State transitions:
//! - LOCKED → SEAL_PENDING: ring pinch seen, window armed
//! - SEAL_PENDING → CROSSING: left wrist x beyond right wrist x + margin
//! - CROSSING → ACTIVE: crossed continuously for 1.5 s inside the window
//! - window expiry → LOCKED
//! - ACTIVE → DEACTIVATING → LOCKED: open palms held 1.5 s

use crate::core::geometry;
use crate::types::landmark_index::WRIST;
use crate::types::{FeedbackEvent, HandFrame, Handedness, SystemState};
use crate::{ACTIVATION_HOLD_SECS, CROSS_MARGIN, SEAL_WINDOW_SECS};

/// Progress/message pair consumed by the rendering collaborator
#[derive(Debug, Clone, PartialEq)]
pub struct ActivationUpdate {
    /// Hold progress in [0,1]
    pub progress: f64,
    /// Operator prompt, empty when idle
    pub message: String,
}

impl ActivationUpdate {
    fn idle() -> Self {
        Self { progress: 0.0, message: String::new() }
    }

    fn new(progress: f64, message: &str) -> Self {
        Self { progress, message: message.to_string() }
    }
}

/// Bimanual unlock/lock state machine. The wall clock is passed in so the
/// timers are deterministic under test.
#[derive(Debug)]
pub struct ActivationEngine {
    state: SystemState,
    /// Deadline of the armed crossing window
    seal_expires_at: Option<f64>,
    /// When the continuous crossed hold began
    cross_hold_since: Option<f64>,
    /// When the continuous open-palms hold began
    release_hold_since: Option<f64>,
}

impl Default for ActivationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ActivationEngine {
    pub fn new() -> Self {
        Self {
            state: SystemState::Locked,
            seal_expires_at: None,
            cross_hold_since: None,
            release_hold_since: None,
        }
    }

    /// Pointer control enabled?
    pub fn is_active(&self) -> bool {
        matches!(self.state, SystemState::Active | SystemState::Deactivating)
    }

    pub fn state(&self) -> SystemState {
        self.state
    }

    /// Advance the machine one frame. Feedback events are appended to
    /// `events` for the audio collaborator.
    pub fn update(
        &mut self,
        hands: &[&HandFrame],
        now: f64,
        events: &mut Vec<FeedbackEvent>,
    ) -> ActivationUpdate {
        if hands.len() < 2 {
            // Both rituals need two hands; drop all progress but keep an
            // already-active system active.
            self.cross_hold_since = None;
            self.release_hold_since = None;
            if !self.is_active() {
                self.state = SystemState::Locked;
                self.seal_expires_at = None;
            } else {
                self.state = SystemState::Active;
            }
            return ActivationUpdate::idle();
        }

        let (left, right) = Self::pick_hands(hands);

        if !self.is_active() {
            return self.update_unlock(left, right, now, events);
        }
        self.update_lock(left, right, now, events)
    }

    /// Prefer labeled left/right; with duplicate labels fall back to frame order
    fn pick_hands<'a>(hands: &[&'a HandFrame]) -> (&'a HandFrame, &'a HandFrame) {
        let left = hands.iter().find(|h| h.label == Handedness::Left);
        let right = hands.iter().find(|h| h.label == Handedness::Right);
        match (left, right) {
            (Some(l), Some(r)) => (l, r),
            _ => (hands[0], hands[1]),
        }
    }

    fn update_unlock(
        &mut self,
        left: &HandFrame,
        right: &HandFrame,
        now: f64,
        events: &mut Vec<FeedbackEvent>,
    ) -> ActivationUpdate {
        let sealing = geometry::is_ring_pinch(left) || geometry::is_ring_pinch(right);
        if sealing {
            // Tick only on the first arming, re-arming is silent
            if self.state == SystemState::Locked {
                events.push(FeedbackEvent::CalibrationTick);
            }
            self.seal_expires_at = Some(now + SEAL_WINDOW_SECS);
        }

        let window_live = self.seal_expires_at.map_or(false, |deadline| now < deadline);
        if !window_live {
            self.state = SystemState::Locked;
            self.cross_hold_since = None;
            return ActivationUpdate::new(0.0, "PINCH RING");
        }

        let crossed = left.point(WRIST).x > right.point(WRIST).x + CROSS_MARGIN;
        if !crossed {
            // Uncrossing resets the hold but the window stays armed
            self.state = SystemState::SealPending;
            self.cross_hold_since = None;
            let remaining = (self.seal_expires_at.unwrap_or(now) - now) as i64 + 1;
            return ActivationUpdate::new(0.0, &format!("CROSS HANDS ({}s)", remaining));
        }

        self.state = SystemState::Crossing;
        let since = *self.cross_hold_since.get_or_insert(now);
        let elapsed = now - since;
        if elapsed >= ACTIVATION_HOLD_SECS {
            self.state = SystemState::Active;
            self.cross_hold_since = None;
            self.seal_expires_at = None;
            events.push(FeedbackEvent::Activated);
            return ActivationUpdate::new(1.0, "EYE OPENED");
        }
        ActivationUpdate::new((elapsed / ACTIVATION_HOLD_SECS).min(1.0), "OPENING...")
    }

    fn update_lock(
        &mut self,
        left: &HandFrame,
        right: &HandFrame,
        now: f64,
        events: &mut Vec<FeedbackEvent>,
    ) -> ActivationUpdate {
        if geometry::is_palm_open(left) && geometry::is_palm_open(right) {
            self.state = SystemState::Deactivating;
            let since = *self.release_hold_since.get_or_insert(now);
            let elapsed = now - since;
            if elapsed >= ACTIVATION_HOLD_SECS {
                self.state = SystemState::Locked;
                self.release_hold_since = None;
                events.push(FeedbackEvent::Deactivated);
                return ActivationUpdate::new(1.0, "DEACTIVATED");
            }
            return ActivationUpdate::new((elapsed / ACTIVATION_HOLD_SECS).min(1.0), "HOLD TO STOP");
        }

        self.state = SystemState::Active;
        self.release_hold_since = None;
        ActivationUpdate::idle()
    }
}
