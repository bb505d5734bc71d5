//! Hand geometry utilities
//!
//! Everything here is scale-invariant: distances between landmarks are
//! normalized by the wrist-to-middle-MCP span so gestures read the same for
//! small hands, large hands, and any camera distance.

use crate::types::landmark_index::*;
use crate::types::{HandFrame, Point};
use crate::{
    FINGER_EXTENDED_RATIO, RING_PINCH_TRIGGER, SCROLL_MAX_SPREAD, THUMB_EXTENDED_RATIO,
};

/// Wrist-to-middle-MCP distance, the per-hand normalization unit.
/// A zero span (degenerate detection) substitutes 1.0 so callers never
/// divide by zero.
pub fn hand_scale(hand: &HandFrame) -> f64 {
    let scale = hand.point(WRIST).distance_to(hand.point(MIDDLE_MCP));
    if scale == 0.0 {
        1.0
    } else {
        scale
    }
}

/// Distance between two landmarks, normalized by hand scale
pub fn normalized_distance(hand: &HandFrame, a: usize, b: usize) -> f64 {
    hand.point(a).distance_to(hand.point(b)) / hand_scale(hand)
}

/// Extended/curled flag per finger: thumb, index, middle, ring, pinky.
///
/// Thumb: tip-to-MCP beyond 1.4x the IP-to-MCP segment. Other fingers:
/// tip-to-MCP beyond 1.6x the PIP-to-MCP segment.
pub fn finger_states(hand: &HandFrame) -> [bool; 5] {
    let thumb_ref = hand.point(THUMB_IP).distance_to(hand.point(THUMB_MCP));
    let thumb_reach = hand.point(THUMB_TIP).distance_to(hand.point(THUMB_MCP));
    let thumb = thumb_reach > thumb_ref * THUMB_EXTENDED_RATIO;

    let fingers = [
        (INDEX_TIP, INDEX_PIP, INDEX_MCP),
        (MIDDLE_TIP, MIDDLE_PIP, MIDDLE_MCP),
        (RING_TIP, RING_PIP, RING_MCP),
        (PINKY_TIP, PINKY_PIP, PINKY_MCP),
    ];

    let mut states = [thumb, false, false, false, false];
    for (i, (tip, pip, mcp)) in fingers.iter().enumerate() {
        let reference = hand.point(*pip).distance_to(hand.point(*mcp));
        let reach = hand.point(*tip).distance_to(hand.point(*mcp));
        states[i + 1] = reach > reference * FINGER_EXTENDED_RATIO;
    }
    states
}

/// Anchor position for cursor mapping: mean of wrist and the four finger
/// MCPs. Far less jittery than any single landmark.
pub fn stable_hand_pos(hand: &HandFrame) -> Point {
    let anchors = [WRIST, INDEX_MCP, MIDDLE_MCP, RING_MCP, PINKY_MCP];
    let mut x = 0.0;
    let mut y = 0.0;
    for idx in anchors {
        let p = hand.point(idx);
        x += p.x;
        y += p.y;
    }
    Point::new(x / anchors.len() as f64, y / anchors.len() as f64)
}

/// All five fingers extended
pub fn is_palm_open(hand: &HandFrame) -> bool {
    finger_states(hand).iter().all(|&s| s)
}

/// All four non-thumb fingers curled
pub fn is_fist(hand: &HandFrame) -> bool {
    !finger_states(hand)[1..].iter().any(|&s| s)
}

/// Index and middle extended, thumb, ring and pinky curled
pub fn is_middle_click_shape(hand: &HandFrame) -> bool {
    let [thumb, index, middle, ring, pinky] = finger_states(hand);
    !thumb && index && middle && !ring && !pinky
}

/// Flat hand: all four non-thumb fingers extended and held together.
/// Distinct from an open splayed palm - every adjacent tip pair must stay
/// within the spread limit.
pub fn is_scroll_shape(hand: &HandFrame) -> bool {
    if finger_states(hand)[1..].iter().any(|&s| !s) {
        return false;
    }
    let tips = [INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP];
    for pair in tips.windows(2) {
        if normalized_distance(hand, pair[0], pair[1]) > SCROLL_MAX_SPREAD {
            return false;
        }
    }
    true
}

/// Thumb-to-ring pinch, the activation seal
pub fn is_ring_pinch(hand: &HandFrame) -> bool {
    normalized_distance(hand, THUMB_TIP, RING_TIP) < RING_PINCH_TRIGGER
}

/// Thumb-to-pinky distance, normalized. The calibration engine applies its
/// own trigger/release hysteresis on top.
pub fn pinky_pinch_distance(hand: &HandFrame) -> f64 {
    normalized_distance(hand, THUMB_TIP, PINKY_TIP)
}
