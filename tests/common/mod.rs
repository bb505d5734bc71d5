//! Synthetic hand builders shared by the integration tests
//!
//! Every builder produces a geometrically consistent 21-landmark hand at
//! scale 0.1 (wrist to middle MCP), centered near `(cx, cy)`. The shapes are
//! exaggerated versions of the real poses so each one lands cleanly on a
//! single side of its trigger threshold.
#![allow(dead_code)]

use agamotto::core::{geometry, Controller};
use agamotto::types::landmark_index::*;
use agamotto::types::{HandFrame, Handedness, Landmark, Point};
use agamotto::{CALIBRATION_COOLDOWN_SECS, CALIBRATION_HOLD_SECS};

/// 30 fps camera cadence
pub const FRAME_DT: f64 = 1.0 / 30.0;

fn lm(x: f64, y: f64) -> Landmark {
    Landmark { x, y, z: 0.0 }
}

/// Open splayed hand: all five fingers extended, every fingertip far from
/// the thumb, adjacent tips spread wider than the scroll limit.
pub fn open_hand(label: Handedness, cx: f64, cy: f64) -> HandFrame {
    let mut landmarks = vec![Landmark::default(); 21];
    landmarks[WRIST] = lm(cx, cy + 0.10);
    landmarks[THUMB_MCP] = lm(cx - 0.12, cy + 0.06);
    landmarks[THUMB_IP] = lm(cx - 0.15, cy + 0.04);
    landmarks[THUMB_TIP] = lm(cx - 0.20, cy);
    let columns = [
        (INDEX_MCP, INDEX_PIP, INDEX_TIP, cx - 0.10),
        (MIDDLE_MCP, MIDDLE_PIP, MIDDLE_TIP, cx),
        (RING_MCP, RING_PIP, RING_TIP, cx + 0.08),
        (PINKY_MCP, PINKY_PIP, PINKY_TIP, cx + 0.16),
    ];
    for (mcp, pip, tip, x) in columns {
        landmarks[mcp] = lm(x, cy);
        landmarks[pip] = lm(x, cy - 0.04);
        landmarks[tip] = lm(x, cy - 0.10);
    }
    HandFrame::new(label, landmarks)
}

/// Open hand with the thumb tip at `dist` (normalized) from the index tip
pub fn index_pinch_hand(label: Handedness, cx: f64, cy: f64, dist: f64) -> HandFrame {
    let mut hand = open_hand(label, cx, cy);
    let index_tip = hand.point(INDEX_TIP);
    hand.landmarks[THUMB_TIP] = lm(index_tip.x + dist * 0.1, index_tip.y);
    hand
}

/// Open hand with the thumb tip at `dist` (normalized) from the middle tip
pub fn middle_pinch_hand(label: Handedness, cx: f64, cy: f64, dist: f64) -> HandFrame {
    let mut hand = open_hand(label, cx, cy);
    let middle_tip = hand.point(MIDDLE_TIP);
    hand.landmarks[THUMB_TIP] = lm(middle_tip.x + dist * 0.1, middle_tip.y);
    hand
}

/// Flat hand: all four fingers extended and held together
pub fn scroll_hand(label: Handedness, cx: f64, cy: f64) -> HandFrame {
    let mut hand = open_hand(label, cx, cy);
    let tips = [
        (INDEX_TIP, cx - 0.03),
        (MIDDLE_TIP, cx),
        (RING_TIP, cx + 0.03),
        (PINKY_TIP, cx + 0.06),
    ];
    for (tip, x) in tips {
        hand.landmarks[tip] = lm(x, cy - 0.10);
    }
    hand
}

/// Fist: four fingers curled onto their PIPs, thumb tucked to its MCP
pub fn fist_hand(label: Handedness, cx: f64, cy: f64) -> HandFrame {
    let mut hand = open_hand(label, cx, cy);
    for (pip, tip) in [
        (INDEX_PIP, INDEX_TIP),
        (MIDDLE_PIP, MIDDLE_TIP),
        (RING_PIP, RING_TIP),
        (PINKY_PIP, PINKY_TIP),
    ] {
        let base = hand.landmarks[pip];
        hand.landmarks[tip] = lm(base.x, base.y + 0.02);
    }
    let mcp = hand.landmarks[THUMB_MCP];
    hand.landmarks[THUMB_TIP] = lm(mcp.x + 0.01, mcp.y);
    hand
}

/// Two-finger pose: index and middle extended, everything else curled
pub fn middle_click_hand(label: Handedness, cx: f64, cy: f64) -> HandFrame {
    let mut hand = open_hand(label, cx, cy);
    for (pip, tip) in [(RING_PIP, RING_TIP), (PINKY_PIP, PINKY_TIP)] {
        let base = hand.landmarks[pip];
        hand.landmarks[tip] = lm(base.x, base.y + 0.02);
    }
    let mcp = hand.landmarks[THUMB_MCP];
    hand.landmarks[THUMB_TIP] = lm(mcp.x + 0.01, mcp.y);
    hand
}

/// Open hand sealing: thumb tip on the ring tip
pub fn ring_pinch_hand(label: Handedness, cx: f64, cy: f64) -> HandFrame {
    let mut hand = open_hand(label, cx, cy);
    hand.landmarks[THUMB_TIP] = hand.landmarks[RING_TIP];
    hand
}

/// Open hand with the thumb tip on the pinky tip
pub fn pinky_pinch_hand(label: Handedness, cx: f64, cy: f64) -> HandFrame {
    let mut hand = open_hand(label, cx, cy);
    hand.landmarks[THUMB_TIP] = hand.landmarks[PINKY_TIP];
    hand
}

/// Cursor anchor the engine derives from a hand
pub fn stable_pos(hand: &HandFrame) -> Point {
    geometry::stable_hand_pos(hand)
}

/// Run the full unlock ritual: seal with the left hand, cross it over the
/// right, hold. Returns the time of the activating frame.
pub fn activate(controller: &mut Controller, start: f64) -> f64 {
    let seal = ring_pinch_hand(Handedness::Left, 0.75, 0.5);
    let right = open_hand(Handedness::Right, 0.25, 0.5);

    controller.process(&[seal.clone(), right.clone()], start);
    let t = start + 1.5;
    let step = controller.process(&[seal, right], t);
    assert!(step.snapshot.system.is_active, "unlock ritual did not activate");
    t
}

/// Calibrate the standard square region: pinky-pinch holds at four corner
/// hand positions, waiting out each cooldown. Returns the time after the
/// final commit.
pub fn calibrate(controller: &mut Controller, start: f64) -> f64 {
    let corners = [(0.3, 0.3), (0.7, 0.3), (0.7, 0.7), (0.3, 0.7)];
    let mut t = start;
    for (cx, cy) in corners {
        let pinch = pinky_pinch_hand(Handedness::Right, cx, cy);
        controller.process(&[pinch.clone()], t);
        controller.process(&[pinch], t + CALIBRATION_HOLD_SECS);
        // Release the pinch, then wait out the add cooldown
        controller.process(&[open_hand(Handedness::Right, cx, cy)], t + CALIBRATION_HOLD_SECS + 0.1);
        t += CALIBRATION_HOLD_SECS + CALIBRATION_COOLDOWN_SECS + 0.2;
    }
    t
}
