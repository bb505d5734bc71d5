//! Integration tests - running pointer pipeline
//!
//! Full end-to-end scenarios after unlock and calibration:
//! - quick pinch-release taps once at the locked position
//! - pinch-and-travel becomes a drag with press and release
//! - the flat hand scrolls without moving the cursor
//! - fist and two-finger poses click once per episode
//! - middle pinch right-clicks with a throttle

mod common;

use pretty_assertions::assert_eq;

use agamotto::core::Controller;
use agamotto::types::{Handedness, PointerCommand, RunningView, SnapshotMode};
use common::*;

/// Unlocked, calibrated controller with the cursor settled near screen
/// center. Returns the time of the last settle frame.
fn running_controller() -> (Controller, f64) {
    let mut controller = Controller::new(1920, 1080);
    let t = activate(&mut controller, 0.0);
    let mut t = calibrate(&mut controller, t + FRAME_DT);

    for _ in 0..6 {
        controller.process(&[open_hand(Handedness::Right, 0.5, 0.5)], t);
        t += FRAME_DT;
    }
    (controller, t)
}

fn running_view(mode: &SnapshotMode) -> &RunningView {
    match mode {
        SnapshotMode::Running(view) => view,
        other => panic!("expected running mode, got {:?}", other),
    }
}

fn count(commands: &[PointerCommand], pred: fn(&PointerCommand) -> bool) -> usize {
    commands.iter().filter(|c| pred(c)).count()
}

// =============================================================================
// SCENARIO 1: Tap
// =============================================================================

#[test]
fn test_quick_pinch_release_taps_once() {
    let (mut controller, mut t) = running_controller();
    let mut commands = Vec::new();

    // Pinch held just long enough to confirm, then released
    for _ in 0..3 {
        let pinch = index_pinch_hand(Handedness::Right, 0.5, 0.5, 0.2);
        commands.extend(controller.process(&[pinch], t).commands);
        t += FRAME_DT;
    }
    for _ in 0..3 {
        let open = open_hand(Handedness::Right, 0.5, 0.5);
        commands.extend(controller.process(&[open], t).commands);
        t += FRAME_DT;
    }

    assert_eq!(count(&commands, |c| matches!(c, PointerCommand::Click { .. })), 1);
    assert_eq!(count(&commands, |c| matches!(c, PointerCommand::MouseDown { .. })), 0);
    assert_eq!(count(&commands, |c| matches!(c, PointerCommand::MouseUp)), 0);

    // The tap lands at the settled position, not wherever the hand drifted
    let click = commands
        .iter()
        .find(|c| matches!(c, PointerCommand::Click { .. }))
        .unwrap();
    if let PointerCommand::Click { x, y } = click {
        assert!((x - 960).abs() < 60, "tap x drifted: {}", x);
        assert!((y - 540).abs() < 60, "tap y drifted: {}", y);
    }
}

#[test]
fn test_long_pinch_release_does_not_tap() {
    let (mut controller, mut t) = running_controller();
    let mut commands = Vec::new();

    // Pinch held in place for a full second: too long for a tap
    let hold_until = t + 1.0;
    while t < hold_until {
        let pinch = index_pinch_hand(Handedness::Right, 0.5, 0.5, 0.2);
        commands.extend(controller.process(&[pinch], t).commands);
        t += FRAME_DT;
    }
    for _ in 0..3 {
        let open = open_hand(Handedness::Right, 0.5, 0.5);
        commands.extend(controller.process(&[open], t).commands);
        t += FRAME_DT;
    }

    assert_eq!(count(&commands, |c| matches!(c, PointerCommand::Click { .. })), 0);
    assert_eq!(count(&commands, |c| matches!(c, PointerCommand::MouseDown { .. })), 0);
}

// =============================================================================
// SCENARIO 2: Drag
// =============================================================================

#[test]
fn test_pinch_travel_drags_and_releases() {
    let (mut controller, mut t) = running_controller();
    let mut commands = Vec::new();

    // Confirm the pinch in place
    for _ in 0..3 {
        let pinch = index_pinch_hand(Handedness::Right, 0.5, 0.5, 0.2);
        commands.extend(controller.process(&[pinch], t).commands);
        t += FRAME_DT;
    }
    assert_eq!(count(&commands, |c| matches!(c, PointerCommand::MouseDown { .. })), 0);

    // Travel right while pinched: well past the drag deadzone
    let mut dragging_seen = false;
    for i in 1..=8 {
        let cx = 0.5 + 0.015 * i as f64;
        let pinch = index_pinch_hand(Handedness::Right, cx, 0.5, 0.2);
        let step = controller.process(&[pinch], t);
        dragging_seen |= running_view(&step.snapshot.mode).is_dragging;
        commands.extend(step.commands);
        t += FRAME_DT;
    }
    assert!(dragging_seen);
    assert_eq!(count(&commands, |c| matches!(c, PointerCommand::MouseDown { .. })), 1);
    // The press lands on the pinch lock position
    if let Some(PointerCommand::MouseDown { x, .. }) = commands
        .iter()
        .find(|c| matches!(c, PointerCommand::MouseDown { .. }))
    {
        assert!((x - 960).abs() < 60, "press x drifted: {}", x);
    }

    // Release: mouse up, no tap click
    for _ in 0..3 {
        let open = open_hand(Handedness::Right, 0.62, 0.5);
        commands.extend(controller.process(&[open], t).commands);
        t += FRAME_DT;
    }
    assert_eq!(count(&commands, |c| matches!(c, PointerCommand::MouseUp)), 1);
    assert_eq!(count(&commands, |c| matches!(c, PointerCommand::Click { .. })), 0);
}

// =============================================================================
// SCENARIO 3: Scroll
// =============================================================================

#[test]
fn test_flat_hand_scrolls_without_moving_the_cursor() {
    let (mut controller, mut t) = running_controller();

    // Confirm the flat hand in place; the cursor position locks
    let mut locked_pos = None;
    for _ in 0..3 {
        let flat = scroll_hand(Handedness::Right, 0.5, 0.5);
        let step = controller.process(&[flat], t);
        locked_pos = Some(running_view(&step.snapshot.mode).screen_pos);
        t += FRAME_DT;
    }
    let locked_pos = locked_pos.unwrap();

    // Drop the hand well below the anchor: scroll ticks, cursor pinned
    let mut commands = Vec::new();
    for _ in 0..4 {
        let flat = scroll_hand(Handedness::Right, 0.5, 0.62);
        let step = controller.process(&[flat], t);
        assert_eq!(running_view(&step.snapshot.mode).screen_pos, locked_pos);
        commands.extend(step.commands);
        t += FRAME_DT;
    }
    let scrolls: Vec<i32> = commands
        .iter()
        .filter_map(|c| match c {
            PointerCommand::Scroll { amount } => Some(*amount),
            _ => None,
        })
        .collect();
    assert!(!scrolls.is_empty());
    assert!(scrolls.iter().all(|&amount| amount > 0));
    assert_eq!(count(&commands, |c| matches!(c, PointerCommand::Click { .. })), 0);
}

#[test]
fn test_offset_inside_the_scroll_threshold_is_quiet() {
    let (mut controller, mut t) = running_controller();

    for _ in 0..3 {
        let flat = scroll_hand(Handedness::Right, 0.5, 0.5);
        controller.process(&[flat], t);
        t += FRAME_DT;
    }

    // A slight droop below the anchor never reaches the threshold
    let mut commands = Vec::new();
    for _ in 0..5 {
        let flat = scroll_hand(Handedness::Right, 0.5, 0.505);
        commands.extend(controller.process(&[flat], t).commands);
        t += FRAME_DT;
    }
    assert_eq!(count(&commands, |c| matches!(c, PointerCommand::Scroll { .. })), 0);
}

// =============================================================================
// SCENARIO 4: Fist and two-finger clicks
// =============================================================================

#[test]
fn test_fist_double_clicks_once_per_episode() {
    let (mut controller, mut t) = running_controller();
    let mut commands = Vec::new();

    // A held fist fires exactly one double click
    for _ in 0..6 {
        let fist = fist_hand(Handedness::Right, 0.5, 0.5);
        commands.extend(controller.process(&[fist], t).commands);
        t += FRAME_DT;
    }
    assert_eq!(count(&commands, |c| matches!(c, PointerCommand::DoubleClick)), 1);

    // Open to re-arm, then fist again past the throttle window
    for _ in 0..3 {
        let open = open_hand(Handedness::Right, 0.5, 0.5);
        commands.extend(controller.process(&[open], t).commands);
        t += FRAME_DT;
    }
    t += 1.2;
    for _ in 0..6 {
        let fist = fist_hand(Handedness::Right, 0.5, 0.5);
        commands.extend(controller.process(&[fist], t).commands);
        t += FRAME_DT;
    }
    assert_eq!(count(&commands, |c| matches!(c, PointerCommand::DoubleClick)), 2);
}

#[test]
fn test_two_finger_pose_middle_clicks_once() {
    let (mut controller, mut t) = running_controller();
    let mut commands = Vec::new();

    for _ in 0..6 {
        let pose = middle_click_hand(Handedness::Right, 0.5, 0.5);
        commands.extend(controller.process(&[pose], t).commands);
        t += FRAME_DT;
    }
    assert_eq!(count(&commands, |c| matches!(c, PointerCommand::MiddleClick)), 1);
}

// =============================================================================
// SCENARIO 5: Right click
// =============================================================================

#[test]
fn test_middle_pinch_right_clicks_with_throttle() {
    let (mut controller, mut t) = running_controller();
    let mut commands = Vec::new();

    // First pinch: one right click on the confirm edge
    for _ in 0..3 {
        let pinch = middle_pinch_hand(Handedness::Right, 0.5, 0.5, 0.15);
        commands.extend(controller.process(&[pinch], t).commands);
        t += FRAME_DT;
    }
    assert_eq!(count(&commands, |c| matches!(c, PointerCommand::RightClick { .. })), 1);

    // Release and immediately re-pinch: inside the throttle, no second click
    for _ in 0..3 {
        let open = open_hand(Handedness::Right, 0.5, 0.5);
        commands.extend(controller.process(&[open], t).commands);
        t += FRAME_DT;
    }
    for _ in 0..3 {
        let pinch = middle_pinch_hand(Handedness::Right, 0.5, 0.5, 0.15);
        commands.extend(controller.process(&[pinch], t).commands);
        t += FRAME_DT;
    }
    assert_eq!(count(&commands, |c| matches!(c, PointerCommand::RightClick { .. })), 1);

    // Past the throttle the next pinch clicks again
    for _ in 0..3 {
        let open = open_hand(Handedness::Right, 0.5, 0.5);
        commands.extend(controller.process(&[open], t).commands);
        t += FRAME_DT;
    }
    t += 0.3;
    for _ in 0..3 {
        let pinch = middle_pinch_hand(Handedness::Right, 0.5, 0.5, 0.15);
        commands.extend(controller.process(&[pinch], t).commands);
        t += FRAME_DT;
    }
    assert_eq!(count(&commands, |c| matches!(c, PointerCommand::RightClick { .. })), 2);
}

// =============================================================================
// SCENARIO 6: Snapshot surface
// =============================================================================

#[test]
fn test_running_snapshot_serializes_with_mode_tag() {
    let (mut controller, t) = running_controller();
    let step = controller.process(&[open_hand(Handedness::Right, 0.5, 0.5)], t);
    let json = serde_json::to_string(&step.snapshot).unwrap();
    assert!(json.contains("\"mode\":\"running\""));
    assert!(json.contains("\"screen_pos\""));
    assert!(json.contains("\"is_dragging\""));
}
