//! Commands crossing the engine boundary
//!
//! Pointer commands go to the OS-input collaborator, feedback events to the
//! audio collaborator. Both are fire-and-forget: the engine never reads OS
//! pointer state back and never waits for a sound to finish.

use serde::{Deserialize, Serialize};

/// Abstract pointer action. Coordinates are absolute screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum PointerCommand {
    MoveCursor { x: i32, y: i32 },
    Click { x: i32, y: i32 },
    RightClick { x: i32, y: i32 },
    MiddleClick,
    DoubleClick,
    MouseDown { x: i32, y: i32 },
    MouseUp,
    /// Positive amount scrolls up (wheel-away), pyautogui convention
    Scroll { amount: i32 },
}

impl std::fmt::Display for PointerCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PointerCommand::MoveCursor { x, y } => write!(f, "move({}, {})", x, y),
            PointerCommand::Click { x, y } => write!(f, "click({}, {})", x, y),
            PointerCommand::RightClick { x, y } => write!(f, "right_click({}, {})", x, y),
            PointerCommand::MiddleClick => write!(f, "middle_click()"),
            PointerCommand::DoubleClick => write!(f, "double_click()"),
            PointerCommand::MouseDown { x, y } => write!(f, "mouse_down({}, {})", x, y),
            PointerCommand::MouseUp => write!(f, "mouse_up()"),
            PointerCommand::Scroll { amount } => write!(f, "scroll({})", amount),
        }
    }
}

/// Audio cue emitted by the state machines. Failure to play is never fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackEvent {
    Activated,
    Deactivated,
    CalibrationTick,
    CalibrationDone,
}
