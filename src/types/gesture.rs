//! Discrete gesture vocabulary

use serde::{Deserialize, Serialize};

/// The gestures the classifier can settle on. Exactly one is current at a
/// time; `Move` is the default when nothing else matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gesture {
    /// Open tracking, cursor follows the hand
    Move,
    /// Thumb-to-index pinch: tap or drag
    LeftPinch,
    /// Thumb-to-middle pinch: right click
    RightPinch,
    /// Index+middle extended, rest curled: middle click
    MiddleClick,
    /// Flat hand, fingers together: vertical scroll
    Scroll,
    /// Four fingers curled: double click
    Fist,
}

impl std::fmt::Display for Gesture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Gesture::Move => "move",
            Gesture::LeftPinch => "left_pinch",
            Gesture::RightPinch => "right_pinch",
            Gesture::MiddleClick => "middle_click",
            Gesture::Scroll => "scroll",
            Gesture::Fist => "fist",
        };
        write!(f, "{}", name)
    }
}
