//! Per-frame engine output
//!
//! One `ControlStep` per processed camera frame: the snapshot the HUD
//! renders, the pointer commands for the OS-input collaborator, and the
//! feedback events for the audio collaborator.

use serde::{Deserialize, Serialize};

use crate::types::{FeedbackEvent, Point, PointerCommand, Roi, SystemStatus};

/// Raw gesture metrics surfaced for on-screen debugging
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebugInfo {
    /// Normalized thumb-to-index distance
    pub dist_index: f64,
    /// Normalized thumb-to-middle distance
    pub dist_middle: f64,
    /// Left pinch trigger threshold, for the HUD gauge
    pub threshold: f64,
    /// Extended flag per finger: thumb, index, middle, ring, pinky
    pub fingers: [bool; 5],
}

/// Calibration-mode payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalibrationView {
    /// Operator prompt
    pub message: String,
    /// Points committed so far (0-4)
    pub step: usize,
    /// Active hold or cooldown progress in [0,1]
    pub progress: f64,
    /// Stable hand position, normalized
    pub hand_pos: Point,
    /// Committed calibration points
    pub points: Vec<Point>,
    /// Bounding box of committed points, once there are at least two
    pub roi_preview: Option<Roi>,
    pub debug: DebugInfo,
}

/// Running-mode payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunningView {
    /// Smoothed cursor position in screen pixels
    pub screen_pos: Point,
    pub is_dragging: bool,
    /// Calibrated region of interest
    pub roi: Roi,
    /// Stable hand position, normalized
    pub hand_pos: Point,
    pub debug: DebugInfo,
}

/// Mode-tagged snapshot payload. Consumers pattern-match exhaustively
/// instead of probing keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SnapshotMode {
    /// System locked or no hand visible: system status only
    Standby,
    Calibration(CalibrationView),
    Running(RunningView),
}

/// Complete engine output for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControllerSnapshot {
    pub system: SystemStatus,
    #[serde(flatten)]
    pub mode: SnapshotMode,
}

/// Snapshot plus the side effects produced while computing it
#[derive(Debug, Clone, PartialEq)]
pub struct ControlStep {
    pub snapshot: ControllerSnapshot,
    pub commands: Vec<PointerCommand>,
    pub feedback: Vec<FeedbackEvent>,
}
