//! Agamotto: gesture-driven pointer control engine
//!
//! Pipeline per camera frame: hand landmarks → activation ritual →
//! calibration or running pipeline → coordinate mapping → pointer commands

pub mod core;
pub mod types;

// =============================================================================
// GESTURE THRESHOLDS [C] - Empirically tuned; changing them changes felt behavior
// =============================================================================

/// Thumb-to-index pinch trigger (normalized by hand scale)
pub const LEFT_PINCH_TRIGGER: f64 = 0.28;

/// Thumb-to-index pinch release (hysteresis upper bound)
pub const LEFT_PINCH_RELEASE: f64 = 0.34;

/// Thumb-to-middle pinch trigger
pub const RIGHT_PINCH_TRIGGER: f64 = 0.20;

/// Thumb-to-middle pinch release
pub const RIGHT_PINCH_RELEASE: f64 = 0.30;

/// Thumb-to-ring pinch trigger (activation seal)
pub const RING_PINCH_TRIGGER: f64 = 0.22;

/// Thumb-to-pinky pinch trigger (calibration add)
pub const PINKY_PINCH_TRIGGER: f64 = 0.25;

/// Thumb-to-pinky pinch release
pub const PINKY_PINCH_RELEASE: f64 = 0.33;

/// Thumb counts as extended when tip-to-MCP exceeds this ratio of IP-to-MCP
pub const THUMB_EXTENDED_RATIO: f64 = 1.4;

/// Finger counts as extended when tip-to-MCP exceeds this ratio of PIP-to-MCP
pub const FINGER_EXTENDED_RATIO: f64 = 1.6;

/// Max adjacent tip-to-tip spread (normalized) for the flat-hand scroll shape
pub const SCROLL_MAX_SPREAD: f64 = 0.35;

/// Consecutive identical frames before a candidate gesture is accepted
pub const GESTURE_CONFIRM_FRAMES: u32 = 3;

// =============================================================================
// ACTIVATION / CALIBRATION TIMING [C]
// =============================================================================

/// Seconds the seal (ring pinch) keeps the crossing window armed
pub const SEAL_WINDOW_SECS: f64 = 3.0;

/// Wrist-x margin for the hands-crossed check
pub const CROSS_MARGIN: f64 = 0.05;

/// Continuous hold required to activate (crossed) or deactivate (open palms)
pub const ACTIVATION_HOLD_SECS: f64 = 1.5;

/// Continuous hold required to commit a calibration add or undo
pub const CALIBRATION_HOLD_SECS: f64 = 0.45;

/// Cooldown after a calibration add before the next add is accepted
pub const CALIBRATION_COOLDOWN_SECS: f64 = 2.0;

/// Calibration points needed for a complete region of interest
pub const CALIBRATION_POINT_COUNT: usize = 4;

// =============================================================================
// POINTER PIPELINE [C]
// =============================================================================

/// Overdrive scale about the ROI center (reach screen edges early)
pub const OVERDRIVE_FACTOR: f64 = 1.3;

/// OneEuro minimum cutoff frequency (Hz) - low favors stability over latency
pub const FILTER_MIN_CUTOFF: f64 = 0.01;

/// OneEuro speed coefficient
pub const FILTER_BETA: f64 = 0.05;

/// OneEuro derivative cutoff frequency (Hz)
pub const FILTER_D_CUTOFF: f64 = 1.0;

/// Pixels of hand travel absorbed before a left pinch becomes a drag
pub const DRAG_DEADZONE_PX: f64 = 30.0;

/// Cursor moves smaller than this many pixels per axis are suppressed
pub const STATIC_DEADZONE_PX: i32 = 4;

/// Minimum seconds between right clicks
pub const RIGHT_CLICK_MIN_INTERVAL: f64 = 0.25;

/// Minimum seconds between left clicks
pub const LEFT_CLICK_MIN_INTERVAL: f64 = 0.03;

/// A pinch released within this window counts as a tap, not a drag
pub const TAP_MAX_DURATION: f64 = 0.6;

/// Minimum seconds between fist double clicks
pub const DOUBLE_CLICK_MIN_INTERVAL: f64 = 1.0;

/// Minimum seconds between middle clicks
pub const MIDDLE_CLICK_MIN_INTERVAL: f64 = 1.0;

/// Vertical travel (pixels) from the scroll anchor before scrolling starts
pub const SCROLL_THRESHOLD_PX: f64 = 25.0;

/// Scroll speed factor applied to the anchor offset
pub const SCROLL_SPEED_FACTOR: f64 = 0.5;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
