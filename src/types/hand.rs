//! Hand observation input
//!
//! One `HandFrame` per detected hand per camera frame, produced by the
//! external vision collaborator: 21 normalized landmarks plus a handedness
//! label. Frames are ephemeral - the engine never stores them across calls.

use serde::{Deserialize, Serialize};

use crate::types::Point;

/// Landmarks a hand frame must carry
pub const LANDMARK_COUNT: usize = 21;

/// MediaPipe-style hand landmark indices
pub mod landmark_index {
    pub const WRIST: usize = 0;
    pub const THUMB_MCP: usize = 2;
    pub const THUMB_IP: usize = 3;
    pub const THUMB_TIP: usize = 4;
    pub const INDEX_MCP: usize = 5;
    pub const INDEX_PIP: usize = 6;
    pub const INDEX_TIP: usize = 8;
    pub const MIDDLE_MCP: usize = 9;
    pub const MIDDLE_PIP: usize = 10;
    pub const MIDDLE_TIP: usize = 12;
    pub const RING_MCP: usize = 13;
    pub const RING_PIP: usize = 14;
    pub const RING_TIP: usize = 16;
    pub const PINKY_MCP: usize = 17;
    pub const PINKY_PIP: usize = 18;
    pub const PINKY_TIP: usize = 20;
}

/// One normalized 3D keypoint: x,y in [0,1] image space, z relative depth
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub z: f64,
}

/// Which physical hand a frame belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Handedness {
    Left,
    Right,
}

impl std::fmt::Display for Handedness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Handedness::Left => write!(f, "Left"),
            Handedness::Right => write!(f, "Right"),
        }
    }
}

/// One hand observation for one camera frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandFrame {
    pub label: Handedness,
    pub landmarks: Vec<Landmark>,
}

impl HandFrame {
    /// Create a frame. Validity is checked separately so malformed detector
    /// output can be dropped instead of raised.
    pub fn new(label: Handedness, landmarks: Vec<Landmark>) -> Self {
        Self { label, landmarks }
    }

    /// A frame is usable only with exactly 21 landmarks
    pub fn is_valid(&self) -> bool {
        self.landmarks.len() == LANDMARK_COUNT
    }

    /// Landmark projected to the 2D image plane
    pub fn point(&self, index: usize) -> Point {
        let lm = &self.landmarks[index];
        Point::new(lm.x, lm.y)
    }
}
