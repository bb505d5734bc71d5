//! System activation state definitions

use serde::{Deserialize, Serialize};

/// Phases of the two-handed unlock/lock ritual
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SystemState {
    /// Pointer control disabled, waiting for the ring-pinch seal
    Locked,
    /// Seal seen, crossing window armed
    SealPending,
    /// Wrists crossed, activation hold accumulating
    Crossing,
    /// Pointer control enabled
    Active,
    /// Both palms open, deactivation hold accumulating
    Deactivating,
}

impl SystemState {
    /// Get ANSI color code for terminal display
    pub fn color_code(&self) -> &'static str {
        match self {
            SystemState::Locked => "\x1b[90m",       // Gray
            SystemState::SealPending => "\x1b[33m",  // Yellow
            SystemState::Crossing => "\x1b[36m",     // Cyan
            SystemState::Active => "\x1b[32m",       // Green
            SystemState::Deactivating => "\x1b[31m", // Red
        }
    }

    /// Reset ANSI color
    pub fn color_reset() -> &'static str {
        "\x1b[0m"
    }
}

impl std::fmt::Display for SystemState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SystemState::Locked => "LOCKED",
            SystemState::SealPending => "SEAL_PENDING",
            SystemState::Crossing => "CROSSING",
            SystemState::Active => "ACTIVE",
            SystemState::Deactivating => "DEACTIVATING",
        };
        write!(f, "{}", name)
    }
}

/// Per-frame summary of the activation machine, consumed by rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemStatus {
    /// Pointer control enabled (Active or Deactivating)
    pub is_active: bool,
    /// Current state
    pub state: SystemState,
    /// Hold/transition progress in [0,1]
    pub progress: f64,
    /// Operator-facing status line, empty when idle
    pub message: String,
}
