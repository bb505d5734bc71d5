//! Core types for Agamotto

mod command;
mod gesture;
mod hand;
mod point;
mod roi;
mod snapshot;
mod state;

pub use command::{FeedbackEvent, PointerCommand};
pub use gesture::Gesture;
pub use hand::{HandFrame, Handedness, Landmark, landmark_index};
pub use point::Point;
pub use roi::Roi;
pub use snapshot::{
    CalibrationView, ControlStep, ControllerSnapshot, DebugInfo, RunningView, SnapshotMode,
};
pub use state::{SystemState, SystemStatus};
