//! Core engines for Agamotto

pub mod activation;
pub mod backend;
pub mod calibration;
pub mod classifier;
pub mod controller;
pub mod dispatcher;
pub mod feedback;
pub mod filter;
pub mod geometry;
pub mod mapper;

pub use activation::{ActivationEngine, ActivationUpdate};
pub use backend::EnigoBackend;
pub use calibration::CalibrationEngine;
pub use classifier::GestureClassifier;
pub use controller::Controller;
pub use dispatcher::ActionDispatcher;
pub use feedback::FeedbackPlayer;
pub use filter::OneEuroFilter;
pub use mapper::CoordinateMapper;
