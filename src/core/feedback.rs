//! Fire-and-forget audio feedback
//!
//! Feedback events leave the engine through an unbounded channel; a spawned
//! task plays them so the control loop never blocks on sound. The default
//! player is the terminal bell plus a short colored note.

use colored::Colorize;
use tokio::sync::mpsc;

use crate::types::FeedbackEvent;

/// Handle for dispatching feedback events. Cheap to clone; dropping every
/// handle shuts the player task down.
#[derive(Debug, Clone)]
pub struct FeedbackPlayer {
    tx: mpsc::UnboundedSender<FeedbackEvent>,
}

impl FeedbackPlayer {
    /// Spawn the player task on the current tokio runtime
    pub fn spawn(quiet: bool) -> Self {
        let (tx, mut rx) = mpsc::unbounded_channel::<FeedbackEvent>();
        tokio::spawn(async move {
            while let Some(event) = rx.recv().await {
                if !quiet {
                    play(event);
                }
            }
        });
        Self { tx }
    }

    /// Queue an event. A closed player is silently ignored - feedback
    /// failure is never fatal to the control loop.
    pub fn send(&self, event: FeedbackEvent) {
        let _ = self.tx.send(event);
    }
}

fn play(event: FeedbackEvent) {
    // Terminal bell stands in for the tone; the note disambiguates
    match event {
        FeedbackEvent::Activated => println!("\x07{}", "♪ activated".green()),
        FeedbackEvent::Deactivated => println!("\x07{}", "♪ deactivated".red()),
        FeedbackEvent::CalibrationTick => print!("\x07"),
        FeedbackEvent::CalibrationDone => println!("\x07{}", "♪ calibration done".cyan()),
    }
}
