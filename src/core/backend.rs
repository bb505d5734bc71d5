//! OS pointer backend
//!
//! Translates abstract `PointerCommand`s into synthetic input via `enigo`.
//! The engine never reads pointer state back; a failed dispatch is reported
//! to the caller and must never stop the control loop.

use enigo::{Axis, Button, Coordinate, Direction, Enigo, InputError, Mouse, NewConError, Settings};

use crate::types::PointerCommand;

/// Thin adapter over an `enigo` session
pub struct EnigoBackend {
    enigo: Enigo,
}

impl EnigoBackend {
    pub fn new() -> Result<Self, NewConError> {
        let enigo = Enigo::new(&Settings::default())?;
        Ok(Self { enigo })
    }

    /// Screen size reported by the OS, if the backend can provide one
    pub fn screen_size(&self) -> Option<(u32, u32)> {
        self.enigo
            .main_display()
            .ok()
            .map(|(w, h)| (w as u32, h as u32))
    }

    /// Apply one command to the OS pointer
    pub fn apply(&mut self, cmd: &PointerCommand) -> Result<(), InputError> {
        match *cmd {
            PointerCommand::MoveCursor { x, y } => self.enigo.move_mouse(x, y, Coordinate::Abs),
            PointerCommand::Click { x, y } => {
                self.enigo.move_mouse(x, y, Coordinate::Abs)?;
                self.enigo.button(Button::Left, Direction::Click)
            }
            PointerCommand::RightClick { x, y } => {
                self.enigo.move_mouse(x, y, Coordinate::Abs)?;
                self.enigo.button(Button::Right, Direction::Click)
            }
            PointerCommand::MiddleClick => self.enigo.button(Button::Middle, Direction::Click),
            PointerCommand::DoubleClick => {
                self.enigo.button(Button::Left, Direction::Click)?;
                self.enigo.button(Button::Left, Direction::Click)
            }
            PointerCommand::MouseDown { x, y } => {
                self.enigo.move_mouse(x, y, Coordinate::Abs)?;
                self.enigo.button(Button::Left, Direction::Press)
            }
            PointerCommand::MouseUp => self.enigo.button(Button::Left, Direction::Release),
            PointerCommand::Scroll { amount } => {
                // Commands carry pyautogui-style units (positive = up);
                // enigo counts wheel lines downward
                let lines = -amount / 20;
                self.enigo.scroll(lines, Axis::Vertical)
            }
        }
    }
}
