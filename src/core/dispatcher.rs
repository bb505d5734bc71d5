//! Pointer command emission
//!
//! Buffers the abstract commands produced while processing one frame and
//! owns the cross-frame throttle/deadzone state: click intervals, the drag
//! flag, and the integer cursor dedupe that keeps micro-jitter off the OS
//! pointer.

use crate::types::{Point, PointerCommand};
use crate::{
    DOUBLE_CLICK_MIN_INTERVAL, LEFT_CLICK_MIN_INTERVAL, MIDDLE_CLICK_MIN_INTERVAL,
    RIGHT_CLICK_MIN_INTERVAL, STATIC_DEADZONE_PX,
};

/// Per-frame command buffer plus throttle state. The engine never queries
/// OS pointer state back; `last_cursor` is its own record of what it sent.
#[derive(Debug, Default)]
pub struct ActionDispatcher {
    pending: Vec<PointerCommand>,
    last_left_click: Option<f64>,
    last_right_click: Option<f64>,
    last_double_click: Option<f64>,
    last_middle_click: Option<f64>,
    is_dragging: bool,
    last_cursor: Option<(i32, i32)>,
}

impl ActionDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    /// Last cursor position actually sent, in pixels
    pub fn last_cursor(&self) -> Option<(i32, i32)> {
        self.last_cursor
    }

    /// Drain the commands buffered during this frame
    pub fn take_commands(&mut self) -> Vec<PointerCommand> {
        std::mem::take(&mut self.pending)
    }

    fn interval_elapsed(last: Option<f64>, now: f64, min_interval: f64) -> bool {
        last.map_or(true, |t| now - t > min_interval)
    }

    /// Move the cursor, suppressing sub-deadzone jitter
    pub fn move_cursor(&mut self, pos: Point) {
        let (x, y) = (pos.x as i32, pos.y as i32);
        if let Some((lx, ly)) = self.last_cursor {
            if (x - lx).abs() <= STATIC_DEADZONE_PX && (y - ly).abs() <= STATIC_DEADZONE_PX {
                return;
            }
        }
        self.pending.push(PointerCommand::MoveCursor { x, y });
        self.last_cursor = Some((x, y));
    }

    /// Left click at a position, throttled. Returns whether it fired.
    pub fn click(&mut self, pos: Point, now: f64) -> bool {
        if !Self::interval_elapsed(self.last_left_click, now, LEFT_CLICK_MIN_INTERVAL) {
            return false;
        }
        self.pending.push(PointerCommand::Click { x: pos.x as i32, y: pos.y as i32 });
        self.last_left_click = Some(now);
        true
    }

    /// Right click at a position, throttled
    pub fn right_click(&mut self, pos: Point, now: f64) -> bool {
        if !Self::interval_elapsed(self.last_right_click, now, RIGHT_CLICK_MIN_INTERVAL) {
            return false;
        }
        self.pending.push(PointerCommand::RightClick { x: pos.x as i32, y: pos.y as i32 });
        self.last_right_click = Some(now);
        true
    }

    /// Double click, throttled
    pub fn double_click(&mut self, now: f64) -> bool {
        if !Self::interval_elapsed(self.last_double_click, now, DOUBLE_CLICK_MIN_INTERVAL) {
            return false;
        }
        self.pending.push(PointerCommand::DoubleClick);
        self.last_double_click = Some(now);
        true
    }

    /// Middle click, throttled
    pub fn middle_click(&mut self, now: f64) -> bool {
        if !Self::interval_elapsed(self.last_middle_click, now, MIDDLE_CLICK_MIN_INTERVAL) {
            return false;
        }
        self.pending.push(PointerCommand::MiddleClick);
        self.last_middle_click = Some(now);
        true
    }

    /// Begin a drag at the lock position
    pub fn mouse_down(&mut self, pos: Point) {
        self.pending.push(PointerCommand::MouseDown { x: pos.x as i32, y: pos.y as i32 });
        self.is_dragging = true;
    }

    /// Release an in-progress drag
    pub fn mouse_up(&mut self) {
        self.pending.push(PointerCommand::MouseUp);
        self.is_dragging = false;
    }

    /// Emit a scroll; positive scrolls up
    pub fn scroll(&mut self, amount: i32) {
        self.pending.push(PointerCommand::Scroll { amount });
    }
}
