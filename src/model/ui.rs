//! UI state: focus, pointer tracking and cursor blink

use std::time::{Duration, Instant};

/// Cursor blink period
pub const CURSOR_BLINK_INTERVAL: Duration = Duration::from_millis(500);

/// Interaction state that belongs to the window rather than to a field
#[derive(Debug, Clone)]
pub struct UiState {
    /// Field whose entry has keyboard focus
    pub focused: Option<usize>,
    /// Button under the pointer
    pub hovered_button: Option<usize>,
    /// Button the primary mouse button went down on
    pub pressed_button: Option<usize>,
    /// Last pointer position in physical pixels
    pub pointer: Option<(f64, f64)>,
    /// Whether the text cursor is visible (for blinking)
    pub cursor_visible: bool,
    /// Timestamp of last cursor blink state change
    pub last_cursor_blink: Instant,
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

impl UiState {
    pub fn new() -> Self {
        Self {
            focused: None,
            hovered_button: None,
            pressed_button: None,
            pointer: None,
            cursor_visible: true,
            last_cursor_blink: Instant::now(),
        }
    }

    /// Reset cursor blink (call when cursor moves or text changes)
    pub fn reset_cursor_blink(&mut self) {
        self.cursor_visible = true;
        self.last_cursor_blink = Instant::now();
    }

    /// Update cursor blink state based on elapsed time
    /// Returns true if the state changed (needs redraw)
    pub fn update_cursor_blink(&mut self, blink_interval: Duration) -> bool {
        if self.last_cursor_blink.elapsed() >= blink_interval {
            self.cursor_visible = !self.cursor_visible;
            self.last_cursor_blink = Instant::now();
            true
        } else {
            false
        }
    }
}
