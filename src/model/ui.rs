//! UI state - input focus and cursor blink

use std::time::{Duration, Instant};

/// Which text field receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusTarget {
    #[default]
    Chat,
    Agent,
}

/// UI state shared by both input fields
#[derive(Debug, Clone)]
pub struct UiState {
    pub focus: FocusTarget,
    /// Whether the text cursor is currently visible (for blinking)
    pub cursor_visible: bool,
    /// Timestamp of last cursor blink state change
    pub last_cursor_blink: Instant,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            focus: FocusTarget::Chat,
            cursor_visible: true,
            last_cursor_blink: Instant::now(),
        }
    }

    pub fn focus_chat(&mut self) {
        self.focus = FocusTarget::Chat;
        self.reset_cursor_blink();
    }

    pub fn focus_agent(&mut self) {
        self.focus = FocusTarget::Agent;
        self.reset_cursor_blink();
    }

    /// Reset cursor blink timer (call after user input)
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

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
