//! Application-level state.

use super::Notification;
use std::time::{Duration, Instant};

/// Input mode for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Editing the bet amount.
    Insert,
}

/// Global application state.
#[derive(Debug, Default)]
pub struct AppState {
    /// Current input mode.
    pub input_mode: InputMode,
    /// Whether to show help overlay.
    pub show_help: bool,
    /// Current notification.
    pub notification: Option<Notification>,
    /// When the current notification was shown.
    notification_shown_at: Option<Instant>,
    /// Mutating requests sent but not yet answered.
    pub pending_mutations: usize,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Bet amount as typed by the user.
    pub input_buffer: String,
    /// Cursor position in input buffer.
    pub cursor_position: usize,
}

impl AppState {
    /// Create a new application state.
    pub fn new() -> Self {
        Self {
            input_mode: InputMode::Normal,
            ..Default::default()
        }
    }

    /// Check if the amount field is being edited.
    pub fn is_editing(&self) -> bool {
        self.input_mode == InputMode::Insert
    }

    /// Add a character to the input buffer.
    pub fn push_char(&mut self, c: char) {
        self.input_buffer.insert(self.cursor_position, c);
        self.cursor_position += c.len_utf8();
    }

    /// Remove the character before the cursor.
    pub fn pop_char(&mut self) {
        if let Some(c) = self.input_buffer[..self.cursor_position].chars().next_back() {
            self.cursor_position -= c.len_utf8();
            self.input_buffer.remove(self.cursor_position);
        }
    }

    /// Show a notification, replacing any current one.
    pub fn notify(&mut self, notification: Notification) {
        self.notification = Some(notification);
        self.notification_shown_at = Some(Instant::now());
    }

    /// Hide the current notification.
    pub fn dismiss_notification(&mut self) {
        self.notification = None;
        self.notification_shown_at = None;
    }

    /// Hide the current notification once its duration has elapsed.
    pub fn expire_notification(&mut self) {
        let expired = match (&self.notification, self.notification_shown_at) {
            (Some(n), Some(shown_at)) => {
                shown_at.elapsed() >= Duration::from_secs(n.duration_secs)
            }
            _ => false,
        };
        if expired {
            self.dismiss_notification();
        }
    }

    pub(crate) fn finish_mutation(&mut self) {
        self.pending_mutations = self.pending_mutations.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_editing() {
        let mut app = AppState::new();
        for c in "12.5".chars() {
            app.push_char(c);
        }
        app.pop_char();
        assert_eq!(app.input_buffer, "12.");
        assert_eq!(app.cursor_position, 3);

        app.pop_char();
        app.pop_char();
        app.pop_char();
        app.pop_char();
        assert_eq!(app.input_buffer, "");
        assert_eq!(app.cursor_position, 0);
    }

    #[test]
    fn test_fresh_notification_is_not_expired() {
        let mut app = AppState::new();
        app.notify(Notification::info("hello"));
        app.expire_notification();
        assert!(app.notification.is_some());

        app.dismiss_notification();
        assert!(app.notification.is_none());
    }
}
