//! Event handler for processing input events.

use crate::config::KeyBindings;
use crate::error::Result;
use crate::state::{Action, Direction, InputMode, Store};
use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind};
use std::time::Duration;

/// Handles input events and produces actions.
pub struct EventHandler {
    /// Key bindings.
    keybindings: KeyBindings,
    /// How long to wait for input before yielding back to the loop.
    poll_timeout: Duration,
    /// Input mode at the last snapshot.
    input_mode: InputMode,
}

impl EventHandler {
    /// Create a new event handler.
    pub fn new(keybindings: KeyBindings, poll_timeout: Duration) -> Self {
        Self {
            keybindings,
            poll_timeout,
            input_mode: InputMode::Normal,
        }
    }

    /// Update the store snapshot for state-aware event handling.
    pub fn update_store_snapshot(&mut self, store: &Store) {
        self.input_mode = store.app.input_mode;
    }

    /// Get the next action from user input, if any arrives within the poll timeout.
    pub async fn next(&mut self) -> Result<Option<Action>> {
        if event::poll(self.poll_timeout)?
            && let CrosstermEvent::Key(key) = event::read()?
        {
            return Ok(self.handle_key(key));
        }
        Ok(None)
    }

    /// Handle a key event and return an optional action.
    pub fn handle_key(&self, key: KeyEvent) -> Option<Action> {
        // Only process key press events
        if key.kind != KeyEventKind::Press {
            return None;
        }

        match self.input_mode {
            InputMode::Normal => self.handle_normal_mode(key),
            InputMode::Insert => self.handle_insert_mode(key),
        }
    }

    fn handle_normal_mode(&self, key: KeyEvent) -> Option<Action> {
        let input = super::InputEvent::from(key);

        if input.matches(&self.keybindings.quit) || input.matches("Ctrl+c") {
            return Some(Action::Quit);
        }
        if input.matches(&self.keybindings.help) {
            return Some(Action::ToggleHelp);
        }
        if input.matches(&self.keybindings.refresh) {
            return Some(Action::RefreshAll);
        }
        if input.matches(&self.keybindings.edit_amount) {
            return Some(Action::SetInputMode(InputMode::Insert));
        }
        if input.matches(&self.keybindings.bet_up) {
            return Some(Action::PlaceTrade(Direction::Up));
        }
        if input.matches(&self.keybindings.bet_down) {
            return Some(Action::PlaceTrade(Direction::Down));
        }
        if input.matches(&self.keybindings.top_up) {
            return Some(Action::TopUp);
        }
        if key.code == KeyCode::Esc {
            return Some(Action::DismissNotification);
        }

        None
    }

    fn handle_insert_mode(&self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => Some(Action::SetInputMode(InputMode::Normal)),
            KeyCode::Backspace => Some(Action::InputBackspace),
            KeyCode::Char(c) if is_amount_char(c) => Some(Action::InputChar(c)),
            _ => None,
        }
    }
}

/// Characters that can appear in a typed amount. Anything else is ignored
/// while editing; the amount itself is validated on submit.
fn is_amount_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')
}
