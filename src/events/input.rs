//! Input event types and key mappings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Simplified key representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Backspace,
    Other,
}

impl From<KeyCode> for Key {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Esc => Key::Escape,
            KeyCode::Backspace => Key::Backspace,
            _ => Key::Other,
        }
    }
}

/// Key modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
}

impl From<KeyModifiers> for Modifiers {
    fn from(mods: KeyModifiers) -> Self {
        Self {
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

/// A processed input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl From<KeyEvent> for InputEvent {
    fn from(event: KeyEvent) -> Self {
        Self {
            key: Key::from(event.code),
            modifiers: Modifiers::from(event.modifiers),
        }
    }
}

impl InputEvent {
    /// Create a new input event.
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Get the character if this is a character input.
    pub fn char(&self) -> Option<char> {
        match self.key {
            Key::Char(c) => Some(c),
            _ => None,
        }
    }

    /// Check if this matches a key binding string (e.g., "Ctrl+c", "Enter", "u").
    ///
    /// Shift is not compared: `?` arrives shifted on most layouts.
    pub fn matches(&self, binding: &str) -> bool {
        let mut expected_ctrl = false;
        let mut expected_alt = false;
        let mut expected_key = "";

        for part in binding.split('+') {
            match part.to_lowercase().as_str() {
                "ctrl" => expected_ctrl = true,
                "alt" => expected_alt = true,
                _ => expected_key = part,
            }
        }

        if self.modifiers.ctrl != expected_ctrl || self.modifiers.alt != expected_alt {
            return false;
        }

        match expected_key.to_lowercase().as_str() {
            "enter" => self.key == Key::Enter,
            "esc" | "escape" => self.key == Key::Escape,
            "backspace" => self.key == Key::Backspace,
            s if s.chars().count() == 1 => s.chars().next().is_some_and(|c| {
                self.key == Key::Char(c) || self.key == Key::Char(c.to_ascii_uppercase())
            }),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(c: char) -> InputEvent {
        InputEvent::new(Key::Char(c), Modifiers::default())
    }

    #[test]
    fn test_single_char_binding() {
        assert!(key('u').matches("u"));
        assert!(key('U').matches("u"));
        assert!(!key('d').matches("u"));
        assert!(key('?').matches("?"));
    }

    #[test]
    fn test_modifier_binding() {
        let ctrl_c = InputEvent::new(
            Key::Char('c'),
            Modifiers {
                ctrl: true,
                alt: false,
            },
        );
        assert!(ctrl_c.matches("Ctrl+c"));
        assert!(!ctrl_c.matches("c"));
        assert!(!key('c').matches("Ctrl+c"));
    }

    #[test]
    fn test_named_keys() {
        let enter = InputEvent::new(Key::Enter, Modifiers::default());
        assert!(enter.matches("Enter"));
        assert!(!enter.matches("Esc"));
        assert_eq!(enter.char(), None);
        assert_eq!(key('5').char(), Some('5'));
    }
}
