//! Keyboard routing for the code entry control
//!
//! Plays the role of the hidden keyboard proxy: raw key events become
//! [`InputOp`]s, which the host applies to the controller. Only decimal
//! digits are accepted; everything else that isn't an editing key is dropped.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::controller::CodeInput;

/// Operations the keyboard can request on a [`CodeInput`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOp {
    /// Append a digit into the next empty slot
    Push(char),
    /// Remove the most recently filled digit
    DeleteLast,
    /// Read and validate the system clipboard
    Paste,
    /// End the editing session
    Deactivate,
}

/// Maps key events to controller operations
#[derive(Debug, Default)]
pub struct KeyRouter;

impl KeyRouter {
    pub fn new() -> Self {
        Self
    }

    /// Translate a key event. Returns `None` when no session is active or
    /// the key has no meaning for the control.
    pub fn map_key(&self, key: KeyEvent, session_active: bool) -> Option<InputOp> {
        if !session_active {
            return None;
        }
        match key.code {
            KeyCode::Char('v') | KeyCode::Char('V')
                if key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                Some(InputOp::Paste)
            }
            KeyCode::Char(c) if c.is_ascii_digit() && key.modifiers.is_empty() => {
                Some(InputOp::Push(c))
            }
            KeyCode::Backspace => Some(InputOp::DeleteLast),
            KeyCode::Esc => Some(InputOp::Deactivate),
            _ => None,
        }
    }
}

impl CodeInput {
    /// Apply a routed keyboard operation
    pub fn apply(&mut self, op: InputOp) {
        match op {
            InputOp::Push(c) => self.push_char(c),
            InputOp::DeleteLast => self.delete_last(),
            InputOp::Paste => self.paste_from_clipboard(),
            InputOp::Deactivate => self.deactivate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_digits_route_to_push() {
        let router = KeyRouter::new();
        assert_eq!(
            router.map_key(key(KeyCode::Char('7')), true),
            Some(InputOp::Push('7'))
        );
    }

    #[test]
    fn test_non_digit_chars_are_dropped() {
        let router = KeyRouter::new();
        assert_eq!(router.map_key(key(KeyCode::Char('a')), true), None);
        assert_eq!(router.map_key(key(KeyCode::Char(' ')), true), None);
        assert_eq!(router.map_key(key(KeyCode::Tab), true), None);
    }

    #[test]
    fn test_editing_keys() {
        let router = KeyRouter::new();
        assert_eq!(
            router.map_key(key(KeyCode::Backspace), true),
            Some(InputOp::DeleteLast)
        );
        assert_eq!(
            router.map_key(key(KeyCode::Esc), true),
            Some(InputOp::Deactivate)
        );
    }

    #[test]
    fn test_ctrl_v_routes_to_paste() {
        let router = KeyRouter::new();
        let paste = KeyEvent::new(KeyCode::Char('v'), KeyModifiers::CONTROL);
        assert_eq!(router.map_key(paste, true), Some(InputOp::Paste));
    }

    #[test]
    fn test_inactive_session_routes_nothing() {
        let router = KeyRouter::new();
        assert_eq!(router.map_key(key(KeyCode::Char('1')), false), None);
        assert_eq!(router.map_key(key(KeyCode::Backspace), false), None);
    }

    #[test]
    fn test_shifted_digit_is_dropped() {
        let router = KeyRouter::new();
        let shifted = KeyEvent::new(KeyCode::Char('1'), KeyModifiers::SHIFT);
        assert_eq!(router.map_key(shifted, true), None);
    }
}
