//! Application state management (Elm architecture)

use std::time::Instant;

use pinpad_input::{CodeInput, InputEvent};

use crate::blink::CaretBlink;
use crate::theme::Theme;
use crate::widgets::EntryHitMap;

/// Message type for colored status messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessageType {
    #[default]
    Info,
    Success,
}

/// Application state
pub struct AppState {
    /// Code entry state machine
    pub input: CodeInput,

    // UI state
    pub theme: Theme,
    pub blink: CaretBlink,
    /// Slot rectangles from the last render, for mouse hit-testing
    pub hit: EntryHitMap,
    pub message: Option<String>,
    pub message_type: MessageType,
    /// Last code the user completed
    pub last_code: Option<String>,

    // Animation state
    pub frame_count: u64,
}

impl AppState {
    pub fn new(input: CodeInput) -> Self {
        Self {
            input,
            theme: Theme::default(),
            blink: CaretBlink::new(),
            hit: EntryHitMap::new(),
            message: None,
            message_type: MessageType::Info,
            last_code: None,
            frame_count: 0,
        }
    }

    /// Drain input events and sync the caret animation (call each frame)
    pub fn process_events(&mut self, now: Instant) {
        self.input.tick(now);

        while let Some(event) = self.input.poll_event() {
            match event {
                InputEvent::BeganEditing => {
                    self.set_message("Enter code");
                }
                InputEvent::EndedEditing => {}
                InputEvent::Completed(code) => {
                    tracing::info!(len = code.len(), "code entry completed");
                    self.set_success(format!("Code accepted: {}", code));
                    self.last_code = Some(code);
                }
            }
        }

        // Caret blinks only while a slot holds focus
        if self.input.focused().is_some() {
            self.blink.start(now);
        } else {
            self.blink.stop();
        }
    }

    /// Clear any displayed message
    pub fn clear_message(&mut self) {
        self.message = None;
        self.message_type = MessageType::Info;
    }

    /// Set a message to display (info level)
    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
        self.message_type = MessageType::Info;
    }

    /// Set a success message
    pub fn set_success(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
        self.message_type = MessageType::Success;
    }
}

/// Main application wrapper
pub struct App {
    pub state: AppState,
    pub should_quit: bool,
}

impl App {
    pub fn new(input: CodeInput) -> Self {
        Self {
            state: AppState::new(input),
            should_quit: false,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pinpad_input::{InputConfig, MemoryClipboard, BEGAN_EDITING_DELAY};

    fn new_state() -> AppState {
        let input = CodeInput::with_clipboard(
            InputConfig::new(4),
            Box::new(MemoryClipboard::new()),
        )
        .unwrap();
        AppState::new(input)
    }

    #[test]
    fn test_began_editing_sets_message_and_starts_blink() {
        let mut state = new_state();
        let now = Instant::now() + BEGAN_EDITING_DELAY;

        state.process_events(now);

        assert_eq!(state.message.as_deref(), Some("Enter code"));
        assert_eq!(state.message_type, MessageType::Info);
        assert!(state.blink.is_running());
    }

    #[test]
    fn test_completion_records_code_and_stops_blink() {
        let mut state = new_state();
        for ch in ['4', '2', '1', '7'] {
            state.input.push_char(ch);
        }

        state.process_events(Instant::now());

        assert_eq!(state.last_code.as_deref(), Some("4217"));
        assert_eq!(state.message_type, MessageType::Success);
        assert!(!state.blink.is_running());
    }

    #[test]
    fn test_restart_after_completion_resumes_blink() {
        let mut state = new_state();
        for ch in ['4', '2', '1', '7'] {
            state.input.push_char(ch);
        }
        state.process_events(Instant::now());
        assert!(!state.blink.is_running());

        state.input.tap_anywhere();
        state.process_events(Instant::now());
        assert!(state.blink.is_running());
    }
}
