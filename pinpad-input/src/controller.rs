//! Code entry controller - slot focus state machine and paste flow
//!
//! [`CodeInput`] owns the accumulated value and the focus position, and
//! mediates every state change: keystroke appends, trailing deletion, taps,
//! clipboard paste, and session begin/end. Interested parties drain
//! [`InputEvent`]s each frame rather than registering callbacks, which keeps
//! the controller decoupled from whoever hosts it.
//!
//! Invariants:
//! - At most one slot is focused; none once the value is complete.
//! - While a session is active and the value is incomplete, the focused slot
//!   is always the first empty one (`value.len()`).
//! - Filled slots are exactly `0..value.len()`.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use regex::Regex;
use tracing::debug;

use crate::clipboard::{Clipboard, SystemClipboard};
use crate::config::{ConfigError, InputConfig};

/// Delay before `BeganEditing` fires, letting any presentation animation
/// settle before the host reacts.
pub const BEGAN_EDITING_DELAY: Duration = Duration::from_millis(100);

/// Events emitted upward by the controller, drained via
/// [`CodeInput::poll_event`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// The input is ready to receive keystrokes. Deferred by
    /// [`BEGAN_EDITING_DELAY`] from session start; dropped if the controller
    /// is torn down or the session ends first.
    BeganEditing,
    /// The editing session ended; no slot holds focus anymore.
    EndedEditing,
    /// The value reached the slot count, via keystrokes or paste. Fires
    /// exactly once per completed entry.
    Completed(String),
}

/// Visual state of a single slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    EmptyUnfocused,
    EmptyFocused,
    Filled,
}

/// Segmented code entry controller
pub struct CodeInput {
    slot_count: usize,
    value: String,
    /// Focus index, held directly rather than scanned from slot flags.
    /// `Some` implies an active editing session.
    focused: Option<usize>,
    pattern: Regex,
    clipboard: Box<dyn Clipboard>,
    events: VecDeque<InputEvent>,
    pending_began: Option<Instant>,
}

impl CodeInput {
    /// Create a controller using the system clipboard.
    ///
    /// The first slot starts focused with an editing session active, the way
    /// the control appears when first presented.
    pub fn new(config: InputConfig) -> Result<Self, ConfigError> {
        Self::with_clipboard(config, Box::new(SystemClipboard::new()))
    }

    /// Create a controller with an explicit clipboard implementation
    pub fn with_clipboard(
        config: InputConfig,
        clipboard: Box<dyn Clipboard>,
    ) -> Result<Self, ConfigError> {
        if config.slot_count == 0 {
            return Err(ConfigError::ZeroSlots);
        }
        let pattern = match &config.paste_pattern {
            Some(p) => Regex::new(p)?,
            None => Regex::new(&format!(r"^\d{{{}}}$", config.slot_count))
                .expect("default pattern is well-formed"),
        };

        let mut input = Self {
            slot_count: config.slot_count,
            value: String::with_capacity(config.slot_count),
            focused: None,
            pattern,
            clipboard,
            events: VecDeque::new(),
            pending_began: None,
        };
        input.begin_session(0);
        Ok(input)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn slot_count(&self) -> usize {
        self.slot_count
    }

    /// The accumulated value so far
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Index of the focused slot, if any
    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// Whether an editing session is active (some slot holds focus)
    pub fn is_active(&self) -> bool {
        self.focused.is_some()
    }

    /// Whether every slot is filled
    pub fn is_complete(&self) -> bool {
        self.value.chars().count() == self.slot_count
    }

    /// Character shown in slot `index`, if filled
    pub fn slot_char(&self, index: usize) -> Option<char> {
        self.value.chars().nth(index)
    }

    /// Visual state of slot `index`
    pub fn slot_state(&self, index: usize) -> SlotState {
        if self.slot_char(index).is_some() {
            SlotState::Filled
        } else if self.focused == Some(index) {
            SlotState::EmptyFocused
        } else {
            SlotState::EmptyUnfocused
        }
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Drain the next pending event
    pub fn poll_event(&mut self) -> Option<InputEvent> {
        self.events.pop_front()
    }

    /// Flush the deferred `BeganEditing` event once its deadline has passed.
    /// Call once per frame.
    pub fn tick(&mut self, now: Instant) {
        if let Some(deadline) = self.pending_began {
            if now >= deadline {
                self.pending_began = None;
                self.events.push_back(InputEvent::BeganEditing);
            }
        }
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Append one character into the next empty slot.
    ///
    /// Ignored when the value is full or no session is active. Filling the
    /// last slot ends the session and fires `EndedEditing` then `Completed`.
    pub fn push_char(&mut self, ch: char) {
        if !self.is_active() || self.is_complete() {
            return;
        }
        self.value.push(ch);
        if self.is_complete() {
            debug!(value = %self.value, "entry complete");
            self.end_session();
            self.events
                .push_back(InputEvent::Completed(self.value.clone()));
        } else {
            self.focused = Some(self.value.chars().count());
        }
    }

    /// Remove the most recently filled slot's character and refocus it.
    /// No-op when the value is empty or no session is active.
    pub fn delete_last(&mut self) {
        if !self.is_active() || self.value.is_empty() {
            return;
        }
        self.value.pop();
        self.focused = Some(self.value.chars().count());
    }

    /// Tap on slot `index`.
    ///
    /// - Value full: restart - clear everything, focus slot 0, reactivate.
    /// - Tapped slot already filled: ignored (trailing deletion only).
    /// - No slot focused: the first empty slot takes focus and a session
    ///   begins.
    /// - Otherwise (a session is already active): ignored.
    pub fn tap(&mut self, index: usize) {
        if index >= self.slot_count {
            return;
        }
        if self.is_complete() {
            self.value.clear();
            self.begin_session(0);
            return;
        }
        if self.slot_char(index).is_some() {
            return;
        }
        if self.focused.is_none() {
            let target = self.value.chars().count();
            self.begin_session(target);
        }
    }

    /// Tap somewhere on the control that is not a specific slot
    pub fn tap_anywhere(&mut self) {
        let index = self.value.chars().count().min(self.slot_count - 1);
        self.tap(index);
    }

    /// Read the clipboard and, if its text validates, take it as the whole
    /// value. Silent no-op on missing or invalid clipboard content.
    pub fn paste_from_clipboard(&mut self) {
        if let Some(text) = self.clipboard.text() {
            self.paste(&text);
        }
    }

    /// Validate `text` and take it as the whole value.
    ///
    /// Also the entry point for bracketed paste, where the terminal delivers
    /// the pasted text directly. Ignored while no session is active. On
    /// success every slot fills by index, the session ends and `EndedEditing`
    /// then `Completed` fire immediately.
    pub fn paste(&mut self, text: &str) {
        if !self.is_active() {
            return;
        }
        if !self.pattern.is_match(text) {
            debug!(len = text.len(), "paste rejected by pattern");
            return;
        }
        // A custom pattern may match strings of the wrong length; slots are
        // filled by index, so the length must be exact.
        if text.chars().count() != self.slot_count {
            debug!(len = text.len(), "paste rejected: wrong length");
            return;
        }
        self.value.clear();
        self.value.push_str(text);
        self.end_session();
        self.events
            .push_back(InputEvent::Completed(self.value.clone()));
    }

    /// End the editing session without touching the value (the keyboard-away
    /// path). Fires `EndedEditing` and clears focus.
    pub fn deactivate(&mut self) {
        if self.is_active() {
            self.end_session();
        }
    }

    // =========================================================================
    // Session helpers
    // =========================================================================

    fn begin_session(&mut self, focus: usize) {
        self.focused = Some(focus);
        self.pending_began = Some(Instant::now() + BEGAN_EDITING_DELAY);
    }

    fn end_session(&mut self) {
        self.focused = None;
        // A session that ends before its BeganEditing fired never began.
        self.pending_began = None;
        self.events.push_back(InputEvent::EndedEditing);
    }
}
