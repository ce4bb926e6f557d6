//! Construction parameters for a code entry control

use thiserror::Error;

/// Default number of digit slots
pub const DEFAULT_SLOT_COUNT: usize = 4;

/// Configuration for a [`CodeInput`](crate::CodeInput)
///
/// Visual parameters (colors, slot spacing) live with the rendering layer;
/// this struct carries only what the state machine needs.
#[derive(Debug, Clone)]
pub struct InputConfig {
    /// Number of digit slots (must be > 0)
    pub slot_count: usize,
    /// Custom paste validation pattern. When `None`, paste accepts exactly
    /// `slot_count` decimal digits.
    pub paste_pattern: Option<String>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            slot_count: DEFAULT_SLOT_COUNT,
            paste_pattern: None,
        }
    }
}

impl InputConfig {
    pub fn new(slot_count: usize) -> Self {
        Self {
            slot_count,
            ..Self::default()
        }
    }

    /// Override the paste validation pattern
    pub fn paste_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.paste_pattern = Some(pattern.into());
        self
    }
}

/// Errors surfaced at construction time.
///
/// Everything past construction is a silent no-op, so this is the only
/// error type in the crate.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("slot count must be at least 1")]
    ZeroSlots,
    #[error("invalid paste pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}
