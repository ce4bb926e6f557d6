//! Caret blink animation
//!
//! A scoped handle owned by whoever displays the caret: started on
//! focus-gain, stopped on focus-loss or teardown. Visibility is derived from
//! elapsed time in the render loop, so there is no timer thread and nothing
//! that can outlive its owner.

use std::time::{Duration, Instant};

/// Half-cycle of the caret blink: visible for this long, hidden for this
/// long. Matches the traditional 0.8s auto-reversing caret animation.
pub const BLINK_HALF_PERIOD: Duration = Duration::from_millis(800);

/// Blink clock for a caret indicator
#[derive(Debug, Clone)]
pub struct CaretBlink {
    half_period: Duration,
    started_at: Option<Instant>,
}

impl CaretBlink {
    pub fn new() -> Self {
        Self::with_half_period(BLINK_HALF_PERIOD)
    }

    pub fn with_half_period(half_period: Duration) -> Self {
        Self {
            half_period,
            started_at: None,
        }
    }

    /// Start blinking, phase-aligned to `now`. Idempotent while running so
    /// the caret does not visibly reset every frame.
    pub fn start(&mut self, now: Instant) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    /// Stop blinking and hide the caret
    pub fn stop(&mut self) {
        self.started_at = None;
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Whether the caret is in the visible half of its cycle.
    /// Always false when stopped.
    pub fn is_visible(&self, now: Instant) -> bool {
        match self.started_at {
            None => false,
            Some(started) => {
                let elapsed = now.saturating_duration_since(started);
                let half_cycles = elapsed.as_millis() / self.half_period.as_millis().max(1);
                half_cycles % 2 == 0
            }
        }
    }
}

impl Default for CaretBlink {
    fn default() -> Self {
        Self::new()
    }
}
