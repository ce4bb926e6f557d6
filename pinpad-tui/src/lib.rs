//! Terminal UI for pinpad - widgets, themes, and caret animation
//!
//! Renders a segmented code entry control with ratatui.

mod app;
mod blink;
mod theme;
pub mod widgets;

pub use app::{App, AppState, MessageType};
pub use blink::{CaretBlink, BLINK_HALF_PERIOD};
pub use theme::{Theme, CLASSIC, CRT_GREEN, NEON};
pub use widgets::{CodeEntryWidget, EntryHitMap, SlotWidget};
