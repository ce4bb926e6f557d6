//! Code entry state machine for pinpad - slots, focus, paste validation

mod clipboard;
mod config;
mod controller;
mod handler;

pub use clipboard::{Clipboard, MemoryClipboard, SystemClipboard};
pub use config::{ConfigError, InputConfig};
pub use controller::{CodeInput, InputEvent, SlotState, BEGAN_EDITING_DELAY};
pub use handler::{InputOp, KeyRouter};
