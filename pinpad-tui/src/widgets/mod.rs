//! UI widgets for pinpad

mod code_entry;
mod slot;

pub use code_entry::{CodeEntryWidget, EntryHitMap};
pub use slot::SlotWidget;
