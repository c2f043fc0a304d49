//! Persistence for the single save slot: the line-oriented text codec and
//! the file-backed store that owns the slot.

pub mod format;
mod store;

pub use format::{decode, encode};
pub use store::SaveStore;
