//! Deck module: the per-deck transport state and its operations.
//!
//! A `Deck` is a plain state struct with no dependency on the terminal UI.
//! Every operation reports back through a `Notifier`, so tests can record the
//! acknowledgements instead of showing them.

mod error;
mod hotcue;
mod model;

pub use error::DeckError;
pub use hotcue::HotcueSlot;
pub use model::*;
