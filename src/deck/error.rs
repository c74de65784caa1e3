use thiserror::Error;

/// Errors raised by deck operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Play/pause was requested on a deck with nothing loaded.
    #[error("deck {deck}: no track loaded")]
    NoTrackLoaded { deck: u8 },
    /// A hotcue slot outside `1..=4` was requested.
    #[error("hotcue slot {0} is out of range (1-4)")]
    InvalidHotcueSlot(u8),
}
