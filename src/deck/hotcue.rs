use std::fmt;

use super::error::DeckError;

/// A hotcue slot number, always within `1..=4`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HotcueSlot(u8);

impl HotcueSlot {
    pub const COUNT: u8 = 4;

    /// All slots in display order.
    pub fn all() -> impl Iterator<Item = HotcueSlot> {
        (1..=Self::COUNT).map(HotcueSlot)
    }

    pub fn number(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for HotcueSlot {
    type Error = DeckError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        if (1..=Self::COUNT).contains(&n) {
            Ok(HotcueSlot(n))
        } else {
            Err(DeckError::InvalidHotcueSlot(n))
        }
    }
}

impl fmt::Display for HotcueSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}
