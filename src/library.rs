//! Library index: the tracks and folders the user picked for the browser.
//!
//! Nothing here reads audio metadata; a track is just its path.

mod display;
mod index;

pub use display::*;
pub use index::LibraryIndex;

#[cfg(test)]
mod tests;
