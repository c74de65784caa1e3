//! In-terminal file and folder picker.
//!
//! Stands in for native open/save dialogs: one directory level is listed at a
//! time and the user walks the tree with the keyboard. A cancelled picker
//! returns no paths.

mod listing;
mod model;

pub use listing::ExtensionFilter;
pub use model::*;

#[cfg(test)]
mod tests;
