//! Application module: the console model driven by the runtime and drawn by
//! the UI.
//!
//! `App` owns both decks, the library index, the browser, the pending
//! notices and whichever overlay (picker, menu, help) is open.

mod browser;
mod menu;
mod model;

pub use browser::*;
pub use menu::*;
pub use model::*;
