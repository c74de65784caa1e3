//! Acknowledgement channel between operations and the user.
//!
//! Operations push `Notice`s into a `Notifier`. The console keeps them in a
//! `NoticeQueue` and shows the oldest as a popup; tests collect them in a
//! plain `Vec<Notice>`.

mod model;
mod queue;

pub use model::*;
pub use queue::NoticeQueue;

#[cfg(test)]
mod tests;
