use std::collections::VecDeque;

use super::model::{Notice, NoticeLevel, Notifier};

/// FIFO of notices waiting to be acknowledged by the user.
#[derive(Debug, Default)]
pub struct NoticeQueue {
    pending: VecDeque<Notice>,
}

impl NoticeQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// The notice currently shown, if any.
    pub fn current(&self) -> Option<&Notice> {
        self.pending.front()
    }

    /// Acknowledge the current notice and return it.
    pub fn dismiss(&mut self) -> Option<Notice> {
        self.pending.pop_front()
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }
}

impl Notifier for NoticeQueue {
    fn notify(&mut self, notice: Notice) {
        match notice.level {
            NoticeLevel::Info => log::info!("{}: {}", notice.title, notice.message),
            NoticeLevel::Warning => log::warn!("{}: {}", notice.title, notice.message),
        }
        self.pending.push_back(notice);
    }
}
