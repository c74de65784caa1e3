/// Severity of a notice.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
}

/// A single human-readable acknowledgement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Sink for notices.
pub trait Notifier {
    fn notify(&mut self, notice: Notice);

    fn info(&mut self, title: &str, message: &str) {
        self.notify(Notice::new(NoticeLevel::Info, title, message));
    }

    fn warn(&mut self, title: &str, message: &str) {
        self.notify(Notice::new(NoticeLevel::Warning, title, message));
    }
}

/// Recording collector: keeps every notice in arrival order.
impl Notifier for Vec<Notice> {
    fn notify(&mut self, notice: Notice) {
        self.push(notice);
    }
}
