/// Tabs across the top of the track browser.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum BrowserTab {
    #[default]
    Files,
    Browse,
    Prepare,
    History,
}

impl BrowserTab {
    pub const ALL: [BrowserTab; 4] = [
        BrowserTab::Files,
        BrowserTab::Browse,
        BrowserTab::Prepare,
        BrowserTab::History,
    ];

    pub fn label(self) -> &'static str {
        match self {
            BrowserTab::Files => "Files",
            BrowserTab::Browse => "Browse",
            BrowserTab::Prepare => "Prepare",
            BrowserTab::History => "History",
        }
    }

    pub fn next(self) -> Self {
        match self {
            BrowserTab::Files => BrowserTab::Browse,
            BrowserTab::Browse => BrowserTab::Prepare,
            BrowserTab::Prepare => BrowserTab::History,
            BrowserTab::History => BrowserTab::Files,
        }
    }
}

/// Fixed sidebar entries of the Files tab.
pub const SIDEBAR_SHORTCUTS: [&str; 3] = ["All...", "All Audio...", "All Videos..."];

/// Fixed crate and folder tree of the Files tab.
pub const SIDEBAR_TREE: [(&str, &[&str]); 2] = [
    ("Crates", &["A List", "Party Tunes"]),
    ("Music", &["Electronic", "Drum and Bass", "House", "Techno"]),
];

/// Browser view state. The search text is captured but never filters.
#[derive(Debug, Default, Clone)]
pub struct BrowserState {
    pub tab: BrowserTab,
    pub selected: usize,
    pub search_query: String,
    pub search_mode: bool,
}

impl BrowserState {
    pub fn cycle_tab(&mut self) {
        self.tab = self.tab.next();
    }

    /// Move the cursor down within `len` rows, wrapping.
    pub fn next(&mut self, len: usize) {
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    /// Move the cursor up within `len` rows, wrapping.
    pub fn prev(&mut self, len: usize) {
        if len > 0 {
            self.selected = self.selected.checked_sub(1).unwrap_or(len - 1).min(len - 1);
        }
    }

    pub fn enter_search(&mut self) {
        self.search_mode = true;
    }

    pub fn exit_search(&mut self) {
        self.search_mode = false;
    }

    pub fn push_search_char(&mut self, c: char) {
        self.search_query.push(c);
    }

    pub fn pop_search_char(&mut self) {
        self.search_query.pop();
    }
}
