use std::path::{Path, PathBuf};

use super::listing::{Entry, ExtensionFilter, list_dir};

/// What the picker selects.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PickerMode {
    /// Zero or one file.
    SingleFile,
    /// Any number of files from one directory.
    MultipleFiles,
    /// Zero or one directory.
    Folder,
}

/// Result of a finished picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerOutcome {
    Chosen(Vec<PathBuf>),
    Cancelled,
}

impl PickerOutcome {
    /// Selected paths; empty when cancelled.
    pub fn into_paths(self) -> Vec<PathBuf> {
        match self {
            PickerOutcome::Chosen(paths) => paths,
            PickerOutcome::Cancelled => Vec::new(),
        }
    }
}

/// Keyboard-driven directory browser.
#[derive(Debug, Clone)]
pub struct FilePicker {
    mode: PickerMode,
    title: String,
    dir: PathBuf,
    entries: Vec<Entry>,
    selected: usize,
    marked: Vec<PathBuf>,
    filter: ExtensionFilter,
    filter_enabled: bool,
    include_hidden: bool,
}

impl FilePicker {
    /// Open a picker in `start_dir`, made absolute against the working directory.
    pub fn new(
        mode: PickerMode,
        title: impl Into<String>,
        start_dir: &Path,
        filter: ExtensionFilter,
        include_hidden: bool,
    ) -> Self {
        let dir = std::path::absolute(start_dir).unwrap_or_else(|_| start_dir.to_path_buf());
        let mut picker = Self {
            mode,
            title: title.into(),
            dir,
            entries: Vec::new(),
            selected: 0,
            marked: Vec::new(),
            filter,
            filter_enabled: true,
            include_hidden,
        };
        picker.refresh();
        picker
    }

    pub fn mode(&self) -> PickerMode {
        self.mode
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_entry(&self) -> Option<&Entry> {
        self.entries.get(self.selected)
    }

    pub fn is_marked(&self, path: &Path) -> bool {
        self.marked.iter().any(|p| p == path)
    }

    pub fn marked(&self) -> &[PathBuf] {
        &self.marked
    }

    pub fn filter_enabled(&self) -> bool {
        self.filter_enabled
    }

    /// Re-read the current directory.
    pub fn refresh(&mut self) {
        let include_files = self.mode != PickerMode::Folder;
        let filter = self.filter_enabled.then_some(&self.filter);
        self.entries = list_dir(&self.dir, include_files, filter, self.include_hidden);
        if self.selected >= self.entries.len() {
            self.selected = self.entries.len().saturating_sub(1);
        }
    }

    pub fn next(&mut self) {
        if !self.entries.is_empty() {
            self.selected = (self.selected + 1) % self.entries.len();
        }
    }

    pub fn prev(&mut self) {
        if !self.entries.is_empty() {
            self.selected = self
                .selected
                .checked_sub(1)
                .unwrap_or(self.entries.len() - 1);
        }
    }

    /// Move to the parent directory, keeping the cursor on the one we left.
    pub fn parent(&mut self) {
        let Some(parent) = self.dir.parent().map(Path::to_path_buf) else {
            return;
        };
        let left = std::mem::replace(&mut self.dir, parent);
        self.marked.clear();
        self.selected = 0;
        self.refresh();
        if let Some(pos) = self.entries.iter().position(|e| e.path == left) {
            self.selected = pos;
        }
    }

    /// Open the highlighted directory, or choose the highlighted file.
    ///
    /// Returns an outcome when the picker is finished.
    pub fn activate(&mut self) -> Option<PickerOutcome> {
        let entry = self.selected_entry()?.clone();
        if entry.is_dir {
            self.dir = entry.path;
            self.marked.clear();
            self.selected = 0;
            self.refresh();
            return None;
        }

        match self.mode {
            PickerMode::SingleFile => Some(PickerOutcome::Chosen(vec![entry.path])),
            PickerMode::MultipleFiles => {
                if self.marked.is_empty() {
                    Some(PickerOutcome::Chosen(vec![entry.path]))
                } else {
                    Some(PickerOutcome::Chosen(std::mem::take(&mut self.marked)))
                }
            }
            PickerMode::Folder => None,
        }
    }

    /// Mark or unmark the highlighted file (multi-file mode only).
    pub fn toggle_mark(&mut self) {
        if self.mode != PickerMode::MultipleFiles {
            return;
        }
        let Some(entry) = self.selected_entry() else {
            return;
        };
        if entry.is_dir {
            return;
        }
        let path = entry.path.clone();
        if let Some(pos) = self.marked.iter().position(|p| p == &path) {
            self.marked.remove(pos);
        } else {
            self.marked.push(path);
        }
        self.next();
    }

    /// Choose the directory being shown (folder mode only).
    pub fn choose_current_dir(&self) -> Option<PickerOutcome> {
        (self.mode == PickerMode::Folder).then(|| PickerOutcome::Chosen(vec![self.dir.clone()]))
    }

    /// Show every file, or only files matching the extension filter.
    pub fn toggle_filter(&mut self) {
        self.filter_enabled = !self.filter_enabled;
        self.refresh();
    }

    pub fn cancel(&self) -> PickerOutcome {
        PickerOutcome::Cancelled
    }
}
