use std::path::{Path, PathBuf};

/// Append-only list of selected track paths and folders.
///
/// Paths are stored as given: no dedup and no check that they are audio.
#[derive(Debug, Default, Clone)]
pub struct LibraryIndex {
    paths: Vec<PathBuf>,
    folders: Vec<PathBuf>,
}

impl LibraryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one path. Empty paths are ignored.
    pub fn add_path(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        if path.as_os_str().is_empty() {
            return;
        }
        self.paths.push(path);
    }

    /// Append every path of a multi-file selection, in order.
    pub fn add_paths<I, P>(&mut self, paths: I)
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        for p in paths {
            self.add_path(p);
        }
    }

    /// Record a selected folder. Its contents are not scanned.
    pub fn add_folder(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        if path.as_os_str().is_empty() {
            return;
        }
        self.folders.push(path);
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn folders(&self) -> &[PathBuf] {
        &self.folders
    }

    pub fn get(&self, index: usize) -> Option<&Path> {
        self.paths.get(index).map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
