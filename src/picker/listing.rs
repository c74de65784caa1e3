use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Case-insensitive extension filter built from `library.extensions`.
#[derive(Debug, Clone, Default)]
pub struct ExtensionFilter {
    exts: Vec<String>,
}

impl ExtensionFilter {
    pub fn new<S: AsRef<str>>(extensions: &[S]) -> Self {
        let exts = extensions
            .iter()
            .map(|e| e.as_ref().trim().trim_start_matches('.').to_ascii_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        Self { exts }
    }

    pub fn matches(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|s| s.to_str())
            .map(|ext| {
                let ext = ext.to_ascii_lowercase();
                self.exts.iter().any(|e| e == &ext)
            })
            .unwrap_or(false)
    }

    /// Pattern text like `*.mp3 *.wav`, for titles.
    pub fn pattern(&self) -> String {
        self.exts
            .iter()
            .map(|e| format!("*.{e}"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// One row of the picker listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub path: PathBuf,
    pub name: String,
    pub is_dir: bool,
}

fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// List the direct children of `dir`.
///
/// Directories are always listed. Files are listed when `include_files` is
/// set and, if a `filter` is given, their extension matches it. Directories
/// come first; each group is sorted by name, case-insensitively.
pub fn list_dir(
    dir: &Path,
    include_files: bool,
    filter: Option<&ExtensionFilter>,
    include_hidden: bool,
) -> Vec<Entry> {
    let mut entries: Vec<Entry> = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(true) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                log::warn!("cannot list {}: {e}", dir.display());
                continue;
            }
        };

        let name = entry.file_name().to_string_lossy().into_owned();
        if !include_hidden && is_hidden(&name) {
            continue;
        }

        let is_dir = entry.file_type().is_dir();
        if !is_dir {
            if !include_files {
                continue;
            }
            if let Some(f) = filter {
                if !f.matches(entry.path()) {
                    continue;
                }
            }
        }

        entries.push(Entry {
            path: entry.into_path(),
            name,
            is_dir,
        });
    }

    entries.sort_by(|a, b| {
        b.is_dir
            .cmp(&a.is_dir)
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
    });
    entries
}
