use std::path::Path;

/// Columns of the browser's track table.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BrowserColumn {
    Song,
    Artist,
    Album,
    Bpm,
    Bitrate,
    Length,
}

impl BrowserColumn {
    pub const ALL: [BrowserColumn; 6] = [
        BrowserColumn::Song,
        BrowserColumn::Artist,
        BrowserColumn::Album,
        BrowserColumn::Bpm,
        BrowserColumn::Bitrate,
        BrowserColumn::Length,
    ];

    pub fn heading(self) -> &'static str {
        match self {
            BrowserColumn::Song => "song",
            BrowserColumn::Artist => "artist",
            BrowserColumn::Album => "album",
            BrowserColumn::Bpm => "bpm",
            BrowserColumn::Bitrate => "bitrate",
            BrowserColumn::Length => "length",
        }
    }
}

/// Placeholder for cells with no known value.
pub const UNKNOWN_CELL: &str = "-";

/// Final path component as text, or the whole path when it has none.
pub fn file_name_of(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.display().to_string(),
    }
}

/// Keep at most `max_chars` characters of `s`.
pub fn truncate_display(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}

/// Text for one browser cell.
///
/// Only the song column is known (the file name); tags are never read.
pub fn cell_text(path: &Path, column: BrowserColumn) -> String {
    match column {
        BrowserColumn::Song => file_name_of(path),
        BrowserColumn::Artist
        | BrowserColumn::Album
        | BrowserColumn::Bpm
        | BrowserColumn::Bitrate
        | BrowserColumn::Length => UNKNOWN_CELL.to_string(),
    }
}

/// All cells of a browser row, in `BrowserColumn::ALL` order.
pub fn browser_row(path: &Path) -> Vec<String> {
    BrowserColumn::ALL
        .iter()
        .map(|&c| cell_text(path, c))
        .collect()
}
