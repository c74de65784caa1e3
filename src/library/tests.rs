use super::*;
use std::path::{Path, PathBuf};

#[test]
fn add_paths_appends_in_order_without_dedup() {
    let mut lib = LibraryIndex::new();
    assert!(lib.is_empty());

    lib.add_paths(["a.mp3", "b.wav"]);
    assert_eq!(lib.paths(), &[PathBuf::from("a.mp3"), PathBuf::from("b.wav")]);

    lib.add_paths(["a.mp3", "b.wav"]);
    assert_eq!(lib.len(), 4);
    assert_eq!(
        lib.paths(),
        &[
            PathBuf::from("a.mp3"),
            PathBuf::from("b.wav"),
            PathBuf::from("a.mp3"),
            PathBuf::from("b.wav"),
        ]
    );
}

#[test]
fn add_path_ignores_empty_and_accepts_non_audio() {
    let mut lib = LibraryIndex::new();
    lib.add_path("");
    assert!(lib.is_empty());

    lib.add_path("/docs/readme.txt");
    assert_eq!(lib.get(0), Some(Path::new("/docs/readme.txt")));
    assert_eq!(lib.get(1), None);
}

#[test]
fn folders_are_recorded_separately() {
    let mut lib = LibraryIndex::new();
    lib.add_folder("/music/house");
    lib.add_folder("");
    assert_eq!(lib.folders(), &[PathBuf::from("/music/house")]);
    assert!(lib.is_empty());
}

#[test]
fn file_name_of_uses_last_component() {
    assert_eq!(file_name_of(Path::new("/music/x/Track.mp3")), "Track.mp3");
    assert_eq!(file_name_of(Path::new("Track.mp3")), "Track.mp3");
    assert_eq!(file_name_of(Path::new("/")), "/");
}

#[test]
fn truncate_display_counts_chars() {
    assert_eq!(truncate_display("abcdef", 3), "abc");
    assert_eq!(truncate_display("ab", 3), "ab");
    assert_eq!(truncate_display("ñandú", 2), "ña");
}

#[test]
fn browser_row_only_knows_the_song() {
    let row = browser_row(Path::new("/music/Intro.flac"));
    assert_eq!(row.len(), BrowserColumn::ALL.len());
    assert_eq!(row[0], "Intro.flac");
    assert!(row[1..].iter().all(|c| c == UNKNOWN_CELL));
}
