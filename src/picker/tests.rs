use super::listing::{Entry, list_dir};
use super::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn audio_filter() -> ExtensionFilter {
    ExtensionFilter::new(&["mp3", "wav", "flac", "m4a"])
}

fn fixture(root: &Path) {
    fs::create_dir(root.join("House")).unwrap();
    fs::create_dir(root.join("ambient")).unwrap();
    fs::create_dir(root.join(".hidden_dir")).unwrap();
    fs::write(root.join("b.MP3"), b"not a real mp3").unwrap();
    fs::write(root.join("A.flac"), b"not a real flac").unwrap();
    fs::write(root.join("notes.txt"), b"ignore me").unwrap();
    fs::write(root.join(".secret.wav"), b"hidden").unwrap();
    fs::write(root.join("House").join("deep.m4a"), b"nested").unwrap();
}

fn names(entries: &[Entry]) -> Vec<&str> {
    entries.iter().map(|e| e.name.as_str()).collect()
}

#[test]
fn extension_filter_is_case_insensitive_and_tolerates_dots() {
    let f = ExtensionFilter::new(&[".MP3", " wav ", ""]);
    assert!(f.matches(Path::new("/x/a.mp3")));
    assert!(f.matches(Path::new("/x/a.Mp3")));
    assert!(f.matches(Path::new("/x/a.WAV")));
    assert!(!f.matches(Path::new("/x/a.flac")));
    assert!(!f.matches(Path::new("/x/a")));
    assert_eq!(f.pattern(), "*.mp3 *.wav");
}

#[test]
fn list_dir_puts_dirs_first_and_filters_files() {
    let dir = tempdir().unwrap();
    fixture(dir.path());

    let entries = list_dir(dir.path(), true, Some(&audio_filter()), false);
    assert_eq!(names(&entries), vec!["ambient", "House", "A.flac", "b.MP3"]);
    assert!(entries[0].is_dir && entries[1].is_dir);
    assert!(!entries[2].is_dir);
}

#[test]
fn list_dir_without_filter_shows_every_file() {
    let dir = tempdir().unwrap();
    fixture(dir.path());

    let entries = list_dir(dir.path(), true, None, false);
    assert!(names(&entries).contains(&"notes.txt"));
}

#[test]
fn list_dir_hidden_entries_are_opt_in() {
    let dir = tempdir().unwrap();
    fixture(dir.path());

    let entries = list_dir(dir.path(), true, Some(&audio_filter()), true);
    let listed = names(&entries);
    assert!(listed.contains(&".hidden_dir"));
    assert!(listed.contains(&".secret.wav"));
}

#[test]
fn list_dir_of_missing_directory_is_empty() {
    let dir = tempdir().unwrap();
    let entries = list_dir(&dir.path().join("gone"), true, None, false);
    assert!(entries.is_empty());
}

#[test]
fn single_file_picker_returns_absolute_path() {
    let dir = tempdir().unwrap();
    fixture(dir.path());

    let mut p = FilePicker::new(
        PickerMode::SingleFile,
        "Load Track - Deck 1",
        dir.path(),
        audio_filter(),
        false,
    );
    // ambient, House, A.flac, b.MP3
    p.next();
    p.next();
    let outcome = p.activate().unwrap();
    let paths = outcome.into_paths();
    assert_eq!(paths.len(), 1);
    assert!(paths[0].is_absolute());
    assert_eq!(paths[0].file_name().unwrap(), "A.flac");
}

#[test]
fn activate_on_directory_descends_and_parent_returns() {
    let dir = tempdir().unwrap();
    fixture(dir.path());

    let mut p = FilePicker::new(
        PickerMode::SingleFile,
        "Load",
        dir.path(),
        audio_filter(),
        false,
    );
    p.next(); // House
    assert!(p.activate().is_none());
    assert!(p.dir().ends_with("House"));
    assert_eq!(names(p.entries()), vec!["deep.m4a"]);

    p.parent();
    assert_eq!(p.selected_entry().unwrap().name, "House");
}

#[test]
fn multi_file_picker_returns_marked_in_marking_order() {
    let dir = tempdir().unwrap();
    fixture(dir.path());

    let mut p = FilePicker::new(
        PickerMode::MultipleFiles,
        "Load Files",
        dir.path(),
        audio_filter(),
        false,
    );
    // move to b.MP3 (index 3) and mark, then A.flac (index 2)
    p.prev();
    p.toggle_mark();
    p.prev();
    p.prev();
    assert_eq!(p.selected_entry().unwrap().name, "A.flac");
    p.toggle_mark();
    assert_eq!(p.marked().len(), 2);

    let paths = p.activate().unwrap().into_paths();
    let got: Vec<_> = paths
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(got, vec!["b.MP3", "A.flac"]);
}

#[test]
fn marking_twice_unmarks() {
    let dir = tempdir().unwrap();
    fixture(dir.path());

    let mut p = FilePicker::new(
        PickerMode::MultipleFiles,
        "Load Files",
        dir.path(),
        audio_filter(),
        false,
    );
    p.prev();
    p.toggle_mark();
    p.prev();
    p.toggle_mark();
    assert!(p.marked().is_empty());
}

#[test]
fn folder_picker_lists_only_dirs_and_chooses_current() {
    let dir = tempdir().unwrap();
    fixture(dir.path());

    let mut p = FilePicker::new(
        PickerMode::Folder,
        "Select Folder",
        dir.path(),
        audio_filter(),
        false,
    );
    assert!(p.entries().iter().all(|e| e.is_dir));

    p.next(); // House
    p.activate();
    let chosen = p.choose_current_dir().unwrap().into_paths();
    assert_eq!(chosen.len(), 1);
    assert!(chosen[0].ends_with("House"));
}

#[test]
fn choose_current_dir_is_folder_mode_only() {
    let dir = tempdir().unwrap();
    let p = FilePicker::new(
        PickerMode::SingleFile,
        "Load",
        dir.path(),
        audio_filter(),
        false,
    );
    assert!(p.choose_current_dir().is_none());
}

#[test]
fn toggle_filter_reveals_other_files() {
    let dir = tempdir().unwrap();
    fixture(dir.path());

    let mut p = FilePicker::new(
        PickerMode::SingleFile,
        "Load",
        dir.path(),
        audio_filter(),
        false,
    );
    assert!(!names(p.entries()).contains(&"notes.txt"));
    p.toggle_filter();
    assert!(!p.filter_enabled());
    assert!(names(p.entries()).contains(&"notes.txt"));
}

#[test]
fn cancel_returns_no_paths() {
    let dir = tempdir().unwrap();
    let p = FilePicker::new(
        PickerMode::SingleFile,
        "Load",
        dir.path(),
        audio_filter(),
        false,
    );
    let outcome = p.cancel();
    assert_eq!(outcome, PickerOutcome::Cancelled);
    assert!(outcome.into_paths().is_empty());
}
