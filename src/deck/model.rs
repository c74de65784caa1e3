//! Deck state types: `Deck`, `PlaybackState` and `Presence`.

use std::path::{Path, PathBuf};

use crate::library::{file_name_of, truncate_display};
use crate::notify::Notifier;

use super::error::DeckError;
use super::hotcue::HotcueSlot;

/// Nominal tempo every deck starts with.
pub const DEFAULT_BPM: f64 = 127.0;

/// Maximum number of characters shown for a loaded track name.
pub const TRACK_NAME_WIDTH: usize = 25;

/// Playback axis of a deck.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing,
}

/// Presence axis of a deck: whether a track has ever been loaded.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Presence {
    #[default]
    Empty,
    Loaded,
}

/// One virtual player unit holding at most one loaded track.
#[derive(Debug, Clone)]
pub struct Deck {
    number: u8,
    display_name: String,
    loaded_track_path: Option<PathBuf>,
    loaded_track_name: Option<String>,
    is_playing: bool,
    bpm: f64,
    pitch: f64,
}

impl Deck {
    /// Create an empty deck with the default BPM.
    #[cfg(test)]
    pub fn new(number: u8, display_name: impl Into<String>) -> Self {
        Self::with_bpm(number, display_name, DEFAULT_BPM)
    }

    /// Create an empty deck with a specific nominal BPM.
    pub fn with_bpm(number: u8, display_name: impl Into<String>, bpm: f64) -> Self {
        Self {
            number,
            display_name: display_name.into(),
            loaded_track_path: None,
            loaded_track_name: None,
            is_playing: false,
            bpm,
            pitch: 0.0,
        }
    }

    pub fn number(&self) -> u8 {
        self.number
    }

    /// Label shown while no track is loaded.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn loaded_track_path(&self) -> Option<&Path> {
        self.loaded_track_path.as_deref()
    }

    /// File name of the loaded track, truncated to `TRACK_NAME_WIDTH` chars.
    pub fn loaded_track_name(&self) -> Option<&str> {
        self.loaded_track_name.as_deref()
    }

    /// Name to show in the deck header: the track name, or the deck label.
    pub fn title(&self) -> &str {
        self.loaded_track_name().unwrap_or(self.display_name())
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn playback(&self) -> PlaybackState {
        if self.is_playing {
            PlaybackState::Playing
        } else {
            PlaybackState::Stopped
        }
    }

    pub fn presence(&self) -> Presence {
        if self.loaded_track_path.is_some() {
            Presence::Loaded
        } else {
            Presence::Empty
        }
    }

    pub fn bpm(&self) -> f64 {
        self.bpm
    }

    /// Pitch offset in percent.
    pub fn pitch(&self) -> f64 {
        self.pitch
    }

    /// Load `path` into the deck and stop playback.
    ///
    /// The path is accepted as-is: existence and format are not checked.
    /// An empty path is treated like a cancelled selection and changes nothing.
    pub fn load(&mut self, path: impl Into<PathBuf>, notifier: &mut dyn Notifier) {
        let path = path.into();
        if path.as_os_str().is_empty() {
            return;
        }

        let file_name = file_name_of(&path);
        self.loaded_track_name = Some(truncate_display(&file_name, TRACK_NAME_WIDTH));
        self.loaded_track_path = Some(path);
        self.is_playing = false;

        log::debug!("deck {} loaded {:?}", self.number, self.loaded_track_path);
        notifier.info("Loaded", &format!("Deck {}: {}", self.number, file_name));
    }

    /// Flip between playing and stopped.
    ///
    /// Fails with `NoTrackLoaded` (and warns the user) when the deck is empty.
    pub fn toggle_play(&mut self, notifier: &mut dyn Notifier) -> Result<PlaybackState, DeckError> {
        if self.loaded_track_path.is_none() {
            notifier.warn("No Track", "Load a track first!");
            return Err(DeckError::NoTrackLoaded { deck: self.number });
        }

        self.is_playing = !self.is_playing;
        Ok(self.playback())
    }

    /// Stop playback. Valid in every state.
    pub fn cue(&mut self) {
        self.is_playing = false;
    }

    pub fn sync(&self, notifier: &mut dyn Notifier) {
        notifier.info("Sync", &format!("Deck {}: Synced to master", self.number));
    }

    pub fn rewind(&self, notifier: &mut dyn Notifier) {
        notifier.info("Rewind", &format!("Deck {}: Rewind", self.number));
    }

    pub fn fast_forward(&self, notifier: &mut dyn Notifier) {
        notifier.info("Fast Forward", &format!("Deck {}: Fast Forward", self.number));
    }

    /// Acknowledge a hotcue. No position is stored.
    pub fn set_hotcue(&self, slot: HotcueSlot, notifier: &mut dyn Notifier) {
        notifier.info("Hot Cue", &format!("Deck {}: Hot cue {} set", self.number, slot));
    }

    pub fn clear_hotcues(&self, notifier: &mut dyn Notifier) {
        notifier.info("Clear", &format!("Deck {}: All hot cues cleared", self.number));
    }
}
