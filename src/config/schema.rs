use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/twindeck/config.toml` or `~/.config/twindeck/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `TWINDECK__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub decks: DeckSettings,
    pub library: LibrarySettings,
    pub ui: UiSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DeckSettings {
    /// Label shown on deck 1 until a track is loaded.
    pub deck1_name: String,
    /// Label shown on deck 2 until a track is loaded.
    pub deck2_name: String,
    /// Nominal BPM both decks start with.
    pub default_bpm: f64,
}

impl Default for DeckSettings {
    fn default() -> Self {
        Self {
            deck1_name: "Badlands".to_string(),
            deck2_name: "Feel me".to_string(),
            default_bpm: crate::deck::DEFAULT_BPM,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Extensions the file picker shows by default (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Whether the picker lists dotfiles.
    pub include_hidden: bool,
    /// Directory the picker opens in. Falls back to the working directory.
    pub start_dir: Option<PathBuf>,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            extensions: vec!["mp3".into(), "wav".into(), "flac".into(), "m4a".into()],
            include_hidden: false,
            start_dir: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UiSettings {
    /// Text in the center view's header.
    pub header_text: String,
    /// How the two decks and the waveform are arranged.
    pub layout: LayoutSetting,
    /// Whether the track browser starts visible.
    pub show_library: bool,
    /// Whether the waveform view starts visible.
    pub show_waveform: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: "twindeck".to_string(),
            layout: LayoutSetting::Horizontal,
            show_library: true,
            show_waveform: true,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutSetting {
    /// Deck 1, waveform and deck 2 side by side.
    #[serde(alias = "side-by-side")]
    Horizontal,
    /// Waveform on top of the two decks.
    #[serde(alias = "stacked")]
    Vertical,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `env_logger` filter, e.g. `info` or `twindeck=debug`. `RUST_LOG` wins.
    pub level: String,
    /// Log file. Defaults to the XDG state directory.
    pub file: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}
