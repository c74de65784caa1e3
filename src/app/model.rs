//! Application model types: `App`, `Overlay` and the view options.

use std::path::PathBuf;

use crate::config::{LayoutSetting, Settings};
use crate::deck::{Deck, DeckError, HotcueSlot};
use crate::library::LibraryIndex;
use crate::notify::{NoticeQueue, Notifier};
use crate::picker::{ExtensionFilter, FilePicker, PickerMode, PickerOutcome};
use crate::waveform::WaveformPlaceholder;

use super::browser::BrowserState;
use super::menu::{MenuItem, MenuState};

/// Number of decks on the console.
pub const DECK_COUNT: usize = 2;

/// Where a picker's result goes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PickerTarget {
    /// Load the chosen file into deck `index` (0-based).
    Deck(usize),
    /// Append the chosen files to the library.
    LibraryFiles,
    /// Record the chosen folder in the library.
    LibraryFolder,
}

/// Modal layer drawn above the console.
#[derive(Debug)]
pub enum Overlay {
    Picker {
        picker: FilePicker,
        target: PickerTarget,
    },
    Menu(MenuState),
    Help,
}

/// Arrangement and visibility of the console panels.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ViewOptions {
    pub layout: LayoutSetting,
    pub show_library: bool,
    pub show_waveform: bool,
}

/// Defaults every picker opens with.
#[derive(Debug, Clone)]
struct PickerDefaults {
    start_dir: PathBuf,
    filter: ExtensionFilter,
    include_hidden: bool,
}

/// The console model.
pub struct App {
    pub decks: [Deck; DECK_COUNT],
    pub library: LibraryIndex,
    pub notices: NoticeQueue,
    pub browser: BrowserState,
    pub focused: usize,
    pub view: ViewOptions,
    pub overlay: Option<Overlay>,
    pub waveform: WaveformPlaceholder,
    pub header_text: String,
    pub should_quit: bool,

    picker_defaults: PickerDefaults,
    config_path: Option<PathBuf>,
    settings_toml: String,
}

impl App {
    /// Build the console from `settings`. Pickers open in `start_dir`.
    pub fn new(settings: &Settings, start_dir: PathBuf, config_path: Option<PathBuf>) -> Self {
        let bpm = settings.decks.default_bpm;
        let decks = [
            Deck::with_bpm(1, settings.decks.deck1_name.clone(), bpm),
            Deck::with_bpm(2, settings.decks.deck2_name.clone(), bpm),
        ];

        let settings_toml = settings.to_toml().unwrap_or_else(|e| {
            log::warn!("cannot render settings as TOML: {e}");
            String::new()
        });

        Self {
            decks,
            library: LibraryIndex::new(),
            notices: NoticeQueue::new(),
            browser: BrowserState::default(),
            focused: 0,
            view: ViewOptions {
                layout: settings.ui.layout,
                show_library: settings.ui.show_library,
                show_waveform: settings.ui.show_waveform,
            },
            overlay: None,
            waveform: WaveformPlaceholder::new(),
            header_text: settings.ui.header_text.clone(),
            should_quit: false,
            picker_defaults: PickerDefaults {
                start_dir,
                filter: ExtensionFilter::new(&settings.library.extensions),
                include_hidden: settings.library.include_hidden,
            },
            config_path,
            settings_toml,
        }
    }

    pub fn focused_deck(&self) -> &Deck {
        &self.decks[self.focused]
    }

    /// Move focus to the other deck.
    pub fn focus_next_deck(&mut self) {
        self.focused = (self.focused + 1) % DECK_COUNT;
    }

    pub fn toggle_play(&mut self, deck: usize) {
        match self.decks[deck].toggle_play(&mut self.notices) {
            Ok(state) => log::debug!("deck {} is now {state:?}", deck + 1),
            Err(DeckError::NoTrackLoaded { deck }) => {
                log::debug!("deck {deck} has no track to play")
            }
            Err(e) => log::warn!("play/pause rejected: {e}"),
        }
    }

    pub fn cue(&mut self, deck: usize) {
        self.decks[deck].cue();
    }

    pub fn sync(&mut self, deck: usize) {
        self.decks[deck].sync(&mut self.notices);
    }

    pub fn rewind(&mut self, deck: usize) {
        self.decks[deck].rewind(&mut self.notices);
    }

    pub fn fast_forward(&mut self, deck: usize) {
        self.decks[deck].fast_forward(&mut self.notices);
    }

    pub fn set_hotcue(&mut self, deck: usize, slot: u8) {
        match HotcueSlot::try_from(slot) {
            Ok(slot) => self.decks[deck].set_hotcue(slot, &mut self.notices),
            Err(e) => log::warn!("{e}"),
        }
    }

    pub fn clear_hotcues(&mut self, deck: usize) {
        self.decks[deck].clear_hotcues(&mut self.notices);
    }

    /// Open the single-file picker that loads into `deck`.
    pub fn open_load_dialog(&mut self, deck: usize) {
        let title = format!(
            "Load Track - Deck {} ({})",
            self.decks[deck].number(),
            self.picker_defaults.filter.pattern()
        );
        self.open_picker(PickerMode::SingleFile, title, PickerTarget::Deck(deck));
    }

    /// Open the multi-file picker that appends to the library.
    pub fn open_add_files(&mut self) {
        let title = format!("Load Files ({})", self.picker_defaults.filter.pattern());
        self.open_picker(PickerMode::MultipleFiles, title, PickerTarget::LibraryFiles);
    }

    /// Open the folder picker.
    pub fn open_select_folder(&mut self) {
        self.open_picker(
            PickerMode::Folder,
            "Select Folder".to_string(),
            PickerTarget::LibraryFolder,
        );
    }

    fn open_picker(&mut self, mode: PickerMode, title: String, target: PickerTarget) {
        let picker = FilePicker::new(
            mode,
            title,
            &self.picker_defaults.start_dir,
            self.picker_defaults.filter.clone(),
            self.picker_defaults.include_hidden,
        );
        self.overlay = Some(Overlay::Picker { picker, target });
    }

    pub fn picker_mut(&mut self) -> Option<&mut FilePicker> {
        match self.overlay.as_mut() {
            Some(Overlay::Picker { picker, .. }) => Some(picker),
            _ => None,
        }
    }

    /// Close the open picker and apply its outcome.
    pub fn finish_picker(&mut self, outcome: PickerOutcome) {
        if let Some(Overlay::Picker { picker, target }) = self.overlay.take() {
            // Later pickers reopen where this one ended.
            self.picker_defaults.start_dir = picker.dir().to_path_buf();
            self.apply_picker_outcome(target, outcome);
        }
    }

    /// Apply a picker result. No paths means nothing changes.
    pub fn apply_picker_outcome(&mut self, target: PickerTarget, outcome: PickerOutcome) {
        let paths = outcome.into_paths();
        if paths.is_empty() {
            log::debug!("selection for {target:?} cancelled");
            return;
        }

        match target {
            PickerTarget::Deck(deck) => {
                if let Some(path) = paths.into_iter().next() {
                    self.decks[deck].load(path, &mut self.notices);
                }
            }
            PickerTarget::LibraryFiles => {
                log::info!("adding {} file(s) to the library", paths.len());
                self.library.add_paths(paths);
            }
            PickerTarget::LibraryFolder => {
                for folder in paths {
                    log::info!("folder selected: {}", folder.display());
                    self.library.add_folder(folder);
                }
            }
        }
    }

    /// Load the highlighted browser track into `deck`.
    pub fn load_selected_into(&mut self, deck: usize) {
        let Some(path) = self.library.get(self.browser.selected).map(|p| p.to_path_buf()) else {
            return;
        };
        self.decks[deck].load(path, &mut self.notices);
    }

    pub fn browser_next(&mut self) {
        self.browser.next(self.library.len());
    }

    pub fn browser_prev(&mut self) {
        self.browser.prev(self.library.len());
    }

    pub fn open_menu(&mut self) {
        self.overlay = Some(Overlay::Menu(MenuState::default()));
    }

    pub fn menu_mut(&mut self) -> Option<&mut MenuState> {
        match self.overlay.as_mut() {
            Some(Overlay::Menu(menu)) => Some(menu),
            _ => None,
        }
    }

    /// Run the highlighted menu entry and close the menu.
    pub fn activate_menu(&mut self) {
        let Some(item) = self.menu_mut().and_then(|m| m.current()) else {
            return;
        };
        if !item.is_enabled() {
            return;
        }
        self.overlay = None;
        self.run_menu_item(item);
    }

    pub fn run_menu_item(&mut self, item: MenuItem) {
        if !item.is_enabled() {
            return;
        }

        match item {
            MenuItem::LoadFiles => self.open_add_files(),
            MenuItem::LoadFolder => self.open_select_folder(),
            MenuItem::Preferences => {
                let path = self
                    .config_path
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "(no config path)".to_string());
                let message = format!("Config file: {path}\n\n{}", self.settings_toml);
                self.notices.info("Preferences", &message);
            }
            MenuItem::Exit => self.should_quit = true,
            MenuItem::HorizontalLayout => self.view.layout = LayoutSetting::Horizontal,
            MenuItem::VerticalLayout => self.view.layout = LayoutSetting::Vertical,
            MenuItem::FourDeckView => self
                .notices
                .info("4 Deck View", "Only two decks are available."),
            MenuItem::ShowLibrary => self.view.show_library = !self.view.show_library,
            MenuItem::ShowWaveforms => self.view.show_waveform = !self.view.show_waveform,
            MenuItem::TrackInfo => {
                let deck = self.focused_deck();
                let track = deck
                    .loaded_track_path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "No track loaded".to_string());
                let message = format!(
                    "Deck {}: {}\nBPM: {:.1}\nPitch: {:+.1}%",
                    deck.number(),
                    track,
                    deck.bpm(),
                    deck.pitch()
                );
                self.notices.info("Track Info", &message);
            }
            MenuItem::KeyboardShortcuts => self.overlay = Some(Overlay::Help),
            MenuItem::About => {
                let message = format!(
                    "{} {}\n{}",
                    env!("CARGO_PKG_NAME"),
                    env!("CARGO_PKG_VERSION"),
                    env!("CARGO_PKG_DESCRIPTION")
                );
                self.notices.info("About", &message);
            }
            MenuItem::SaveCrate
            | MenuItem::ExportPlaylist
            | MenuItem::Fullscreen
            | MenuItem::AnalyzeFiles
            | MenuItem::EditTags
            | MenuItem::NewCrate
            | MenuItem::NewSmartCrate
            | MenuItem::ImportPlaylist
            | MenuItem::UserGuide => {
                let label = item.label().trim_end_matches('.');
                self.notices
                    .info(label, &format!("{label} is not available in this build."));
            }
            MenuItem::SetBeatgrid => {}
        }
    }

    pub fn toggle_help(&mut self) {
        self.overlay = match self.overlay {
            Some(Overlay::Help) => None,
            _ => Some(Overlay::Help),
        };
    }

    pub fn close_overlay(&mut self) {
        self.overlay = None;
    }

    /// Acknowledge the notice on screen.
    pub fn dismiss_notice(&mut self) {
        self.notices.dismiss();
    }

    /// Redraw the placeholder waveform with new random columns.
    pub fn regenerate_waveform(&mut self) {
        self.waveform.regenerate();
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }
}
