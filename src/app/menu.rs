/// Every entry of the menubar.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MenuItem {
    LoadFiles,
    LoadFolder,
    SaveCrate,
    ExportPlaylist,
    Preferences,
    Exit,
    HorizontalLayout,
    VerticalLayout,
    FourDeckView,
    ShowLibrary,
    ShowWaveforms,
    Fullscreen,
    AnalyzeFiles,
    EditTags,
    SetBeatgrid,
    TrackInfo,
    NewCrate,
    NewSmartCrate,
    ImportPlaylist,
    UserGuide,
    KeyboardShortcuts,
    About,
}

impl MenuItem {
    pub fn label(self) -> &'static str {
        match self {
            MenuItem::LoadFiles => "Load Files...",
            MenuItem::LoadFolder => "Load Folder...",
            MenuItem::SaveCrate => "Save Crate",
            MenuItem::ExportPlaylist => "Export Playlist...",
            MenuItem::Preferences => "Preferences...",
            MenuItem::Exit => "Exit",
            MenuItem::HorizontalLayout => "Horizontal Layout",
            MenuItem::VerticalLayout => "Vertical Layout",
            MenuItem::FourDeckView => "4 Deck View",
            MenuItem::ShowLibrary => "Show Library",
            MenuItem::ShowWaveforms => "Show Waveforms",
            MenuItem::Fullscreen => "Fullscreen",
            MenuItem::AnalyzeFiles => "Analyze Files",
            MenuItem::EditTags => "Edit ID3 Tags...",
            MenuItem::SetBeatgrid => "Set Beatgrid...",
            MenuItem::TrackInfo => "Track Info...",
            MenuItem::NewCrate => "New Crate",
            MenuItem::NewSmartCrate => "New Smart Crate",
            MenuItem::ImportPlaylist => "Import Playlist...",
            MenuItem::UserGuide => "User Guide",
            MenuItem::KeyboardShortcuts => "Keyboard Shortcuts",
            MenuItem::About => "About",
        }
    }

    /// Beatgrids are not modeled, so that entry is greyed out.
    pub fn is_enabled(self) -> bool {
        !matches!(self, MenuItem::SetBeatgrid)
    }

    /// Entries shown as checkboxes.
    pub fn is_toggle(self) -> bool {
        matches!(self, MenuItem::ShowLibrary | MenuItem::ShowWaveforms)
    }
}

/// Menubar sections in display order.
pub static MENUS: [(&str, &[MenuItem]); 5] = [
    (
        "File",
        &[
            MenuItem::LoadFiles,
            MenuItem::LoadFolder,
            MenuItem::SaveCrate,
            MenuItem::ExportPlaylist,
            MenuItem::Preferences,
            MenuItem::Exit,
        ],
    ),
    (
        "View",
        &[
            MenuItem::HorizontalLayout,
            MenuItem::VerticalLayout,
            MenuItem::FourDeckView,
            MenuItem::ShowLibrary,
            MenuItem::ShowWaveforms,
            MenuItem::Fullscreen,
        ],
    ),
    (
        "Track",
        &[
            MenuItem::AnalyzeFiles,
            MenuItem::EditTags,
            MenuItem::SetBeatgrid,
            MenuItem::TrackInfo,
        ],
    ),
    (
        "Playlist",
        &[
            MenuItem::NewCrate,
            MenuItem::NewSmartCrate,
            MenuItem::ImportPlaylist,
            MenuItem::ExportPlaylist,
        ],
    ),
    (
        "Help",
        &[
            MenuItem::UserGuide,
            MenuItem::KeyboardShortcuts,
            MenuItem::About,
        ],
    ),
];

/// Cursor over the flattened menu.
#[derive(Debug, Default, Clone)]
pub struct MenuState {
    pub selected: usize,
}

impl MenuState {
    /// All entries with their section name, in display order.
    pub fn entries() -> impl Iterator<Item = (&'static str, MenuItem)> {
        MENUS
            .iter()
            .flat_map(|(section, items)| items.iter().map(move |&item| (*section, item)))
    }

    pub fn len() -> usize {
        MENUS.iter().map(|(_, items)| items.len()).sum()
    }

    pub fn current(&self) -> Option<MenuItem> {
        Self::entries().nth(self.selected).map(|(_, item)| item)
    }

    /// Move down, skipping disabled entries.
    pub fn next(&mut self) {
        let len = Self::len();
        for _ in 0..len {
            self.selected = (self.selected + 1) % len;
            if self.current().is_some_and(MenuItem::is_enabled) {
                break;
            }
        }
    }

    /// Move up, skipping disabled entries.
    pub fn prev(&mut self) {
        let len = Self::len();
        for _ in 0..len {
            self.selected = self.selected.checked_sub(1).unwrap_or(len - 1);
            if self.current().is_some_and(MenuItem::is_enabled) {
                break;
            }
        }
    }
}
