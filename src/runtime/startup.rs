use std::env;
use std::path::PathBuf;

use crate::app::App;
use crate::config::{self, Settings};

/// Directory pickers open in: CLI argument, then `library.start_dir`, then
/// the working directory.
pub fn resolve_start_dir(arg: Option<String>, settings: &Settings) -> PathBuf {
    arg.map(PathBuf::from)
        .or_else(|| settings.library.start_dir.clone())
        .or_else(|| env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Build the console as it looks on launch: both decks empty, nothing in the
/// library, no notice pending.
pub fn build_app(settings: &Settings, start_dir: PathBuf) -> App {
    log::info!(
        "starting {} {} in {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        start_dir.display()
    );
    App::new(settings, start_dir, config::resolve_config_path())
}
