use std::fs::{self, OpenOptions};

use env_logger::{Builder, Env, Target};

use crate::config::{self, LoggingSettings};

/// Send `log` output to a file; stderr belongs to the terminal UI.
///
/// `RUST_LOG` overrides `settings.level`. When no file can be opened the
/// logger stays uninstalled and every record is dropped.
pub fn init_logging(settings: &LoggingSettings) {
    let Some(path) = settings.file.clone().or_else(config::default_log_path) else {
        return;
    };

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            eprintln!("twindeck: cannot create log dir {}: {e}", parent.display());
            return;
        }
    }

    let file = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("twindeck: cannot open log file {}: {e}", path.display());
            return;
        }
    };

    let env = Env::default().default_filter_or(settings.level.as_str());
    if Builder::from_env(env)
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .is_err()
    {
        eprintln!("twindeck: logger already initialised");
    }
}
