use super::load::{default_config_path, default_log_path, resolve_config_path};
use super::schema::*;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|e| e.into_inner())
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_twindeck_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("TWINDECK_CONFIG_PATH", "/tmp/twindeck-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/twindeck-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/xdg-config-home")
            .join("twindeck")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("twindeck")
            .join("config.toml")
    );
}

#[test]
fn default_log_path_uses_xdg_state_home_then_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_STATE_HOME", "/tmp/xdg-state");
    assert_eq!(
        default_log_path().unwrap(),
        std::path::PathBuf::from("/tmp/xdg-state/twindeck/twindeck.log")
    );

    let _g2 = EnvGuard::remove("XDG_STATE_HOME");
    let _g3 = EnvGuard::set("HOME", "/tmp/home-dir");
    assert_eq!(
        default_log_path().unwrap(),
        std::path::PathBuf::from("/tmp/home-dir/.local/state/twindeck/twindeck.log")
    );
}

#[test]
fn settings_defaults_match_the_stock_console() {
    let s = Settings::default();
    assert_eq!(s.decks.deck1_name, "Badlands");
    assert_eq!(s.decks.deck2_name, "Feel me");
    assert_eq!(s.decks.default_bpm, 127.0);
    assert_eq!(s.library.extensions, vec!["mp3", "wav", "flac", "m4a"]);
    assert_eq!(s.ui.layout, LayoutSetting::Horizontal);
    assert!(s.ui.show_library);
    assert!(s.ui.show_waveform);
    assert!(s.validate().is_ok());
}

#[test]
fn settings_load_from_config_file_and_parse_layout_aliases() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[decks]
deck1_name = "Left"
deck2_name = "Right"
default_bpm = 124.0

[library]
extensions = ["mp3", "ogg"]
include_hidden = true
start_dir = "/srv/music"

[ui]
header_text = "booth"
layout = "stacked"
show_library = false
show_waveform = false

[logging]
level = "debug"
file = "/tmp/twindeck.log"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("TWINDECK_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("TWINDECK__DECKS__DEFAULT_BPM");

    let s = Settings::load().unwrap();
    assert_eq!(s.decks.deck1_name, "Left");
    assert_eq!(s.decks.deck2_name, "Right");
    assert_eq!(s.decks.default_bpm, 124.0);
    assert_eq!(s.library.extensions, vec!["mp3".to_string(), "ogg".to_string()]);
    assert!(s.library.include_hidden);
    assert_eq!(
        s.library.start_dir.as_deref(),
        Some(std::path::Path::new("/srv/music"))
    );
    assert_eq!(s.ui.header_text, "booth");
    assert_eq!(s.ui.layout, LayoutSetting::Vertical);
    assert!(!s.ui.show_library);
    assert!(!s.ui.show_waveform);
    assert_eq!(s.logging.level, "debug");
    assert_eq!(
        s.logging.file.as_deref(),
        Some(std::path::Path::new("/tmp/twindeck.log"))
    );
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[decks]
default_bpm = 127.0
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("TWINDECK_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("TWINDECK__DECKS__DEFAULT_BPM", "120.5");

    let s = Settings::load().unwrap();
    assert_eq!(s.decks.default_bpm, 120.5);
}

#[test]
fn missing_config_file_falls_back_to_defaults() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("absent.toml");
    let _g1 = EnvGuard::set("TWINDECK_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("TWINDECK__DECKS__DEFAULT_BPM");

    let s = Settings::load().unwrap();
    assert_eq!(s.decks.deck1_name, "Badlands");
    assert_eq!(s.decks.default_bpm, 127.0);
}

#[test]
fn validate_rejects_bad_values() {
    let mut s = Settings::default();
    s.decks.default_bpm = 0.0;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.decks.default_bpm = f64::NAN;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.decks.deck2_name = "  ".into();
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.library.extensions = vec![".".into(), " ".into()];
    assert!(s.validate().is_err());
}

#[test]
fn to_toml_renders_sections() {
    let text = Settings::default().to_toml().unwrap();
    assert!(text.contains("[decks]"));
    assert!(text.contains("deck1_name = \"Badlands\""));
    assert!(text.contains("layout = \"horizontal\""));
}
