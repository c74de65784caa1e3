use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::{App, Overlay};
use crate::picker::PickerMode;
use crate::ui;

/// Main terminal event loop: draws the console and dispatches input.
/// Returns `Ok(())` when shutdown is requested.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    handle_key_event(key, app);
                }
                // The placeholder waveform is redrawn with fresh columns on resize.
                Event::Resize(_, _) => app.regenerate_waveform(),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Route a key press to whichever layer owns input: the notice, then the
/// open overlay, then search, then the console.
fn handle_key_event(key: KeyEvent, app: &mut App) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.request_quit();
        return;
    }

    if app.notices.has_pending() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            app.dismiss_notice();
        }
        return;
    }

    match app.overlay {
        Some(Overlay::Picker { .. }) => return handle_picker_key(key, app),
        Some(Overlay::Menu(_)) => return handle_menu_key(key, app),
        Some(Overlay::Help) => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                app.close_overlay();
            }
            return;
        }
        None => {}
    }

    if app.browser.search_mode {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => app.browser.exit_search(),
            KeyCode::Backspace => app.browser.pop_search_char(),
            KeyCode::Char(c) if !c.is_control() => app.browser.push_search_char(c),
            _ => {}
        }
        return;
    }

    let deck = app.focused;
    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Tab => app.focus_next_deck(),
        KeyCode::Char(' ') | KeyCode::Char('p') => app.toggle_play(deck),
        KeyCode::Char('c') => app.cue(deck),
        KeyCode::Char('s') => app.sync(deck),
        KeyCode::Char('h') | KeyCode::Left => app.rewind(deck),
        KeyCode::Char('l') | KeyCode::Right => app.fast_forward(deck),
        KeyCode::Char(c @ '1'..='4') => {
            if let Some(slot) = c.to_digit(10) {
                app.set_hotcue(deck, slot as u8);
            }
        }
        KeyCode::Char('x') => app.clear_hotcues(deck),
        KeyCode::Char('o') => app.open_load_dialog(deck),
        KeyCode::Char('j') | KeyCode::Down => app.browser_next(),
        KeyCode::Char('k') | KeyCode::Up => app.browser_prev(),
        KeyCode::Enter => app.load_selected_into(deck),
        KeyCode::Char('b') => app.browser.cycle_tab(),
        KeyCode::Char('/') => app.browser.enter_search(),
        KeyCode::Char('a') => app.open_add_files(),
        KeyCode::Char('f') => app.open_select_folder(),
        KeyCode::Char('m') => app.open_menu(),
        KeyCode::Char('?') => app.toggle_help(),
        _ => {}
    }
}

fn handle_picker_key(key: KeyEvent, app: &mut App) {
    let Some(picker) = app.picker_mut() else {
        return;
    };

    let outcome = match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            picker.next();
            None
        }
        KeyCode::Char('k') | KeyCode::Up => {
            picker.prev();
            None
        }
        KeyCode::Backspace | KeyCode::Char('h') | KeyCode::Left => {
            picker.parent();
            None
        }
        KeyCode::Enter => picker.activate(),
        KeyCode::Char(' ') => {
            picker.toggle_mark();
            None
        }
        KeyCode::Char('s') if picker.mode() == PickerMode::Folder => picker.choose_current_dir(),
        KeyCode::Char('.') => {
            picker.toggle_filter();
            None
        }
        KeyCode::Esc => Some(picker.cancel()),
        _ => None,
    };

    if let Some(outcome) = outcome {
        app.finish_picker(outcome);
    }
}

fn handle_menu_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('m') => app.close_overlay(),
        KeyCode::Enter => app.activate_menu(),
        KeyCode::Char('j') | KeyCode::Down => {
            if let Some(menu) = app.menu_mut() {
                menu.next();
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            if let Some(menu) = app.menu_mut() {
                menu.prev();
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::app::MenuItem;
    use crate::config::Settings;

    fn press(app: &mut App, code: KeyCode) {
        handle_key_event(KeyEvent::new(code, KeyModifiers::NONE), app);
    }

    fn app() -> App {
        App::new(&Settings::default(), PathBuf::from("/tmp"), None)
    }

    #[test]
    fn notice_swallows_keys_until_dismissed() {
        let mut app = app();
        press(&mut app, KeyCode::Char(' '));
        assert!(app.notices.has_pending());

        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Enter);
        assert!(!app.notices.has_pending());
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn deck_keys_follow_focus() {
        let mut app = app();
        app.library.add_paths(["/music/a.mp3"]);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('p'));

        assert!(app.decks[0].loaded_track_path().is_none());
        assert!(app.decks[1].is_playing());
    }

    #[test]
    fn search_mode_captures_letters() {
        let mut app = app();
        press(&mut app, KeyCode::Char('/'));
        press(&mut app, KeyCode::Char('q'));
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.browser.search_query, "qs");
        assert!(!app.should_quit);
        assert!(!app.notices.has_pending());

        press(&mut app, KeyCode::Esc);
        assert!(!app.browser.search_mode);
    }

    #[test]
    fn hotcue_digits_reach_the_deck() {
        let mut app = app();
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(
            app.notices.current().map(|n| n.message.as_str()),
            Some("Deck 1: Hot cue 3 set")
        );
    }

    #[test]
    fn menu_runs_highlighted_entry() {
        let mut app = app();
        press(&mut app, KeyCode::Char('m'));
        while app.menu_mut().and_then(|m| m.current()) != Some(MenuItem::About) {
            press(&mut app, KeyCode::Char('j'));
        }
        press(&mut app, KeyCode::Enter);
        assert!(app.overlay.is_none());
        assert_eq!(app.notices.current().map(|n| n.title.as_str()), Some("About"));
    }

    #[test]
    fn escape_cancels_picker() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new(&Settings::default(), dir.path().to_path_buf(), None);
        press(&mut app, KeyCode::Char('o'));
        assert!(app.picker_mut().is_some());
        press(&mut app, KeyCode::Esc);
        assert!(app.overlay.is_none());
        assert!(app.decks[0].loaded_track_path().is_none());
    }

    #[test]
    fn folder_picker_selects_current_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new(&Settings::default(), dir.path().to_path_buf(), None);
        press(&mut app, KeyCode::Char('f'));
        press(&mut app, KeyCode::Char('s'));
        assert!(app.overlay.is_none());
        assert_eq!(app.library.folders().len(), 1);
    }
}
