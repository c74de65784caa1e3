use std::env;
use std::io::{self, Stdout};

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};

mod event_loop;
mod logging;
mod settings;
mod startup;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = settings::load_settings();
    logging::init_logging(&settings.logging);

    let start_dir = startup::resolve_start_dir(env::args().nth(1), &settings);
    let mut app = startup::build_app(&settings, start_dir);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(&mut terminal, &mut app);
    let restore_result = restore_terminal(&mut terminal);

    log::info!("shutting down");
    merge_results(run_result, restore_result)
}

/// Undo raw mode, the alternate screen and the hidden cursor. Every step runs
/// even when an earlier one fails.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let cursor = terminal.show_cursor();
    first_failure([raw, screen, cursor])
}

/// First error of `steps`; later ones are only logged.
fn first_failure<const N: usize>(steps: [io::Result<()>; N]) -> io::Result<()> {
    let mut failures = steps.into_iter().filter_map(Result::err);
    let first = failures.next();
    for e in failures {
        log::warn!("terminal restore: {e}");
    }
    first.map_or(Ok(()), Err)
}

/// The event loop's error wins over a restore error.
fn merge_results(
    run: Result<(), Box<dyn std::error::Error>>,
    restore: io::Result<()>,
) -> Result<(), Box<dyn std::error::Error>> {
    match (run, restore) {
        (Err(e), Err(r)) => {
            log::error!("event loop failed: {e}; terminal restore also failed: {r}");
            Err(e)
        }
        (Err(e), Ok(())) => {
            log::error!("event loop failed: {e}");
            Err(e)
        }
        (Ok(()), restore) => restore.map_err(Into::into),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fail(msg: &str) -> io::Result<()> {
        Err(io::Error::other(msg.to_string()))
    }

    #[test]
    fn first_failure_keeps_the_earliest_error() {
        assert!(first_failure([Ok(()), Ok(()), Ok(())]).is_ok());

        let err = first_failure([fail("raw mode"), fail("screen"), Ok(())]).unwrap_err();
        assert_eq!(err.to_string(), "raw mode");

        let err = first_failure([Ok(()), fail("cursor")]).unwrap_err();
        assert_eq!(err.to_string(), "cursor");
    }

    #[test]
    fn loop_error_is_not_lost_when_restore_fails() {
        let merged = merge_results(Err("draw failed".into()), fail("raw mode")).unwrap_err();
        assert_eq!(merged.to_string(), "draw failed");

        let merged = merge_results(Ok(()), fail("raw mode")).unwrap_err();
        assert_eq!(merged.to_string(), "raw mode");

        assert!(merge_results(Ok(()), Ok(())).is_ok());
    }
}
