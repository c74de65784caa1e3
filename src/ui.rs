//! UI rendering for the terminal console.
//!
//! `draw` lays out the two decks, the center waveform view, the track
//! browser and the controls footer, then stacks any overlay and the
//! pending notice on top.

mod browser_view;
mod controls;
mod deck_panel;
mod overlays;
mod theme;
mod waveform_view;

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::{App, Overlay};
use crate::config::LayoutSetting;

/// Rows reserved for the track browser.
const BROWSER_HEIGHT: u16 = 12;
/// Rows of the center view when it sits above the decks.
const STACKED_WAVEFORM_HEIGHT: u16 = 10;

/// Compute a centered rectangle with given size constrained to `r`.
fn centered_rect_sized(mut width: u16, mut height: u16, r: Rect) -> Rect {
    // Keep the popup smaller and avoid covering the entire UI.
    width = width.min(r.width.saturating_sub(2)).max(10);
    height = height.min(r.height.saturating_sub(2)).max(5);

    let x = r.x + (r.width.saturating_sub(width) / 2);
    let y = r.y + (r.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

fn draw_decks(frame: &mut Frame, app: &App, area: Rect) {
    let [left, right] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(area);
    deck_panel::render(frame, &app.decks[0], app.focused == 0, left);
    deck_panel::render(frame, &app.decks[1], app.focused == 1, right);
}

fn draw_console(frame: &mut Frame, app: &App, area: Rect) {
    if !app.view.show_waveform {
        draw_decks(frame, app, area);
        return;
    }

    match app.view.layout {
        LayoutSetting::Horizontal => {
            let [left, center, right] = Layout::horizontal([
                Constraint::Percentage(30),
                Constraint::Percentage(40),
                Constraint::Percentage(30),
            ])
            .areas(area);
            deck_panel::render(frame, &app.decks[0], app.focused == 0, left);
            waveform_view::render(frame, &app.waveform, &app.header_text, center);
            deck_panel::render(frame, &app.decks[1], app.focused == 1, right);
        }
        LayoutSetting::Vertical => {
            let [wave, decks] = Layout::vertical([
                Constraint::Length(STACKED_WAVEFORM_HEIGHT),
                Constraint::Min(0),
            ])
            .areas(area);
            waveform_view::render(frame, &app.waveform, &app.header_text, wave);
            draw_decks(frame, app, decks);
        }
    }
}

/// Render the entire UI into the provided `frame` using `app` state.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(theme::BACKGROUND)),
        area,
    );

    let browser_height = if app.view.show_library {
        BROWSER_HEIGHT
    } else {
        0
    };
    let [console, browser, footer] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(browser_height),
        Constraint::Length(3),
    ])
    .areas(area);

    draw_console(frame, app, console);
    if app.view.show_library {
        browser_view::render(frame, app, browser);
    }

    let footer_par = Paragraph::new(controls::controls_text(app.focused_deck().number()))
        .style(Style::default().fg(theme::MUTED))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::BORDER))
                .title(" controls ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer_par, footer);

    match &app.overlay {
        Some(Overlay::Picker { picker, .. }) => overlays::render_picker(frame, picker, area),
        Some(Overlay::Menu(menu)) => overlays::render_menu(frame, menu, &app.view, area),
        Some(Overlay::Help) => overlays::render_help(frame, area),
        None => {}
    }

    if let Some(notice) = app.notices.current() {
        overlays::render_notice(frame, notice, app.notices.len(), area);
    }
}
