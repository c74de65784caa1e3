//! Popups drawn over the console: notices, picker, menu and help.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding, Paragraph, Wrap},
};

use crate::app::{MenuItem, MenuState, ViewOptions};
use crate::notify::{Notice, NoticeLevel};
use crate::picker::{FilePicker, PickerMode};

use super::{centered_rect_sized, controls, theme};

fn popup_block(title: String, border: Color) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(title)
        .padding(Padding {
            left: 1,
            right: 1,
            top: 0,
            bottom: 0,
        })
        .style(Style::default().bg(theme::PANEL))
}

/// Modal acknowledgement, like a message box.
pub fn render_notice(frame: &mut Frame, notice: &Notice, pending: usize, area: Rect) {
    let border = match notice.level {
        NoticeLevel::Info => theme::ACCENT_BLUE,
        NoticeLevel::Warning => theme::PAUSE_ORANGE,
    };
    let lines = notice.message.lines().count() as u16;
    let popup = centered_rect_sized(64, lines + 4, area);
    frame.render_widget(Clear, popup);

    let more = if pending > 1 {
        format!(" (+{} more)", pending - 1)
    } else {
        String::new()
    };
    let block = popup_block(format!(" {}{more} ", notice.title), border)
        .title_bottom(Line::from(" Enter: OK ").alignment(Alignment::Right));
    let body = Paragraph::new(notice.message.clone())
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(body, popup);
}

fn picker_hint(mode: PickerMode) -> &'static str {
    match mode {
        PickerMode::SingleFile => " enter: open/choose | bksp: up | .: all files | esc: cancel ",
        PickerMode::MultipleFiles => {
            " space: mark | enter: choose | bksp: up | .: all files | esc: cancel "
        }
        PickerMode::Folder => " enter: open | s: select this folder | bksp: up | esc: cancel ",
    }
}

/// File or folder picker.
pub fn render_picker(frame: &mut Frame, picker: &FilePicker, area: Rect) {
    let popup = centered_rect_sized(area.width * 7 / 10, area.height * 7 / 10, area);
    frame.render_widget(Clear, popup);

    let items: Vec<ListItem> = picker
        .entries()
        .iter()
        .map(|e| {
            if e.is_dir {
                ListItem::new(Span::styled(
                    format!("{}/", e.name),
                    Style::default().fg(theme::ACCENT_BLUE).add_modifier(Modifier::BOLD),
                ))
            } else if picker.is_marked(&e.path) {
                ListItem::new(Span::styled(
                    format!("* {}", e.name),
                    Style::default().fg(theme::BPM_GREEN),
                ))
            } else {
                ListItem::new(format!("  {}", e.name))
            }
        })
        .collect();

    let filter_note = if picker.filter_enabled() { "" } else { " [all files]" };
    let marked_note = match picker.marked().len() {
        0 => String::new(),
        n => format!(" ({n} marked)"),
    };
    let block = popup_block(
        format!(" {}{filter_note}{marked_note} ", picker.title()),
        theme::ACCENT_BLUE,
    )
    .title_bottom(Line::from(picker_hint(picker.mode())))
    .title_top(Line::from(format!(" {} ", picker.dir().display())).alignment(Alignment::Right));

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ListState::default();
    if !picker.entries().is_empty() {
        state.select(Some(picker.selected()));
    }
    frame.render_stateful_widget(list, popup, &mut state);
}

fn menu_item_text(section: &str, item: MenuItem, view: &ViewOptions) -> String {
    if !item.is_toggle() {
        return format!("{section:<9}     {}", item.label());
    }
    let on = match item {
        MenuItem::ShowLibrary => view.show_library,
        _ => view.show_waveform,
    };
    let mark = if on { "x" } else { " " };
    format!("{section:<9} [{mark}] {}", item.label())
}

/// Menubar as a single list.
pub fn render_menu(frame: &mut Frame, menu: &MenuState, view: &ViewOptions, area: Rect) {
    let popup = centered_rect_sized(44, MenuState::len() as u16 + 2, area);
    frame.render_widget(Clear, popup);

    let items: Vec<ListItem> = MenuState::entries()
        .map(|(section, item)| {
            let text = menu_item_text(section, item, view);
            if item.is_enabled() {
                ListItem::new(text)
            } else {
                ListItem::new(Span::styled(text, Style::default().fg(theme::DIM)))
            }
        })
        .collect();

    let list = List::new(items)
        .block(popup_block(" menu (enter: run, esc: close) ".to_string(), theme::ACCENT_BLUE))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    let mut state = ListState::default();
    state.select(Some(menu.selected));
    frame.render_stateful_widget(list, popup, &mut state);
}

/// Keyboard shortcuts.
pub fn render_help(frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = controls::CONTROLS
        .iter()
        .map(|(keys, action)| {
            Line::from(vec![
                Span::styled(
                    format!("{keys:>10}  "),
                    Style::default().fg(theme::BPM_GREEN).add_modifier(Modifier::BOLD),
                ),
                Span::raw(*action),
            ])
        })
        .collect();
    let popup = centered_rect_sized(56, lines.len() as u16 + 2, area);
    frame.render_widget(Clear, popup);
    let help = Paragraph::new(lines).block(popup_block(
        " keyboard shortcuts (? closes) ".to_string(),
        theme::ACCENT_BLUE,
    ));
    frame.render_widget(help, popup);
}
