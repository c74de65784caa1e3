//! Track browser: tab strip, search box, sidebar and the track table.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Row, Table, TableState},
};

use crate::app::{App, BrowserTab, SIDEBAR_SHORTCUTS, SIDEBAR_TREE};
use crate::library::{BrowserColumn, browser_row, file_name_of};

use super::theme;

fn tabs_line(app: &App) -> Line<'static> {
    let mut spans: Vec<Span> = Vec::new();
    for tab in BrowserTab::ALL {
        let bg = if tab == app.browser.tab {
            theme::ACCENT_BLUE
        } else {
            theme::CENTER_LINE
        };
        spans.push(Span::styled(
            format!("  {:<8}", tab.label()),
            Style::default().fg(Color::White).bg(bg).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(" "));
    }

    spans.push(Span::raw("   search: "));
    let cursor = if app.browser.search_mode { "▏" } else { "" };
    spans.push(Span::styled(
        format!("{:<20}", format!("{}{cursor}", app.browser.search_query)),
        Style::default().fg(Color::White).bg(theme::CENTER_LINE),
    ));
    Line::from(spans)
}

fn sidebar_items(app: &App) -> Vec<ListItem<'static>> {
    let mut items: Vec<ListItem> = SIDEBAR_SHORTCUTS
        .iter()
        .map(|s| ListItem::new(format!(" {s}")))
        .collect();
    items.push(ListItem::new(Span::styled(
        " A List",
        Style::default().add_modifier(Modifier::BOLD),
    )));

    for (group, children) in SIDEBAR_TREE {
        items.push(ListItem::new(format!(" ▾ {group}")));
        if group == "Crates" {
            items.push(ListItem::new("    + New Crate"));
        }
        for child in children {
            items.push(ListItem::new(format!("    {child}")));
        }
    }

    if !app.library.folders().is_empty() {
        items.push(ListItem::new(" ▾ Folders"));
        for folder in app.library.folders() {
            items.push(ListItem::new(format!("    {}", file_name_of(folder))));
        }
    }
    items
}

fn render_track_table(frame: &mut Frame, app: &App, area: Rect) {
    let header = Row::new(BrowserColumn::ALL.map(BrowserColumn::heading))
        .style(Style::default().fg(Color::White).bg(theme::CENTER_LINE).add_modifier(Modifier::BOLD));
    let rows: Vec<Row> = app
        .library
        .paths()
        .iter()
        .map(|p| Row::new(browser_row(p)))
        .collect();
    let widths = [
        Constraint::Percentage(34),
        Constraint::Percentage(22),
        Constraint::Percentage(22),
        Constraint::Length(6),
        Constraint::Length(8),
        Constraint::Length(8),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .row_highlight_style(Style::default().bg(theme::ACCENT_BLUE))
        .highlight_symbol("> ");

    let mut state = TableState::default();
    if !app.library.is_empty() {
        state.select(Some(app.browser.selected.min(app.library.len() - 1)));
    }
    frame.render_stateful_widget(table, area, &mut state);
}

/// Render the browser into `area`.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::BORDER))
        .title(format!(" library ({} tracks) ", app.library.len()))
        .style(Style::default().bg(theme::PANEL));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [tabs, content] = Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);
    frame.render_widget(Paragraph::new(tabs_line(app)), tabs);

    if app.browser.tab != BrowserTab::Files {
        let empty = Paragraph::new(format!(" {} is empty.", app.browser.tab.label()))
            .style(Style::default().fg(theme::MUTED));
        frame.render_widget(empty, content);
        return;
    }

    let [sidebar, list] =
        Layout::horizontal([Constraint::Length(24), Constraint::Min(0)]).areas(content);
    let [tree, button] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(sidebar);

    frame.render_widget(
        List::new(sidebar_items(app)).style(Style::default().bg(theme::CENTER_LINE)),
        tree,
    );
    frame.render_widget(
        Paragraph::new(" [f] SELECT FOLDER ").style(
            Style::default()
                .fg(Color::Black)
                .bg(theme::BPM_GREEN)
                .add_modifier(Modifier::BOLD),
        ),
        button,
    );
    render_track_table(frame, app, list);
}
