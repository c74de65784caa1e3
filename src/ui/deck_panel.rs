//! Deck panel: header, hotcue pads, BPM dial, transport and loop rows.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::deck::{Deck, HotcueSlot, Presence};

use super::theme;

/// Loop lengths shown under the transport. They have no action.
const LOOP_SIZES: [&str; 8] = ["1/8", "1/4", "1/2", "1", "2", "4", "8", "16"];

/// Simulated clock readouts; no playback position is modeled.
const HEADER_TIME: &str = "04:14.90";
const ELAPSED_TIME: &str = "01:19.4";
const REMAINING_TIME: &str = "02:55.5";

/// Second header line: an artist placeholder until tags exist.
pub fn artist_text(deck: &Deck) -> &'static str {
    match deck.presence() {
        Presence::Empty => "Atomic Load",
        Presence::Loaded => "Artist Name",
    }
}

/// Symbol on the play button for the deck's current state.
pub fn play_symbol(deck: &Deck) -> &'static str {
    if deck.is_playing() { "⏸" } else { "▶" }
}

fn pad(text: &str, fg: Color, bg: Color) -> Span<'static> {
    Span::styled(
        format!(" {text} "),
        Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD),
    )
}

fn header_lines(deck: &Deck) -> Vec<Line<'static>> {
    vec![
        Line::from(vec![
            Span::styled(
                deck.title().to_string(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!("{}", deck.bpm() as i64),
                Style::default().fg(theme::BPM_GREEN).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(artist_text(deck), Style::default().fg(theme::MUTED)),
            Span::raw("  "),
            Span::styled(HEADER_TIME, Style::default().fg(Color::White)),
        ]),
    ]
}

fn hotcue_line() -> Line<'static> {
    let mut spans: Vec<Span> = HotcueSlot::all()
        .zip(theme::HOTCUES)
        .flat_map(|(slot, color)| [pad(&slot.to_string(), Color::Black, color), Span::raw(" ")])
        .collect();
    spans.push(pad("X", Color::White, theme::DIM));
    Line::from(spans)
}

fn dial_lines(deck: &Deck) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            format!("{:.1}", deck.bpm()),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{:+.1}%", deck.pitch()),
            Style::default().fg(theme::BPM_GREEN),
        )),
        Line::from(Span::styled(ELAPSED_TIME, Style::default().fg(Color::White))),
        Line::from(Span::styled(REMAINING_TIME, Style::default().fg(theme::DIM))),
    ]
}

fn transport_line(deck: &Deck) -> Line<'static> {
    let play_bg = if deck.is_playing() {
        theme::PAUSE_ORANGE
    } else {
        theme::BPM_GREEN
    };
    Line::from(vec![
        pad("SYNC", Color::White, theme::ACCENT_BLUE),
        Span::raw(" "),
        pad("◀◀", Color::White, theme::CENTER_LINE),
        Span::raw(" "),
        pad(play_symbol(deck), Color::Black, play_bg),
        Span::raw(" "),
        pad("▶▶", Color::White, theme::CENTER_LINE),
    ])
}

fn loop_line() -> Line<'static> {
    let spans: Vec<Span> = LOOP_SIZES
        .iter()
        .flat_map(|size| [pad(size, Color::White, theme::CENTER_LINE), Span::raw(" ")])
        .collect();
    Line::from(spans)
}

fn cue_load_line() -> Line<'static> {
    Line::from(vec![
        pad("CUE", Color::White, theme::CUE_ORANGE),
        Span::raw("   "),
        pad("LOAD", Color::White, theme::ACCENT_BLUE),
    ])
}

/// Render one deck into `area`.
pub fn render(frame: &mut Frame, deck: &Deck, focused: bool, area: Rect) {
    let border = if focused { theme::ACCENT_BLUE } else { theme::BORDER };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(format!(" {} ", deck.number()))
        .style(Style::default().bg(theme::PANEL));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(6),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .split(inner);

    frame.render_widget(Paragraph::new(header_lines(deck)), rows[0]);
    frame.render_widget(Paragraph::new(hotcue_line()), rows[1]);

    // Stand-in for the circular BPM display.
    let [dial_area] = Layout::horizontal([Constraint::Length(16)])
        .flex(ratatui::layout::Flex::Center)
        .areas(rows[2]);
    let dial = Paragraph::new(dial_lines(deck))
        .alignment(Alignment::Center)
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(theme::BORDER)),
        );
    frame.render_widget(dial, dial_area);

    frame.render_widget(Paragraph::new(transport_line(deck)), rows[3]);
    frame.render_widget(Paragraph::new(loop_line()), rows[4]);
    frame.render_widget(Paragraph::new(cue_load_line()), rows[5]);
}
