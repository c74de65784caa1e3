//! Center view: header strip and the placeholder waveform.

use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::waveform::{TIME_MARKERS, WaveformPlaceholder, is_beat_column};

use super::theme;

/// Static clock of the mockup header.
const CLOCK_TEXT: &str = "3:25 PM";

/// Draws the placeholder columns into a buffer.
pub struct WaveformWidget<'a> {
    placeholder: &'a WaveformPlaceholder,
}

impl<'a> WaveformWidget<'a> {
    pub fn new(placeholder: &'a WaveformPlaceholder) -> Self {
        Self { placeholder }
    }
}

fn put(buf: &mut Buffer, x: u16, y: u16, symbol: &str, fg: Color) {
    if let Some(cell) = buf.cell_mut((x, y)) {
        cell.set_symbol(symbol).set_fg(fg);
    }
}

impl Widget for WaveformWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height < 2 {
            return;
        }
        let half = area.height / 2;
        let center_y = area.y + half;

        for dx in 0..area.width {
            let x = area.x + dx;
            put(buf, x, center_y, "─", theme::CENTER_LINE);

            if is_beat_column(dx, area.width) {
                for y in area.y..area.bottom() {
                    put(buf, x, y, "│", theme::BEAT_MARKER);
                }
            }

            let shade = usize::from(dx % 2 == 1);
            let top = bar_height(self.placeholder.top(dx as usize), half);
            for y in center_y.saturating_sub(top)..center_y {
                put(buf, x, y, "█", theme::WAVE_TOP[shade]);
            }
            let below = area.bottom() - center_y;
            let bottom = bar_height(self.placeholder.bottom(dx as usize), below);
            for y in center_y..center_y + bottom {
                put(buf, x, y, "█", theme::WAVE_BOTTOM[shade]);
            }
        }

        let playhead_x = area.x + area.width / 2;
        for y in area.y..area.bottom() {
            put(buf, playhead_x, y, "┃", theme::PLAYHEAD);
        }

        for (i, label) in TIME_MARKERS.iter().enumerate() {
            let x = area.x + area.width / 4 + (i as u16) * area.width / 4;
            if x < area.right() {
                buf.set_string(x, area.y, label, Style::default().fg(Color::White));
            }
        }
    }
}

/// Rows covered by an amplitude (percent) within `room` rows.
pub fn bar_height(amplitude: u8, room: u16) -> u16 {
    let rows = u32::from(room) * u32::from(amplitude) / 100;
    (rows as u16).clamp(1, room.max(1))
}

fn header_line(header_text: &str) -> Line<'static> {
    let tag = Style::default().fg(Color::White).bg(theme::CENTER_LINE);
    Line::from(vec![
        Span::styled(
            format!(" {header_text} "),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" Master ", Style::default().fg(theme::MUTED)),
        Span::raw("  "),
        Span::styled(CLOCK_TEXT, Style::default().fg(Color::White)),
        Span::raw("  "),
        Span::styled(" SETUP ", tag),
        Span::raw(" "),
        Span::styled(" MIDI ", tag),
    ])
}

/// Render the center view into `area`.
pub fn render(frame: &mut Frame, placeholder: &WaveformPlaceholder, header_text: &str, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::BORDER))
        .style(Style::default().bg(theme::BACKGROUND));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [header, wave] = Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);
    frame.render_widget(Paragraph::new(header_line(header_text)), header);
    frame.render_widget(WaveformWidget::new(placeholder), wave);
}
