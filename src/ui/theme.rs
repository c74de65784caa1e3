//! Console palette.

use ratatui::style::Color;

pub const BACKGROUND: Color = Color::Rgb(0x0a, 0x0a, 0x0a);
pub const PANEL: Color = Color::Rgb(0x1a, 0x1a, 0x1a);
pub const BORDER: Color = Color::Rgb(0x44, 0x44, 0x44);
pub const MUTED: Color = Color::Rgb(0x99, 0x99, 0x99);
pub const DIM: Color = Color::Rgb(0x66, 0x66, 0x66);
pub const CENTER_LINE: Color = Color::Rgb(0x33, 0x33, 0x33);

pub const ACCENT_BLUE: Color = Color::Rgb(0x00, 0x66, 0xcc);
pub const BPM_GREEN: Color = Color::Rgb(0x00, 0xff, 0x00);
pub const PAUSE_ORANGE: Color = Color::Rgb(0xff, 0xaa, 0x00);
pub const CUE_ORANGE: Color = Color::Rgb(0xff, 0x66, 0x00);

pub const WAVE_TOP: [Color; 2] = [Color::Rgb(0xff, 0x88, 0x00), Color::Rgb(0xff, 0x66, 0x00)];
pub const WAVE_BOTTOM: [Color; 2] = [Color::Rgb(0x00, 0x88, 0xff), Color::Rgb(0x00, 0x66, 0xcc)];
pub const BEAT_MARKER: Color = Color::Rgb(0xff, 0xff, 0x00);
pub const PLAYHEAD: Color = Color::White;

/// Hotcue pad colors: red, blue, green, yellow.
pub const HOTCUES: [Color; 4] = [
    Color::Rgb(0xff, 0x00, 0x00),
    Color::Rgb(0x00, 0x00, 0xff),
    Color::Rgb(0x00, 0xff, 0x00),
    Color::Rgb(0xff, 0xff, 0x00),
];
