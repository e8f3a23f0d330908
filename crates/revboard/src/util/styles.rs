//! Common styling utilities for dashboard panels

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders};

/// Standard color for the focused panel
pub const FOCUS_COLOR: Color = Color::Yellow;

/// Standard color for help and detail text
pub const HELP_COLOR: Color = Color::DarkGray;

/// Line color for the revenue trend
pub const TREND_COLOR: Color = Color::Blue;

/// Bar color for booking volume
pub const BOOKING_COLOR: Color = Color::LightBlue;

/// Bar color for category revenue
pub const CATEGORY_COLOR: Color = Color::Green;

/// Bar color for ratings
pub const RATING_COLOR: Color = Color::Yellow;

/// Slice palette for the revenue share chart, cycled when there are more
/// slices than entries (terminal rendition of the web palette).
pub const SHARE_PALETTE: [Color; 6] = [
    Color::Blue,
    Color::Magenta,
    Color::LightMagenta,
    Color::LightRed,
    Color::Yellow,
    Color::Cyan,
];

/// Color for the share slice at `index`.
pub fn slice_color(index: usize) -> Color {
    SHARE_PALETTE[index % SHARE_PALETTE.len()]
}

/// Create a block with a title that shows focused state via border color.
///
/// When focused, the border is yellow. When unfocused, it's the default color.
pub fn focused_block(title: &str, focused: bool) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(FOCUS_COLOR)
    } else {
        Style::default()
    };

    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title.to_string())
}
