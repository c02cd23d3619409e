//! Color theme constants.

use ratatui::style::Color;

/// Frame and idle borders
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Keyboard focus and headings
pub const COLOR_ACCENT: Color = Color::White;

/// Title text
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for hints and matched cards
pub const COLOR_DIM: Color = Color::DarkGray;

/// Armed card
pub const COLOR_ARMED: Color = Color::Cyan;

/// Slot under a dragged card
pub const COLOR_HOVER: Color = Color::Yellow;

/// Filled slot
pub const COLOR_CORRECT: Color = Color::Rgb(4, 181, 117); // green #04B575

/// Incorrect pulse
pub const COLOR_INCORRECT: Color = Color::Red;

/// Floating drag proxy
pub const COLOR_PROXY: Color = Color::LightCyan;
