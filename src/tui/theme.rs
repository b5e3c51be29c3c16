//! Shared colors and sizes for every form widget.
//!
//! Terminal rows stand in for the mobile layout units: a bordered input
//! with one content line (3 rows) is the minimum field height.

use ratatui::style::{Color, Modifier, Style};

pub const TEXT: Color = Color::Reset;
/// Placeholder color, muted and distinct from `TEXT`.
pub const PLACEHOLDER: Color = Color::Rgb(0x90, 0xA4, 0xAE);
pub const BORDER: Color = Color::Rgb(0x60, 0x6B, 0x73);
pub const ACCENT: Color = Color::Rgb(0xF2, 0x8E, 0xB5);
pub const SUBHEADER: Color = Color::Rgb(0xB0, 0xBE, 0xC5);
pub const DISABLED: Color = Color::DarkGray;

/// Top margin above the first container.
pub const FORM_TOP_MARGIN: u16 = 1;
/// Horizontal inset of the whole form.
pub const FORM_SIDE_MARGIN: u16 = 2;
/// Blank rows after each container.
pub const CONTAINER_SPACING: u16 = 1;
/// Minimum height of a text field, borders included.
pub const MIN_FIELD_HEIGHT: u16 = 3;
pub const BUTTON_HEIGHT: u16 = 3;

pub fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(BORDER)
    }
}

pub fn subheader_style() -> Style {
    Style::default().fg(SUBHEADER).add_modifier(Modifier::BOLD)
}
