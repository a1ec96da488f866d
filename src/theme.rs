//! Theme and styling constants for the NovaCrust checkout TUI.
//!
//! Deep teal brand colors on a neutral card.

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// Color Constants
// ============================================================================

/// Brand color - primary buttons, active tab, focused borders.
pub const PRIMARY_COLOR: Color = Color::Rgb(1, 57, 65);

/// Lighter brand tint used where the brand color is too dark to read.
pub const ACCENT_COLOR: Color = Color::Rgb(76, 175, 160);

/// Success indicator color.
pub const SUCCESS_COLOR: Color = Color::Green;

/// Warning indicator color.
pub const WARNING_COLOR: Color = Color::Yellow;

/// Error indicator color.
pub const ERROR_COLOR: Color = Color::Red;

/// Muted text color - labels, placeholders, hints.
pub const MUTED_COLOR: Color = Color::Gray;

/// Fallback tint for image icons without a color of their own.
pub const ICON_COLOR: Color = Color::Rgb(113, 128, 150);

// ============================================================================
// Style Constants
// ============================================================================

/// Default border style for unfocused elements.
pub const BORDER_STYLE: Style = Style::new().fg(Color::DarkGray);

/// Border style for focused/active elements.
pub const FOCUSED_BORDER_STYLE: Style = Style::new().fg(ACCENT_COLOR);

/// Border style for fields carrying a validation error.
pub const ERROR_BORDER_STYLE: Style = Style::new().fg(ERROR_COLOR);

/// Title style for focused/active elements.
pub const FOCUSED_TITLE_STYLE: Style = Style::new().fg(ACCENT_COLOR).add_modifier(Modifier::BOLD);

/// Placeholder text.
pub const PLACEHOLDER_STYLE: Style = Style::new().fg(Color::DarkGray);

/// Highlighted row in an open picker.
pub const HIGHLIGHT_STYLE: Style = Style::new()
    .bg(Color::DarkGray)
    .add_modifier(Modifier::BOLD);

/// Enabled primary button.
pub const BUTTON_STYLE: Style = Style::new()
    .bg(PRIMARY_COLOR)
    .fg(Color::White)
    .add_modifier(Modifier::BOLD);

/// Disabled primary button.
pub const BUTTON_DISABLED_STYLE: Style = Style::new().bg(Color::DarkGray).fg(Color::Gray);

/// Inline validation message.
pub const ERROR_TEXT_STYLE: Style = Style::new().fg(ERROR_COLOR);
