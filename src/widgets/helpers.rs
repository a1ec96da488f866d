//! Helper functions shared by the checkout widgets.
//!
//! - Icon rendering (images become a tinted dot)
//! - Hex color parsing
//! - Spinner frames and text carets

use ratatui::{
    style::{Color, Style},
    text::Span,
};

use crate::constants::SPINNER_FRAMES;
use crate::domain::{DropdownOption, IconRef};
use crate::theme::ICON_COLOR;

/// Glyph drawn in place of an image icon.
pub const IMAGE_ICON_GLYPH: &str = "●";

/// Caret appended to a focused text field.
pub const CARET: &str = "▏";

// ============================================================================
// Icons
// ============================================================================

/// Parses a `#RRGGBB` string into a terminal color.
#[must_use]
pub fn hex_color(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    Some(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Renders an icon reference as a single span.
///
/// Terminals cannot draw images, so an image becomes a dot tinted with
/// `color` (or a neutral tint). Glyphs such as flags render verbatim.
#[must_use]
pub fn icon_span(icon: &IconRef, color: Option<&str>) -> Span<'static> {
    if icon.is_image() {
        let tint = color.and_then(hex_color).unwrap_or(ICON_COLOR);
        Span::styled(IMAGE_ICON_GLYPH, Style::new().fg(tint))
    } else {
        Span::raw(icon.as_str().to_string())
    }
}

/// The icon span of an option followed by a space, if it has an icon.
#[must_use]
pub fn option_icon_spans(option: &DropdownOption) -> Vec<Span<'static>> {
    option
        .icon
        .as_ref()
        .map(|icon| vec![icon_span(icon, option.color.as_deref()), Span::raw(" ")])
        .unwrap_or_default()
}

// ============================================================================
// Animation
// ============================================================================

/// Spinner frame for the given animation tick.
#[must_use]
pub fn spinner_frame(tick: u64) -> &'static str {
    let index = (tick % SPINNER_FRAMES.len() as u64) as usize;
    SPINNER_FRAMES[index]
}

// ============================================================================
// Tests
// ============================================================================
