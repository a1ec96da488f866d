//! UI helper functions for creating styled blocks.
//!
//! Every bordered field, the card and the picker lists are built here so
//! focus and error styling stays consistent across screens.

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    symbols::border,
    widgets::{Block, Borders},
};

use crate::theme::{BORDER_STYLE, ERROR_BORDER_STYLE, FOCUSED_BORDER_STYLE, FOCUSED_TITLE_STYLE};

// ============================================================================
// Border Block Helpers
// ============================================================================

/// Creates a bordered field block styled by focus and error state.
///
/// The title sits in the top border as the field label. An error wins over
/// focus for the border color.
///
/// # Example
///
/// ```ignore
/// let bank = create_border_block("Bank", true, false);
/// let number = create_border_block("Account number", false, true);
/// ```
#[must_use]
pub fn create_border_block(title: &str, focused: bool, error: bool) -> Block<'_> {
    let border_style = match (focused, error) {
        (_, true) => ERROR_BORDER_STYLE,
        (true, false) => FOCUSED_BORDER_STYLE,
        (false, false) => BORDER_STYLE,
    };
    let title_style = if focused {
        FOCUSED_TITLE_STYLE
    } else {
        Style::new().fg(Color::Gray).add_modifier(Modifier::BOLD)
    };
    let display_title = if title.is_empty() {
        String::new()
    } else {
        format!(" {title} ")
    };

    Block::default()
        .borders(Borders::ALL)
        .title(display_title)
        .title_style(title_style)
        .border_set(border::ROUNDED)
        .border_style(border_style)
}

/// Creates the card that frames each screen.
#[must_use]
pub fn create_card_block(title: &str) -> Block<'_> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(BORDER_STYLE);
    if title.is_empty() {
        block
    } else {
        block
            .title(format!(" {title} "))
            .title_alignment(Alignment::Center)
            .title_style(Style::new().add_modifier(Modifier::BOLD))
    }
}

/// Creates the block around an open picker list.
#[must_use]
pub fn create_popup_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(FOCUSED_BORDER_STYLE)
        .style(Style::new().bg(Color::Black))
}

// ============================================================================
// Tests
// ============================================================================
