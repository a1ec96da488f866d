//! Toast notification component.
//!
//! A non-blocking overlay centered above the footer. It carries short
//! hints such as why an action is unavailable.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::theme::WARNING_COLOR;

// ============================================================================
// Constants
// ============================================================================

/// Minimum width for toast notifications.
const MIN_TOAST_WIDTH: u16 = 20;

/// Height of toast notifications.
const TOAST_HEIGHT: u16 = 3;

/// Rows kept free under the toast for the footer.
const TOAST_PADDING_BOTTOM: u16 = 1;

/// Extra width added to the message for borders and spacing.
const TOAST_WIDTH_PADDING: u16 = 4;

/// Marker drawn before the message.
const TOAST_MARKER: &str = "! ";

// ============================================================================
// Public API
// ============================================================================

/// Renders a toast notification centered at the bottom of `area`.
pub fn render_toast(frame: &mut Frame, area: Rect, message: &str) {
    let toast_area = calculate_toast_position(area, message);

    frame.render_widget(Clear, toast_area);

    let block = create_toast_block();
    let inner = block.inner(toast_area);
    frame.render_widget(block, toast_area);

    let line = Line::from(vec![
        Span::styled(TOAST_MARKER, Style::new().add_modifier(Modifier::BOLD)),
        Span::raw(message),
    ]);
    frame.render_widget(
        Paragraph::new(line)
            .style(Style::new().fg(WARNING_COLOR))
            .alignment(Alignment::Center),
        inner,
    );
}

// ============================================================================
// Internal Helpers
// ============================================================================

#[must_use]
fn calculate_toast_position(area: Rect, message: &str) -> Rect {
    let text_len = (TOAST_MARKER.len() + message.chars().count()) as u16;
    let toast_width = (text_len + TOAST_WIDTH_PADDING)
        .max(MIN_TOAST_WIDTH)
        .min(area.width);
    let toast_height = TOAST_HEIGHT.min(area.height);

    let toast_x = area.x + (area.width - toast_width) / 2;
    let toast_y = area.y
        + area
            .height
            .saturating_sub(toast_height + TOAST_PADDING_BOTTOM);

    Rect::new(toast_x, toast_y, toast_width, toast_height)
}

#[must_use]
fn create_toast_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(Style::default().fg(WARNING_COLOR))
        .style(Style::default().bg(Color::Black))
}

// ============================================================================
// Tests
// ============================================================================
