//! Screen renderers, one per wizard step.
//!
//! Each screen draws into a layout computed by [`crate::ui::layout`]; the
//! open picker overlay and the toast are drawn afterwards by the caller.

pub mod converter;
pub mod recipient;
pub mod success;

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Padding, Paragraph},
};

use crate::constants::BRAND_LINE;
use crate::theme::{ACCENT_COLOR, ERROR_TEXT_STYLE, MUTED_COLOR, PLACEHOLDER_STYLE};
use crate::ui::helpers::{create_border_block, create_card_block};
use crate::ui::layout::ScreenLayout;
use crate::widgets::helpers::CARET;

/// Draws the card frame and the brand line under it.
pub fn render_card(frame: &mut Frame, layout: &ScreenLayout) {
    frame.render_widget(create_card_block(""), layout.card);
    frame.render_widget(
        Paragraph::new(BRAND_LINE)
            .style(Style::new().fg(MUTED_COLOR))
            .alignment(Alignment::Center),
        layout.brand,
    );
}

/// A bordered single-line text field.
#[derive(Debug, Clone, Copy)]
pub struct TextField<'a> {
    pub title: &'a str,
    pub value: &'a str,
    pub placeholder: &'a str,
    pub focused: bool,
    pub error: bool,
}

impl TextField<'_> {
    pub fn render(self, frame: &mut Frame, area: Rect) {
        let block = create_border_block(self.title, self.focused, self.error);
        let caret = || Span::styled(CARET, Style::new().fg(ACCENT_COLOR));
        let line = match (self.value.is_empty(), self.focused) {
            (true, true) => Line::from(vec![
                caret(),
                Span::styled(self.placeholder, PLACEHOLDER_STYLE),
            ]),
            (true, false) => Line::from(Span::styled(self.placeholder, PLACEHOLDER_STYLE)),
            (false, true) => Line::from(vec![Span::raw(self.value), caret()]),
            (false, false) => Line::from(self.value),
        };
        frame.render_widget(
            Paragraph::new(line).block(block.padding(Padding::horizontal(1))),
            area,
        );
    }
}

/// Draws an inline validation message, if any.
pub fn render_error(frame: &mut Frame, area: Option<Rect>, message: Option<&str>) {
    if let (Some(area), Some(message)) = (area, message) {
        frame.render_widget(
            Paragraph::new(Line::styled(format!(" {message}"), ERROR_TEXT_STYLE)),
            area,
        );
    }
}
