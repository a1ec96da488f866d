//! Primary action button.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::theme::{BUTTON_DISABLED_STYLE, BUTTON_STYLE, FOCUSED_BORDER_STYLE};

/// A full-width filled button.
///
/// A disabled button is only styled differently; whether pressing it does
/// anything is decided by the screen. While `loading`, the label is
/// replaced by the spinner frame.
#[derive(Debug, Clone)]
pub struct Button<'a> {
    label: &'a str,
    enabled: bool,
    focused: bool,
    loading: Option<&'a str>,
}

impl<'a> Button<'a> {
    #[must_use]
    pub const fn new(label: &'a str) -> Self {
        Self {
            label,
            enabled: true,
            focused: false,
            loading: None,
        }
    }

    #[must_use]
    pub const fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Shows `spinner` in place of the label.
    #[must_use]
    pub const fn loading(mut self, spinner: Option<&'a str>) -> Self {
        self.loading = spinner;
        self
    }
}

impl Widget for Button<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = if self.enabled && self.loading.is_none() {
            BUTTON_STYLE
        } else {
            BUTTON_DISABLED_STYLE
        };

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .style(style);
        if self.focused {
            block = block.border_style(FOCUSED_BORDER_STYLE);
        }

        let text = match self.loading {
            Some(spinner) => Line::from(spinner),
            None if self.focused => Line::from(self.label)
                .patch_style(Style::new().add_modifier(Modifier::UNDERLINED)),
            None => Line::from(self.label),
        };

        Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use crate::theme::PRIMARY_COLOR;

    #[test]
    fn test_button_states() {
        let area = Rect::new(0, 0, 30, 3);

        let mut buf = Buffer::empty(area);
        Button::new("Convert now").render(area, &mut buf);
        assert!(buffer_to_string(&buf).contains("Convert now"));
        assert_eq!(buf[(15, 1)].bg, PRIMARY_COLOR);

        let mut buf = Buffer::empty(area);
        Button::new("Convert now").enabled(false).render(area, &mut buf);
        assert_ne!(buf[(15, 1)].bg, PRIMARY_COLOR);

        let mut buf = Buffer::empty(area);
        Button::new("Convert now")
            .loading(Some("⠋"))
            .render(area, &mut buf);
        let text = buffer_to_string(&buf);
        assert!(text.contains('⠋'));
        assert!(!text.contains("Convert now"));
    }
}
