//! Phone number field with an embedded country-code trigger.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::constants::PHONE_PLACEHOLDER;
use crate::state::SelectorState;
use crate::theme::{ACCENT_COLOR, MUTED_COLOR, PLACEHOLDER_STYLE};
use crate::ui::helpers::create_border_block;
use crate::ui::layout::split_phone_frame;

use super::dropdown::DropdownTrigger;
use super::helpers::CARET;

/// ```text
/// ╭ Recipient phone number ──────────────────────╮
/// │ ● +234    ▾ │ 080 - 312 - 34567▏             │
/// ╰──────────────────────────────────────────────╯
/// ```
#[derive(Debug, Clone)]
pub struct PhoneInput<'a> {
    country: &'a SelectorState,
    phone: &'a str,
    country_focused: bool,
    phone_focused: bool,
    error: bool,
}

impl<'a> PhoneInput<'a> {
    #[must_use]
    pub const fn new(country: &'a SelectorState, phone: &'a str) -> Self {
        Self {
            country,
            phone,
            country_focused: false,
            phone_focused: false,
            error: false,
        }
    }

    #[must_use]
    pub const fn country_focused(mut self, focused: bool) -> Self {
        self.country_focused = focused;
        self
    }

    #[must_use]
    pub const fn phone_focused(mut self, focused: bool) -> Self {
        self.phone_focused = focused;
        self
    }

    #[must_use]
    pub const fn error(mut self, error: bool) -> Self {
        self.error = error;
        self
    }
}

impl Widget for PhoneInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = create_border_block(
            "Recipient phone number",
            self.country_focused || self.phone_focused,
            self.error,
        );
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 {
            return;
        }

        let [country, number] = split_phone_frame(area);
        DropdownTrigger::new(self.country, "")
            .focused(self.country_focused)
            .render(country, buf);

        // Separator between the code and the number.
        buf.set_string(number.x, inner.y, "│", Style::new().fg(MUTED_COLOR));

        let text_area = Rect::new(
            number.x + 2,
            inner.y,
            inner.right().saturating_sub(number.x + 3),
            1,
        );
        let caret = Span::styled(CARET, Style::new().fg(ACCENT_COLOR));
        let line = match (self.phone.is_empty(), self.phone_focused) {
            (true, true) => Line::from(vec![caret, Span::styled(PHONE_PLACEHOLDER, PLACEHOLDER_STYLE)]),
            (true, false) => Line::from(Span::styled(PHONE_PLACEHOLDER, PLACEHOLDER_STYLE)),
            (false, true) => Line::from(vec![Span::raw(self.phone), caret]),
            (false, false) => Line::from(self.phone),
        };
        line.render(text_area, buf);
    }
}

// ============================================================================
// Tests
// ============================================================================
