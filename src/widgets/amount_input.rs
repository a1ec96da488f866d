//! Amount field paired with a token or currency trigger.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::state::SelectorState;
use crate::theme::{ACCENT_COLOR, PLACEHOLDER_STYLE};
use crate::ui::helpers::create_border_block;
use crate::ui::layout::calculate_amount_layout;

use super::dropdown::DropdownTrigger;
use super::helpers::CARET;

/// Placeholder of an empty amount.
pub const AMOUNT_PLACEHOLDER: &str = "0.00";

/// Placeholder of an unselected token or currency.
pub const TOKEN_PLACEHOLDER: &str = "Select";

/// Which half of the frame has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AmountFocus {
    #[default]
    None,
    Amount,
    Picker,
}

/// ```text
/// ╭ You pay ─────────────────────────────────────╮
/// │ 1.00▏                           ● ETH      ▾ │
/// ╰──────────────────────────────────────────────╯
/// ```
#[derive(Debug, Clone)]
pub struct AmountInput<'a> {
    label: &'a str,
    amount: &'a str,
    picker: &'a SelectorState,
    focus: AmountFocus,
}

impl<'a> AmountInput<'a> {
    #[must_use]
    pub const fn new(label: &'a str, amount: &'a str, picker: &'a SelectorState) -> Self {
        Self {
            label,
            amount,
            picker,
            focus: AmountFocus::None,
        }
    }

    #[must_use]
    pub const fn focus(mut self, focus: AmountFocus) -> Self {
        self.focus = focus;
        self
    }
}

impl Widget for AmountInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = self.focus != AmountFocus::None;
        let block = create_border_block(self.label, focused, false);
        let inner = block.inner(area);
        block.render(area, buf);

        let layout = calculate_amount_layout(area);
        let text_area = Rect::new(
            inner.x + 1,
            inner.y,
            layout.amount.right().saturating_sub(inner.x + 2),
            inner.height.min(1),
        );

        let mut spans = if self.amount.is_empty() {
            vec![Span::styled(AMOUNT_PLACEHOLDER, PLACEHOLDER_STYLE)]
        } else {
            vec![Span::styled(
                self.amount.to_string(),
                Style::new().add_modifier(Modifier::BOLD),
            )]
        };
        if self.focus == AmountFocus::Amount {
            let caret = Span::styled(CARET, Style::new().fg(ACCENT_COLOR));
            if self.amount.is_empty() {
                spans.insert(0, caret);
            } else {
                spans.push(caret);
            }
        }
        Line::from(spans).render(text_area, buf);

        DropdownTrigger::new(self.picker, TOKEN_PLACEHOLDER)
            .focused(self.focus == AmountFocus::Picker)
            .render(layout.picker, buf);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Catalog;
    use crate::test_utils::buffer_to_string;

    #[test]
    fn test_amount_input_renders_amount_and_token() {
        let catalog = Catalog::builtin();
        let tokens = SelectorState::from_items(&catalog.tokens, true).with_selected("eth");
        let area = Rect::new(0, 0, 56, 3);
        let mut buf = Buffer::empty(area);

        AmountInput::new("You pay", "1.00", &tokens)
            .focus(AmountFocus::Amount)
            .render(area, &mut buf);

        let text = buffer_to_string(&buf);
        assert!(text.contains("You pay"));
        assert!(text.contains("1.00▏"));
        assert!(text.contains("● ETH"));
    }

    #[test]
    fn test_empty_amount_shows_placeholder() {
        let catalog = Catalog::builtin();
        let currencies = SelectorState::from_items(&catalog.fiat_currencies, false);
        let area = Rect::new(0, 0, 56, 3);
        let mut buf = Buffer::empty(area);

        AmountInput::new("You receive", "", &currencies).render(area, &mut buf);

        let text = buffer_to_string(&buf);
        assert!(text.contains(AMOUNT_PLACEHOLDER));
        assert!(text.contains(TOKEN_PLACEHOLDER));
    }
}
