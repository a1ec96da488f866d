//! Open picker overlay: optional search line and the filtered option rows.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Clear, Widget},
};

use crate::domain::DropdownOption;
use crate::state::SelectorState;
use crate::theme::{ACCENT_COLOR, HIGHLIGHT_STYLE, MUTED_COLOR, PLACEHOLDER_STYLE};
use crate::ui::helpers::create_popup_block;
use crate::ui::layout::PickerPopupLayout;

use super::helpers::{CARET, option_icon_spans};

/// Empty-result text of the token and currency pickers.
pub const NO_TOKENS_MESSAGE: &str = "No tokens found";

/// Empty-result text of the labeled dropdowns.
pub const NO_OPTIONS_MESSAGE: &str = "No options found";

/// Placeholder of the search line.
pub const SEARCH_PLACEHOLDER: &str = "Search";

/// How a row names its option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowLabel {
    /// Label, then the sublabel muted.
    #[default]
    Label,
    /// Sublabel (the full name), falling back to the label.
    Name,
}

/// Renders an open [`SelectorState`] into the geometry from
/// [`crate::ui::layout::calculate_picker_popup`], which mouse handling
/// also uses to resolve clicked rows.
///
/// ```text
/// ╭────────────────────────────╮
/// │ ⌕ us▏                      │
/// │────────────────────────────│
/// │ ● USDT - CELO              │
/// │ ● USDT - TON               │
/// ╰────────────────────────────╯
/// ```
#[derive(Debug)]
pub struct PickerList<'a> {
    picker: &'a SelectorState,
    layout: &'a PickerPopupLayout,
    row_label: RowLabel,
    empty_message: &'a str,
}

impl<'a> PickerList<'a> {
    #[must_use]
    pub const fn new(picker: &'a SelectorState, layout: &'a PickerPopupLayout) -> Self {
        Self {
            picker,
            layout,
            row_label: RowLabel::Label,
            empty_message: NO_OPTIONS_MESSAGE,
        }
    }

    #[must_use]
    pub const fn row_label(mut self, row_label: RowLabel) -> Self {
        self.row_label = row_label;
        self
    }

    #[must_use]
    pub const fn empty_message(mut self, message: &'a str) -> Self {
        self.empty_message = message;
        self
    }

    fn row(&self, option: &DropdownOption) -> Line<'static> {
        let mut spans = vec![Span::raw(" ")];
        spans.extend(option_icon_spans(option));
        match self.row_label {
            RowLabel::Name => {
                let name = option.sublabel.as_ref().unwrap_or(&option.label);
                spans.push(Span::raw(name.clone()));
            }
            RowLabel::Label => {
                spans.push(Span::raw(option.label.clone()));
                if let Some(sublabel) = &option.sublabel {
                    spans.push(Span::styled(
                        format!("  {sublabel}"),
                        Style::new().fg(MUTED_COLOR),
                    ));
                }
            }
        }
        if self.picker.is_selected(&option.id) {
            spans.push(Span::styled(" ✓", Style::new().fg(ACCENT_COLOR)));
        }
        Line::from(spans)
    }

    fn render_search(&self, area: Rect, buf: &mut Buffer) {
        let query = self.picker.query();
        let line = if query.is_empty() {
            Line::from(vec![
                Span::raw(" ⌕ "),
                Span::styled(CARET, Style::new().fg(ACCENT_COLOR)),
                Span::styled(SEARCH_PLACEHOLDER, PLACEHOLDER_STYLE),
            ])
        } else {
            Line::from(vec![
                Span::raw(" ⌕ "),
                Span::raw(query.to_string()),
                Span::styled(CARET, Style::new().fg(ACCENT_COLOR)),
            ])
        };
        line.render(area, buf);

        // Divider under the search line.
        if area.bottom() < self.layout.rows.y {
            let divider = Rect::new(area.x, area.bottom(), area.width, 1);
            Line::styled("─".repeat(usize::from(divider.width)), Style::new().fg(MUTED_COLOR))
                .render(divider, buf);
        }
    }
}

impl Widget for PickerList<'_> {
    fn render(self, _area: Rect, buf: &mut Buffer) {
        let area = self.layout.area;
        Clear.render(area, buf);
        create_popup_block().render(area, buf);

        if let Some(search) = self.layout.search {
            self.render_search(search, buf);
        }

        let rows = self.layout.rows;
        let filtered = self.picker.filtered();
        if filtered.is_empty() {
            Line::styled(format!(" {}", self.empty_message), Style::new().fg(MUTED_COLOR))
                .render(Rect::new(rows.x, rows.y, rows.width, rows.height.min(1)), buf);
            return;
        }

        let visible = filtered
            .iter()
            .enumerate()
            .skip(self.layout.offset)
            .take(usize::from(rows.height));
        for (line_index, (index, option)) in visible.enumerate() {
            let row = Rect::new(rows.x, rows.y + line_index as u16, rows.width, 1);
            if index == self.picker.highlighted() {
                buf.set_style(row, HIGHLIGHT_STYLE);
            }
            self.row(option).render(row, buf);
        }
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
    use crate::ui::layout::calculate_picker_popup;
    use ratatui::style::Color;

    fn render(picker: &SelectorState, row_label: RowLabel, empty: &str) -> (String, Buffer) {
        let bounds = Rect::new(0, 0, 40, 20);
        let trigger = Rect::new(2, 0, 36, 3);
        let layout = calculate_picker_popup(trigger, picker, bounds);
        let mut buf = Buffer::empty(bounds);
        PickerList::new(picker, &layout)
            .row_label(row_label)
            .empty_message(empty)
            .render(bounds, &mut buf);
        (buffer_to_string(&buf), buf)
    }

    #[test]
    fn test_token_rows_show_names_and_search_line() {
        let catalog = Catalog::builtin();
        let mut tokens = SelectorState::from_items(&catalog.tokens, true).with_selected("eth");
        tokens.open();

        let (text, _) = render(&tokens, RowLabel::Name, NO_TOKENS_MESSAGE);
        assert!(text.contains(SEARCH_PLACEHOLDER));
        assert!(text.contains("Ethereum ✓"));
        assert!(text.contains("USDT - BNB"));

        tokens.push_query('t');
        tokens.push_query('o');
        tokens.push_query('n');
        let (text, _) = render(&tokens, RowLabel::Name, NO_TOKENS_MESSAGE);
        assert!(text.contains("ton▏"));
        assert!(text.contains("USDT - TON"));
        assert!(!text.contains("Ethereum"));
    }

    #[test]
    fn test_empty_filter_shows_message() {
        let catalog = Catalog::builtin();
        let mut tokens = SelectorState::from_items(&catalog.tokens, true);
        tokens.open();
        for c in "doge".chars() {
            tokens.push_query(c);
        }

        let (text, _) = render(&tokens, RowLabel::Name, NO_TOKENS_MESSAGE);
        assert!(text.contains(NO_TOKENS_MESSAGE));
    }

    #[test]
    fn test_highlighted_row_is_styled() {
        let catalog = Catalog::builtin();
        let mut wallets = SelectorState::from_items(&catalog.wallets, false);
        wallets.open();
        wallets.highlight_next();

        let bounds = Rect::new(0, 0, 40, 20);
        let trigger = Rect::new(2, 0, 36, 3);
        let layout = calculate_picker_popup(trigger, &wallets, bounds);
        let (text, buf) = render(&wallets, RowLabel::Label, NO_OPTIONS_MESSAGE);

        assert!(text.contains("Other Crypto Wallets"));
        assert!(layout.search.is_none());
        assert_eq!(buf[(layout.rows.x, layout.rows.y + 1)].bg, Color::DarkGray);
        assert_ne!(buf[(layout.rows.x, layout.rows.y)].bg, Color::DarkGray);
    }
}
