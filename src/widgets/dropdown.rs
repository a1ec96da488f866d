//! Closed-picker trigger.
//!
//! Shows the selected option (or a placeholder) with an open/closed arrow.
//! The list itself is drawn separately by [`super::PickerList`] as an
//! overlay, after everything else on the screen.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::state::SelectorState;
use crate::theme::{ACCENT_COLOR, MUTED_COLOR, PLACEHOLDER_STYLE};
use crate::ui::helpers::create_border_block;

use super::helpers::option_icon_spans;

const ARROW_CLOSED: &str = "▾";
const ARROW_OPEN: &str = "▴";

/// Trigger for any [`SelectorState`].
///
/// ```text
/// ╭ Pay from ────────────────────────╮
/// │ ● Metamask                     ▾ │
/// ╰──────────────────────────────────╯
/// ```
///
/// Without a title the trigger is borderless and draws on the middle row
/// of its area, which is how the amount and phone frames embed it.
#[derive(Debug, Clone)]
pub struct DropdownTrigger<'a> {
    picker: &'a SelectorState,
    placeholder: &'a str,
    title: Option<&'a str>,
    focused: bool,
    error: bool,
    show_sublabel: bool,
}

impl<'a> DropdownTrigger<'a> {
    #[must_use]
    pub const fn new(picker: &'a SelectorState, placeholder: &'a str) -> Self {
        Self {
            picker,
            placeholder,
            title: None,
            focused: false,
            error: false,
            show_sublabel: false,
        }
    }

    /// Draws a bordered field with `title` as its label.
    #[must_use]
    pub const fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    #[must_use]
    pub const fn error(mut self, error: bool) -> Self {
        self.error = error;
        self
    }

    /// Appends the selected option's sublabel in a muted style.
    #[must_use]
    pub const fn show_sublabel(mut self, show: bool) -> Self {
        self.show_sublabel = show;
        self
    }

    fn content(&self) -> Line<'static> {
        match self.picker.selected() {
            Some(option) => {
                let mut spans = option_icon_spans(option);
                spans.push(Span::raw(option.label.clone()));
                if self.show_sublabel {
                    if let Some(sublabel) = &option.sublabel {
                        spans.push(Span::styled(
                            format!("  {sublabel}"),
                            Style::new().fg(MUTED_COLOR),
                        ));
                    }
                }
                Line::from(spans)
            }
            None => Line::from(Span::styled(self.placeholder.to_string(), PLACEHOLDER_STYLE)),
        }
    }
}

impl Widget for DropdownTrigger<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = match self.title {
            Some(title) => {
                let block = create_border_block(title, self.focused, self.error);
                let inner = block.inner(area);
                block.render(area, buf);
                Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(2), inner.height.min(1))
            }
            None => Rect::new(
                area.x + 1,
                area.y + area.height / 2,
                area.width.saturating_sub(3),
                area.height.min(1),
            ),
        };
        if inner.width < 2 || inner.height == 0 {
            return;
        }

        let arrow = if self.picker.is_open() {
            ARROW_OPEN
        } else {
            ARROW_CLOSED
        };
        let arrow_style = if self.focused {
            Style::new().fg(ACCENT_COLOR)
        } else {
            Style::new().fg(MUTED_COLOR)
        };
        let text_area = Rect::new(inner.x, inner.y, inner.width - 2, 1);

        let mut content = self.content();
        if self.focused && self.title.is_none() {
            content = content.patch_style(Style::new().fg(ACCENT_COLOR));
        }
        content.render(text_area, buf);
        buf.set_string(inner.right() - 1, inner.y, arrow, arrow_style);
    }
}

// ============================================================================
// Tests
// ============================================================================
