//! Conversion-type tab strip.
//!
//! Stateless: the active tab is owned by the conversion screen and clicks
//! are resolved through [`crate::ui::layout::tab_at`].

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Widget,
};

use crate::state::ConversionTab;
use crate::theme::{ACCENT_COLOR, MUTED_COLOR, PRIMARY_COLOR};
use crate::ui::layout::tab_areas;

/// One row of three tabs, the active one drawn as a filled pill.
///
/// ```text
///  Crypto to cash    Cash to crypto   Crypto to fiat loan
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TabNav {
    active: ConversionTab,
    focused: bool,
}

impl TabNav {
    #[must_use]
    pub const fn new(active: ConversionTab) -> Self {
        Self {
            active,
            focused: false,
        }
    }

    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for TabNav {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (tab, cell) in ConversionTab::ALL.into_iter().zip(tab_areas(area)) {
            let style = if tab == self.active {
                let style = Style::new()
                    .bg(PRIMARY_COLOR)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD);
                if self.focused {
                    style.add_modifier(Modifier::UNDERLINED)
                } else {
                    style
                }
            } else if self.focused {
                Style::new().fg(ACCENT_COLOR)
            } else {
                Style::new().fg(MUTED_COLOR)
            };

            Line::styled(tab.label(), style)
                .alignment(Alignment::Center)
                .render(cell, buf);
            if tab == self.active {
                buf.set_style(cell, style);
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    #[test]
    fn test_tab_nav_shows_all_labels_and_fills_active() {
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);
        TabNav::new(ConversionTab::CashToCrypto).render(area, &mut buf);

        let text = buffer_to_string(&buf);
        for tab in ConversionTab::ALL {
            assert!(text.contains(tab.label()), "missing {}", tab.label());
        }

        let [first, second, _] = tab_areas(area);
        assert_eq!(buf[(second.x, 0)].bg, PRIMARY_COLOR);
        assert_ne!(buf[(first.x, 0)].bg, PRIMARY_COLOR);
    }
}
