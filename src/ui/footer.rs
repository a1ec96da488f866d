//! Footer bar with keyboard hints for the active input context.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::commands::InputContext;
use crate::theme::MUTED_COLOR;

/// Hints shown for each input context.
#[must_use]
pub const fn footer_hints(context: &InputContext) -> &'static str {
    match context {
        InputContext::Tabs => "←/→:Switch tab  Tab:Next  q:Quit",
        InputContext::TextField => "Type to edit  Tab:Next  Esc:Back  Ctrl-C:Quit",
        InputContext::PickerTrigger => "Enter:Open  Tab:Next  Esc:Back  q:Quit",
        InputContext::Button => "Enter:Continue  Tab:Next  Esc:Back  q:Quit",
        InputContext::PickerOpen { searchable: true } => {
            "Type to search  ↑/↓:Move  Enter:Select  Esc:Close"
        }
        InputContext::PickerOpen { searchable: false } => "↑/↓:Move  Enter:Select  Esc:Close",
        InputContext::Busy => "Please wait...  Ctrl-C:Quit",
        InputContext::Success => "Enter:Start new conversion  q:Quit",
    }
}

/// Renders the footer bar.
pub fn render(frame: &mut Frame, area: Rect, context: &InputContext) {
    let footer = Paragraph::new(footer_hints(context))
        .style(Style::default().fg(MUTED_COLOR))
        .alignment(Alignment::Center);

    frame.render_widget(footer, area);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use ratatui::{Terminal, backend::TestBackend};
    use rstest::rstest;

    #[rstest]
    #[case(InputContext::Tabs, "←/→:Switch tab")]
    #[case(InputContext::TextField, "Type to edit")]
    #[case(InputContext::PickerOpen { searchable: true }, "Type to search")]
    #[case(InputContext::PickerOpen { searchable: false }, "Enter:Select")]
    #[case(InputContext::Busy, "Please wait...")]
    #[case(InputContext::Success, "Start new conversion")]
    fn test_footer_hints_per_context(#[case] context: InputContext, #[case] expected: &str) {
        let mut terminal = Terminal::new(TestBackend::new(80, 1)).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), &context))
            .unwrap();

        let content = buffer_to_string(terminal.backend().buffer());
        assert!(
            content.contains(expected),
            "footer should contain '{expected}', got: {content}"
        );
    }

    #[test]
    fn test_footer_is_centered_and_survives_zero_height() {
        let mut terminal = Terminal::new(TestBackend::new(80, 1)).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), &InputContext::Button))
            .unwrap();

        let content = buffer_to_string(terminal.backend().buffer());
        let row = content.trim_end_matches('\n');
        let leading = row.len() - row.trim_start().len();
        let trailing = row.len() - row.trim_end().len();
        assert!(leading.abs_diff(trailing) <= 1);

        terminal
            .draw(|frame| render(frame, Rect::new(0, 0, 80, 0), &InputContext::Button))
            .unwrap();
    }
}
