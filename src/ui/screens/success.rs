//! Confirmation screen.

use ratatui::{
    Frame,
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::state::Receipt;
use crate::theme::{MUTED_COLOR, SUCCESS_COLOR};
use crate::ui::layout::SuccessLayout;
use crate::widgets::Button;

use super::render_card;

pub const TITLE: &str = "Transaction Submitted!";
pub const MESSAGE: &str = "Your conversion request has been submitted successfully.";
pub const RESTART_LABEL: &str = "Start New Conversion";

pub fn render(frame: &mut Frame, layout: &SuccessLayout, receipt: &Receipt) {
    render_card(frame, &layout.screen);

    let conversion = &receipt.conversion;
    let detail = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("{label:<14}"), Style::new().fg(MUTED_COLOR)),
            Span::raw(value),
        ])
    };

    let lines = vec![
        Line::from(""),
        Line::styled(
            "✓",
            Style::new().fg(SUCCESS_COLOR).add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center),
        Line::from(""),
        Line::styled(TITLE, Style::new().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center),
        Line::styled(MESSAGE, Style::new().fg(MUTED_COLOR)).alignment(Alignment::Center),
        Line::from(""),
        detail(
            "You paid",
            format!("{} {}", conversion.pay_amount, conversion.pay_token),
        ),
        detail(
            "They receive",
            format!(
                "{} {}",
                conversion.receive_amount, conversion.receive_currency
            ),
        ),
        detail(
            "Bank",
            format!("{} · {}", receipt.bank, receipt.account_number),
        ),
        detail("Account name", receipt.account_name.clone()),
        detail("Email", receipt.email.clone()),
        detail("Phone", receipt.phone.clone()),
        detail(
            "Submitted",
            receipt.submitted_at.format("%Y-%m-%d %H:%M").to_string(),
        ),
    ];

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }),
        layout.content,
    );
    frame.render_widget(
        Button::new(RESTART_LABEL).focused(true),
        layout.restart,
    );
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{ReceiptMother, buffer_to_string, test_terminal};
    use crate::ui::layout::calculate_success_layout;
    use ratatui::{Terminal, backend::TestBackend};
    use rstest::rstest;

    #[rstest]
    fn test_success_screen_shows_receipt(mut test_terminal: Terminal<TestBackend>) {
        let receipt = ReceiptMother::sample();
        test_terminal
            .draw(|frame| {
                let layout = calculate_success_layout(frame.area());
                render(frame, &layout, &receipt);
            })
            .unwrap();

        let text = buffer_to_string(test_terminal.backend().buffer());
        for expected in [
            TITLE,
            MESSAGE,
            RESTART_LABEL,
            "1.00 Ethereum",
            "1.00 NGN",
            "GTBank · 0123456789",
            "ODUTUGA GBEKE",
            "ada@example.com",
            "+234 803 - 123 - 4567",
            "2025-01-15 09:30",
        ] {
            assert!(text.contains(expected), "missing {expected:?}\n{text}");
        }
    }
}
