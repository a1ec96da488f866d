//! Recipient-details screen: bank sub-step, then contact sub-step.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::constants::SELECT_PLACEHOLDER;
use crate::domain::FormField;
use crate::state::{RecipientField, RecipientState, RecipientStep};
use crate::theme::{ACCENT_COLOR, MUTED_COLOR, PLACEHOLDER_STYLE};
use crate::ui::helpers::create_border_block;
use crate::ui::layout::RecipientLayout;
use crate::widgets::helpers::spinner_frame;
use crate::widgets::{Button, DropdownTrigger, PhoneInput};

use super::{TextField, render_card, render_error};

pub const TITLE: &str = "Recipient details";
pub const BANK_LABEL: &str = "Bank";
pub const ACCOUNT_NUMBER_LABEL: &str = "Account number";
pub const ACCOUNT_NUMBER_PLACEHOLDER: &str = "Enter your account number";
pub const ACCOUNT_NAME_LABEL: &str = "Account name";
pub const ACCOUNT_NAME_EMPTY: &str = "—";
pub const VERIFYING_LABEL: &str = "Verifying...";
pub const EMAIL_LABEL: &str = "Recipient email";
pub const EMAIL_PLACEHOLDER: &str = "Enter recipient email";
pub const NEXT_LABEL: &str = "Next";

pub fn render(
    frame: &mut Frame,
    layout: &RecipientLayout,
    state: &RecipientState,
    tick: u64,
) {
    render_card(frame, &layout.screen);
    render_header(frame, layout);

    let focus = state.focus();
    let errors = state.errors();
    let rect = |field| layout.fields.rect(field);

    match state.step() {
        RecipientStep::Bank => {
            frame.render_widget(
                DropdownTrigger::new(&state.bank, SELECT_PLACEHOLDER)
                    .title(BANK_LABEL)
                    .focused(focus == RecipientField::Bank)
                    .error(errors.contains(FormField::Bank)),
                rect(RecipientField::Bank),
            );
            TextField {
                title: ACCOUNT_NUMBER_LABEL,
                value: state.account_number(),
                placeholder: ACCOUNT_NUMBER_PLACEHOLDER,
                focused: focus == RecipientField::AccountNumber,
                error: errors.contains(FormField::AccountNumber),
            }
            .render(frame, rect(RecipientField::AccountNumber));
            if let Some(area) = layout.account_name {
                render_account_name(frame, area, state, tick);
            }

            for field in [FormField::Bank, FormField::AccountNumber, FormField::AccountName] {
                render_error(frame, layout.error_area(field), errors.get(field));
            }
        }
        RecipientStep::Contact => {
            TextField {
                title: EMAIL_LABEL,
                value: state.email(),
                placeholder: EMAIL_PLACEHOLDER,
                focused: focus == RecipientField::Email,
                error: errors.contains(FormField::Email),
            }
            .render(frame, rect(RecipientField::Email));
            if let Some(area) = layout.phone_frame {
                frame.render_widget(
                    PhoneInput::new(&state.country_code, state.phone())
                        .country_focused(focus == RecipientField::CountryCode)
                        .phone_focused(focus == RecipientField::Phone)
                        .error(errors.contains(FormField::Phone)),
                    area,
                );
            }

            for field in [FormField::Email, FormField::Phone] {
                render_error(frame, layout.error_area(field), errors.get(field));
            }
        }
    }

    frame.render_widget(
        Button::new(NEXT_LABEL)
            .enabled(state.can_advance())
            .focused(focus == RecipientField::Next)
            .loading(state.is_submitting().then(|| spinner_frame(tick))),
        rect(RecipientField::Next),
    );
}

fn render_header(frame: &mut Frame, layout: &RecipientLayout) {
    frame.render_widget(
        Paragraph::new(TITLE)
            .style(Style::new().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center),
        layout.header,
    );
    frame.render_widget(
        Paragraph::new(Span::styled("←", Style::new().fg(ACCENT_COLOR))),
        layout.back,
    );
}

/// Read-only account name box.
fn render_account_name(frame: &mut Frame, area: Rect, state: &RecipientState, tick: u64) {
    let line = if state.is_verifying() {
        Line::from(vec![
            Span::styled(spinner_frame(tick), Style::new().fg(ACCENT_COLOR)),
            Span::styled(format!(" {VERIFYING_LABEL}"), Style::new().fg(MUTED_COLOR)),
        ])
    } else if state.account_name().is_empty() {
        Line::from(Span::styled(ACCOUNT_NAME_EMPTY, PLACEHOLDER_STYLE))
    } else {
        Line::from(Span::styled(
            state.account_name().to_string(),
            Style::new().add_modifier(Modifier::BOLD),
        ))
    };

    let block = create_border_block(
        ACCOUNT_NAME_LABEL,
        false,
        state.errors().contains(FormField::AccountName),
    );
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(
        Paragraph::new(line),
        Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(2), inner.height),
    );
}

// ============================================================================
// Tests
// ============================================================================
