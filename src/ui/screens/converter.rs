//! Conversion screen.

use ratatui::Frame;

use crate::constants::SELECT_PLACEHOLDER;
use crate::state::{ConverterField, ConverterState};
use crate::ui::layout::ConverterLayout;
use crate::widgets::helpers::spinner_frame;
use crate::widgets::{AmountFocus, AmountInput, Button, DropdownTrigger, TabNav};

use super::render_card;

pub const PAY_LABEL: &str = "You pay";
pub const RECEIVE_LABEL: &str = "You receive";
pub const PAY_FROM_LABEL: &str = "Pay from";
pub const PAY_TO_LABEL: &str = "Pay to";
pub const CONVERT_LABEL: &str = "Convert now";

pub fn render(frame: &mut Frame, layout: &ConverterLayout, state: &ConverterState, tick: u64) {
    render_card(frame, &layout.screen);
    let focus = state.focus();
    let rect = |field| layout.fields.rect(field);

    frame.render_widget(
        TabNav::new(state.active_tab()).focused(focus == ConverterField::Tabs),
        rect(ConverterField::Tabs),
    );

    let amount_focus = |amount: ConverterField, picker: ConverterField| match focus {
        f if f == amount => AmountFocus::Amount,
        f if f == picker => AmountFocus::Picker,
        _ => AmountFocus::None,
    };
    frame.render_widget(
        AmountInput::new(PAY_LABEL, state.pay_amount(), &state.pay_token).focus(amount_focus(
            ConverterField::PayAmount,
            ConverterField::PayToken,
        )),
        layout.pay.frame,
    );
    frame.render_widget(
        AmountInput::new(RECEIVE_LABEL, state.receive_amount(), &state.receive_currency).focus(
            amount_focus(ConverterField::ReceiveAmount, ConverterField::ReceiveCurrency),
        ),
        layout.receive.frame,
    );

    frame.render_widget(
        DropdownTrigger::new(&state.pay_from, SELECT_PLACEHOLDER)
            .title(PAY_FROM_LABEL)
            .focused(focus == ConverterField::PayFrom)
            .show_sublabel(true),
        rect(ConverterField::PayFrom),
    );
    frame.render_widget(
        DropdownTrigger::new(&state.pay_to, SELECT_PLACEHOLDER)
            .title(PAY_TO_LABEL)
            .focused(focus == ConverterField::PayTo),
        rect(ConverterField::PayTo),
    );

    frame.render_widget(
        Button::new(CONVERT_LABEL)
            .enabled(state.can_convert())
            .focused(focus == ConverterField::Convert)
            .loading(state.is_converting().then(|| spinner_frame(tick))),
        rect(ConverterField::Convert),
    );
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{ConverterStateMother, buffer_to_string, test_terminal_80x24};
    use crate::theme::PRIMARY_COLOR;
    use crate::ui::layout::calculate_converter_layout;
    use ratatui::{Terminal, backend::TestBackend, layout::Rect};
    use rstest::rstest;

    fn draw(terminal: &mut Terminal<TestBackend>, state: &ConverterState) -> String {
        terminal
            .draw(|frame| {
                let layout = calculate_converter_layout(frame.area());
                render(frame, &layout, state, 0);
            })
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[rstest]
    fn test_fresh_converter_shows_every_field(mut test_terminal_80x24: Terminal<TestBackend>) {
        let state = ConverterStateMother::fresh();
        let text = draw(&mut test_terminal_80x24, &state);

        for expected in [
            "Crypto to cash",
            PAY_LABEL,
            "1.00",
            "ETH",
            RECEIVE_LABEL,
            "NGN",
            PAY_FROM_LABEL,
            PAY_TO_LABEL,
            SELECT_PLACEHOLDER,
            CONVERT_LABEL,
            "Powered by NovaCrust",
        ] {
            assert!(text.contains(expected), "missing {expected:?}\n{text}");
        }
    }

    #[rstest]
    fn test_convert_button_enables_with_selections(mut test_terminal_80x24: Terminal<TestBackend>) {
        let convert = calculate_converter_layout(Rect::new(0, 0, 80, 24))
            .fields
            .rect(ConverterField::Convert);
        let center = (convert.x + convert.width / 2, convert.y + 1);

        draw(&mut test_terminal_80x24, &ConverterStateMother::fresh());
        assert_ne!(test_terminal_80x24.backend().buffer()[center].bg, PRIMARY_COLOR);

        let text = draw(&mut test_terminal_80x24, &ConverterStateMother::ready());
        assert_eq!(test_terminal_80x24.backend().buffer()[center].bg, PRIMARY_COLOR);
        assert!(text.contains("Metamask"));
        assert!(text.contains("First Bank - ****1234"));
    }

    #[rstest]
    fn test_wallet_trigger_shows_description(mut test_terminal_80x24: Terminal<TestBackend>) {
        let mut state = ConverterStateMother::fresh();
        assert!(state.pay_from.select_id("other"));

        let text = draw(&mut test_terminal_80x24, &state);
        assert!(text.contains("Other Crypto Wallets  Binance, Coinbase"), "{text}");
    }

    #[rstest]
    fn test_converting_replaces_label_with_spinner(mut test_terminal_80x24: Terminal<TestBackend>) {
        let mut state = ConverterStateMother::ready();
        assert!(state.begin_conversion());

        let text = draw(&mut test_terminal_80x24, &state);
        assert!(!text.contains(CONVERT_LABEL));
        assert!(text.contains(spinner_frame(0)));
    }
}
