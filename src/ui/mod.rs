//! UI rendering module for the NovaCrust checkout TUI.
//!
//! # Module Structure
//!
//! - `screens` - One renderer per wizard step
//! - `components` - Reusable overlays (toast notifications)
//! - `layout` - Layout calculations shared with mouse hit-testing
//! - `footer` - Keyboard hints for the active input context
//! - `helpers` - Styled block constructors

pub mod components;
pub mod footer;
pub mod helpers;
pub mod layout;
pub mod screens;

use ratatui::{Frame, layout::Rect};

use crate::state::{App, ConverterField, Screen, SelectorState};
use crate::widgets::{NO_OPTIONS_MESSAGE, NO_TOKENS_MESSAGE, PickerList, RowLabel};

use layout::{
    calculate_converter_layout, calculate_picker_popup, calculate_recipient_layout,
    calculate_success_layout,
};

// ============================================================================
// Main Render Entry Point
// ============================================================================

/// Renders the active screen, then overlays in stacking order: the open
/// picker list, the footer hints and the toast.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();
    let tick = app.animation_tick;

    let footer_area = match &app.screen {
        Screen::Converter(state) => {
            let layout = calculate_converter_layout(area);
            screens::converter::render(frame, &layout, state, tick);
            if let Some((field, picker)) = state.open_picker() {
                let row_label = match field {
                    ConverterField::PayToken | ConverterField::ReceiveCurrency => RowLabel::Name,
                    _ => RowLabel::Label,
                };
                let empty = match row_label {
                    RowLabel::Name => NO_TOKENS_MESSAGE,
                    RowLabel::Label => NO_OPTIONS_MESSAGE,
                };
                render_open_picker(
                    frame,
                    layout.fields.rect(field),
                    picker,
                    row_label,
                    empty,
                );
            }
            layout.screen.footer
        }
        Screen::Recipient(state) => {
            let layout = calculate_recipient_layout(area, state.step());
            screens::recipient::render(frame, &layout, state, tick);
            if let Some((field, picker)) = state.open_picker() {
                render_open_picker(
                    frame,
                    layout.fields.rect(field),
                    picker,
                    RowLabel::Label,
                    NO_OPTIONS_MESSAGE,
                );
            }
            layout.screen.footer
        }
        Screen::Success(receipt) => {
            let layout = calculate_success_layout(area);
            screens::success::render(frame, &layout, receipt);
            layout.screen.footer
        }
    };

    footer::render(frame, footer_area, &app.get_input_context());

    if let Some((message, _)) = &app.ui.toast {
        components::render_toast(frame, area, message);
    }
}

fn render_open_picker(
    frame: &mut Frame,
    trigger: Rect,
    picker: &SelectorState,
    row_label: RowLabel,
    empty_message: &str,
) {
    let bounds = frame.area();
    let popup = calculate_picker_popup(trigger, picker, bounds);
    frame.render_widget(
        PickerList::new(picker, &popup)
            .row_label(row_label)
            .empty_message(empty_message),
        popup.area,
    );
}

// ============================================================================
// Tests
// ============================================================================
