//! Command execution and input handling.
//!
//! Keys become [`AppCommand`]s through the pure key map; mouse clicks are
//! hit-tested against the same layouts the renderer draws.

use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};

use super::recipient::{RecipientAdvance, RecipientBack};
use super::{
    App, ConverterState, FieldKind, OperationKind, Screen, SelectorState, WizardEvent,
};
use crate::commands::{AppCommand, InputContext, map_key};
use crate::constants::{CONVERT_DISABLED_MESSAGE, TOAST_TICKS};
use crate::ui::layout::{
    calculate_converter_layout, calculate_picker_popup, calculate_recipient_layout,
    calculate_success_layout, tab_at,
};

impl App {
    pub(crate) fn handle_key_event(&mut self, key_event: KeyEvent) {
        let context = self.get_input_context();
        let command = map_key(key_event, &context);
        self.execute_command(command);
    }

    /// Determines which keybindings are active.
    #[must_use]
    pub fn get_input_context(&self) -> InputContext {
        let (busy, open_picker, focused) = match &self.screen {
            Screen::Success(_) => return InputContext::Success,
            Screen::Converter(state) => (
                state.is_converting(),
                state.open_picker().map(|(_, picker)| picker.is_searchable()),
                state.focus().kind(),
            ),
            Screen::Recipient(state) => (
                state.is_submitting(),
                state.open_picker().map(|(_, picker)| picker.is_searchable()),
                state.focus().kind(),
            ),
        };

        if busy {
            return InputContext::Busy;
        }
        if let Some(searchable) = open_picker {
            return InputContext::PickerOpen { searchable };
        }
        match focused {
            FieldKind::Tabs => InputContext::Tabs,
            FieldKind::Text => InputContext::TextField,
            FieldKind::Picker => InputContext::PickerTrigger,
            FieldKind::Button => InputContext::Button,
        }
    }

    /// Executes an application command.
    pub(crate) fn execute_command(&mut self, command: AppCommand) {
        match command {
            // === Application Control ===
            AppCommand::Quit => {
                self.exit = true;
            }
            AppCommand::Restart => self.restart(),
            AppCommand::Back => self.back(),

            // === Focus ===
            AppCommand::FocusNext => match &mut self.screen {
                Screen::Converter(state) => state.focus_next(),
                Screen::Recipient(state) => state.focus_next(),
                Screen::Success(_) => {}
            },
            AppCommand::FocusPrev => match &mut self.screen {
                Screen::Converter(state) => state.focus_prev(),
                Screen::Recipient(state) => state.focus_prev(),
                Screen::Success(_) => {}
            },
            AppCommand::Activate => self.activate(),

            // === Text Input ===
            AppCommand::TypeChar(c) => match &mut self.screen {
                Screen::Converter(state) => state.type_char(c),
                Screen::Recipient(state) => {
                    let need = state.type_char(c);
                    self.apply_verification_need(need);
                }
                Screen::Success(_) => {}
            },
            AppCommand::Backspace => match &mut self.screen {
                Screen::Converter(state) => state.backspace(),
                Screen::Recipient(state) => {
                    let need = state.backspace();
                    self.apply_verification_need(need);
                }
                Screen::Success(_) => {}
            },

            // === Tabs ===
            AppCommand::PrevTab => {
                if let Screen::Converter(state) = &mut self.screen {
                    state.prev_tab();
                }
            }
            AppCommand::NextTab => {
                if let Screen::Converter(state) = &mut self.screen {
                    state.next_tab();
                }
            }

            // === Open Picker ===
            AppCommand::PickerUp => {
                if let Some(picker) = self.open_picker_mut() {
                    picker.highlight_prev();
                }
            }
            AppCommand::PickerDown => {
                if let Some(picker) = self.open_picker_mut() {
                    picker.highlight_next();
                }
            }
            AppCommand::PickerSelect => self.select_in_open_picker(None),
            AppCommand::ClosePicker => match &mut self.screen {
                Screen::Converter(state) => state.close_pickers(),
                Screen::Recipient(state) => state.close_pickers(),
                Screen::Success(_) => {}
            },

            AppCommand::Noop => {}
        }
    }

    // ========================================================================
    // Actions
    // ========================================================================

    fn open_picker_mut(&mut self) -> Option<&mut SelectorState> {
        match &mut self.screen {
            Screen::Converter(state) => state.open_picker_mut(),
            Screen::Recipient(state) => state.open_picker_mut(),
            Screen::Success(_) => None,
        }
    }

    /// Selects the highlighted row, or `row` of the filtered list when given.
    fn select_in_open_picker(&mut self, row: Option<usize>) {
        match &mut self.screen {
            Screen::Converter(state) => {
                if let Some(picker) = state.open_picker_mut() {
                    let chosen = match row {
                        Some(row) => picker.select_filtered(row),
                        None => picker.select_highlighted(),
                    };
                    if let Some(option) = chosen {
                        tracing::debug!(id = %option.id, "picker option selected");
                    }
                }
            }
            Screen::Recipient(state) => {
                let Some((field, _)) = state.open_picker() else {
                    return;
                };
                let Some(picker) = state.picker_mut(field) else {
                    return;
                };
                let previous = picker.selected_id().map(str::to_owned);
                let chosen = match row {
                    Some(row) => picker.select_filtered(row),
                    None => picker.select_highlighted(),
                };
                if chosen.is_some() {
                    let need = state.picker_selected(field, previous.as_deref());
                    self.apply_verification_need(need);
                }
            }
            Screen::Success(_) => {}
        }
    }

    /// Presses the focused control.
    fn activate(&mut self) {
        match &mut self.screen {
            Screen::Converter(state) => match state.focus().kind() {
                FieldKind::Picker => state.toggle_focused_picker(),
                FieldKind::Button => self.start_conversion(),
                FieldKind::Text | FieldKind::Tabs => state.focus_next(),
            },
            Screen::Recipient(state) => match state.focus().kind() {
                FieldKind::Picker => state.toggle_focused_picker(),
                FieldKind::Button => self.advance_recipient(),
                FieldKind::Text | FieldKind::Tabs => state.focus_next(),
            },
            Screen::Success(_) => self.restart(),
        }
    }

    fn start_conversion(&mut self) {
        let Screen::Converter(state) = &mut self.screen else {
            return;
        };
        if state.is_converting() {
            return;
        }
        if !state.can_convert() {
            self.ui.show_toast(CONVERT_DISABLED_MESSAGE, TOAST_TICKS);
            return;
        }
        if state.begin_conversion() {
            self.start_operation(OperationKind::Conversion);
        }
    }

    fn advance_recipient(&mut self) {
        let Screen::Recipient(state) = &mut self.screen else {
            return;
        };
        match state.advance() {
            RecipientAdvance::Submit => self.start_operation(OperationKind::Submission),
            RecipientAdvance::ToContact => tracing::debug!("bank details accepted"),
            RecipientAdvance::Blocked => {
                tracing::debug!(fields = ?state.errors().keys(), "validation blocked advance");
            }
            RecipientAdvance::Ignored => {}
        }
    }

    fn back(&mut self) {
        let Screen::Recipient(state) = &mut self.screen else {
            return;
        };
        if state.back() == RecipientBack::Exit {
            let converter = ConverterState::new(&self.catalog);
            self.transition(WizardEvent::Back, Screen::Converter(converter));
        }
    }

    fn restart(&mut self) {
        if matches!(self.screen, Screen::Success(_)) {
            let converter = ConverterState::new(&self.catalog);
            self.transition(WizardEvent::Restart, Screen::Converter(converter));
        }
    }

    // ========================================================================
    // Mouse
    // ========================================================================

    /// Handles a mouse event. Only left-button presses do anything.
    pub(crate) fn handle_mouse_input(&mut self, mouse: MouseEvent) {
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return;
        }
        let (column, row) = (mouse.column, mouse.row);

        match self.screen {
            Screen::Converter(_) => self.click_converter(column, row),
            Screen::Recipient(_) => self.click_recipient(column, row),
            Screen::Success(_) => {
                let layout = calculate_success_layout(self.ui.terminal_area);
                if layout.restart.contains((column, row).into()) {
                    self.restart();
                }
            }
        }
    }

    fn click_converter(&mut self, column: u16, row: u16) {
        let area = self.ui.terminal_area;
        let layout = calculate_converter_layout(area);
        let Screen::Converter(state) = &mut self.screen else {
            return;
        };
        if state.is_converting() {
            return;
        }

        if let Some((field, picker)) = state.open_picker() {
            let trigger = layout.fields.rect(field);
            let popup = calculate_picker_popup(trigger, picker, area);
            if let Some(index) = popup.row_at(column, row) {
                self.select_in_open_picker(Some(index));
                return;
            }
            if popup.contains(column, row) {
                return;
            }
            state.close_pickers();
            if trigger.contains((column, row).into()) {
                return;
            }
        }

        let Some(field) = layout.fields.hit(column, row) else {
            return;
        };
        state.set_focus(field);
        match field.kind() {
            FieldKind::Tabs => {
                if let Some(tab) = tab_at(layout.fields.rect(field), column) {
                    state.select_tab(tab);
                }
            }
            FieldKind::Picker => state.toggle_focused_picker(),
            FieldKind::Button => self.start_conversion(),
            FieldKind::Text => {}
        }
    }

    fn click_recipient(&mut self, column: u16, row: u16) {
        let area = self.ui.terminal_area;
        let Screen::Recipient(state) = &mut self.screen else {
            return;
        };
        if state.is_submitting() {
            return;
        }
        let layout = calculate_recipient_layout(area, state.step());

        if let Some((field, picker)) = state.open_picker() {
            let trigger = layout.fields.rect(field);
            let popup = calculate_picker_popup(trigger, picker, area);
            if let Some(index) = popup.row_at(column, row) {
                self.select_in_open_picker(Some(index));
                return;
            }
            if popup.contains(column, row) {
                return;
            }
            state.close_pickers();
            if trigger.contains((column, row).into()) {
                return;
            }
        }

        if layout.back.contains((column, row).into()) {
            self.back();
            return;
        }

        let Some(field) = layout.fields.hit(column, row) else {
            return;
        };
        state.set_focus(field);
        match field.kind() {
            FieldKind::Picker => state.toggle_focused_picker(),
            FieldKind::Button => self.advance_recipient(),
            FieldKind::Text | FieldKind::Tabs => {}
        }
    }
}
