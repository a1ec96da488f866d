//! Command pattern for key event handling.
//!
//! Key input is translated into [`AppCommand`]s by a pure function of the
//! key and the current [`InputContext`], so bindings can be tested without a
//! terminal or an `App`.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

// ============================================================================
// Input Context
// ============================================================================

/// What the focused part of the screen accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// The tab selector is focused.
    Tabs,
    /// A free-text field is focused.
    TextField,
    /// A closed picker trigger is focused.
    PickerTrigger,
    /// A primary action button is focused.
    Button,
    /// A picker list is open.
    PickerOpen { searchable: bool },
    /// A simulated conversion or submission is running.
    Busy,
    /// The confirmation screen is showing.
    Success,
}

// ============================================================================
// App Commands
// ============================================================================

/// All commands the application can execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    // === Application Control ===
    Quit,
    /// Restart the wizard from the confirmation screen.
    Restart,
    /// Step back within or out of the recipient screen.
    Back,

    // === Focus ===
    FocusNext,
    FocusPrev,
    /// Press the focused button or open the focused picker.
    Activate,

    // === Text Input ===
    TypeChar(char),
    Backspace,

    // === Tabs ===
    PrevTab,
    NextTab,

    // === Open Picker ===
    PickerUp,
    PickerDown,
    PickerSelect,
    ClosePicker,

    /// Nothing to do.
    Noop,
}

// ============================================================================
// Key Mapper
// ============================================================================

/// Maps a key event to a command for the given context.
///
/// Ctrl-C quits from every context.
#[must_use]
pub fn map_key(key: KeyEvent, context: &InputContext) -> AppCommand {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => AppCommand::Quit,
            _ => AppCommand::Noop,
        };
    }

    match context {
        InputContext::Tabs => map_tab_keys(key),
        InputContext::TextField => map_text_field_keys(key),
        InputContext::PickerTrigger | InputContext::Button => map_trigger_keys(key),
        InputContext::PickerOpen { searchable } => map_open_picker_keys(key, *searchable),
        InputContext::Busy => AppCommand::Noop,
        InputContext::Success => map_success_keys(key),
    }
}

/// Focus movement shared by every form context.
fn map_focus_keys(key: KeyEvent) -> Option<AppCommand> {
    match key.code {
        KeyCode::Tab | KeyCode::Down => Some(AppCommand::FocusNext),
        KeyCode::BackTab | KeyCode::Up => Some(AppCommand::FocusPrev),
        KeyCode::Esc => Some(AppCommand::Back),
        _ => None,
    }
}

fn map_tab_keys(key: KeyEvent) -> AppCommand {
    if let Some(command) = map_focus_keys(key) {
        return command;
    }
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => AppCommand::PrevTab,
        KeyCode::Right | KeyCode::Char('l') => AppCommand::NextTab,
        KeyCode::Enter => AppCommand::FocusNext,
        KeyCode::Char('q') => AppCommand::Quit,
        _ => AppCommand::Noop,
    }
}

fn map_text_field_keys(key: KeyEvent) -> AppCommand {
    if let Some(command) = map_focus_keys(key) {
        return command;
    }
    match key.code {
        KeyCode::Enter => AppCommand::FocusNext,
        KeyCode::Backspace => AppCommand::Backspace,
        KeyCode::Char(c) => AppCommand::TypeChar(c),
        _ => AppCommand::Noop,
    }
}

fn map_trigger_keys(key: KeyEvent) -> AppCommand {
    if let Some(command) = map_focus_keys(key) {
        return command;
    }
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => AppCommand::Activate,
        KeyCode::Char('q') => AppCommand::Quit,
        _ => AppCommand::Noop,
    }
}

fn map_open_picker_keys(key: KeyEvent, searchable: bool) -> AppCommand {
    match key.code {
        KeyCode::Esc => AppCommand::ClosePicker,
        KeyCode::Up => AppCommand::PickerUp,
        KeyCode::Down => AppCommand::PickerDown,
        KeyCode::Enter => AppCommand::PickerSelect,
        KeyCode::Tab => AppCommand::FocusNext,
        KeyCode::BackTab => AppCommand::FocusPrev,
        KeyCode::Backspace if searchable => AppCommand::Backspace,
        KeyCode::Char(c) if searchable => AppCommand::TypeChar(c),
        KeyCode::Char('k') => AppCommand::PickerUp,
        KeyCode::Char('j') => AppCommand::PickerDown,
        KeyCode::Char(' ') => AppCommand::PickerSelect,
        _ => AppCommand::Noop,
    }
}

fn map_success_keys(key: KeyEvent) -> AppCommand {
    match key.code {
        KeyCode::Enter | KeyCode::Char('r') => AppCommand::Restart,
        KeyCode::Esc | KeyCode::Char('q') => AppCommand::Quit,
        _ => AppCommand::Noop,
    }
}

// ============================================================================
// Tests
// ============================================================================
