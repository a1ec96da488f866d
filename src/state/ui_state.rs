//! Presentation state that outlives any single screen.
//!
//! Toasts and the last known terminal size live here rather than in the
//! screen states, so a wizard transition never drops a pending toast.

use ratatui::layout::Rect;

/// Fallback terminal size before the first resize event.
const DEFAULT_TERMINAL_AREA: Rect = Rect {
    x: 0,
    y: 0,
    width: 80,
    height: 24,
};

/// UI presentation state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    /// Toast message and remaining ticks (non-blocking overlay).
    pub toast: Option<(String, u8)>,
    /// Full terminal area, used to rebuild layouts for mouse hit-testing.
    pub terminal_area: Rect,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            toast: None,
            terminal_area: DEFAULT_TERMINAL_AREA,
        }
    }
}

impl UiState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows a toast notification that auto-dismisses after `ticks`.
    pub fn show_toast(&mut self, message: impl Into<String>, ticks: u8) {
        self.toast = Some((message.into(), ticks));
    }

    /// Decrements the toast countdown.
    ///
    /// Returns `true` if the toast was removed.
    pub fn tick_toast(&mut self) -> bool {
        if let Some((_, ref mut ticks)) = self.toast {
            if *ticks > 1 {
                *ticks -= 1;
                false
            } else {
                self.toast = None;
                true
            }
        } else {
            false
        }
    }

    pub fn set_terminal_size(&mut self, width: u16, height: u16) {
        self.terminal_area = Rect::new(0, 0, width, height);
    }
}
