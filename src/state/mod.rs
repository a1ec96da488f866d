//! State management for the NovaCrust checkout TUI.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                          App                             │
//! ├──────────────────────────────┬───────────────────────────┤
//! │ Screen (exactly one)         │ UiState, OperationGuard   │
//! │  - Converter(ConverterState) │  - toast, terminal area   │
//! │  - Recipient(RecipientState) │  - generation counters    │
//! │  - Success(Receipt)          │                           │
//! └──────────────────────────────┴───────────────────────────┘
//! ```
//!
//! The screen enum owns its field state: leaving a screen drops it and
//! entering one builds it fresh. Simulated operations report back through
//! [`AppMessage`] and are discarded when their ticket is stale.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::domain::Catalog;

// ============================================================================
// Module Declarations
// ============================================================================

mod app_commands;
mod app_lifecycle;
mod app_messages;

pub mod config;
pub mod converter;
pub mod operations;
pub mod recipient;
pub mod selector;
pub mod ui_state;
pub mod wizard;


// ============================================================================
// Re-exports
// ============================================================================

pub use config::AppConfig;
pub use converter::{ConversionTab, ConverterField, ConverterState};
pub use operations::{OperationGuard, OperationKind, OperationTicket};
pub use recipient::{Receipt, RecipientField, RecipientState, RecipientStep};
pub use selector::SelectorState;
pub use ui_state::UiState;
pub use wizard::{WizardEvent, WizardStep};

// ============================================================================
// Shared Types
// ============================================================================

/// Messages sent from simulated operations to the main loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// A simulated operation finished its delay.
    OperationCompleted(OperationTicket),
}

/// How a focusable field takes input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Tabs,
    Text,
    Picker,
    Button,
}

/// The active screen and the state it owns.
#[derive(Debug, Clone)]
pub enum Screen {
    Converter(ConverterState),
    Recipient(RecipientState),
    Success(Receipt),
}

impl Screen {
    #[must_use]
    pub const fn step(&self) -> WizardStep {
        match self {
            Self::Converter(_) => WizardStep::Converter,
            Self::Recipient(_) => WizardStep::Recipient,
            Self::Success(_) => WizardStep::Success,
        }
    }
}

// ============================================================================
// Main App State
// ============================================================================

/// The wizard controller.
#[derive(Debug)]
pub struct App {
    /// The one screen being shown.
    pub screen: Screen,

    /// Immutable option lists shared with every screen.
    pub catalog: Arc<Catalog>,

    /// Timings and presentation settings.
    pub config: AppConfig,

    /// Toasts and terminal geometry.
    pub ui: UiState,

    /// Whether the application should exit.
    pub exit: bool,

    /// Animation tick counter for spinners.
    pub animation_tick: u64,

    /// Staleness guard for simulated operations.
    pub(crate) operations: OperationGuard,

    /// Sender handed to simulated operations.
    pub(crate) message_tx: mpsc::UnboundedSender<AppMessage>,

    /// Receiver drained by the main loop.
    pub(crate) message_rx: mpsc::UnboundedReceiver<AppMessage>,
}
