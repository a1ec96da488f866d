//! Application constants for the NovaCrust checkout TUI.
//!
//! Field limits, default timings and canned values used by the simulated
//! operations live here so the screen states and the renderer agree on them.

use std::time::Duration;

// ============================================================================
// Event Loop
// ============================================================================

/// Interval between redraw ticks (spinner animation, toast countdown).
pub const TICK_RATE: Duration = Duration::from_millis(100);

/// Number of ticks a toast stays visible.
pub const TOAST_TICKS: u8 = 25;

// ============================================================================
// Field Limits
// ============================================================================

/// Required length of a recipient account number.
pub const ACCOUNT_NUMBER_LENGTH: usize = 10;

/// Maximum digits kept in a phone number.
pub const PHONE_MAX_DIGITS: usize = 11;

/// Minimum digits for a phone number to pass validation.
pub const PHONE_MIN_DIGITS: usize = 10;

// ============================================================================
// Simulated Operations
// ============================================================================

/// Default delay of the simulated conversion.
pub const DEFAULT_CONVERSION_DELAY_MS: u64 = 1500;

/// Default delay of the simulated account lookup.
pub const DEFAULT_VERIFICATION_DELAY_MS: u64 = 1000;

/// Default delay of the simulated recipient submission.
pub const DEFAULT_SUBMISSION_DELAY_MS: u64 = 1000;

/// Name every simulated account lookup resolves to.
pub const VERIFIED_ACCOUNT_NAME: &str = "ODUTUGA GBEKE";

// ============================================================================
// Form Defaults
// ============================================================================

/// Initial value of both amount fields.
pub const DEFAULT_AMOUNT: &str = "1.00";

/// Placeholder for unselected dropdowns.
pub const SELECT_PLACEHOLDER: &str = "Select an option";

/// Placeholder for the phone number field.
pub const PHONE_PLACEHOLDER: &str = "000 - 000 - 00000";

/// Spinner frames for loading indicators.
pub const SPINNER_FRAMES: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

/// Brand line shown under every card.
pub const BRAND_LINE: &str = "Powered by NovaCrust";

/// Toast shown when the disabled convert action is pressed.
pub const CONVERT_DISABLED_MESSAGE: &str = "Select a wallet and a payout account";
