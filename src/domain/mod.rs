//! Domain types for the NovaCrust checkout flow.
//!
//! # Module Organization
//!
//! - [`catalog`] - Static token, currency, wallet, bank and country lists
//! - [`option`] - Normalized picker options and icon references
//! - [`input`] - Keystroke filters and display formatters
//! - [`validation`] - Per-step validation and the field error map
//! - [`error`] - Error type for configuration and export plumbing

// ============================================================================
// Module Declarations
// ============================================================================

pub mod catalog;
pub mod error;
pub mod input;
pub mod option;
pub mod validation;

// ============================================================================
// Re-exports
// ============================================================================

pub use catalog::{Catalog, to_options};
pub use error::CheckoutError;
pub use option::{DropdownOption, IconRef, Selectable};
pub use validation::{FieldErrors, FormField};
