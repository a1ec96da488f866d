//! Per-step form validation.
//!
//! Validation is not fail-fast: every failing field gets an entry in
//! [`FieldErrors`], and the step may advance only when the map is empty.

use std::collections::BTreeMap;

use crate::constants::{ACCOUNT_NUMBER_LENGTH, PHONE_MIN_DIGITS};

use super::input::{is_valid_email, strip_non_digits};

// ============================================================================
// Form Fields
// ============================================================================

/// Fields that can carry a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Bank,
    AccountNumber,
    AccountName,
    Email,
    Phone,
}

impl FormField {
    /// Stable key used when logging error maps.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Bank => "bank",
            Self::AccountNumber => "accountNumber",
            Self::AccountName => "accountName",
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }
}

// ============================================================================
// Error Messages
// ============================================================================

pub const BANK_REQUIRED: &str = "Please select a bank";
pub const ACCOUNT_NUMBER_INVALID: &str = "Please enter a valid 10-digit account number";
pub const ACCOUNT_NOT_VERIFIED: &str = "Account could not be verified";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const PHONE_INVALID: &str = "Please enter a valid phone number";

// ============================================================================
// Field Errors
// ============================================================================

/// Mapping of field → current validation message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<FormField, String>);

impl FieldErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: FormField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// Removes the error for one field, leaving the others untouched.
    pub fn clear_field(&mut self, field: FormField) {
        self.0.remove(&field);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    #[must_use]
    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, field: FormField) -> bool {
        self.0.contains_key(&field)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Keys of the failing fields, for logging.
    #[must_use]
    pub fn keys(&self) -> Vec<&'static str> {
        self.0.keys().map(|field| field.key()).collect()
    }
}

// ============================================================================
// Step Validators
// ============================================================================

/// Validates the bank sub-step.
#[must_use]
pub fn validate_bank_details(
    bank_selected: bool,
    account_number: &str,
    account_name: &str,
) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if !bank_selected {
        errors.insert(FormField::Bank, BANK_REQUIRED);
    }
    if account_number.len() < ACCOUNT_NUMBER_LENGTH {
        errors.insert(FormField::AccountNumber, ACCOUNT_NUMBER_INVALID);
    }
    if account_name.is_empty() {
        errors.insert(FormField::AccountName, ACCOUNT_NOT_VERIFIED);
    }

    errors
}

/// Validates the contact sub-step.
#[must_use]
pub fn validate_contact_details(email: &str, phone: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if email.is_empty() {
        errors.insert(FormField::Email, EMAIL_REQUIRED);
    } else if !is_valid_email(email) {
        errors.insert(FormField::Email, EMAIL_INVALID);
    }

    if strip_non_digits(phone).len() < PHONE_MIN_DIGITS {
        errors.insert(FormField::Phone, PHONE_INVALID);
    }

    errors
}

// ============================================================================
// Tests
// ============================================================================
