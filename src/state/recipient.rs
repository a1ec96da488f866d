//! Recipient-details screen state.
//!
//! A two-phase sub-wizard: bank details first, then contact details. The
//! screen never talks to the simulated operations directly; its methods
//! return what the controller should start or cancel.

use chrono::{DateTime, Local};
use serde::Serialize;

use super::FieldKind;
use super::converter::ConversionSummary;
use super::selector::SelectorState;
use crate::constants::ACCOUNT_NUMBER_LENGTH;
use crate::domain::input::{format_phone_number, sanitize_account_number, strip_non_digits};
use crate::domain::validation::{validate_bank_details, validate_contact_details};
use crate::domain::{Catalog, FieldErrors, FormField};

// ============================================================================
// Sub-steps and Fields
// ============================================================================

/// Nested position within the recipient screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecipientStep {
    #[default]
    Bank,
    Contact,
}

/// Focusable fields of the recipient screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipientField {
    Bank,
    AccountNumber,
    Email,
    CountryCode,
    Phone,
    Next,
}

impl RecipientField {
    const BANK_ORDER: [Self; 3] = [Self::Bank, Self::AccountNumber, Self::Next];
    const CONTACT_ORDER: [Self; 4] = [Self::Email, Self::CountryCode, Self::Phone, Self::Next];

    #[must_use]
    pub const fn kind(self) -> FieldKind {
        match self {
            Self::Bank | Self::CountryCode => FieldKind::Picker,
            Self::AccountNumber | Self::Email | Self::Phone => FieldKind::Text,
            Self::Next => FieldKind::Button,
        }
    }
}

impl RecipientStep {
    /// Focus order of the fields shown on this sub-step.
    #[must_use]
    pub const fn fields(self) -> &'static [RecipientField] {
        match self {
            Self::Bank => &RecipientField::BANK_ORDER,
            Self::Contact => &RecipientField::CONTACT_ORDER,
        }
    }
}

// ============================================================================
// Outcomes
// ============================================================================

/// What an edit means for the account lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationNeed {
    /// Nothing changes.
    Keep,
    /// Start a lookup, superseding any lookup in flight.
    Start,
    /// Drop any lookup in flight.
    Cancel,
}

/// Result of the primary action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipientAdvance {
    /// Busy; nothing happened.
    Ignored,
    /// Validation failed; errors are populated.
    Blocked,
    /// Moved from bank details to contact details.
    ToContact,
    /// Contact details are valid; submission started.
    Submit,
}

/// Result of the back action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipientBack {
    Ignored,
    ToBank,
    /// Leave the screen for the conversion screen.
    Exit,
}

/// Everything shown on the confirmation screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Receipt {
    pub conversion: ConversionSummary,
    pub bank: String,
    pub account_number: String,
    pub account_name: String,
    pub email: String,
    pub phone: String,
    pub submitted_at: DateTime<Local>,
}

// ============================================================================
// RecipientState
// ============================================================================

/// Field state of the recipient screen.
#[derive(Debug, Clone)]
pub struct RecipientState {
    step: RecipientStep,
    pub bank: SelectorState,
    account_number: String,
    account_name: String,
    is_verifying: bool,
    email: String,
    phone: String,
    pub country_code: SelectorState,
    errors: FieldErrors,
    is_submitting: bool,
    focus: RecipientField,
    conversion: ConversionSummary,
}

impl RecipientState {
    /// Creates a fresh screen for the given conversion.
    #[must_use]
    pub fn new(catalog: &Catalog, conversion: ConversionSummary) -> Self {
        let first_country = catalog
            .country_codes
            .first()
            .map(|country| country.code.clone())
            .unwrap_or_default();

        Self {
            step: RecipientStep::Bank,
            bank: SelectorState::from_items(&catalog.banks, false),
            account_number: String::new(),
            account_name: String::new(),
            is_verifying: false,
            email: String::new(),
            phone: String::new(),
            country_code: SelectorState::from_items(&catalog.country_codes, false)
                .with_selected(&first_country),
            errors: FieldErrors::new(),
            is_submitting: false,
            focus: RecipientField::Bank,
            conversion,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[must_use]
    pub const fn step(&self) -> RecipientStep {
        self.step
    }

    #[must_use]
    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    #[must_use]
    pub fn account_name(&self) -> &str {
        &self.account_name
    }

    #[must_use]
    pub const fn is_verifying(&self) -> bool {
        self.is_verifying
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    #[must_use]
    pub const fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    #[must_use]
    pub const fn focus(&self) -> RecipientField {
        self.focus
    }

    #[cfg(test)]
    pub const fn conversion(&self) -> &ConversionSummary {
        &self.conversion
    }

    /// Whether the primary action should look enabled.
    ///
    /// On the bank sub-step it is only styled disabled; pressing it still
    /// runs validation so the errors show.
    #[must_use]
    pub fn can_advance(&self) -> bool {
        match self.step {
            RecipientStep::Bank => {
                self.bank.selected().is_some()
                    && !self.account_number.is_empty()
                    && !self.account_name.is_empty()
            }
            RecipientStep::Contact => true,
        }
    }

    // ========================================================================
    // Focus
    // ========================================================================

    /// Moves focus, closing any open picker. Fields of the other sub-step
    /// are ignored.
    pub fn set_focus(&mut self, field: RecipientField) {
        if !self.step.fields().contains(&field) {
            return;
        }
        if self.focus != field {
            self.close_pickers();
            self.focus = field;
        }
    }

    pub fn focus_next(&mut self) {
        let fields = self.step.fields();
        let position = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.set_focus(fields[(position + 1) % fields.len()]);
    }

    pub fn focus_prev(&mut self) {
        let fields = self.step.fields();
        let position = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.set_focus(fields[(position + fields.len() - 1) % fields.len()]);
    }

    // ========================================================================
    // Pickers
    // ========================================================================

    pub fn picker_mut(&mut self, field: RecipientField) -> Option<&mut SelectorState> {
        match field {
            RecipientField::Bank => Some(&mut self.bank),
            RecipientField::CountryCode => Some(&mut self.country_code),
            _ => None,
        }
    }

    #[must_use]
    pub fn picker(&self, field: RecipientField) -> Option<&SelectorState> {
        match field {
            RecipientField::Bank => Some(&self.bank),
            RecipientField::CountryCode => Some(&self.country_code),
            _ => None,
        }
    }

    /// The open picker, which is always the focused one.
    #[must_use]
    pub fn open_picker(&self) -> Option<(RecipientField, &SelectorState)> {
        self.picker(self.focus)
            .filter(|picker| picker.is_open())
            .map(|picker| (self.focus, picker))
    }

    pub fn open_picker_mut(&mut self) -> Option<&mut SelectorState> {
        let focus = self.focus;
        self.picker_mut(focus).filter(|picker| picker.is_open())
    }

    pub fn toggle_focused_picker(&mut self) {
        let focus = self.focus;
        if let Some(picker) = self.picker_mut(focus) {
            picker.toggle();
        }
    }

    pub fn close_pickers(&mut self) {
        for picker in [&mut self.bank, &mut self.country_code] {
            if picker.is_open() {
                picker.close();
            }
        }
    }

    /// Applies a selection made in the open picker. `previous_id` is the
    /// option that was selected before.
    ///
    /// A bank change invalidates the derived account name; the lookup is
    /// re-run when the account number is already complete. Picking the same
    /// bank again changes nothing.
    pub fn picker_selected(
        &mut self,
        field: RecipientField,
        previous_id: Option<&str>,
    ) -> VerificationNeed {
        match field {
            RecipientField::Bank if self.bank.selected_id() != previous_id => {
                self.errors.clear_field(FormField::Bank);
                self.account_name.clear();
                if self.account_number.len() == ACCOUNT_NUMBER_LENGTH {
                    self.is_verifying = true;
                    VerificationNeed::Start
                } else {
                    VerificationNeed::Keep
                }
            }
            _ => VerificationNeed::Keep,
        }
    }

    // ========================================================================
    // Text Editing
    // ========================================================================

    /// Replaces the account number with sanitized input.
    pub fn set_account_number(&mut self, raw: &str) -> VerificationNeed {
        let value = sanitize_account_number(raw);
        if value == self.account_number {
            return VerificationNeed::Keep;
        }
        self.account_number = value;
        self.errors.clear_field(FormField::AccountNumber);
        self.account_name.clear();

        if self.account_number.len() == ACCOUNT_NUMBER_LENGTH {
            if self.bank.selected().is_some() {
                self.is_verifying = true;
                VerificationNeed::Start
            } else {
                VerificationNeed::Keep
            }
        } else {
            self.is_verifying = false;
            VerificationNeed::Cancel
        }
    }

    pub fn set_email(&mut self, value: &str) {
        self.email = value.to_string();
        self.errors.clear_field(FormField::Email);
    }

    /// Replaces the phone number, re-deriving its display from digits.
    pub fn set_phone(&mut self, raw: &str) {
        self.phone = format_phone_number(raw);
        self.errors.clear_field(FormField::Phone);
    }

    /// Types into the focused text field, or into an open picker's query.
    pub fn type_char(&mut self, c: char) -> VerificationNeed {
        if let Some(picker) = self.open_picker_mut() {
            picker.push_query(c);
            return VerificationNeed::Keep;
        }
        match self.focus {
            RecipientField::AccountNumber => {
                let candidate = format!("{}{c}", self.account_number);
                self.set_account_number(&candidate)
            }
            RecipientField::Email => {
                let candidate = format!("{}{c}", self.email);
                self.set_email(&candidate);
                VerificationNeed::Keep
            }
            RecipientField::Phone => {
                let candidate = format!("{}{c}", strip_non_digits(&self.phone));
                self.set_phone(&candidate);
                VerificationNeed::Keep
            }
            _ => VerificationNeed::Keep,
        }
    }

    /// Deletes backwards in the focused field. On the phone field this
    /// removes the last digit, never just a separator.
    pub fn backspace(&mut self) -> VerificationNeed {
        if let Some(picker) = self.open_picker_mut() {
            picker.pop_query();
            return VerificationNeed::Keep;
        }
        match self.focus {
            RecipientField::AccountNumber => {
                let mut candidate = self.account_number.clone();
                candidate.pop();
                self.set_account_number(&candidate)
            }
            RecipientField::Email => {
                let mut candidate = self.email.clone();
                candidate.pop();
                self.set_email(&candidate);
                VerificationNeed::Keep
            }
            RecipientField::Phone => {
                let mut digits = strip_non_digits(&self.phone);
                digits.pop();
                self.set_phone(&digits);
                VerificationNeed::Keep
            }
            _ => VerificationNeed::Keep,
        }
    }

    // ========================================================================
    // Simulated Operations
    // ========================================================================

    /// Writes the looked-up account name.
    pub fn complete_verification(&mut self, name: &str) {
        self.account_name = name.to_string();
        self.is_verifying = false;
        self.errors.clear_field(FormField::AccountName);
    }

    /// Runs the primary action for the current sub-step.
    pub fn advance(&mut self) -> RecipientAdvance {
        if self.is_submitting {
            return RecipientAdvance::Ignored;
        }
        self.close_pickers();

        match self.step {
            RecipientStep::Bank => {
                self.errors = validate_bank_details(
                    self.bank.selected().is_some(),
                    &self.account_number,
                    &self.account_name,
                );
                if !self.errors.is_empty() {
                    return RecipientAdvance::Blocked;
                }
                self.step = RecipientStep::Contact;
                self.focus = RecipientField::Email;
                self.errors.clear();
                RecipientAdvance::ToContact
            }
            RecipientStep::Contact => {
                self.errors = validate_contact_details(&self.email, &self.phone);
                if !self.errors.is_empty() {
                    return RecipientAdvance::Blocked;
                }
                self.is_submitting = true;
                RecipientAdvance::Submit
            }
        }
    }

    /// Runs the back action for the current sub-step.
    pub fn back(&mut self) -> RecipientBack {
        if self.is_submitting {
            return RecipientBack::Ignored;
        }
        match self.step {
            RecipientStep::Contact => {
                self.close_pickers();
                self.step = RecipientStep::Bank;
                self.focus = RecipientField::Bank;
                self.errors.clear();
                RecipientBack::ToBank
            }
            RecipientStep::Bank => RecipientBack::Exit,
        }
    }

    /// Leaves the submitting state and builds the receipt.
    pub fn finish_submission(&mut self, submitted_at: DateTime<Local>) -> Receipt {
        self.is_submitting = false;

        let dial_code = self
            .country_code
            .selected()
            .map(|option| option.label.clone())
            .unwrap_or_default();

        Receipt {
            conversion: self.conversion.clone(),
            bank: self
                .bank
                .selected()
                .map(|option| option.label.clone())
                .unwrap_or_default(),
            account_number: self.account_number.clone(),
            account_name: self.account_name.clone(),
            email: self.email.clone(),
            phone: format!("{dial_code} {}", self.phone),
            submitted_at,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
