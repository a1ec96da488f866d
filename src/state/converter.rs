//! Conversion-parameters screen state.
//!
//! Owns the amounts, the four pickers and the active tab. The only gate is
//! the primary action: it stays disabled until both a wallet and a payout
//! account are chosen. Amounts are never validated beyond the keystroke
//! filter.

use serde::Serialize;

use super::FieldKind;
use super::selector::SelectorState;
use crate::constants::DEFAULT_AMOUNT;
use crate::domain::Catalog;
use crate::domain::input::filter_amount;

// ============================================================================
// Tabs
// ============================================================================

/// Product tabs across the top of the conversion card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConversionTab {
    #[default]
    CryptoToCash,
    CashToCrypto,
    CryptoToFiatLoan,
}

impl ConversionTab {
    pub const ALL: [Self; 3] = [Self::CryptoToCash, Self::CashToCrypto, Self::CryptoToFiatLoan];

    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::CryptoToCash => "crypto-to-cash",
            Self::CashToCrypto => "cash-to-crypto",
            Self::CryptoToFiatLoan => "crypto-to-fiat-loan",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::CryptoToCash => "Crypto to cash",
            Self::CashToCrypto => "Cash to crypto",
            Self::CryptoToFiatLoan => "Crypto to fiat loan",
        }
    }

    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::CryptoToCash => Self::CashToCrypto,
            Self::CashToCrypto => Self::CryptoToFiatLoan,
            Self::CryptoToFiatLoan => Self::CryptoToCash,
        }
    }

    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::CryptoToCash => Self::CryptoToFiatLoan,
            Self::CashToCrypto => Self::CryptoToCash,
            Self::CryptoToFiatLoan => Self::CashToCrypto,
        }
    }
}

// ============================================================================
// Fields
// ============================================================================

/// Focusable fields of the conversion screen, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConverterField {
    Tabs,
    #[default]
    PayAmount,
    PayToken,
    ReceiveAmount,
    ReceiveCurrency,
    PayFrom,
    PayTo,
    Convert,
}

impl ConverterField {
    pub const ORDER: [Self; 8] = [
        Self::Tabs,
        Self::PayAmount,
        Self::PayToken,
        Self::ReceiveAmount,
        Self::ReceiveCurrency,
        Self::PayFrom,
        Self::PayTo,
        Self::Convert,
    ];

    #[must_use]
    pub const fn kind(self) -> FieldKind {
        match self {
            Self::Tabs => FieldKind::Tabs,
            Self::PayAmount | Self::ReceiveAmount => FieldKind::Text,
            Self::PayToken | Self::ReceiveCurrency | Self::PayFrom | Self::PayTo => {
                FieldKind::Picker
            }
            Self::Convert => FieldKind::Button,
        }
    }

    fn position(self) -> usize {
        Self::ORDER
            .iter()
            .position(|field| *field == self)
            .unwrap_or(0)
    }
}

// ============================================================================
// Summary
// ============================================================================

/// What the conversion screen hands forward to the recipient screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionSummary {
    pub tab: ConversionTab,
    pub pay_amount: String,
    pub pay_token: String,
    pub receive_amount: String,
    pub receive_currency: String,
    pub pay_from: String,
    pub pay_to: String,
}

// ============================================================================
// ConverterState
// ============================================================================

/// Field state of the conversion screen.
#[derive(Debug, Clone)]
pub struct ConverterState {
    active_tab: ConversionTab,
    pay_amount: String,
    receive_amount: String,
    pub pay_token: SelectorState,
    pub receive_currency: SelectorState,
    pub pay_from: SelectorState,
    pub pay_to: SelectorState,
    focus: ConverterField,
    is_converting: bool,
}

impl ConverterState {
    /// Creates a fresh screen with the default selections.
    #[must_use]
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            active_tab: ConversionTab::default(),
            pay_amount: DEFAULT_AMOUNT.to_string(),
            receive_amount: DEFAULT_AMOUNT.to_string(),
            pay_token: SelectorState::from_items(&catalog.tokens, true).with_selected("eth"),
            receive_currency: SelectorState::from_items(&catalog.fiat_currencies, false)
                .with_selected("ngn"),
            pay_from: SelectorState::from_items(&catalog.wallets, false),
            pay_to: SelectorState::from_items(&catalog.pay_to, false),
            focus: ConverterField::default(),
            is_converting: false,
        }
    }

    #[must_use]
    pub const fn active_tab(&self) -> ConversionTab {
        self.active_tab
    }

    #[must_use]
    pub fn pay_amount(&self) -> &str {
        &self.pay_amount
    }

    #[must_use]
    pub fn receive_amount(&self) -> &str {
        &self.receive_amount
    }

    #[must_use]
    pub const fn focus(&self) -> ConverterField {
        self.focus
    }

    #[must_use]
    pub const fn is_converting(&self) -> bool {
        self.is_converting
    }

    /// The primary action is enabled once a wallet and a payout account
    /// are chosen.
    #[must_use]
    pub fn can_convert(&self) -> bool {
        self.pay_from.selected().is_some() && self.pay_to.selected().is_some()
    }

    // ========================================================================
    // Tabs
    // ========================================================================

    pub fn select_tab(&mut self, tab: ConversionTab) {
        self.active_tab = tab;
    }

    pub fn next_tab(&mut self) {
        self.active_tab = self.active_tab.next();
    }

    pub fn prev_tab(&mut self) {
        self.active_tab = self.active_tab.prev();
    }

    // ========================================================================
    // Focus
    // ========================================================================

    /// Moves focus, closing any open picker.
    pub fn set_focus(&mut self, field: ConverterField) {
        if self.focus != field {
            self.close_pickers();
            self.focus = field;
        }
    }

    pub fn focus_next(&mut self) {
        let next = (self.focus.position() + 1) % ConverterField::ORDER.len();
        self.set_focus(ConverterField::ORDER[next]);
    }

    pub fn focus_prev(&mut self) {
        let len = ConverterField::ORDER.len();
        let prev = (self.focus.position() + len - 1) % len;
        self.set_focus(ConverterField::ORDER[prev]);
    }

    // ========================================================================
    // Amount Editing
    // ========================================================================

    /// Replaces the pay amount if the candidate is a valid amount.
    pub fn set_pay_amount(&mut self, candidate: &str) -> bool {
        Self::apply_amount(&mut self.pay_amount, candidate)
    }

    /// Replaces the receive amount if the candidate is a valid amount.
    pub fn set_receive_amount(&mut self, candidate: &str) -> bool {
        Self::apply_amount(&mut self.receive_amount, candidate)
    }

    fn apply_amount(target: &mut String, candidate: &str) -> bool {
        match filter_amount(candidate) {
            Some(value) => {
                *target = value;
                true
            }
            None => false,
        }
    }

    /// Types into the focused amount field, or into an open searchable
    /// picker's query.
    pub fn type_char(&mut self, c: char) {
        if let Some(picker) = self.open_picker_mut() {
            picker.push_query(c);
            return;
        }
        match self.focus {
            ConverterField::PayAmount => {
                let candidate = format!("{}{c}", self.pay_amount);
                self.set_pay_amount(&candidate);
            }
            ConverterField::ReceiveAmount => {
                let candidate = format!("{}{c}", self.receive_amount);
                self.set_receive_amount(&candidate);
            }
            _ => {}
        }
    }

    pub fn backspace(&mut self) {
        if let Some(picker) = self.open_picker_mut() {
            picker.pop_query();
            return;
        }
        match self.focus {
            ConverterField::PayAmount => {
                self.pay_amount.pop();
            }
            ConverterField::ReceiveAmount => {
                self.receive_amount.pop();
            }
            _ => {}
        }
    }

    // ========================================================================
    // Pickers
    // ========================================================================

    /// The picker behind `field`, if it is a picker field.
    pub fn picker_mut(&mut self, field: ConverterField) -> Option<&mut SelectorState> {
        match field {
            ConverterField::PayToken => Some(&mut self.pay_token),
            ConverterField::ReceiveCurrency => Some(&mut self.receive_currency),
            ConverterField::PayFrom => Some(&mut self.pay_from),
            ConverterField::PayTo => Some(&mut self.pay_to),
            _ => None,
        }
    }

    #[must_use]
    pub fn picker(&self, field: ConverterField) -> Option<&SelectorState> {
        match field {
            ConverterField::PayToken => Some(&self.pay_token),
            ConverterField::ReceiveCurrency => Some(&self.receive_currency),
            ConverterField::PayFrom => Some(&self.pay_from),
            ConverterField::PayTo => Some(&self.pay_to),
            _ => None,
        }
    }

    /// The open picker, which is always the focused one.
    #[must_use]
    pub fn open_picker(&self) -> Option<(ConverterField, &SelectorState)> {
        self.picker(self.focus)
            .filter(|picker| picker.is_open())
            .map(|picker| (self.focus, picker))
    }

    pub fn open_picker_mut(&mut self) -> Option<&mut SelectorState> {
        let focus = self.focus;
        self.picker_mut(focus).filter(|picker| picker.is_open())
    }

    /// Toggles the focused picker.
    pub fn toggle_focused_picker(&mut self) {
        let focus = self.focus;
        if let Some(picker) = self.picker_mut(focus) {
            picker.toggle();
        }
    }

    pub fn close_pickers(&mut self) {
        for picker in [
            &mut self.pay_token,
            &mut self.receive_currency,
            &mut self.pay_from,
            &mut self.pay_to,
        ] {
            if picker.is_open() {
                picker.close();
            }
        }
    }

    // ========================================================================
    // Conversion
    // ========================================================================

    /// Enters the loading state. Returns `false` when the action is
    /// disabled or a conversion is already running.
    pub fn begin_conversion(&mut self) -> bool {
        if self.is_converting || !self.can_convert() {
            return false;
        }
        self.close_pickers();
        self.is_converting = true;
        true
    }

    /// Leaves the loading state and returns what was converted.
    pub fn finish_conversion(&mut self) -> ConversionSummary {
        self.is_converting = false;
        self.summary()
    }

    #[must_use]
    pub fn summary(&self) -> ConversionSummary {
        let label = |picker: &SelectorState| {
            picker
                .selected()
                .map(|option| option.label.clone())
                .unwrap_or_default()
        };

        ConversionSummary {
            tab: self.active_tab,
            pay_amount: self.pay_amount.clone(),
            pay_token: self
                .pay_token
                .selected()
                .map(|option| option.sublabel.clone().unwrap_or(option.label.clone()))
                .unwrap_or_default(),
            receive_amount: self.receive_amount.clone(),
            receive_currency: label(&self.receive_currency),
            pay_from: label(&self.pay_from),
            pay_to: label(&self.pay_to),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::ConverterStateMother;

    #[test]
    fn test_fresh_screen_defaults() {
        let state = ConverterState::new(&Catalog::builtin());

        assert_eq!(state.active_tab(), ConversionTab::CryptoToCash);
        assert_eq!(state.pay_amount(), "1.00");
        assert_eq!(state.receive_amount(), "1.00");
        assert!(state.pay_token.is_selected("eth"));
        assert!(state.receive_currency.is_selected("ngn"));
        assert!(state.pay_from.selected().is_none());
        assert!(state.pay_to.selected().is_none());
        assert!(!state.can_convert());
        assert!(state.pay_token.is_searchable());
        assert!(!state.receive_currency.is_searchable());
    }

    #[test]
    fn test_convert_requires_wallet_and_pay_to() {
        let mut state = ConverterState::new(&Catalog::builtin());

        state.pay_from.select_id("metamask");
        assert!(!state.can_convert());
        assert!(!state.begin_conversion());

        state.pay_to.select_id("bank1");
        assert!(state.can_convert());
    }

    #[test]
    fn test_invalid_keystrokes_are_dropped() {
        let mut state = ConverterState::new(&Catalog::builtin());
        state.set_focus(ConverterField::PayAmount);

        state.type_char('5');
        assert_eq!(state.pay_amount(), "1.005");
        state.type_char('.');
        assert_eq!(state.pay_amount(), "1.005", "second decimal point");
        state.type_char('x');
        assert_eq!(state.pay_amount(), "1.005");

        for _ in 0..6 {
            state.backspace();
        }
        assert_eq!(state.pay_amount(), "");
        state.type_char('.');
        assert_eq!(state.pay_amount(), ".");
    }

    #[test]
    fn test_receive_amount_edits_independently() {
        let mut state = ConverterState::new(&Catalog::builtin());
        state.set_focus(ConverterField::ReceiveAmount);
        state.type_char('9');

        assert_eq!(state.receive_amount(), "1.009");
        assert_eq!(state.pay_amount(), "1.00");
        assert!(!state.set_receive_amount("abc"));
        assert_eq!(state.receive_amount(), "1.009");
    }

    #[test]
    fn test_typing_goes_to_open_picker_query() {
        let mut state = ConverterState::new(&Catalog::builtin());
        state.set_focus(ConverterField::PayToken);
        state.toggle_focused_picker();

        state.type_char('t');
        state.type_char('o');
        assert_eq!(state.pay_token.query(), "to");
        assert_eq!(state.pay_amount(), "1.00");

        state.backspace();
        assert_eq!(state.pay_token.query(), "t");
    }

    #[test]
    fn test_focus_change_closes_picker() {
        let mut state = ConverterState::new(&Catalog::builtin());
        state.set_focus(ConverterField::PayFrom);
        state.toggle_focused_picker();
        assert!(state.open_picker().is_some());

        state.focus_next();
        assert_eq!(state.focus(), ConverterField::PayTo);
        assert!(!state.pay_from.is_open());
        assert!(state.open_picker().is_none());
    }

    #[test]
    fn test_focus_wraps() {
        let mut state = ConverterState::new(&Catalog::builtin());
        state.set_focus(ConverterField::Convert);
        state.focus_next();
        assert_eq!(state.focus(), ConverterField::Tabs);
        state.focus_prev();
        assert_eq!(state.focus(), ConverterField::Convert);
    }

    #[test]
    fn test_tabs_cycle() {
        let mut state = ConverterState::new(&Catalog::builtin());
        state.prev_tab();
        assert_eq!(state.active_tab(), ConversionTab::CryptoToFiatLoan);
        state.next_tab();
        assert_eq!(state.active_tab(), ConversionTab::CryptoToCash);
        assert_eq!(state.active_tab().id(), "crypto-to-cash");
        assert_eq!(ConversionTab::CryptoToFiatLoan.id(), "crypto-to-fiat-loan");
    }

    #[test]
    fn test_conversion_lifecycle_and_summary() {
        let mut state = ConverterStateMother::ready();

        assert!(state.begin_conversion());
        assert!(state.is_converting());
        assert!(!state.begin_conversion(), "no double submission");

        let summary = state.finish_conversion();
        assert!(!state.is_converting());
        assert_eq!(summary.pay_token, "Ethereum");
        assert_eq!(summary.receive_currency, "NGN");
        assert_eq!(summary.pay_from, "Metamask");
        assert_eq!(summary.pay_to, "First Bank - ****1234");
        assert_eq!(summary.tab, ConversionTab::CryptoToCash);
    }
}
