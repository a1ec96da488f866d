//! Shared test utilities and Mother pattern factories.
//!
//! Use these helpers to avoid copy-pasting form setup across tests. Every
//! factory starts from the built-in catalog.
#![allow(dead_code)]

use std::sync::Arc;

use chrono::{Local, TimeZone};

use crate::domain::Catalog;
use crate::state::converter::ConversionSummary;
use crate::state::{App, AppConfig, ConversionTab, ConverterState, Receipt, RecipientState};

// ============================================================================
// Mother Pattern Factories
// ============================================================================

pub struct ConverterStateMother;

impl ConverterStateMother {
    /// A fresh conversion screen with defaults.
    #[must_use]
    pub fn fresh() -> ConverterState {
        ConverterState::new(&Catalog::builtin())
    }

    /// A conversion screen with wallet and payout account chosen.
    #[must_use]
    pub fn ready() -> ConverterState {
        let mut state = Self::fresh();
        state.pay_from.select_id("metamask");
        state.pay_to.select_id("bank1");
        state
    }
}

pub struct ConversionSummaryMother;

impl ConversionSummaryMother {
    #[must_use]
    pub fn eth_to_ngn() -> ConversionSummary {
        ConversionSummary {
            tab: ConversionTab::CryptoToCash,
            pay_amount: "1.00".to_string(),
            pay_token: "Ethereum".to_string(),
            receive_amount: "1.00".to_string(),
            receive_currency: "NGN".to_string(),
            pay_from: "Metamask".to_string(),
            pay_to: "First Bank - ****1234".to_string(),
        }
    }
}

pub struct RecipientStateMother;

impl RecipientStateMother {
    /// A fresh recipient screen on the bank sub-step.
    #[must_use]
    pub fn fresh() -> RecipientState {
        RecipientState::new(&Catalog::builtin(), ConversionSummaryMother::eth_to_ngn())
    }

    #[must_use]
    pub fn with_bank(bank_id: &str) -> RecipientState {
        let mut state = Self::fresh();
        state.bank.select_id(bank_id);
        state
    }

    /// Bank sub-step with GTBank, a complete number and a verified name.
    #[must_use]
    pub fn verified() -> RecipientState {
        let mut state = Self::with_bank("gtbank");
        state.set_account_number("0123456789");
        state.complete_verification("ODUTUGA GBEKE");
        state
    }

    /// Contact sub-step reached from a verified bank sub-step.
    #[must_use]
    pub fn at_contact() -> RecipientState {
        let mut state = Self::verified();
        state.advance();
        state
    }
}

pub struct ReceiptMother;

impl ReceiptMother {
    #[must_use]
    pub fn sample() -> Receipt {
        Receipt {
            conversion: ConversionSummaryMother::eth_to_ngn(),
            bank: "GTBank".to_string(),
            account_number: "0123456789".to_string(),
            account_name: "ODUTUGA GBEKE".to_string(),
            email: "ada@example.com".to_string(),
            phone: "+234 803 - 123 - 4567".to_string(),
            submitted_at: Local
                .with_ymd_and_hms(2025, 1, 15, 9, 30, 0)
                .single()
                .unwrap_or_else(Local::now),
        }
    }
}

pub struct AppMother;

impl AppMother {
    /// An app on a fresh conversion screen with default timings.
    #[must_use]
    pub fn fresh() -> App {
        App::new(AppConfig::default(), Arc::new(Catalog::builtin()))
    }
}

// ============================================================================
// rstest Fixtures
// ============================================================================

use ratatui::{Terminal, backend::TestBackend};
use rstest::fixture;

#[fixture]
pub fn test_terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(100, 40)).expect("terminal creation should succeed")
}

#[fixture]
pub fn test_terminal_80x24() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(80, 24)).expect("terminal creation should succeed")
}

#[fixture]
pub fn test_app() -> App {
    AppMother::fresh()
}

/// Flattens a rendered buffer into newline-separated rows.
#[must_use]
pub fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area;
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}
