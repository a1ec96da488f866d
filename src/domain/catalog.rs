//! Static option catalogs for the checkout flow.
//!
//! The catalogs are immutable configuration: built once at startup by
//! [`Catalog::builtin`] and shared behind an `Arc` for the lifetime of the
//! process.

use serde::Serialize;

use super::option::{DropdownOption, IconRef, Selectable};

/// Tint used for fiat currencies, which carry no brand color of their own.
pub const FIAT_COLOR: &str = "#4A5568";

// ============================================================================
// Catalog Entry Types
// ============================================================================

/// A crypto asset that can be paid in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CryptoToken {
    pub id: String,
    pub symbol: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
    pub icon: IconRef,
    pub color: String,
}

/// A fiat currency that can be received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FiatCurrency {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub icon: IconRef,
}

/// A wallet the customer pays from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WalletOption {
    pub id: String,
    pub name: String,
    pub icon: IconRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A recipient bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BankOption {
    pub id: String,
    pub name: String,
}

/// A saved payout account on the conversion screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayToOption {
    pub id: String,
    pub label: String,
}

/// A phone country code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryCode {
    pub code: String,
    pub dial_code: String,
    pub flag: IconRef,
}

// ============================================================================
// Picker Projections
// ============================================================================

impl Selectable for CryptoToken {
    fn to_option(&self) -> DropdownOption {
        DropdownOption::new(&self.id, &self.symbol)
            .with_sublabel(Some(&self.name))
            .with_icon(self.icon.clone())
            .with_color(&self.color)
    }
}

impl Selectable for FiatCurrency {
    fn to_option(&self) -> DropdownOption {
        DropdownOption::new(&self.id, &self.symbol)
            .with_sublabel(Some(&self.name))
            .with_icon(self.icon.clone())
            .with_color(FIAT_COLOR)
    }
}

impl Selectable for WalletOption {
    fn to_option(&self) -> DropdownOption {
        DropdownOption::new(&self.id, &self.name)
            .with_sublabel(self.description.as_ref())
            .with_icon(self.icon.clone())
    }
}

impl Selectable for BankOption {
    fn to_option(&self) -> DropdownOption {
        DropdownOption::new(&self.id, &self.name)
    }
}

impl Selectable for PayToOption {
    fn to_option(&self) -> DropdownOption {
        DropdownOption::new(&self.id, &self.label)
    }
}

impl Selectable for CountryCode {
    fn to_option(&self) -> DropdownOption {
        DropdownOption::new(&self.code, &self.dial_code)
            .with_sublabel(Some(&self.code))
            .with_icon(self.flag.clone())
    }
}

// ============================================================================
// Catalog
// ============================================================================

/// All option lists offered by the checkout flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    pub tokens: Vec<CryptoToken>,
    pub fiat_currencies: Vec<FiatCurrency>,
    pub wallets: Vec<WalletOption>,
    pub banks: Vec<BankOption>,
    pub pay_to: Vec<PayToOption>,
    pub country_codes: Vec<CountryCode>,
}

impl Catalog {
    /// Builds the built-in mock catalog.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            tokens: vec![
                token("eth", "ETH", "Ethereum", None, "/ETH.png", "#627EEA"),
                token(
                    "usdt-celo",
                    "USDT",
                    "USDT - CELO",
                    Some("CELO"),
                    "/CRYPTO1.png",
                    "#26A17B",
                ),
                token(
                    "usdt-ton",
                    "USDT",
                    "USDT - TON",
                    Some("TON"),
                    "/CRYPTO1.png",
                    "#26A17B",
                ),
                token(
                    "usdt-bnb",
                    "USDT",
                    "USDT - BNB",
                    Some("BNB"),
                    "/BNB.png",
                    "#26A17B",
                ),
            ],
            fiat_currencies: vec![
                fiat("ngn", "NGN", "Nigerian Naira"),
                fiat("usd", "USD", "US Dollar"),
                fiat("gbp", "GBP", "British Pound"),
                fiat("eur", "EUR", "Euro"),
            ],
            wallets: vec![
                wallet("metamask", "Metamask", "/METAMASK.png", None),
                wallet("rainbow", "Rainbow", "/RAINBOW.png", None),
                wallet("walletconnect", "WalletConnect", "/WATERFLOW.png", None),
                wallet(
                    "other",
                    "Other Crypto Wallets",
                    "/Wallet.png",
                    Some("Binance, Coinbase, Bybit etc"),
                ),
            ],
            banks: [
                ("first-bank", "First Bank"),
                ("gtbank", "GTBank"),
                ("access", "Access Bank"),
                ("zenith", "Zenith Bank"),
                ("uba", "UBA"),
                ("kuda", "Kuda Bank"),
                ("opay", "OPay"),
            ]
            .into_iter()
            .map(|(id, name)| BankOption {
                id: id.to_string(),
                name: name.to_string(),
            })
            .collect(),
            pay_to: [
                ("bank1", "First Bank - ****1234"),
                ("bank2", "GTBank - ****5678"),
                ("bank3", "Access Bank - ****9012"),
            ]
            .into_iter()
            .map(|(id, label)| PayToOption {
                id: id.to_string(),
                label: label.to_string(),
            })
            .collect(),
            country_codes: [
                ("NG", "+234", "/NIG.png"),
                ("US", "+1", "🇺🇸"),
                ("GB", "+44", "🇬🇧"),
                ("GH", "+233", "🇬🇭"),
                ("KE", "+254", "🇰🇪"),
                ("ZA", "+27", "🇿🇦"),
            ]
            .into_iter()
            .map(|(code, dial_code, flag)| CountryCode {
                code: code.to_string(),
                dial_code: dial_code.to_string(),
                flag: IconRef::parse(flag),
            })
            .collect(),
        }
    }

    #[cfg(test)]
    pub fn token(&self, id: &str) -> Option<&CryptoToken> {
        self.tokens.iter().find(|t| t.id == id)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Projects a catalog list into picker options.
#[must_use]
pub fn to_options<T: Selectable>(items: &[T]) -> Vec<DropdownOption> {
    items.iter().map(Selectable::to_option).collect()
}

fn token(
    id: &str,
    symbol: &str,
    name: &str,
    network: Option<&str>,
    icon: &str,
    color: &str,
) -> CryptoToken {
    CryptoToken {
        id: id.to_string(),
        symbol: symbol.to_string(),
        name: name.to_string(),
        network: network.map(str::to_string),
        icon: IconRef::parse(icon),
        color: color.to_string(),
    }
}

fn fiat(id: &str, symbol: &str, name: &str) -> FiatCurrency {
    FiatCurrency {
        id: id.to_string(),
        symbol: symbol.to_string(),
        name: name.to_string(),
        icon: IconRef::parse("/NIG.png"),
    }
}

fn wallet(id: &str, name: &str, icon: &str, description: Option<&str>) -> WalletOption {
    WalletOption {
        id: id.to_string(),
        name: name.to_string(),
        icon: IconRef::parse(icon),
        description: description.map(str::to_string),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_ids_are_unique_per_list() {
        let catalog = Catalog::builtin();

        fn assert_unique<'a>(name: &str, ids: impl Iterator<Item = &'a str>) {
            let mut seen = HashSet::new();
            for id in ids {
                assert!(seen.insert(id), "duplicate id '{id}' in {name}");
            }
        }

        assert_unique("tokens", catalog.tokens.iter().map(|t| t.id.as_str()));
        assert_unique(
            "fiat",
            catalog.fiat_currencies.iter().map(|f| f.id.as_str()),
        );
        assert_unique("wallets", catalog.wallets.iter().map(|w| w.id.as_str()));
        assert_unique("banks", catalog.banks.iter().map(|b| b.id.as_str()));
        assert_unique("pay_to", catalog.pay_to.iter().map(|p| p.id.as_str()));
        assert_unique(
            "country_codes",
            catalog.country_codes.iter().map(|c| c.code.as_str()),
        );
    }

    #[test]
    fn test_builtin_catalog_contents() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.tokens.len(), 4);
        assert_eq!(catalog.fiat_currencies.len(), 4);
        assert_eq!(catalog.wallets.len(), 4);
        assert_eq!(catalog.banks.len(), 7);
        assert_eq!(catalog.pay_to.len(), 3);
        assert_eq!(catalog.country_codes.len(), 6);

        assert_eq!(catalog.tokens[0].symbol, "ETH");
        assert_eq!(catalog.fiat_currencies[0].symbol, "NGN");
        assert_eq!(catalog.country_codes[0].dial_code, "+234");
        assert!(catalog.country_codes[0].flag.is_image());
        assert!(!catalog.country_codes[1].flag.is_image());

        let usdt_ton = catalog.token("usdt-ton").unwrap();
        assert_eq!(usdt_ton.network.as_deref(), Some("TON"));
        assert!(catalog.token("btc").is_none());
    }

    #[test]
    fn test_projections_feed_label_and_sublabel() {
        let catalog = Catalog::builtin();

        let eth = catalog.tokens[0].to_option();
        assert_eq!(eth.label, "ETH");
        assert_eq!(eth.sublabel.as_deref(), Some("Ethereum"));
        assert_eq!(eth.color.as_deref(), Some("#627EEA"));

        let other_wallet = catalog.wallets[3].to_option();
        assert_eq!(other_wallet.label, "Other Crypto Wallets");
        assert_eq!(
            other_wallet.sublabel.as_deref(),
            Some("Binance, Coinbase, Bybit etc")
        );
        assert!(catalog.wallets[0].to_option().sublabel.is_none());

        let us = catalog.country_codes[1].to_option();
        assert_eq!(us.id, "US");
        assert_eq!(us.label, "+1");

        let options = to_options(&catalog.banks);
        assert_eq!(options.len(), 7);
        assert_eq!(options[1].label, "GTBank");
    }

    #[test]
    fn test_catalog_serializes_icons_as_strings() {
        let json = serde_json::to_value(Catalog::builtin()).unwrap();
        assert_eq!(json["tokens"][0]["icon"], "/ETH.png");
        assert_eq!(json["country_codes"][1]["flag"], "🇺🇸");
        assert!(json["tokens"][0].get("network").is_none());
    }
}
