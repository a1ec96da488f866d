//! Normalized picker options and icon references.
//!
//! Every picker in the checkout flow works on [`DropdownOption`]s. Catalog
//! entries project into that shape through [`Selectable`], so a single
//! selector implementation serves tokens, currencies, wallets, banks,
//! payout accounts and country codes alike.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ============================================================================
// Icon Reference
// ============================================================================

/// Prefixes that mark an icon reference as an image resource.
const IMAGE_PREFIXES: [&str; 5] = ["/", "./", "../", "http://", "https://"];

/// An icon attached to an option: either an image resource or an inline glyph.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IconRef {
    /// Path-like reference to an image asset (e.g. `/ETH.png`).
    Image(String),
    /// Inline glyph such as a flag emoji.
    Glyph(String),
}

impl IconRef {
    /// Classifies a raw icon string.
    ///
    /// Anything starting with a path-like prefix is an image; everything else
    /// is rendered verbatim as a glyph.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if IMAGE_PREFIXES.iter().any(|prefix| raw.starts_with(prefix)) {
            Self::Image(raw.to_string())
        } else {
            Self::Glyph(raw.to_string())
        }
    }

    /// Returns the raw reference string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Image(path) => path,
            Self::Glyph(glyph) => glyph,
        }
    }

    /// Returns `true` for image references.
    #[must_use]
    pub const fn is_image(&self) -> bool {
        matches!(self, Self::Image(_))
    }
}

impl From<&str> for IconRef {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl fmt::Display for IconRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for IconRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for IconRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

// ============================================================================
// Dropdown Option
// ============================================================================

/// The normalized shape every picker displays and filters on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownOption {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sublabel: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<IconRef>,
    /// Display tint as a `#RRGGBB` string, used for image icons.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl DropdownOption {
    /// Creates an option with only an id and label.
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            sublabel: None,
            icon: None,
            color: None,
        }
    }

    #[must_use]
    pub fn with_sublabel(mut self, sublabel: Option<impl Into<String>>) -> Self {
        self.sublabel = sublabel.map(Into::into);
        self
    }

    #[must_use]
    pub fn with_icon(mut self, icon: IconRef) -> Self {
        self.icon = Some(icon);
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Case-insensitive substring match against label and sublabel.
    ///
    /// An empty query matches every option.
    #[must_use]
    pub fn matches_query(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let needle = query.to_lowercase();
        self.label.to_lowercase().contains(&needle)
            || self
                .sublabel
                .as_deref()
                .is_some_and(|sublabel| sublabel.to_lowercase().contains(&needle))
    }
}

/// Projection of a catalog entry into a [`DropdownOption`].
pub trait Selectable {
    fn to_option(&self) -> DropdownOption;
}

// ============================================================================
// Tests
// ============================================================================
