//! Error types for checkout domain operations.
//!
//! Form validation never produces these: field problems are collected into
//! [`FieldErrors`](super::validation::FieldErrors) and shown inline. This type
//! covers the fallible plumbing around the form (configuration files and
//! catalog export).

use std::path::PathBuf;

use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Custom error type for checkout plumbing.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Filesystem errors while reading or writing configuration.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration could not be located or is unusable.
    #[error("Config error: {message}")]
    Config {
        /// Description of what went wrong.
        message: String,
    },

    /// An explicitly requested configuration file does not exist.
    #[error("config file '{}' not found", path.display())]
    ConfigNotFound {
        /// The path that was requested.
        path: PathBuf,
    },
}

impl CheckoutError {
    /// Create a new config error with the given message.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new not-found error for a config path.
    #[must_use]
    pub fn config_not_found(path: impl Into<PathBuf>) -> Self {
        Self::ConfigNotFound { path: path.into() }
    }

    /// Convert to a `color_eyre::Report` at the binary boundary.
    #[must_use = "this converts the error into a Report for display"]
    pub fn into_report(self) -> color_eyre::Report {
        color_eyre::eyre::eyre!("{}", self)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkout_error_display() {
        let config_err = CheckoutError::config("no home directory");
        assert_eq!(format!("{config_err}"), "Config error: no home directory");

        let missing = CheckoutError::config_not_found("/tmp/missing.json");
        assert_eq!(
            format!("{missing}"),
            "config file '/tmp/missing.json' not found"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let parse_failure = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: CheckoutError = parse_failure.into();
        assert!(matches!(err, CheckoutError::Json(_)));
        assert!(err.to_string().starts_with("JSON error:"));
    }

    #[test]
    fn test_into_report_preserves_message() {
        let report = CheckoutError::config("bad delay").into_report();
        assert_eq!(report.to_string(), "Config error: bad delay");
    }
}
