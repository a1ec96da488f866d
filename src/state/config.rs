//! Application configuration with persistence.
//!
//! The configuration file is stored at:
//! - Linux: `~/.config/novacrust/config.json`
//! - macOS: `~/Library/Application Support/novacrust/config.json`
//! - Windows: `%APPDATA%/novacrust/config.json`
//!
//! Only timings and presentation knobs live here. Form data is never
//! persisted.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CONVERSION_DELAY_MS, DEFAULT_SUBMISSION_DELAY_MS, DEFAULT_VERIFICATION_DELAY_MS,
    VERIFIED_ACCOUNT_NAME,
};
use crate::domain::CheckoutError;

// ============================================================================
// Constants
// ============================================================================

/// Application name used for configuration directory.
const APP_NAME: &str = "novacrust";

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

// ============================================================================
// AppConfig
// ============================================================================

/// Application configuration structure for persistence.
///
/// Missing fields fall back to their defaults, so a partial file is valid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Delay of the simulated conversion, in milliseconds.
    pub conversion_delay_ms: u64,
    /// Delay of the simulated account lookup, in milliseconds.
    pub verification_delay_ms: u64,
    /// Delay of the simulated recipient submission, in milliseconds.
    pub submission_delay_ms: u64,
    /// Name the simulated account lookup resolves to.
    pub verified_account_name: String,
    /// Whether mouse capture is enabled.
    pub mouse: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            conversion_delay_ms: DEFAULT_CONVERSION_DELAY_MS,
            verification_delay_ms: DEFAULT_VERIFICATION_DELAY_MS,
            submission_delay_ms: DEFAULT_SUBMISSION_DELAY_MS,
            verified_account_name: VERIFIED_ACCOUNT_NAME.to_string(),
            mouse: true,
        }
    }
}

impl AppConfig {
    /// Returns the path to the configuration file. Nothing is created on
    /// disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, CheckoutError> {
        let base = dirs::config_dir().ok_or_else(|| {
            CheckoutError::config(
                "could not determine config directory (XDG_CONFIG_HOME, ~/Library/Application Support or %APPDATA%)",
            )
        })?;
        Ok(config_path_in(&base))
    }

    /// Loads the configuration from the default location.
    ///
    /// A missing file silently yields defaults; an unreadable or invalid one
    /// yields defaults with a warning.
    #[must_use]
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(config) => config,
            Err(CheckoutError::ConfigNotFound { path }) => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Self::default()
            }
            Err(err) => {
                tracing::warn!("config load failed, using defaults: {err}");
                Self::default()
            }
        }
    }

    /// Attempts to load the configuration from the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be determined, the file is
    /// missing or unreadable, or its JSON is invalid.
    pub fn try_load() -> Result<Self, CheckoutError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Loads the configuration from an explicit path.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::ConfigNotFound`] if the file does not exist,
    /// or an I/O or JSON error if it cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, CheckoutError> {
        if !path.exists() {
            return Err(CheckoutError::config_not_found(path));
        }
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Saves the configuration to the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be determined or the file cannot
    /// be written.
    pub fn save(&self) -> Result<PathBuf, CheckoutError> {
        let path = Self::config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Saves the configuration to an explicit path, creating missing parent
    /// directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized or written.
    pub fn save_to(&self, path: &Path) -> Result<(), CheckoutError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    #[must_use]
    pub const fn conversion_delay(&self) -> Duration {
        Duration::from_millis(self.conversion_delay_ms)
    }

    #[must_use]
    pub const fn verification_delay(&self) -> Duration {
        Duration::from_millis(self.verification_delay_ms)
    }

    #[must_use]
    pub const fn submission_delay(&self) -> Duration {
        Duration::from_millis(self.submission_delay_ms)
    }
}

fn config_path_in(base: &Path) -> PathBuf {
    base.join(APP_NAME).join(CONFIG_FILE)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;
    use tempfile::TempDir;

    #[fixture]
    fn temp_dir() -> TempDir {
        TempDir::new().expect("temp dir")
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.conversion_delay(), Duration::from_millis(1500));
        assert_eq!(config.verification_delay(), Duration::from_secs(1));
        assert_eq!(config.submission_delay(), Duration::from_secs(1));
        assert_eq!(config.verified_account_name, "ODUTUGA GBEKE");
        assert!(config.mouse);
    }

    #[test]
    fn test_partial_config_uses_defaults_for_missing_fields() {
        let config: AppConfig =
            serde_json::from_str(r#"{"verification_delay_ms": 250, "mouse": false}"#).unwrap();

        assert_eq!(config.verification_delay_ms, 250);
        assert!(!config.mouse);
        assert_eq!(config.conversion_delay_ms, 1500);
        assert_eq!(config.verified_account_name, "ODUTUGA GBEKE");
    }

    #[rstest]
    fn test_save_then_load_from_path(temp_dir: TempDir) {
        let path = temp_dir.path().join("config.json");
        let config = AppConfig {
            conversion_delay_ms: 10,
            verified_account_name: "ADA LOVELACE".to_string(),
            ..AppConfig::default()
        };

        config.save_to(&path).unwrap();
        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[rstest]
    fn test_config_path_does_not_touch_disk(temp_dir: TempDir) {
        let path = config_path_in(temp_dir.path());

        assert_eq!(path, temp_dir.path().join("novacrust").join("config.json"));
        assert!(!temp_dir.path().join("novacrust").exists());
    }

    #[rstest]
    fn test_save_to_creates_parent_directory(temp_dir: TempDir) {
        let path = config_path_in(temp_dir.path());

        AppConfig::default().save_to(&path).unwrap();
        assert_eq!(AppConfig::load_from(&path).unwrap(), AppConfig::default());
    }

    #[rstest]
    fn test_load_from_missing_file(temp_dir: TempDir) {
        let path = temp_dir.path().join("absent.json");
        let err = AppConfig::load_from(&path).unwrap_err();

        assert!(matches!(err, CheckoutError::ConfigNotFound { .. }));
        assert!(err.to_string().contains("absent.json"));
    }

    #[rstest]
    fn test_load_from_invalid_json(temp_dir: TempDir) {
        let path = temp_dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, CheckoutError::Json(_)));
    }

    #[test]
    fn test_json_format() {
        let json = serde_json::to_string_pretty(&AppConfig::default()).unwrap();
        assert!(json.contains("conversion_delay_ms"));
        assert!(json.contains("verified_account_name"));
    }
}
