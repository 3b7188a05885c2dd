//! Engine configuration.
//!
//! [`EngineConfig`] holds the solar-date windows scanned for each lunar
//! holiday and the policy applied when the lunisolar oracle fails.  The
//! configuration is an ordinary value owned by the engine; there is no
//! process-wide instance.
//!
//! Every field has a default, so an empty TOML document is a valid
//! configuration:
//!
//! ```toml
//! on_oracle_failure = "omit"
//!
//! [chuseok]
//! start_month = 8
//! start_day = 15
//! max_days = 70
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::ensure;
use crate::errors::{Error, Result};

/// A bounded solar-date window scanned day by day for a lunar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScanWindow {
    /// Month (1–12) of the first solar day examined.
    pub start_month: u8,
    /// Day of month (1–31) of the first solar day examined.
    pub start_day: u8,
    /// Number of consecutive solar days examined.
    pub max_days: u32,
}

impl ScanWindow {
    /// Create a window starting on `start_month`/`start_day` and spanning
    /// `max_days` days.
    pub const fn new(start_month: u8, start_day: u8, max_days: u32) -> Self {
        Self {
            start_month,
            start_day,
            max_days,
        }
    }

    /// Check the window is well formed.
    ///
    /// Whether `start_day` exists in `start_month` for a given year is only
    /// known once the year is fixed; that is checked when the window is used.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            (1..=12).contains(&self.start_month),
            "scan window start month {} out of range [1, 12]",
            self.start_month
        );
        ensure!(
            (1..=31).contains(&self.start_day),
            "scan window start day {} out of range [1, 31]",
            self.start_day
        );
        ensure!(
            (1..=366).contains(&self.max_days),
            "scan window length {} out of range [1, 366]",
            self.max_days
        );
        Ok(())
    }
}

/// What the engine does when the lunisolar oracle cannot convert a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OracleFailurePolicy {
    /// Log a warning and leave the affected holiday out of the year.
    #[default]
    Omit,
    /// Propagate the conversion error to the caller.
    Fail,
}

/// Configuration for the holiday engine.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Window scanned for lunar 1/1 (Lunar New Year).
    pub lunar_new_year: ScanWindow,
    /// Window scanned for lunar 4/8 (Buddha's Birthday).
    pub buddhas_birthday: ScanWindow,
    /// Window scanned for lunar 8/15 (Chuseok).
    pub chuseok: ScanWindow,
    /// Policy applied when the oracle fails.
    pub on_oracle_failure: OracleFailurePolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            lunar_new_year: ScanWindow::new(1, 15, 60),
            buddhas_birthday: ScanWindow::new(4, 1, 60),
            chuseok: ScanWindow::new(8, 15, 70),
            on_oracle_failure: OracleFailurePolicy::Omit,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a configuration from a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: EngineConfig =
            toml::from_str(source).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
        let config = Self::from_toml_str(&source)?;
        debug!(path = %path.display(), ?config, "loaded engine config");
        Ok(config)
    }

    /// Validate every scan window.
    pub fn validate(&self) -> Result<()> {
        self.lunar_new_year.validate()?;
        self.buddhas_birthday.validate()?;
        self.chuseok.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let config = EngineConfig::from_toml_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.chuseok, ScanWindow::new(8, 15, 70));
    }

    #[test]
    fn partial_override() {
        let config = EngineConfig::from_toml_str(
            r#"
            on_oracle_failure = "fail"

            [buddhas_birthday]
            start_month = 3
            start_day = 25
            max_days = 70
            "#,
        )
        .unwrap();
        assert_eq!(config.on_oracle_failure, OracleFailurePolicy::Fail);
        assert_eq!(config.buddhas_birthday, ScanWindow::new(3, 25, 70));
        assert_eq!(config.lunar_new_year, ScanWindow::new(1, 15, 60));
    }

    #[test]
    fn rejects_bad_window() {
        let err = EngineConfig::from_toml_str(
            r#"
            [chuseok]
            start_month = 13
            start_day = 1
            max_days = 70
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Precondition(_)));

        assert!(ScanWindow::new(8, 15, 0).validate().is_err());
        assert!(ScanWindow::new(8, 0, 10).validate().is_err());
    }

    #[test]
    fn rejects_unknown_keys_and_syntax() {
        assert!(matches!(
            EngineConfig::from_toml_str("lunar_newyear = 3"),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            EngineConfig::from_toml_str("on_oracle_failure = \"retry\""),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn missing_file_is_config_error() {
        let err = EngineConfig::from_path("/nonexistent/church-calendar.toml").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
