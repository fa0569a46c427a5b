//! Number formatting configuration.

use crate::format::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Display conventions for operands.
///
/// Defaults follow en-US: `,` groups thousands and `.` marks the fraction.
/// Every field is optional in TOML; missing fields keep their default.
///
/// # Example
///
/// ```rust
/// use calcpad::format::FormatConfig;
///
/// let config = FormatConfig::from_toml_str(
///     r#"
///     group_separator = "."
///     decimal_separator = ","
///     "#,
/// )
/// .unwrap();
///
/// assert_eq!(config.group_separator, '.');
/// assert_eq!(config.group_size, 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Separator inserted between digit groups of the integer part
    pub group_separator: char,
    /// Separator placed between integer and fractional parts
    pub decimal_separator: char,
    /// Number of digits per group
    pub group_size: usize,
    /// Whether the integer part is grouped at all
    pub use_grouping: bool,
    /// Display for `Infinity`; prefixed with `-` when negative
    pub infinity_symbol: String,
    /// Display for `NaN`
    pub nan_symbol: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            group_separator: ',',
            decimal_separator: '.',
            group_size: 3,
            use_grouping: true,
            infinity_symbol: "∞".to_string(),
            nan_symbol: "NaN".to_string(),
        }
    }
}

impl FormatConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: FormatConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a TOML config file.
    ///
    /// - If the file doesn't exist, returns `FormatConfig::default()`.
    /// - Otherwise parses and validates it.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "format config not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&content)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - `group_size` is non-zero
    /// - the two separators differ
    /// - neither separator is a digit or a sign
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.group_size == 0 {
            return Err(ConfigError::ValidationError {
                message: "group_size must be at least 1".to_string(),
            });
        }

        if self.group_separator == self.decimal_separator {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "group_separator and decimal_separator are both '{}'",
                    self.group_separator
                ),
            });
        }

        for (name, separator) in [
            ("group_separator", self.group_separator),
            ("decimal_separator", self.decimal_separator),
        ] {
            if separator.is_ascii_digit() || separator == '-' || separator == '+' {
                return Err(ConfigError::ValidationError {
                    message: format!("{name} '{separator}' would be read as part of a number"),
                });
            }
        }

        Ok(())
    }
}
