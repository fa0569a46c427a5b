//! Builder for constructing formatters.

use crate::format::config::FormatConfig;
use crate::format::error::ConfigError;
use crate::format::formatter::Formatter;

/// Builder for constructing a [`Formatter`] with a fluent API.
///
/// Starts from the en-US defaults; `build()` validates the result.
///
/// # Example
///
/// ```rust
/// use calcpad::format::FormatterBuilder;
///
/// let formatter = FormatterBuilder::new()
///     .group_separator(' ')
///     .decimal_separator(',')
///     .build()
///     .unwrap();
///
/// assert_eq!(formatter.format(Some("98765.4")), Some("98 765,4".to_string()));
/// ```
#[derive(Clone, Debug, Default)]
pub struct FormatterBuilder {
    config: FormatConfig,
}

impl FormatterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every setting with a loaded config.
    pub fn config(mut self, config: FormatConfig) -> Self {
        self.config = config;
        self
    }

    pub fn group_separator(mut self, separator: char) -> Self {
        self.config.group_separator = separator;
        self
    }

    pub fn decimal_separator(mut self, separator: char) -> Self {
        self.config.decimal_separator = separator;
        self
    }

    pub fn group_size(mut self, size: usize) -> Self {
        self.config.group_size = size;
        self
    }

    /// Enable or disable digit grouping.
    pub fn grouping(mut self, enabled: bool) -> Self {
        self.config.use_grouping = enabled;
        self
    }

    pub fn infinity_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.config.infinity_symbol = symbol.into();
        self
    }

    pub fn nan_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.config.nan_symbol = symbol.into();
        self
    }

    /// Build the formatter.
    /// Returns an error if the accumulated config fails validation.
    pub fn build(self) -> Result<Formatter, ConfigError> {
        Formatter::new(self.config)
    }
}
