//! Operand display formatting.

use crate::core::CalculatorState;
use crate::format::config::FormatConfig;
use crate::format::error::ConfigError;
use serde::Serialize;

/// The two display lines of the calculator.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Screen {
    /// Previous operand followed by the pending operator
    pub previous: Option<String>,
    /// Current operand or last result
    pub current: Option<String>,
}

/// Converts operand strings into display strings.
///
/// A `Formatter` is built once from a validated [`FormatConfig`] and is
/// immutable afterwards; share it freely.
///
/// # Example
///
/// ```rust
/// use calcpad::format::Formatter;
///
/// let formatter = Formatter::en_us();
/// assert_eq!(formatter.format(Some("1234.5")), Some("1,234.5".to_string()));
/// assert_eq!(formatter.format(Some("1234567")), Some("1,234,567".to_string()));
/// assert_eq!(formatter.format(None), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Formatter {
    config: FormatConfig,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::en_us()
    }
}

impl Formatter {
    /// Build a formatter from a config, validating it first.
    pub fn new(config: FormatConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The en-US convention: `1,234.5`.
    pub fn en_us() -> Self {
        Self {
            config: FormatConfig::default(),
        }
    }

    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    /// Format an optional operand.
    ///
    /// `None` stays `None`. The integer part is grouped, the fractional part
    /// is appended verbatim. Input that is not a numeral (such as the empty
    /// string left by a failed evaluation) is returned unchanged.
    pub fn format(&self, operand: Option<&str>) -> Option<String> {
        operand.map(|operand| self.format_operand(operand))
    }

    /// Render both display lines for `state`.
    ///
    /// ```rust
    /// use calcpad::core::{CalculatorState, Operation};
    /// use calcpad::format::Formatter;
    ///
    /// let state = CalculatorState {
    ///     previous_operand: Some("1200".to_string()),
    ///     current_operand: Some("3.50".to_string()),
    ///     operation: Some(Operation::Multiply),
    ///     overwrite: false,
    /// };
    ///
    /// let screen = Formatter::en_us().render(&state);
    /// assert_eq!(screen.previous.as_deref(), Some("1,200 *"));
    /// assert_eq!(screen.current.as_deref(), Some("3.50"));
    /// ```
    pub fn render(&self, state: &CalculatorState) -> Screen {
        let previous = self.format(state.previous_operand.as_deref());
        let previous = match (previous, state.operation) {
            (Some(operand), Some(operation)) => Some(format!("{operand} {operation}")),
            (Some(operand), None) => Some(operand),
            (None, Some(operation)) => Some(format!(" {operation}")),
            (None, None) => None,
        };

        Screen {
            previous,
            current: self.format(state.current_operand.as_deref()),
        }
    }

    fn format_operand(&self, operand: &str) -> String {
        if let Some(symbol) = self.non_finite(operand) {
            return symbol;
        }

        let (integer, fraction) = match operand.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (operand, None),
        };

        let Some(grouped) = self.group_integer(integer, fraction.is_some()) else {
            return operand.to_string();
        };

        match fraction {
            Some(fraction) => format!("{grouped}{}{fraction}", self.config.decimal_separator),
            None => grouped,
        }
    }

    fn non_finite(&self, operand: &str) -> Option<String> {
        match operand {
            "Infinity" => Some(self.config.infinity_symbol.clone()),
            "-Infinity" => Some(format!("-{}", self.config.infinity_symbol)),
            "NaN" => Some(self.config.nan_symbol.clone()),
            _ => None,
        }
    }

    /// Group the digits of an integer part. Returns `None` when the part is
    /// not a plain (optionally signed) digit string.
    fn group_integer(&self, integer: &str, has_fraction: bool) -> Option<String> {
        let (sign, digits) = match integer.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", integer),
        };

        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        if digits.is_empty() {
            // ".5" displays as "0.5"; a bare sign or empty operand is left alone
            return (has_fraction && sign.is_empty()).then(|| "0".to_string());
        }

        let digits = digits.trim_start_matches('0');
        let digits = if digits.is_empty() { "0" } else { digits };

        let mut out = String::with_capacity(sign.len() + digits.len() * 2);
        out.push_str(sign);

        let size = self.config.group_size;
        for (index, c) in digits.chars().enumerate() {
            let remaining = digits.len() - index;
            if self.config.use_grouping && index > 0 && remaining % size == 0 {
                out.push(self.config.group_separator);
            }
            out.push(c);
        }

        Some(out)
    }
}
