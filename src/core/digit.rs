//! Digit key payloads.

use crate::input::InputError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single digit key: `0` through `9`, or the decimal point.
///
/// The only way to build a `Digit` is through validation, so the reducer
/// never sees a malformed payload.
///
/// # Example
///
/// ```rust
/// use calcpad::core::Digit;
///
/// let seven = Digit::new('7').unwrap();
/// assert_eq!(seven.as_char(), '7');
/// assert!(Digit::POINT.is_point());
/// assert!(Digit::new('a').is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Digit(char);

impl Digit {
    pub const ZERO: Digit = Digit('0');
    pub const POINT: Digit = Digit('.');

    /// Validate a digit character.
    pub fn new(c: char) -> Result<Self, InputError> {
        if c.is_ascii_digit() || c == '.' {
            Ok(Digit(c))
        } else {
            Err(InputError::InvalidDigit { found: c.to_string() })
        }
    }

    pub fn as_char(self) -> char {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == '0'
    }

    pub fn is_point(self) -> bool {
        self.0 == '.'
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<char> for Digit {
    type Error = InputError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Digit::new(c)
    }
}

impl TryFrom<&str> for Digit {
    type Error = InputError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Digit::new(c),
            _ => Err(InputError::InvalidDigit {
                found: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Digit {
    type Error = InputError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Digit::try_from(s.as_str())
    }
}

impl From<Digit> for String {
    fn from(digit: Digit) -> Self {
        digit.0.to_string()
    }
}
