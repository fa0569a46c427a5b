//! Binary arithmetic operators.

use crate::input::InputError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four binary operators a calculator key can select.
///
/// Serialized as its display symbol (`+`, `-`, `*`, `÷`).
///
/// # Example
///
/// ```rust
/// use calcpad::core::Operation;
///
/// let op = Operation::from_symbol("÷").unwrap();
/// assert_eq!(op, Operation::Divide);
/// assert_eq!(op.apply(9.0, 3.0), 3.0);
/// assert_eq!(op.symbol(), "÷");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Operation {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "÷")]
    Divide,
}

impl Operation {
    /// All operators in keypad order.
    pub const ALL: [Operation; 4] = [
        Operation::Divide,
        Operation::Multiply,
        Operation::Add,
        Operation::Subtract,
    ];

    /// Display symbol shown next to the previous operand.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "÷",
        }
    }

    /// Parse an operator from its symbol.
    ///
    /// Accepts the four display symbols plus the keyboard aliases `/` for
    /// division and `x`/`×` for multiplication.
    pub fn from_symbol(symbol: &str) -> Result<Self, InputError> {
        match symbol {
            "+" => Ok(Self::Add),
            "-" => Ok(Self::Subtract),
            "*" | "x" | "×" => Ok(Self::Multiply),
            "÷" | "/" => Ok(Self::Divide),
            other => Err(InputError::UnknownOperation {
                symbol: other.to_string(),
            }),
        }
    }

    /// Apply the operator with IEEE-754 semantics.
    ///
    /// Division by zero is not special-cased and yields a non-finite value.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operation {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s)
    }
}
