//! Calculator input actions.

use super::digit::Digit;
use super::operation::Operation;
use crate::input::InputError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// The closed set of inputs the reducer understands.
///
/// Serialized adjacently tagged so a shell can send plain action messages:
///
/// ```rust
/// use calcpad::core::{Action, Digit};
///
/// let action = Action::from_json(r#"{"type":"add-digit","payload":{"digit":"7"}}"#).unwrap();
/// assert_eq!(action, Action::AddDigit { digit: Digit::new('7').unwrap() });
///
/// let clear = Action::from_json(r#"{"type":"clear"}"#).unwrap();
/// assert_eq!(clear, Action::Clear);
///
/// assert!(Action::from_json(r#"{"type":"square-root"}"#).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "kebab-case")]
pub enum Action {
    /// Append a digit or decimal point to the current operand
    AddDigit { digit: Digit },

    /// Reset to the empty state
    Clear,

    /// Select a binary operator, resolving any pending calculation first
    ChooseOperation { operation: Operation },

    /// Remove the last character of the current operand
    DeleteDigit,

    /// Resolve the pending calculation
    Evaluate,
}

impl Action {
    /// Stable kind name, matching the serialized `type` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AddDigit { .. } => "add-digit",
            Self::Clear => "clear",
            Self::ChooseOperation { .. } => "choose-operation",
            Self::DeleteDigit => "delete-digit",
            Self::Evaluate => "evaluate",
        }
    }

    /// Build an `AddDigit` action from a raw character.
    pub fn digit(c: char) -> Result<Self, InputError> {
        Ok(Self::AddDigit {
            digit: Digit::new(c)?,
        })
    }

    /// Build a `ChooseOperation` action from an operator symbol.
    pub fn operation(symbol: &str) -> Result<Self, InputError> {
        Ok(Self::ChooseOperation {
            operation: Operation::from_symbol(symbol)?,
        })
    }

    /// Decode one JSON action message.
    ///
    /// Unknown action kinds and malformed payloads fail here, before
    /// anything reaches the reducer.
    pub fn from_json(message: &str) -> Result<Self, InputError> {
        serde_json::from_str(message).map_err(|err| InputError::MalformedAction(Arc::new(err)))
    }
}
