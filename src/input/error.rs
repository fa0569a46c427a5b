//! Input decoding errors.

use std::sync::Arc;
use thiserror::Error;

/// Errors raised while turning raw input into an `Action`.
#[derive(Debug, Clone, Error)]
pub enum InputError {
    /// Digit payload is not `0`-`9` or `.`
    #[error("Invalid digit '{found}', expected 0-9 or '.'")]
    InvalidDigit { found: String },

    /// Operator symbol is not one of the supported operators
    #[error("Unknown operation '{symbol}', expected one of + - * ÷")]
    UnknownOperation { symbol: String },

    /// Keypad label does not map to any action
    #[error("Unknown key '{key}' at position {position}")]
    UnknownKey { key: String, position: usize },

    /// JSON action message has an unknown kind or a bad payload
    #[error("Malformed action message: {0}")]
    MalformedAction(#[source] Arc<serde_json::Error>),
}
