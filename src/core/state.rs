//! Calculator state value.
//!
//! A `CalculatorState` is an immutable snapshot; every reducer step derives
//! a fresh value instead of mutating the old one.

use super::operation::Operation;
use serde::{Deserialize, Serialize};

/// Snapshot of the calculator between two inputs.
///
/// The empty state (`CalculatorState::default()`) is the initial state and
/// the result of `Clear`.
///
/// # Example
///
/// ```rust
/// use calcpad::core::{CalculatorState, Operation, Phase};
///
/// let state = CalculatorState {
///     previous_operand: Some("2".to_string()),
///     current_operand: Some("3".to_string()),
///     operation: Some(Operation::Add),
///     overwrite: false,
/// };
///
/// assert_eq!(state.phase(), Phase::Pending);
/// assert!(!state.is_empty());
/// assert!(CalculatorState::empty().is_empty());
/// ```
#[derive(Clone, Default, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CalculatorState {
    /// Left operand of a pending operation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_operand: Option<String>,
    /// Operand being typed, or the last result
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_operand: Option<String>,
    /// Pending binary operator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<Operation>,
    /// Set right after an evaluation; the next digit replaces the result
    pub overwrite: bool,
}

impl CalculatorState {
    pub fn empty() -> Self {
        Self::default()
    }

    /// State showing only a current operand.
    pub fn with_current(operand: impl Into<String>) -> Self {
        Self {
            current_operand: Some(operand.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Coarse position of the state in the input cycle.
    pub fn phase(&self) -> Phase {
        if self.overwrite {
            return Phase::ShowingResult;
        }
        match (&self.previous_operand, &self.current_operand, &self.operation) {
            (None, None, None) => Phase::Empty,
            (Some(_), Some(_), Some(_)) => Phase::Pending,
            (_, None, Some(_)) => Phase::AwaitingOperand,
            _ => Phase::Entering,
        }
    }
}

/// Derived classification of a `CalculatorState`, used for diagnostics.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    /// Nothing entered
    Empty,
    /// Typing an operand with no complete expression yet
    Entering,
    /// Operator chosen, waiting for the right operand
    AwaitingOperand,
    /// Both operands and an operator present
    Pending,
    /// An evaluation result is displayed
    ShowingResult,
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Empty => "Empty",
            Self::Entering => "Entering",
            Self::AwaitingOperand => "AwaitingOperand",
            Self::Pending => "Pending",
            Self::ShowingResult => "ShowingResult",
        }
    }
}
