//! Guard predicates for reducer transitions.
//!
//! Guards are pure boolean functions over a `CalculatorState`. The reducer
//! consults them to decide whether an action is a no-op.

use super::digit::Digit;
use super::state::CalculatorState;

/// True when the state holds a complete expression: both operands and an
/// operator.
///
/// # Example
///
/// ```rust
/// use calcpad::core::{guard, CalculatorState, Operation};
///
/// let pending = CalculatorState {
///     previous_operand: Some("2".to_string()),
///     current_operand: Some("3".to_string()),
///     operation: Some(Operation::Add),
///     overwrite: false,
/// };
///
/// assert!(guard::is_evaluable(&pending));
/// assert!(!guard::is_evaluable(&CalculatorState::with_current("5")));
/// ```
pub fn is_evaluable(state: &CalculatorState) -> bool {
    state.operation.is_some() && state.current_operand.is_some() && state.previous_operand.is_some()
}

/// True when either operand is present, so an operator has something to
/// apply to.
pub fn has_operand(state: &CalculatorState) -> bool {
    state.current_operand.is_some() || state.previous_operand.is_some()
}

/// True when typing `digit` would only add a redundant leading zero.
pub fn is_redundant_zero(state: &CalculatorState, digit: Digit) -> bool {
    digit.is_zero() && state.current_operand.as_deref() == Some("0")
}

/// True when `digit` is a second decimal point.
pub fn is_duplicate_point(state: &CalculatorState, digit: Digit) -> bool {
    digit.is_point()
        && state
            .current_operand
            .as_deref()
            .is_some_and(|operand| operand.contains('.'))
}
