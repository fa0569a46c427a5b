//! Pure state transition function.

use crate::core::{guard, Action, CalculatorState, Digit, Operation};
use crate::engine::evaluator::evaluate_state;

/// Apply `action` to `state`, returning the successor state.
///
/// Total and pure: every pair yields a state, the input is never mutated,
/// and no-op transitions return a state equal to the input.
///
/// # Example
///
/// ```rust
/// use calcpad::core::{Action, CalculatorState};
/// use calcpad::engine::reduce;
///
/// let actions = [
///     Action::digit('7').unwrap(),
///     Action::operation("+").unwrap(),
///     Action::digit('3').unwrap(),
///     Action::Evaluate,
/// ];
///
/// let state = actions
///     .iter()
///     .fold(CalculatorState::empty(), |state, action| reduce(&state, action));
///
/// assert_eq!(state.current_operand.as_deref(), Some("10"));
/// assert!(state.overwrite);
/// assert_eq!(state.previous_operand, None);
/// assert_eq!(state.operation, None);
/// ```
pub fn reduce(state: &CalculatorState, action: &Action) -> CalculatorState {
    match *action {
        Action::AddDigit { digit } => add_digit(state, digit),
        Action::Clear => CalculatorState::empty(),
        Action::ChooseOperation { operation } => choose_operation(state, operation),
        Action::DeleteDigit => delete_digit(state),
        Action::Evaluate => evaluate_pending(state),
    }
}

fn add_digit(state: &CalculatorState, digit: Digit) -> CalculatorState {
    if state.overwrite {
        return CalculatorState {
            current_operand: Some(digit.to_string()),
            overwrite: false,
            ..state.clone()
        };
    }

    if guard::is_redundant_zero(state, digit) || guard::is_duplicate_point(state, digit) {
        return state.clone();
    }

    let mut operand = state.current_operand.clone().unwrap_or_default();
    operand.push(digit.as_char());
    CalculatorState {
        current_operand: Some(operand),
        ..state.clone()
    }
}

fn choose_operation(state: &CalculatorState, operation: Operation) -> CalculatorState {
    if !guard::has_operand(state) {
        return state.clone();
    }

    if state.current_operand.is_none() {
        return CalculatorState {
            operation: Some(operation),
            ..state.clone()
        };
    }

    if state.previous_operand.is_none() {
        return CalculatorState {
            previous_operand: state.current_operand.clone(),
            current_operand: None,
            operation: Some(operation),
            ..state.clone()
        };
    }

    // Both operands present: resolve the pending calculation, then chain.
    // Without an operator there is nothing to resolve, which evaluates to
    // the empty sentinel.
    let previous = evaluate_state(state).unwrap_or_default();
    CalculatorState {
        previous_operand: Some(previous),
        current_operand: None,
        operation: Some(operation),
        ..state.clone()
    }
}

fn delete_digit(state: &CalculatorState) -> CalculatorState {
    if state.overwrite {
        return CalculatorState {
            current_operand: None,
            overwrite: false,
            ..state.clone()
        };
    }

    let Some(operand) = state.current_operand.as_deref() else {
        return state.clone();
    };

    let mut chars = operand.chars();
    chars.next_back();
    let remaining = chars.as_str();

    CalculatorState {
        current_operand: (!remaining.is_empty()).then(|| remaining.to_string()),
        ..state.clone()
    }
}

fn evaluate_pending(state: &CalculatorState) -> CalculatorState {
    let Some(result) = evaluate_state(state) else {
        return state.clone();
    };

    CalculatorState {
        previous_operand: None,
        current_operand: Some(result),
        operation: None,
        overwrite: true,
    }
}
