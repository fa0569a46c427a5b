//! Single-value state store driven by the reducer.

use crate::core::{Action, CalculatorState};
use crate::engine::reducer::reduce;
use crate::format::{Formatter, Screen};
use crate::input::{keypad, InputError};

/// Calculator that owns the current state and applies actions to it.
///
/// Holds exactly one state; previous states are discarded. The shell calls
/// [`dispatch`](Calculator::dispatch) once per input event and reads the
/// result back through [`state`](Calculator::state) or
/// [`screen`](Calculator::screen).
///
/// # Example
///
/// ```rust
/// use calcpad::engine::Calculator;
///
/// let mut calculator = Calculator::new();
/// for key in ["1", "2", "0", "0", "*", "3", "="] {
///     calculator.press(key).unwrap();
/// }
///
/// let screen = calculator.screen();
/// assert_eq!(screen.current.as_deref(), Some("3,600"));
/// assert_eq!(screen.previous, None);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Calculator {
    current: CalculatorState,
    formatter: Formatter,
}

impl Calculator {
    /// Create a calculator in the empty state with en-US formatting
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calculator that renders with `formatter`
    pub fn with_formatter(formatter: Formatter) -> Self {
        Self {
            current: CalculatorState::empty(),
            formatter,
        }
    }

    /// Get current state (pure)
    pub fn state(&self) -> &CalculatorState {
        &self.current
    }

    pub fn formatter(&self) -> &Formatter {
        &self.formatter
    }

    /// Apply one action and return the new current state.
    pub fn dispatch(&mut self, action: Action) -> &CalculatorState {
        let next = reduce(&self.current, &action);

        if next == self.current {
            tracing::trace!(
                action = action.kind(),
                phase = self.current.phase().name(),
                "action left state unchanged"
            );
            return &self.current;
        }

        tracing::debug!(
            action = action.kind(),
            from = self.current.phase().name(),
            to = next.phase().name(),
            "applied action"
        );

        if matches!(action, Action::Evaluate | Action::ChooseOperation { .. }) {
            log_unusual_result(&next);
        }

        self.current = next;
        &self.current
    }

    /// Apply a sequence of actions in order.
    pub fn dispatch_all<I>(&mut self, actions: I) -> &CalculatorState
    where
        I: IntoIterator<Item = Action>,
    {
        for action in actions {
            self.dispatch(action);
        }
        &self.current
    }

    /// Map a keypad label and apply it.
    ///
    /// Unknown labels leave the state untouched and return the error.
    pub fn press(&mut self, key: &str) -> Result<&CalculatorState, InputError> {
        let action = keypad::action_for_key(key)?;
        Ok(self.dispatch(action))
    }

    /// Render the current state through the formatter
    pub fn screen(&self) -> Screen {
        self.formatter.render(&self.current)
    }

    /// Return to the empty state.
    pub fn reset(&mut self) {
        self.current = CalculatorState::empty();
    }
}

fn log_unusual_result(state: &CalculatorState) {
    let result = if state.overwrite {
        state.current_operand.as_deref()
    } else {
        state.previous_operand.as_deref()
    };

    match result {
        Some("") => tracing::debug!("evaluation could not parse an operand"),
        Some(value @ ("Infinity" | "-Infinity" | "NaN")) => {
            tracing::debug!(result = value, "evaluation produced a non-finite value")
        }
        _ => {}
    }
}
