//! Calcpad: a pure functional calculator engine
//!
//! Calcpad is the logic behind a four-function calculator widget, split into
//! a pure core and a thin imperative shell. The core is a reducer over an
//! immutable state value; the shell (your UI) owns the single current state,
//! feeds it one action per input event, and renders the formatted result.
//!
//! # Core Concepts
//!
//! - **State**: `CalculatorState`, an immutable snapshot of both operands,
//!   the pending operator, and the overwrite flag
//! - **Actions**: a closed set of five inputs (`AddDigit`, `Clear`,
//!   `ChooseOperation`, `DeleteDigit`, `Evaluate`)
//! - **Reducer**: `reduce(&state, &action) -> state`, total and pure
//! - **Evaluator**: binary arithmetic over operand strings
//! - **Formatter**: grouped display strings from an immutable config
//!
//! # Example
//!
//! ```rust
//! use calcpad::core::{Action, CalculatorState};
//! use calcpad::engine::reduce;
//! use calcpad::format::Formatter;
//!
//! let mut state = CalculatorState::empty();
//! for action in [
//!     Action::digit('1').unwrap(),
//!     Action::digit('2').unwrap(),
//!     Action::digit('3').unwrap(),
//!     Action::digit('4').unwrap(),
//!     Action::operation("+").unwrap(),
//!     Action::digit('1').unwrap(),
//!     Action::Evaluate,
//! ] {
//!     state = reduce(&state, &action);
//! }
//!
//! let screen = Formatter::en_us().render(&state);
//! assert_eq!(screen.current.as_deref(), Some("1,235"));
//! ```

pub mod core;
pub mod engine;
pub mod format;
pub mod input;

// Re-export commonly used types
pub use crate::core::{Action, CalculatorState, Digit, Operation};
pub use engine::{reduce, Calculator};
pub use format::{Formatter, Screen};
pub use input::InputError;
