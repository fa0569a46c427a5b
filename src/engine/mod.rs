//! The calculator engine.
//!
//! - [`reduce`] is the pure `(state, action) -> state` transition function
//! - [`evaluate`] resolves a binary operation over operand strings
//! - [`Calculator`] owns the single current state and feeds it actions
//!
//! Everything except the store is a pure function; the store is the only
//! place a state value is replaced.

mod evaluator;
mod reducer;
mod store;

pub use evaluator::{evaluate, evaluate_state, number_to_operand, parse_float_prefix};
pub use reducer::reduce;
pub use store::Calculator;
