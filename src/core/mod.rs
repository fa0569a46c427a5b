//! Core calculator types.
//!
//! This module contains the pure value types of the engine:
//! - `CalculatorState`, the immutable snapshot the reducer transforms
//! - `Action`, the closed set of inputs
//! - `Digit` and `Operation`, the validated action payloads
//! - Guard predicates the reducer uses to detect no-op transitions

mod action;
mod digit;
pub mod guard;
mod operation;
mod state;

pub use action::Action;
pub use digit::Digit;
pub use operation::Operation;
pub use state::{CalculatorState, Phase};
