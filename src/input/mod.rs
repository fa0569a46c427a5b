//! Decoding of raw shell input into actions.
//!
//! The reducer only accepts typed `Action` values. This module is the
//! boundary where untyped input (key labels, key scripts) is validated, and
//! where unknown kinds fail fast.

pub mod error;
pub mod keypad;

pub use error::InputError;
pub use keypad::{action_for_key, parse_keys, parse_script};
