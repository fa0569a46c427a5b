//! Keypad label to action mapping.
//!
//! Labels follow the calculator's button grid (`AC`, `DEL`, `÷`, `*`, `+`,
//! `-`, `0`-`9`, `.`, `=`) plus common keyboard names (`Escape`,
//! `Backspace`, `Enter`, `/`, `x`).
//!
//! Sequences are decoded with `Validation` so every unknown key is reported
//! in one pass instead of stopping at the first.

use crate::core::{Action, Digit, Operation};
use crate::input::InputError;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Map a single key label to its action.
///
/// # Example
///
/// ```rust
/// use calcpad::core::Action;
/// use calcpad::input::keypad::action_for_key;
///
/// assert_eq!(action_for_key("AC").unwrap(), Action::Clear);
/// assert_eq!(action_for_key("=").unwrap(), Action::Evaluate);
/// assert!(action_for_key("sqrt").is_err());
/// ```
pub fn action_for_key(key: &str) -> Result<Action, InputError> {
    map_key(key, 0)
}

/// Map a sequence of key labels, collecting every unknown key.
///
/// # Example
///
/// ```rust
/// use calcpad::input::keypad::parse_keys;
///
/// let actions = parse_keys(["7", "+", "3", "="]).unwrap();
/// assert_eq!(actions.len(), 4);
///
/// let errors = parse_keys(["7", "?", "3", "!"]).unwrap_err();
/// assert_eq!(errors.len(), 2);
/// ```
pub fn parse_keys<'a, I>(keys: I) -> Result<Vec<Action>, NonEmptyVec<InputError>>
where
    I: IntoIterator<Item = &'a str>,
{
    let checks: Vec<Validation<Action, NonEmptyVec<InputError>>> = keys
        .into_iter()
        .enumerate()
        .map(|(position, key)| check_key(key, position))
        .collect();

    match Validation::all_vec(checks) {
        Validation::Success(actions) => Ok(actions),
        Validation::Failure(errors) => Err(errors),
    }
}

/// Map a whitespace-separated key script such as `"12 + 7.5 ="`.
///
/// Word labels (`AC`, `DEL`, `Enter`, ...) map as a whole; any other token
/// maps character by character, so `"12+7="` and `"1 2 + 7 ="` are
/// equivalent. Error positions count keys, not bytes.
pub fn parse_script(script: &str) -> Result<Vec<Action>, NonEmptyVec<InputError>> {
    let mut keys: Vec<String> = Vec::new();
    for token in script.split_whitespace() {
        if word_action(token).is_some() {
            keys.push(token.to_string());
        } else {
            keys.extend(token.chars().map(String::from));
        }
    }
    parse_keys(keys.iter().map(String::as_str))
}

fn check_key(key: &str, position: usize) -> Validation<Action, NonEmptyVec<InputError>> {
    match map_key(key, position) {
        Ok(action) => Validation::success(action),
        Err(error) => Validation::fail(error),
    }
}

fn map_key(key: &str, position: usize) -> Result<Action, InputError> {
    if let Some(action) = word_action(key) {
        return Ok(action);
    }

    let mut chars = key.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if let Ok(digit) = Digit::new(c) {
            return Ok(Action::AddDigit { digit });
        }
        if let Ok(operation) = Operation::from_symbol(key) {
            return Ok(Action::ChooseOperation { operation });
        }
    }

    Err(InputError::UnknownKey {
        key: key.to_string(),
        position,
    })
}

fn word_action(key: &str) -> Option<Action> {
    match key.to_ascii_lowercase().as_str() {
        "ac" | "clear" | "escape" | "esc" => Some(Action::Clear),
        "del" | "delete" | "backspace" => Some(Action::DeleteDigit),
        "=" | "enter" => Some(Action::Evaluate),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_grid_labels_map_to_actions() {
        assert_eq!(action_for_key("AC").unwrap(), Action::Clear);
        assert_eq!(action_for_key("DEL").unwrap(), Action::DeleteDigit);
        assert_eq!(action_for_key("=").unwrap(), Action::Evaluate);
        assert_eq!(
            action_for_key("÷").unwrap(),
            Action::ChooseOperation {
                operation: Operation::Divide
            }
        );
        assert_eq!(action_for_key(".").unwrap(), Action::digit('.').unwrap());
        for c in '0'..='9' {
            assert_eq!(
                action_for_key(&c.to_string()).unwrap(),
                Action::digit(c).unwrap()
            );
        }
    }

    #[test]
    fn keyboard_names_are_case_insensitive() {
        assert_eq!(action_for_key("Escape").unwrap(), Action::Clear);
        assert_eq!(action_for_key("BACKSPACE").unwrap(), Action::DeleteDigit);
        assert_eq!(action_for_key("enter").unwrap(), Action::Evaluate);
        assert_eq!(action_for_key("/").unwrap(), Action::operation("÷").unwrap());
    }

    #[test]
    fn unknown_key_reports_position() {
        let err = parse_keys(["1", "%"]).unwrap_err();
        assert_eq!(err.len(), 1);
        let first = err.iter().next();
        match first {
            Some(InputError::UnknownKey { key, position }) => {
                assert_eq!(key, "%");
                assert_eq!(*position, 1);
            }
            other => panic!("Expected UnknownKey, got {other:?}"),
        };
    }

    #[test]
    fn parse_keys_accumulates_all_errors() {
        let errors = parse_keys(["?", "1", "sqrt", "+", "!"]).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors
            .iter()
            .all(|e| matches!(e, InputError::UnknownKey { .. })));
    }

    #[test]
    fn empty_sequence_is_ok() {
        assert!(parse_keys(Vec::<&str>::new()).unwrap().is_empty());
        assert!(parse_script("   ").unwrap().is_empty());
    }

    #[test]
    fn script_splits_compact_tokens() {
        let compact = parse_script("12+7=").unwrap();
        let spaced = parse_script("1 2 + 7 =").unwrap();
        assert_eq!(compact, spaced);
        assert_eq!(compact.len(), 5);
    }

    #[test]
    fn script_keeps_word_labels_whole() {
        let actions = parse_script("9 DEL 4 AC").unwrap();
        assert_eq!(
            actions,
            vec![
                Action::digit('9').unwrap(),
                Action::DeleteDigit,
                Action::digit('4').unwrap(),
                Action::Clear,
            ]
        );
    }
}
