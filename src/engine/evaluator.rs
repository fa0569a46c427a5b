//! Binary arithmetic over operand strings.

use crate::core::{guard, CalculatorState, Operation};

/// Compute `previous <operation> current` and render the result as an
/// operand string.
///
/// Operands are parsed with [`parse_float_prefix`]. If either operand has no
/// numeric prefix the result is the empty string, which the reducer stores
/// as the new operand unchanged.
///
/// # Example
///
/// ```rust
/// use calcpad::core::Operation;
/// use calcpad::engine::evaluate;
///
/// assert_eq!(evaluate("7", "3", Operation::Add), "10");
/// assert_eq!(evaluate("1.5", "2", Operation::Multiply), "3");
/// assert_eq!(evaluate("4", "0", Operation::Divide), "Infinity");
/// assert_eq!(evaluate("", "3", Operation::Add), "");
/// ```
pub fn evaluate(previous: &str, current: &str, operation: Operation) -> String {
    let (Some(lhs), Some(rhs)) = (parse_float_prefix(previous), parse_float_prefix(current)) else {
        return String::new();
    };
    number_to_operand(operation.apply(lhs, rhs))
}

/// Evaluate the pending expression held by `state`.
///
/// Returns `None` when the state is not evaluable (an operand or the
/// operator is missing).
pub fn evaluate_state(state: &CalculatorState) -> Option<String> {
    if !guard::is_evaluable(state) {
        return None;
    }
    let previous = state.previous_operand.as_deref()?;
    let current = state.current_operand.as_deref()?;
    let operation = state.operation?;
    Some(evaluate(previous, current, operation))
}

/// Parse the longest numeric prefix of `input`.
///
/// Leading whitespace is skipped. The prefix may carry a sign, a fraction
/// and an exponent, or be `Infinity`. Parsing stops at the first character
/// that cannot extend the numeral, so `"12abc"` parses as `12`. Returns
/// `None` when there is no numeric prefix at all.
///
/// ```rust
/// use calcpad::engine::parse_float_prefix;
///
/// assert_eq!(parse_float_prefix("12.5kg"), Some(12.5));
/// assert_eq!(parse_float_prefix("  -3e2x"), Some(-300.0));
/// assert_eq!(parse_float_prefix(".5"), Some(0.5));
/// assert_eq!(parse_float_prefix("abc"), None);
/// assert_eq!(parse_float_prefix("."), None);
/// ```
pub fn parse_float_prefix(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    if s[end..].starts_with("Infinity") {
        return Some(if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let integer_start = end;
    end = scan_digits(bytes, end);
    let mut mantissa_digits = end - integer_start;

    if bytes.get(end) == Some(&b'.') {
        let fraction_end = scan_digits(bytes, end + 1);
        mantissa_digits += fraction_end - (end + 1);
        if mantissa_digits > 0 {
            end = fraction_end;
        }
    }

    if mantissa_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent_start = end + 1;
        if matches!(bytes.get(exponent_start), Some(b'+' | b'-')) {
            exponent_start += 1;
        }
        let exponent_end = scan_digits(bytes, exponent_start);
        if exponent_end > exponent_start {
            end = exponent_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

/// Render a computed value as an operand string.
///
/// Finite values use the shortest round-trip decimal form without a
/// trailing `.0`; negative zero renders as `0`. Non-finite values render
/// as `Infinity`, `-Infinity` or `NaN`.
pub fn number_to_operand(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

fn scan_digits(bytes: &[u8], mut index: usize) -> usize {
    while bytes.get(index).is_some_and(u8::is_ascii_digit) {
        index += 1;
    }
    index
}
