//! End-to-end sessions through the public API: keypad scripts, JSON action
//! messages, the store and the formatter together.

use calcpad::core::{Action, CalculatorState, Operation};
use calcpad::engine::{evaluate, Calculator};
use calcpad::format::{FormatConfig, Formatter, FormatterBuilder};
use calcpad::input::{parse_script, InputError};

fn session(script: &str) -> Calculator {
    let mut calculator = Calculator::new();
    calculator.dispatch_all(parse_script(script).unwrap());
    calculator
}

#[test]
fn seven_plus_three() {
    let calculator = session("7 + 3 =");
    let state = calculator.state();

    assert_eq!(state.current_operand.as_deref(), Some("10"));
    assert!(state.overwrite);
    assert_eq!(state.previous_operand, None);
    assert_eq!(state.operation, None);
}

#[test]
fn chained_operations_resolve_left_to_right() {
    let calculator = session("2 + 3 * 4 =");
    assert_eq!(calculator.state().current_operand.as_deref(), Some("20"));
}

#[test]
fn operator_can_be_changed_before_second_operand() {
    let calculator = session("9 + - * 3 =");
    assert_eq!(calculator.state().current_operand.as_deref(), Some("27"));
}

#[test]
fn result_is_overwritten_by_next_digit() {
    let calculator = session("6 * 7 = 5");
    assert_eq!(calculator.state(), &CalculatorState::with_current("5"));
}

#[test]
fn result_can_start_a_new_calculation() {
    let calculator = session("6 * 7 = - 2 =");
    assert_eq!(calculator.state().current_operand.as_deref(), Some("40"));
}

#[test]
fn screen_shows_pending_expression() {
    let calculator = session("1234.5 ÷ 2");
    let screen = calculator.screen();

    assert_eq!(screen.previous.as_deref(), Some("1,234.5 ÷"));
    assert_eq!(screen.current.as_deref(), Some("2"));
}

#[test]
fn editing_keys_behave_like_the_keypad() {
    let calculator = session("1 2 3 DEL DEL 0 0 . 5 . 5");
    assert_eq!(calculator.state().current_operand.as_deref(), Some("100.55"));

    let calculator = session("0 0 0 7");
    assert_eq!(calculator.state().current_operand.as_deref(), Some("07"));
    assert_eq!(calculator.screen().current.as_deref(), Some("7"));
}

#[test]
fn clear_discards_everything() {
    let calculator = session("8 * 8 AC");
    assert!(calculator.state().is_empty());
}

#[test]
fn division_by_zero_renders_infinity() {
    assert_eq!(evaluate("4", "0", Operation::Divide), "Infinity");

    let calculator = session("4 ÷ 0 =");
    assert_eq!(calculator.screen().current.as_deref(), Some("∞"));

    let calculator = session("0 / 0 =");
    assert_eq!(calculator.screen().current.as_deref(), Some("NaN"));
}

#[test]
fn script_errors_are_reported_together() {
    let errors = parse_script("1 + ? 2 = #").unwrap_err();
    let keys: Vec<&str> = errors
        .iter()
        .filter_map(|error| match error {
            InputError::UnknownKey { key, .. } => Some(key.as_str()),
            _ => None,
        })
        .collect();

    assert_eq!(keys, vec!["?", "#"]);
}

#[test]
fn json_messages_drive_the_store() {
    let messages = [
        r#"{"type":"add-digit","payload":{"digit":"5"}}"#,
        r#"{"type":"add-digit","payload":{"digit":"0"}}"#,
        r#"{"type":"choose-operation","payload":{"operation":"-"}}"#,
        r#"{"type":"add-digit","payload":{"digit":"8"}}"#,
        r#"{"type":"evaluate"}"#,
    ];

    let mut calculator = Calculator::new();
    for message in messages {
        calculator.dispatch(Action::from_json(message).unwrap());
    }

    assert_eq!(calculator.state().current_operand.as_deref(), Some("42"));

    let state = serde_json::to_value(calculator.state()).unwrap();
    assert_eq!(
        state,
        serde_json::json!({"currentOperand": "42", "overwrite": true})
    );
}

#[test]
fn unknown_action_kind_is_rejected_at_the_boundary() {
    let result = Action::from_json(r#"{"type":"memory-recall"}"#);
    assert!(matches!(result, Err(InputError::MalformedAction(_))));
}

#[test]
fn formatter_from_toml_config() {
    let config = FormatConfig::from_toml_str(
        r#"
        group_separator = "."
        decimal_separator = ","
        "#,
    )
    .unwrap();
    let formatter = FormatterBuilder::new().config(config).build().unwrap();

    let mut calculator = Calculator::with_formatter(formatter);
    calculator.dispatch_all(parse_script("1000 * 1000 =").unwrap());

    assert_eq!(calculator.screen().current.as_deref(), Some("1.000.000"));
}

#[test]
fn formatter_round_trip_en_us() {
    assert_eq!(
        Formatter::en_us().format(Some("1234.5")),
        Some("1,234.5".to_string())
    );
}
