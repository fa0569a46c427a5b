//! Property-based tests for the calculator engine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated action sequences and operands.

use calcpad::core::{guard, Action, CalculatorState, Digit, Operation};
use calcpad::engine::{evaluate, parse_float_prefix, reduce};
use calcpad::format::Formatter;
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_digit()(index in 0..11usize) -> Digit {
        let c = "0123456789.".chars().nth(index).unwrap_or('0');
        Digit::new(c).unwrap()
    }
}

prop_compose! {
    fn arbitrary_operation()(index in 0..4usize) -> Operation {
        Operation::ALL[index]
    }
}

fn arbitrary_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        4 => arbitrary_digit().prop_map(|digit| Action::AddDigit { digit }),
        1 => Just(Action::Clear),
        2 => arbitrary_operation().prop_map(|operation| Action::ChooseOperation { operation }),
        1 => Just(Action::DeleteDigit),
        2 => Just(Action::Evaluate),
    ]
}

fn run(actions: &[Action]) -> Vec<CalculatorState> {
    let mut states = vec![CalculatorState::empty()];
    for action in actions {
        let next = reduce(states.last().unwrap(), action);
        states.push(next);
    }
    states
}

proptest! {
    #[test]
    fn clear_always_resets(actions in prop::collection::vec(arbitrary_action(), 0..30)) {
        let states = run(&actions);
        let last = states.last().unwrap();
        prop_assert_eq!(reduce(last, &Action::Clear), CalculatorState::empty());
    }

    #[test]
    fn operand_never_has_two_points(actions in prop::collection::vec(arbitrary_action(), 0..40)) {
        for state in run(&actions) {
            if let Some(operand) = &state.current_operand {
                prop_assert!(operand.matches('.').count() <= 1, "operand {:?}", operand);
            }
        }
    }

    #[test]
    fn operator_implies_operand(actions in prop::collection::vec(arbitrary_action(), 0..40)) {
        for state in run(&actions) {
            if state.operation.is_some() {
                prop_assert!(guard::has_operand(&state), "state {:?}", state);
            }
        }
    }

    #[test]
    fn typed_operand_has_no_redundant_leading_zero(
        actions in prop::collection::vec(arbitrary_action(), 0..40)
    ) {
        for state in run(&actions) {
            if let Some(operand) = &state.current_operand {
                prop_assert!(!operand.starts_with("00"), "operand {:?}", operand);
            }
        }
    }

    #[test]
    fn typed_operand_is_unsigned_decimal(
        actions in prop::collection::vec(
            arbitrary_action().prop_filter("no evaluation", |a| *a != Action::Evaluate),
            0..40
        )
    ) {
        for state in run(&actions) {
            if let Some(operand) = &state.current_operand {
                prop_assert!(
                    operand.chars().all(|c| c.is_ascii_digit() || c == '.'),
                    "operand {:?}",
                    operand
                );
            }
        }
    }

    #[test]
    fn reduce_is_deterministic(
        actions in prop::collection::vec(arbitrary_action(), 0..20),
        action in arbitrary_action()
    ) {
        let states = run(&actions);
        let state = states.last().unwrap();
        prop_assert_eq!(reduce(state, &action), reduce(state, &action));
    }

    #[test]
    fn delete_undoes_append(
        digits in prop::collection::vec(1..10u32, 1..8),
        digit in 0..10u32
    ) {
        let typed: String = digits.iter().filter_map(|d| char::from_digit(*d, 10)).collect();
        let state = CalculatorState::with_current(typed);
        let c = char::from_digit(digit, 10).unwrap();
        let appended = reduce(&state, &Action::digit(c).unwrap());
        prop_assert_eq!(reduce(&appended, &Action::DeleteDigit), state);
    }

    #[test]
    fn evaluation_matches_float_arithmetic(
        lhs in 0..100_000u32,
        rhs in 1..100_000u32,
        operation in arbitrary_operation()
    ) {
        let result = evaluate(&lhs.to_string(), &rhs.to_string(), operation);
        let expected = operation.apply(f64::from(lhs), f64::from(rhs));
        prop_assert_eq!(parse_float_prefix(&result), Some(expected));
    }

    #[test]
    fn format_never_panics(operand in ".*") {
        let _ = Formatter::en_us().format(Some(operand.as_str()));
    }

    #[test]
    fn grouping_preserves_digits(integer in "[0-9]{1,20}") {
        let formatted = Formatter::en_us().format(Some(integer.as_str())).unwrap();
        let stripped: String = formatted.chars().filter(|c| *c != ',').collect();

        let expected = integer.trim_start_matches('0');
        let expected = if expected.is_empty() { "0" } else { expected };
        prop_assert_eq!(stripped, expected);
    }

    #[test]
    fn fraction_is_never_rewritten(integer in "[1-9][0-9]{0,8}", fraction in "[0-9]{0,8}") {
        let operand = format!("{integer}.{fraction}");
        let formatted = Formatter::en_us().format(Some(operand.as_str())).unwrap();
        let expected_suffix = format!(".{fraction}");
        prop_assert!(formatted.ends_with(&expected_suffix));
    }
}

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn public_types_are_send_and_sync() {
    assert_send_sync::<CalculatorState>();
    assert_send_sync::<Action>();
    assert_send_sync::<Digit>();
    assert_send_sync::<Operation>();
    assert_send_sync::<Formatter>();
    assert_send_sync::<calcpad::format::FormatConfig>();
    assert_send_sync::<calcpad::format::FormatterBuilder>();
    assert_send_sync::<calcpad::format::Screen>();
    assert_send_sync::<calcpad::engine::Calculator>();
    assert_send_sync::<calcpad::input::InputError>();
    assert_send_sync::<calcpad::format::ConfigError>();
}
