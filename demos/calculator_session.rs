//! Calculator Session
//!
//! This example drives the calculator with a keypad script and prints both
//! display lines after every key.
//!
//! Key concepts:
//! - The store owns the single current state
//! - Keypad scripts decode into actions, reporting every unknown key
//! - The formatter renders grouped display strings
//!
//! Run with: cargo run --example calculator_session -- "12 + 7.5 * 2 ="
//! Set RUST_LOG=calcpad=debug to see each transition.

use calcpad::engine::Calculator;
use calcpad::format::{FormatConfig, FormatterBuilder};
use calcpad::input::parse_script;
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("=== Calculator Session Example ===\n");

    let script = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "1234 + 5.5 * 2 = DEL 9 ÷ 0 =".to_string());

    let config = match FormatConfig::load(Path::new("calcpad.toml")) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Ignoring calcpad.toml: {err}");
            FormatConfig::default()
        }
    };
    let formatter = match FormatterBuilder::new().config(config).build() {
        Ok(formatter) => formatter,
        Err(err) => {
            eprintln!("Invalid format config: {err}");
            return;
        }
    };

    let actions = match parse_script(&script) {
        Ok(actions) => actions,
        Err(errors) => {
            for error in errors.iter() {
                eprintln!("  ✗ {error}");
            }
            return;
        }
    };

    let mut calculator = Calculator::with_formatter(formatter);
    for action in actions {
        calculator.dispatch(action);
        let screen = calculator.screen();
        println!(
            "{:<18} | {:>20} | {:>20}",
            action.kind(),
            screen.previous.unwrap_or_default(),
            screen.current.unwrap_or_default()
        );
    }

    println!("\n=== Example Complete ===");
}
