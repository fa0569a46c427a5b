//! Display formatting for operands.
//!
//! The formatter owns an immutable [`FormatConfig`], built once and reused
//! for every render. Configs can come from code, from the
//! [`FormatterBuilder`], or from a TOML file:
//!
//! ```rust
//! use calcpad::format::{FormatConfig, FormatterBuilder};
//!
//! let config = FormatConfig::from_toml_str("group_separator = \"'\"").unwrap();
//! let formatter = FormatterBuilder::new().config(config).build().unwrap();
//!
//! assert_eq!(formatter.format(Some("1000000")), Some("1'000'000".to_string()));
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod formatter;

pub use builder::FormatterBuilder;
pub use config::FormatConfig;
pub use error::ConfigError;
pub use formatter::{Formatter, Screen};
