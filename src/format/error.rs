//! Formatter configuration errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading or validating a `FormatConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read format config '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse format config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Format config validation failed: {message}")]
    ValidationError { message: String },
}
