use std::io;
use thiserror::Error;

/// Key path error type.
#[derive(Debug, Error)]
pub enum KeypathError {
    /// A separator was built from the empty string.
    #[error("Path separator must not be empty")]
    EmptySeparator,

    /// Failed to read an options file.
    #[error("Failed to read options file at {path}: {source}")]
    ReadError {
        /// Path to the options file that could not be read.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Failed to parse TOML options.
    #[error("Failed to parse options at {path}: {source}")]
    ParseError {
        /// Path to the options file, or `<inline>` for string input.
        path: String,
        /// Underlying TOML parse error.
        #[source]
        source: toml::de::Error,
    },

    /// Options validation failed.
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// Field that failed validation.
        field: String,
        /// Validation failure description.
        message: String,
    },
}

/// Result type for key path operations that can fail.
pub type KeypathResult<T> = Result<T, KeypathError>;
