//! Error types for the core crate.
//!
//! The geometric engine is total: rotations, gates and normalization never
//! fail. Errors only come from turning user-facing text into typed inputs.

use thiserror::Error;

/// Errors produced while parsing axis identifiers, named states or actions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum BlochError {
    /// Axis identifier is not one of `x`, `y`, `z`.
    #[error("Unknown rotation axis '{0}' (expected x, y or z)")]
    UnknownAxis(String),

    /// Named state label is not recognised.
    #[error("Unknown named state '{0}' (expected 0, 1, +, -, +i or -i)")]
    UnknownState(String),

    /// A numeric argument could not be parsed.
    #[error("Invalid number '{value}' for {field}")]
    InvalidNumber {
        /// The argument being parsed.
        field: &'static str,
        /// The raw text that failed to parse.
        value: String,
    },

    /// An action line is malformed.
    #[error("Invalid action '{0}'")]
    InvalidAction(String),
}

/// Result type for parsing operations.
pub type BlochResult<T> = Result<T, BlochError>;
