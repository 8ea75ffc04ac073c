//! # Validation Errors
//!
//! Structured error types for principal parsing, built with `thiserror`.
//! Each variant carries the offending input so operators can diagnose
//! misconfiguration without guesswork.

use thiserror::Error;

/// Errors raised when constructing a [`Principal`][crate::Principal]
/// from untrusted text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The hex string does not encode exactly 20 bytes.
    #[error("invalid principal \"{value}\": expected 40 hex digits, got {len}")]
    InvalidPrincipalLength {
        /// The string that failed to parse.
        value: String,
        /// The number of hex digits found after stripping any 0x prefix.
        len: usize,
    },

    /// The string contains characters outside `[0-9a-fA-F]`.
    #[error("invalid principal \"{value}\": non-hex characters")]
    InvalidPrincipalHex {
        /// The string that failed to parse.
        value: String,
    },
}
