//! # Error Types
//!
//! Parsing errors for identifiers supplied as text (CLI scripts, JSON).

use thiserror::Error;

/// Errors parsing a hex-encoded identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Wrong number of hex digits.
    #[error("Invalid length: expected {expected} hex digits, got {actual}")]
    InvalidLength {
        /// Required digit count.
        expected: usize,
        /// Digits supplied.
        actual: usize,
    },

    /// Non-hex characters.
    #[error("Invalid hex: {0}")]
    InvalidHex(String),
}
