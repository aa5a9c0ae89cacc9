//! # Error Types
//!
//! Defines error types used across subsystems.

use thiserror::Error;

/// Errors raised while parsing shared identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierError {
    /// The id is not valid hexadecimal.
    #[error("invalid transaction id encoding: {0}")]
    InvalidHex(String),

    /// The id decoded to the wrong number of bytes.
    #[error("invalid transaction id length: expected 32 bytes, got {0}")]
    InvalidLength(usize),
}
