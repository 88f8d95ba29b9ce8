//! Wire-level error types.

use thiserror::Error;

/// Errors from argument conversion.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// The token count does not match the command's signature.
    #[error("expected {expected} argument(s), got {actual}")]
    CountMismatch {
        /// Parameters the signature declares.
        expected: usize,
        /// Tokens found on the line.
        actual: usize,
    },
}
