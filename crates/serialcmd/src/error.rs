//! Engine error types.

use thiserror::Error;

/// Errors from command registration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegisterError {
    /// The registry already holds the maximum number of commands.
    #[error("command limit reached")]
    CapacityExceeded,

    /// The declared parameter kinds do not match what the handler accepts.
    #[error("signature declares {declared} parameter(s) but the handler accepts {accepted}")]
    ArityMismatch {
        /// Parameters in the declared kind list.
        declared: usize,
        /// Parameters the handler variant accepts.
        accepted: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            RegisterError::CapacityExceeded.to_string(),
            "command limit reached"
        );
        assert_eq!(
            RegisterError::ArityMismatch {
                declared: 2,
                accepted: 1
            }
            .to_string(),
            "signature declares 2 parameter(s) but the handler accepts 1"
        );
    }
}
