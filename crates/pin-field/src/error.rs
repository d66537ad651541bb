//! Error type shared by configuration and input entry points.

use thiserror::Error;

/// Errors produced by `pin-field`.
///
/// Configuration problems are reported when a field is built; no partially
/// constructed field is ever returned. Rejected keys and pastes are not
/// errors, they are reported through [`PinEvent::Reject`](crate::PinEvent::Reject).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PinFieldError {
    /// The configured length was zero.
    #[error("the PIN field length should be greater than 0 (got {0})")]
    InvalidLength(usize),

    /// A validator pattern failed to compile.
    #[error("invalid validator pattern '{pattern}': {message}")]
    InvalidPattern {
        /// The pattern source.
        pattern: String,
        /// Message reported by the regex compiler.
        message: String,
    },

    /// The host exposes a different number of cells than the configured length.
    #[error("host exposes {actual} cells but the field length is {expected}")]
    SlotCountMismatch {
        /// Configured length.
        expected: usize,
        /// Number of cells reported by the host.
        actual: usize,
    },

    /// An input entry point was called with a cell index outside the field.
    #[error("cell index {idx} is out of range for a field of length {length}")]
    InvalidIndex {
        /// Index passed by the caller.
        idx: usize,
        /// Field length.
        length: usize,
    },
}
