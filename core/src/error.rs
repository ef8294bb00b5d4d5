//! Errors raised by view construction, cursor arithmetic and materialization.
//!
//! Every error is returned synchronously from the call that caused it. No
//! operation retries internally and none produces a partial result.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T, E = ViewError> = core::result::Result<T, E>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// An adapter was constructed with parameters that can never produce a
    /// terminating sequence (e.g. a range step of zero).
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A fixed-capacity materialization received more elements than fit.
    #[error("source has {len} elements but the array only holds {capacity}")]
    CapacityExceeded { len: usize, capacity: usize },

    /// An exact-size materialization received fewer elements than required.
    #[error("source has {len} elements but exactly {expected} are required")]
    LengthMismatch { len: usize, expected: usize },

    /// A backward jump asked for more positions than were traversed.
    #[error("cannot move back {requested} positions, only {available} available")]
    OutOfRange { requested: usize, available: usize },
}

impl ViewError {
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        ViewError::InvalidConfiguration(message.into())
    }
}
