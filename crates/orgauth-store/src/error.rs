//! Store error types.

use thiserror::Error;

/// Errors raised by the administrative write surface of the store.
///
/// Read-side lookups never produce these: a missing entity is `None`, not an
/// error, so that resolution can degrade softly.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Invalid input error.
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    /// An application payload referenced itself inconsistently.
    #[error("group {group} does not belong to application {application}")]
    ForeignGroup { application: String, group: String },
}

impl StoreError {
    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        StoreError::InvalidInput {
            message: message.into(),
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
