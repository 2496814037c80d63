//! Domain error types for resolution operations.
//!
//! Missing references (unloaded applications, deleted roles, dangling unit
//! parents) are deliberately not errors: they contribute nothing to a
//! decision. The variants here cover malformed requests and failures of the
//! backing readers, which are the only things a caller can act on.

use thiserror::Error;

/// Domain-specific errors for resolution operations.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A request field that must identify something was empty.
    #[error("invalid request: {message}")]
    InvalidRequest { message: String },

    /// The backing directory or catalog reader failed.
    #[error("reader error: {message}")]
    ReaderError { message: String },
}

impl DomainError {
    /// Wraps a backend failure from a reader implementation.
    pub fn reader(message: impl Into<String>) -> Self {
        Self::ReaderError {
            message: message.into(),
        }
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
