//! Domain-specific error types and error handling.

mod types;

pub use types::{ValidationError, VerificationError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    /// A unique index rejected an insert. Internal signal only: the
    /// verification service converts this into the reissue path, it is
    /// never surfaced to callers.
    #[error("Duplicate identifier: {field}")]
    DuplicateIdentifier { field: String },

    #[error("Database error: {message}")]
    Database { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Verification(#[from] VerificationError),
}

pub type DomainResult<T> = Result<T, DomainError>;
