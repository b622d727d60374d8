//! Custom error types specific to the `adapters` crate.
//!
//! These errors surface from the document store and notification adapters and
//! are translated into API errors by the backend.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AdapterError {
    /// A unique index rejected the write.
    #[error("duplicate value for unique field `{field}`: {value}")]
    DuplicateKey { field: &'static str, value: String },

    /// The stored document changed since it was read.
    #[error("document {id} was modified concurrently (expected version {expected}, found {found})")]
    VersionConflict {
        id: String,
        expected: u64,
        found: u64,
    },

    #[error("document {0} does not exist")]
    MissingDocument(String),

    #[error("invalid document id: {0}")]
    InvalidId(String),

    #[error("notification failed: {0}")]
    Notification(String),

    #[error("storage backend error: {0}")]
    Backend(String),
}
