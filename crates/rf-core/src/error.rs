//! Error types for the entry store
//!
//! Failure semantics: everything except "not found" propagates unmodified to
//! the caller. Absence of a row is never an error here; it surfaces as an
//! `Option::None` or a zero-row statement at the repository layer.

use thiserror::Error;

/// Error type for all store operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// Connection string missing or empty at construction. Raised before any
    /// pool is created.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A payload value was not JSON-representable. Fatal to the call, no
    /// partial write.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A stored payload is missing an expected field on read. No repair, no
    /// default-fill.
    #[error("Malformed entry {id}: payload missing field `{field}`")]
    MalformedRecord { id: String, field: &'static str },

    /// Driver-level failure: connectivity loss, constraint violation,
    /// timeout. Carried unchanged, no retry.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;
