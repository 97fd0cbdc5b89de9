//! Error types for Railbook core operations.
//!
//! Messages for argument and dispatch failures are part of the wire contract:
//! callers receive them verbatim inside an error `Response`. Store errors carry
//! the backend's message unchanged.

use thiserror::Error;

/// Result type alias for Railbook operations.
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Core error type for Railbook operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Wrong number of arguments for an operation.
    ///
    /// `expected` is the number quoted in the message, which is not always
    /// the number the check enforces (see `createRecord`).
    #[error("Incorrect number of arguments. Expecting {expected}")]
    ArgumentCount { expected: usize },

    /// Operation name not in the dispatch table
    #[error("Invalid Smart Contract function name.")]
    UnknownOperation(String),

    /// Read or range-scan failure reported by the store
    #[error("{0}")]
    StoreRead(String),

    /// Write failure reported by the store
    #[error("{0}")]
    StoreWrite(String),

    /// Record could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Storage backend error (open, schema, integrity)
    #[error("Storage error: {0}")]
    Storage(String),
}

impl LedgerError {
    /// True for errors caused by the caller's request shape.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            LedgerError::ArgumentCount { .. } | LedgerError::UnknownOperation(_)
        )
    }

    /// True for errors raised by the underlying store.
    pub fn is_store_failure(&self) -> bool {
        matches!(
            self,
            LedgerError::StoreRead(_) | LedgerError::StoreWrite(_) | LedgerError::Storage(_)
        )
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        LedgerError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        LedgerError::Serialization(err.to_string())
    }
}

impl From<rusqlite::Error> for LedgerError {
    fn from(err: rusqlite::Error) -> Self {
        LedgerError::Storage(format!("SQLite error: {}", err))
    }
}
