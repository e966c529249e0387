//! Error types raised by save store implementations.

use thiserror::Error;

/// Errors surfaced by save store implementations.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("save store lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("corrupted save: {0}")]
    Corrupted(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;
