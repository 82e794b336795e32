//! Key-value storage errors.

/// Errors raised by key-value storage collaborators.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage backend error: {message}")]
    Backend { message: String },

    #[error("storage lock poisoned: {message}")]
    LockPoisoned { message: String },
}
