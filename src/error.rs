use std::path::PathBuf;

use thiserror::Error;

/// Errors from snapshot persistence operations.
#[derive(Debug, Error)]
pub enum StashError {
    /// The snapshot file does not exist.
    #[error("snapshot not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// I/O error from the underlying filesystem.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The value cannot be represented by the serialization format.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Compression of the serialized bytes failed.
    #[error("compression failed: {0}")]
    Compression(String),

    /// The file contents are not a valid compressed stream.
    #[error("decompression failed for {}: {reason}", path.display())]
    Decompression { path: PathBuf, reason: String },

    /// The decompressed bytes are not a valid serialized value.
    #[error("corrupt snapshot {}: {reason}", path.display())]
    Corrupt { path: PathBuf, reason: String },
}

/// Result alias for stash operations.
pub type StashResult<T> = Result<T, StashError>;
