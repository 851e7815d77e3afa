//! Errors raised by durable storage backends.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store could not be reached (no window, storage disabled,
    /// quota exceeded).
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialise record: {0}")]
    Serialize(#[from] serde_json::Error),
}
