//! Store error model.

use thiserror::Error;

/// Collection store operation error.
///
/// These are infrastructure failures (filesystem, serialization, locking).
/// "Nothing matched" is never an error at this layer: a missing collection
/// file simply loads as an empty array.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing a collection file failed.
    #[error("collection io failed: {0}")]
    Io(#[from] std::io::Error),

    /// A collection file held malformed JSON, or a record failed to serialize.
    #[error("collection serialization failed: {0}")]
    Serde(#[from] serde_json::Error),

    /// A collection lock was poisoned by a panicking holder.
    #[error("collection lock poisoned")]
    Poisoned,

    /// `write` was called for a collection that was never fetched.
    #[error("unknown collection: {0}")]
    UnknownCollection(String),
}
