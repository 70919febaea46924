//! Internal error model
//!
//! `CacheError` is the explicit result currency of the I/O and codec
//! layers. It never crosses the public API: the store is the one place
//! errors are swallowed into the documented empty/absent defaults.

use thiserror::Error;

/// Failure classes the cache hits internally.
#[derive(Debug, Error)]
pub enum CacheError {
    /// Filesystem read/write/delete failure, including a missing entry.
    #[error("cache i/o failure: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encode or decode failure.
    #[error("cache json failure: {0}")]
    Json(#[from] serde_json::Error),
}
