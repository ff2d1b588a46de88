//! Error types for the persistence port.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Failure reading from or writing to a state backend.
///
/// Mutation methods on the store never surface these: persistence failures
/// are logged and the in-memory collection stays authoritative. The port
/// itself reports them so tests and tooling can observe failures.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem-level failure.
    #[error("storage i/o failed: {0}")]
    Io(#[from] std::io::Error),

    /// The collection could not be encoded.
    #[error("failed to encode state: {0}")]
    Serde(#[from] serde_json::Error),
}
