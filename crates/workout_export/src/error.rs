//! Custom error types for the export pipeline.

use thiserror::Error;

/// Export pipeline errors.
///
/// There are exactly two ways an export can fail: the store itself errors
/// (always fatal, never retried here, original cause preserved), or the
/// assembled document fails to encode. Absence of data is never an error.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("provider error: {0}")]
    Provider(#[from] healthstore_client::HealthStoreError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for export operations.
pub type ExportResult<T> = Result<T, ExportError>;
