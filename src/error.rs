//! Error types for document loading and rendering.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced to the user as `Error: <message>` with a non-zero exit.
///
/// The merge itself is total over the JSON value domain and cannot fail;
/// everything here originates in the I/O and serialization collaborators.
#[derive(Debug, Error)]
pub enum MergeError {
    /// The input file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The input file is not a well-formed JSON document.
    #[error("invalid JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The merged document could not be rendered.
    #[error("cannot render merged document: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for merge CLI operations.
pub type MergeResult<T> = std::result::Result<T, MergeError>;
