//! Reading and rendering of JSON documents.

use crate::error::{MergeError, MergeResult};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Read a file as UTF-8 text and parse it as a single JSON document.
///
/// I/O and parse failures carry the offending path so error messages
/// identify which of the two inputs was at fault.
pub fn load(path: &Path) -> MergeResult<Value> {
    let text = fs::read_to_string(path).map_err(|source| MergeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| MergeError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Render a value as JSON text with 2-space indentation.
pub fn to_pretty_json(value: &Value) -> MergeResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
