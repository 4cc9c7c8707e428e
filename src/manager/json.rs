//! JSON persistence
//!
//! Serializes values to pretty-printed JSON under the base directory and
//! reads them back.

use log::error;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;

use crate::error::FileError;
use crate::manager::operations;
use crate::storage::filesystem;

/// Encodes `value` as pretty-printed JSON and writes it atomically to
/// `name` under `base`.
pub fn write_json<T: Serialize>(base: &Path, name: &str, value: &T) -> Result<(), FileError> {
    let path = operations::scoped(base, name);

    let bytes = serde_json::to_vec_pretty(value).map_err(|e| {
        error!("Failed to encode {}: {e}", path.display());
        FileError::Serialization(path.clone(), e)
    })?;

    filesystem::write_atomic(&path, &bytes).map_err(|e| {
        error!("Failed to save {}: {e}", path.display());
        FileError::Io(path, e)
    })
}

/// Reads `name` under `base` and decodes it from JSON
pub fn read_json<T: DeserializeOwned>(base: &Path, name: &str) -> Result<T, FileError> {
    let bytes = operations::read_bytes(base, name)?;
    let path = operations::scoped(base, name);

    serde_json::from_slice(&bytes).map_err(|e| {
        error!("Failed to decode {}: {e}", path.display());
        FileError::Serialization(path, e)
    })
}
