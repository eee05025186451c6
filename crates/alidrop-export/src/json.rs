//! Lossless JSON snapshots of product records.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::atomic::write_atomic;
use crate::error::ExportError;

pub(crate) fn encode_snapshot<T>(path: &Path, value: &T) -> Result<Vec<u8>, ExportError>
where
    T: Serialize + ?Sized,
{
    serde_json::to_vec_pretty(value).map_err(|source| ExportError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes `value` as pretty-printed JSON. Non-ASCII text is written as-is.
///
/// # Errors
///
/// Returns [`ExportError::Json`] if serialization fails or
/// [`ExportError::Io`] if the file cannot be written.
pub fn save_json_snapshot<T>(path: &Path, value: &T) -> Result<(), ExportError>
where
    T: Serialize + ?Sized,
{
    write_atomic(path, &encode_snapshot(path, value)?)
}

/// Reads a snapshot written by [`save_json_snapshot`].
///
/// # Errors
///
/// Returns [`ExportError::Io`] if the file cannot be read or
/// [`ExportError::Json`] if it does not deserialize as `T`.
pub fn load_json_snapshot<T: DeserializeOwned>(path: &Path) -> Result<T, ExportError> {
    let bytes = fs::read(path).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&bytes).map_err(|source| ExportError::Json {
        path: path.to_path_buf(),
        source,
    })
}
