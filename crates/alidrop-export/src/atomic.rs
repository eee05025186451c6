//! Write-then-rename file replacement.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::ExportError;

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Files that replace their predecessors together.
///
/// Every file is first written to a sibling `*.tmp`; only when all of them
/// are staged are they renamed into place. A failed write leaves every final
/// path as it was and removes the temporary files.
#[derive(Debug, Default)]
pub(crate) struct StagedFiles {
    files: Vec<(PathBuf, Vec<u8>)>,
}

impl StagedFiles {
    pub(crate) fn add(&mut self, path: PathBuf, bytes: Vec<u8>) {
        self.files.push((path, bytes));
    }

    /// # Errors
    ///
    /// Returns [`ExportError::Io`] for the first file that cannot be written
    /// or renamed.
    pub(crate) fn commit(self) -> Result<(), ExportError> {
        let mut staged: Vec<PathBuf> = Vec::with_capacity(self.files.len());
        for (path, bytes) in &self.files {
            let tmp = tmp_path(path);
            if let Err(source) = fs::write(&tmp, bytes) {
                staged.push(tmp);
                discard(&staged);
                return Err(ExportError::Io {
                    path: path.clone(),
                    source,
                });
            }
            staged.push(tmp);
        }

        for (idx, ((path, bytes), tmp)) in self.files.iter().zip(&staged).enumerate() {
            if let Err(source) = fs::rename(tmp, path) {
                discard(&staged[idx..]);
                return Err(ExportError::Io {
                    path: path.clone(),
                    source,
                });
            }
            tracing::debug!(path = %path.display(), bytes = bytes.len(), "file written");
        }
        Ok(())
    }
}

fn discard(tmps: &[PathBuf]) {
    for tmp in tmps {
        if let Err(e) = fs::remove_file(tmp) {
            if e.kind() != io::ErrorKind::NotFound {
                tracing::debug!(path = %tmp.display(), error = %e, "temporary file not removed");
            }
        }
    }
}

/// Writes `bytes` to a sibling `*.tmp` file and renames it over `path`.
///
/// # Errors
///
/// Returns [`ExportError::Io`] if the write or the rename fails.
pub(crate) fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), ExportError> {
    let mut files = StagedFiles::default();
    files.add(path.to_path_buf(), bytes.to_vec());
    files.commit()
}

/// Removes `path`; a file that does not exist is not an error.
///
/// # Errors
///
/// Returns [`ExportError::Io`] if an existing file cannot be removed.
pub(crate) fn remove_if_exists(path: &Path) -> Result<(), ExportError> {
    match fs::remove_file(path) {
        Ok(()) => {
            tracing::debug!(path = %path.display(), "stale file removed");
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(ExportError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}
