//! Output folder layout: `<root>/<label>/<label>.json`, `<label>.csv`,
//! `<label>_shopify.csv`.

use std::fs;
use std::path::{Path, PathBuf};

use alidrop_core::{BatchReport, CommerceRow, ProductRecord};

use crate::atomic::{remove_if_exists, StagedFiles};
use crate::commerce_csv::{self, write_commerce_single};
use crate::error::ExportError;
use crate::json::encode_snapshot;
use crate::native_csv;

/// Folder label for a batch built from an explicit list of links.
pub const LINKS_BATCH_LABEL: &str = "list_items";
/// Folder label for a batch built from a search query.
pub const QUERY_BATCH_LABEL: &str = "list_items_from_query";

/// Paths for one export, keyed by a label (an item id or a batch label).
///
/// Two runs sharing a label write to the same files; callers must not run
/// them concurrently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    dir: PathBuf,
    label: String,
}

impl OutputLayout {
    #[must_use]
    pub fn new(root: impl AsRef<Path>, label: &str) -> Self {
        Self {
            dir: root.as_ref().join(label),
            label: label.to_owned(),
        }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[must_use]
    pub fn json_path(&self) -> PathBuf {
        self.dir.join(format!("{}.json", self.label))
    }

    #[must_use]
    pub fn native_csv_path(&self) -> PathBuf {
        self.dir.join(format!("{}.csv", self.label))
    }

    #[must_use]
    pub fn commerce_csv_path(&self) -> PathBuf {
        self.dir.join(format!("{}_shopify.csv", self.label))
    }

    fn ensure_dir(&self) -> Result<(), ExportError> {
        fs::create_dir_all(&self.dir).map_err(|source| ExportError::Io {
            path: self.dir.clone(),
            source,
        })
    }

    /// Writes one record's JSON snapshot and native CSV together.
    ///
    /// A commerce CSV left by an earlier run is removed first, so the folder
    /// never pairs this record with rows projected from an older one.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError`] if the folder or either file cannot be written,
    /// or the stale commerce CSV cannot be removed.
    pub fn write_record(&self, record: &ProductRecord) -> Result<(), ExportError> {
        self.ensure_dir()?;
        let json_path = self.json_path();
        let csv_path = self.native_csv_path();

        let mut files = StagedFiles::default();
        files.add(json_path.clone(), encode_snapshot(&json_path, record)?);
        files.add(csv_path.clone(), native_csv::encode(&csv_path, &[record])?);

        remove_if_exists(&self.commerce_csv_path())?;
        files.commit()
    }

    /// Writes one product's commerce rows, all under Handle 1.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError`] if the folder or the file cannot be written.
    pub fn write_commerce(&self, rows: &[CommerceRow]) -> Result<(), ExportError> {
        self.ensure_dir()?;
        write_commerce_single(&self.commerce_csv_path(), rows)
    }

    /// Writes all three files for the exported items of `report`.
    ///
    /// The files replace their predecessors together: if any of them cannot
    /// be written, none of the previous batch files is touched.
    /// Returns `false` without touching the filesystem when nothing was
    /// exported.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError`] if the folder or any file cannot be written.
    pub fn write_batch(&self, report: &BatchReport) -> Result<bool, ExportError> {
        if report.is_empty() {
            tracing::info!(label = %self.label, "batch has no exported items; nothing written");
            return Ok(false);
        }

        let records = report.records();
        let json_path = self.json_path();
        let csv_path = self.native_csv_path();
        let commerce_path = self.commerce_csv_path();

        let mut files = StagedFiles::default();
        files.add(json_path.clone(), encode_snapshot(&json_path, &records)?);
        files.add(csv_path.clone(), native_csv::encode(&csv_path, &records)?);
        files.add(
            commerce_path.clone(),
            commerce_csv::encode(&commerce_path, &report.row_groups())?,
        );

        self.ensure_dir()?;
        files.commit()?;

        tracing::info!(
            label = %self.label,
            dir = %self.dir.display(),
            exported = records.len(),
            skipped = report.skipped().len(),
            "batch files written"
        );
        Ok(true)
    }
}
