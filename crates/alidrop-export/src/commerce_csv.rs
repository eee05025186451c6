//! The Shopify import CSV.
//!
//! Handles are assigned here, one per product: every row of a product shares
//! its product's Handle, and products are numbered 1, 2, 3, ... in order.

use std::path::Path;

use alidrop_core::{CommerceRow, COMMERCE_COLUMNS};

use crate::atomic::write_atomic;
use crate::error::ExportError;

pub(crate) fn commerce_csv_bytes(groups: &[&[CommerceRow]]) -> Result<Vec<u8>, csv::Error> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(COMMERCE_COLUMNS)?;

    for (idx, rows) in groups.iter().enumerate() {
        let handle = idx + 1;
        for row in *rows {
            let row = CommerceRow {
                handle: Some(handle),
                ..row.clone()
            };
            writer.serialize(&row)?;
        }
    }
    writer.into_inner().map_err(|e| e.into_error().into())
}

pub(crate) fn encode(path: &Path, groups: &[&[CommerceRow]]) -> Result<Vec<u8>, ExportError> {
    commerce_csv_bytes(groups).map_err(|source| ExportError::Csv {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes the rows of a single product; every row gets Handle 1.
///
/// # Errors
///
/// Returns [`ExportError::Csv`] if a row cannot be encoded or
/// [`ExportError::Io`] if the file cannot be written.
pub fn write_commerce_single(path: &Path, rows: &[CommerceRow]) -> Result<(), ExportError> {
    write_atomic(path, &encode(path, &[rows])?)
}

/// Writes the rows of several products, one Handle per product.
///
/// # Errors
///
/// Same as [`write_commerce_single`].
pub fn write_commerce_batch(path: &Path, groups: &[&[CommerceRow]]) -> Result<(), ExportError> {
    write_atomic(path, &encode(path, groups)?)
}
