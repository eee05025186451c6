//! The native CSV schema: one row per record, list fields comma-joined.

use std::path::Path;

use alidrop_core::{ProductRecord, NATIVE_COLUMNS};
use serde::Serialize;

use crate::atomic::write_atomic;
use crate::error::ExportError;

/// Borrowed CSV view of a [`ProductRecord`]; the record itself is never
/// modified.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct NativeCsvRow<'a> {
    handle: usize,
    link: &'a str,
    title: &'a str,
    discount_price: &'a str,
    original_price: &'a str,
    rating: f64,
    likes: i64,
    main_delivery_option: &'a str,
    description: &'a str,
    specifications: &'a str,
    main_photo_links: String,
    reviews_photo_links: String,
    hosting_folder_link: String,
}

impl<'a> NativeCsvRow<'a> {
    fn new(handle: usize, record: &'a ProductRecord) -> Self {
        let (main_folder, review_folder) = &record.hosting_folder_link;
        Self {
            handle,
            link: &record.link,
            title: &record.title,
            discount_price: &record.discount_price,
            original_price: &record.original_price,
            rating: record.rating,
            likes: record.likes,
            main_delivery_option: &record.main_delivery_option,
            description: &record.description,
            specifications: &record.specifications,
            main_photo_links: record.main_photo_links.join(","),
            reviews_photo_links: record.reviews_photo_links.join(","),
            hosting_folder_link: format!("{main_folder},{review_folder}"),
        }
    }
}

pub(crate) fn native_csv_bytes(records: &[&ProductRecord]) -> Result<Vec<u8>, csv::Error> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(NATIVE_COLUMNS)?;
    for (idx, record) in records.iter().enumerate() {
        writer.serialize(NativeCsvRow::new(idx + 1, record))?;
    }
    writer.into_inner().map_err(|e| e.into_error().into())
}

pub(crate) fn encode(path: &Path, records: &[&ProductRecord]) -> Result<Vec<u8>, ExportError> {
    native_csv_bytes(records).map_err(|source| ExportError::Csv {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes `records` in the native schema, `Handle` numbered from 1.
///
/// The header row is written even when `records` is empty.
///
/// # Errors
///
/// Returns [`ExportError::Csv`] if a row cannot be encoded or
/// [`ExportError::Io`] if the file cannot be written.
pub fn write_native_csv(path: &Path, records: &[&ProductRecord]) -> Result<(), ExportError> {
    write_atomic(path, &encode(path, records)?)
}
