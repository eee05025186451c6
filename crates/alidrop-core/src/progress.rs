//! Side-channel progress notifications for product runs.
//!
//! Observers never influence what gets written; a run with `()` as its
//! observer produces byte-identical output to one with a logging observer.

use std::fmt;

/// A named stage of the per-product pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Milestone {
    IdResolved,
    DataFetched,
    RecordBuilt,
    FilesWritten,
    PhotosUploaded,
    ExportBuilt,
    /// Emitted once per batch, after the aggregate files are written.
    BatchSaved,
}

impl fmt::Display for Milestone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Milestone::IdResolved => "id resolved",
            Milestone::DataFetched => "data fetched",
            Milestone::RecordBuilt => "record built",
            Milestone::FilesWritten => "files written",
            Milestone::PhotosUploaded => "photos uploaded",
            Milestone::ExportBuilt => "export built",
            Milestone::BatchSaved => "batch saved",
        };
        f.write_str(label)
    }
}

pub trait ProgressObserver {
    /// `subject` is the item id, or the batch label for [`Milestone::BatchSaved`].
    fn milestone(&self, subject: &str, milestone: Milestone);
}

impl ProgressObserver for () {
    fn milestone(&self, _subject: &str, _milestone: Milestone) {}
}

/// Reports milestones as `tracing` events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl ProgressObserver for TracingObserver {
    fn milestone(&self, subject: &str, milestone: Milestone) {
        tracing::info!(subject, milestone = %milestone, "progress");
    }
}
