//! Run orchestration: single item, list of links, and search query.
//!
//! Products are processed one after another. In batch runs a product that
//! cannot be fetched, normalized, or priced is logged and skipped; the
//! remaining products are still exported. Filesystem errors abort the run.

mod item;

use std::path::PathBuf;

use alidrop_core::{AppConfig, BatchItemResult, BatchReport, Milestone, ProgressObserver};
use alidrop_export::{OutputLayout, LINKS_BATCH_LABEL, QUERY_BATCH_LABEL};
use alidrop_scraper::{item_id_from_link, query_from_link, ItemSource, PhotoHost};

/// Collaborators and settings shared by every run.
pub(crate) struct RunContext<S, H, O> {
    pub source: S,
    pub host: H,
    pub observer: O,
    pub output_root: PathBuf,
    pub hosting_base: String,
}

impl<S, H, O> RunContext<S, H, O>
where
    S: ItemSource,
    H: PhotoHost,
    O: ProgressObserver,
{
    pub(crate) fn new(source: S, host: H, observer: O, config: &AppConfig) -> Self {
        Self {
            source,
            host,
            observer,
            output_root: config.output_dir.clone(),
            hosting_base: config.hosting_base_url.clone(),
        }
    }
}

/// Result of a batch run.
#[derive(Debug)]
pub(crate) struct BatchRun {
    pub report: BatchReport,
    pub layout: OutputLayout,
    /// `false` when no product was exported and no files were written.
    pub written: bool,
}

/// Exports one product into `<root>/<id>/`.
///
/// Any failure aborts the run: there is nothing to skip to.
///
/// # Errors
///
/// Returns an error if the link has no item id, the item cannot be fetched or
/// normalized, it has no usable price, or a file cannot be written.
pub(crate) async fn run_single<S, H, O>(
    ctx: &RunContext<S, H, O>,
    link: &str,
) -> anyhow::Result<OutputLayout>
where
    S: ItemSource,
    H: PhotoHost,
    O: ProgressObserver,
{
    let item_id = item_id_from_link(link)?;
    ctx.observer.milestone(&item_id, Milestone::IdResolved);

    let record = item::fetch_record(ctx, &item_id).await?;

    let layout = OutputLayout::new(&ctx.output_root, &item_id);
    layout.write_record(&record)?;
    ctx.observer.milestone(&item_id, Milestone::FilesWritten);

    let rows = item::export_rows(ctx, &item_id, &record).await?;
    layout.write_commerce(&rows)?;

    tracing::info!(item_id, dir = %layout.dir().display(), rows = rows.len(), "item exported");
    Ok(layout)
}

/// Exports every product in `links` into `<root>/list_items/`.
///
/// # Errors
///
/// Returns an error if `links` is empty or the batch files cannot be written.
pub(crate) async fn run_links<S, H, O>(
    ctx: &RunContext<S, H, O>,
    links: &[String],
) -> anyhow::Result<BatchRun>
where
    S: ItemSource,
    H: PhotoHost,
    O: ProgressObserver,
{
    let links: Vec<&str> = links
        .iter()
        .map(String::as_str)
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    if links.is_empty() {
        anyhow::bail!("no links given");
    }
    tracing::info!(count = links.len(), "processing links");

    let mut report = BatchReport::default();
    for (idx, link) in links.iter().enumerate() {
        tracing::info!(position = idx + 1, total = links.len(), link, "processing link");
        match item_id_from_link(link) {
            Ok(item_id) => {
                ctx.observer.milestone(&item_id, Milestone::IdResolved);
                report.push(item::collect(ctx, &item_id).await);
            }
            Err(e) => {
                tracing::warn!(link, error = %e, "skipping link");
                report.push(BatchItemResult::Skipped {
                    item_id: (*link).to_owned(),
                    reason: e.to_string(),
                });
            }
        }
    }

    save_batch(ctx, LINKS_BATCH_LABEL, report)
}

/// Exports up to `limit` products from a search link into
/// `<root>/list_items_from_query/`.
///
/// # Errors
///
/// Returns an error if the link has no query, the search fails or finds
/// nothing, or the batch files cannot be written.
pub(crate) async fn run_search<S, H, O>(
    ctx: &RunContext<S, H, O>,
    link: &str,
    limit: usize,
) -> anyhow::Result<BatchRun>
where
    S: ItemSource,
    H: PhotoHost,
    O: ProgressObserver,
{
    let query = query_from_link(link)?;
    tracing::info!(query, limit, "searching");

    let item_ids = ctx.source.search(&query, limit).await?;
    if item_ids.is_empty() {
        anyhow::bail!("search for \"{query}\" returned no items");
    }

    let mut report = BatchReport::default();
    for (idx, item_id) in item_ids.iter().enumerate() {
        tracing::info!(position = idx + 1, total = item_ids.len(), item_id, "processing search result");
        ctx.observer.milestone(item_id, Milestone::IdResolved);
        report.push(item::collect(ctx, item_id).await);
    }

    save_batch(ctx, QUERY_BATCH_LABEL, report)
}

fn save_batch<S, H, O>(
    ctx: &RunContext<S, H, O>,
    label: &str,
    report: BatchReport,
) -> anyhow::Result<BatchRun>
where
    O: ProgressObserver,
{
    let layout = OutputLayout::new(&ctx.output_root, label);
    let written = layout.write_batch(&report)?;
    if written {
        ctx.observer.milestone(label, Milestone::BatchSaved);
    } else {
        tracing::warn!(label, skipped = report.skipped().len(), "no products exported");
    }
    Ok(BatchRun {
        report,
        layout,
        written,
    })
}

#[cfg(test)]
#[path = "run_test.rs"]
mod tests;
