//! Per-product pipeline stages shared by single and batch runs.

use alidrop_core::{BatchItemResult, CommerceRow, Milestone, ProductRecord, ProgressObserver};
use alidrop_scraper::{
    build_product_record, photo_folders, project, ItemSource, PhotoHost, ScraperError,
};

use super::RunContext;

/// Fetches the item and its reviews and builds the canonical record.
pub(super) async fn fetch_record<S, H, O>(
    ctx: &RunContext<S, H, O>,
    item_id: &str,
) -> Result<ProductRecord, ScraperError>
where
    S: ItemSource,
    O: ProgressObserver,
{
    let item = ctx.source.fetch_item(item_id).await?;
    let reviews = ctx.source.fetch_reviews(item_id).await;
    ctx.observer.milestone(item_id, Milestone::DataFetched);

    let record = build_product_record(&item, reviews.as_ref(), &ctx.hosting_base)?;
    ctx.observer.milestone(item_id, Milestone::RecordBuilt);
    Ok(record)
}

/// Re-hosts the record's photos and projects it into commerce rows.
///
/// Only the main photos end up in the rows; review photos are uploaded to
/// their own folder for reference.
pub(super) async fn export_rows<S, H, O>(
    ctx: &RunContext<S, H, O>,
    item_id: &str,
    record: &ProductRecord,
) -> Result<Vec<CommerceRow>, ScraperError>
where
    H: PhotoHost,
    O: ProgressObserver,
{
    let (main_folder, review_folder) = photo_folders(item_id);

    let hosted = if record.has_main_photos() {
        ctx.host.upload(&record.main_photo_links, &main_folder).await
    } else {
        Vec::new()
    };
    if record.has_review_photos() {
        let hosted_reviews = ctx
            .host
            .upload(&record.reviews_photo_links, &review_folder)
            .await;
        tracing::debug!(item_id, uploaded = hosted_reviews.len(), "review photos hosted");
    }
    ctx.observer.milestone(item_id, Milestone::PhotosUploaded);

    let rows = project(record, &hosted)?;
    ctx.observer.milestone(item_id, Milestone::ExportBuilt);
    Ok(rows)
}

/// Runs the whole pipeline for one batch item, turning any failure into a
/// skip.
pub(super) async fn collect<S, H, O>(ctx: &RunContext<S, H, O>, item_id: &str) -> BatchItemResult
where
    S: ItemSource,
    H: PhotoHost,
    O: ProgressObserver,
{
    let outcome = match fetch_record(ctx, item_id).await {
        Ok(record) => export_rows(ctx, item_id, &record)
            .await
            .map(|rows| (record, rows)),
        Err(e) => Err(e),
    };

    match outcome {
        Ok((record, rows)) => BatchItemResult::Exported { record, rows },
        Err(e) => {
            tracing::warn!(item_id, error = %e, "skipping item");
            BatchItemResult::Skipped {
                item_id: item_id.to_owned(),
                reason: e.to_string(),
            }
        }
    }
}
