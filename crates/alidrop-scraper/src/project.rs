//! Projection of a [`ProductRecord`] into Shopify import rows.

use alidrop_core::{CommerceRow, ProductRecord};

use crate::error::ScraperError;
use crate::price::{compare_at_price, representative_price, PriceError};

const PRODUCT_CATEGORY: &str = "Uncategorized";
const INVENTORY_TRACKER: &str = "shopify";
const INVENTORY_QTY: u32 = 100;
const INVENTORY_POLICY: &str = "continue";
const FULFILLMENT_SERVICE: &str = "manual";
const STATUS: &str = "draft";

/// Maps one record plus its hosted photo URLs to import rows.
///
/// Row 0 carries every listing column and the first photo; each further
/// photo gets an image-only row at position `index + 1`. With no photos a
/// single primary row with an empty image is produced, so the result always
/// has `max(1, hosted_photos.len())` rows. Handles are left unset.
///
/// # Errors
///
/// Returns [`ScraperError::PriceResolution`] when the record has no usable
/// price; a zero price is never substituted.
pub fn project(
    record: &ProductRecord,
    hosted_photos: &[String],
) -> Result<Vec<CommerceRow>, ScraperError> {
    let price_error = |e: PriceError| ScraperError::PriceResolution {
        subject: record.link.clone(),
        reason: e.to_string(),
    };
    let price = representative_price(&record.discount_price, &record.original_price)
        .map_err(price_error)?;
    let compare_at = compare_at_price(&record.discount_price, &record.original_price)
        .map_err(price_error)?;

    let body_html = format!("{}\n{}", record.specifications, record.description)
        .trim()
        .to_owned();

    let primary = CommerceRow {
        title: record.title.clone(),
        body_html,
        product_category: PRODUCT_CATEGORY.to_owned(),
        tags: record.title.clone(),
        published: Some(false),
        variant_inventory_tracker: INVENTORY_TRACKER.to_owned(),
        variant_inventory_qty: Some(INVENTORY_QTY),
        variant_inventory_policy: INVENTORY_POLICY.to_owned(),
        variant_fulfillment_service: FULFILLMENT_SERVICE.to_owned(),
        variant_price: Some(price),
        variant_compare_at_price: compare_at,
        image_src: hosted_photos.first().cloned().unwrap_or_default(),
        image_position: 1,
        price_international: Some(price),
        compare_at_price_international: compare_at,
        status: STATUS.to_owned(),
        ..CommerceRow::default()
    };

    let mut rows = Vec::with_capacity(hosted_photos.len().max(1));
    rows.push(primary);
    rows.extend(
        hosted_photos
            .iter()
            .enumerate()
            .skip(1)
            .map(|(idx, url)| CommerceRow::image_only(url.as_str(), idx + 1)),
    );
    Ok(rows)
}
