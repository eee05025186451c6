//! Composition of extracted fields into an [`alidrop_core::ProductRecord`].
//!
//! Field-level fallbacks live in [`crate::extract`]; this module decides
//! which fields are required and assembles the record.

use alidrop_core::ProductRecord;

use crate::error::ScraperError;
use crate::extract;
use crate::price::canonical_pair;
use crate::sanitize::sanitize_description;
use crate::types::{RawItemDocument, RawReviewsDocument};

const MAIN_PHOTOS_FOLDER: &str = "MainPhotos";
const REVIEW_PHOTOS_FOLDER: &str = "PhotoReview";

/// Builds the canonical record for one item.
///
/// `hosting_base` is the public root that hosted photo folders live under,
/// e.g. `"https://res.cloudinary.com/demo"`.
///
/// # Errors
///
/// Returns [`ScraperError::MalformedSourceData`] if `itemId`, `itemUrl`, or
/// `title` is absent or blank. Every other field falls back to an empty or
/// zero value.
pub fn build_product_record(
    item: &RawItemDocument,
    reviews: Option<&RawReviewsDocument>,
    hosting_base: &str,
) -> Result<ProductRecord, ScraperError> {
    let item_id = extract::item_id(item).ok_or_else(|| ScraperError::MalformedSourceData {
        item_id: "<unknown>".to_owned(),
        reason: "missing result.item.itemId".into(),
    })?;
    let link = extract::item_url(item).ok_or_else(|| ScraperError::MalformedSourceData {
        item_id: item_id.to_owned(),
        reason: "missing result.item.itemUrl".into(),
    })?;
    let title = extract::title(item).ok_or_else(|| ScraperError::MalformedSourceData {
        item_id: item_id.to_owned(),
        reason: "missing result.item.title".into(),
    })?;

    let (price, promotion) = extract::sku_prices(item);
    let (discount_price, original_price) = canonical_pair(price, promotion);

    Ok(ProductRecord {
        link,
        title: title.to_owned(),
        discount_price,
        original_price,
        rating: extract::average_rating(item),
        likes: extract::wish_count(item),
        main_delivery_option: extract::delivery_note(item),
        description: sanitize_description(extract::description(item)),
        specifications: extract::specifications(item),
        main_photo_links: extract::gallery_photos(item),
        reviews_photo_links: extract::review_photos(reviews),
        hosting_folder_link: hosting_folder_links(hosting_base, item_id),
    })
}

/// Upload folder labels for an item: `("{id}/MainPhotos", "{id}/PhotoReview")`.
#[must_use]
pub fn photo_folders(item_id: &str) -> (String, String) {
    (
        format!("{item_id}/{MAIN_PHOTOS_FOLDER}"),
        format!("{item_id}/{REVIEW_PHOTOS_FOLDER}"),
    )
}

fn hosting_folder_links(hosting_base: &str, item_id: &str) -> (String, String) {
    let base = hosting_base.trim_end_matches('/');
    let (main, review) = photo_folders(item_id);
    (format!("{base}/{main}"), format!("{base}/{review}"))
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
