//! Best-effort field extraction from raw item, review and search documents.
//!
//! Every accessor walks an explicit `Option` chain and falls back to an empty
//! or zero value; none of them fail. Which fields are *required* is decided
//! by [`crate::normalize`], not here.

use crate::types::{RawDescription, RawItemDocument, RawReviewsDocument, RawSearchDocument};

/// Makes a source URL absolute.
///
/// Protocol-relative URLs (`//host/path`) get an `https:` prefix, URLs that
/// already carry a scheme are kept, and bare `host/path` values get
/// `https://`. Blank input yields `None`.
#[must_use]
pub fn absolute_url(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if raw.starts_with("//") {
        return Some(format!("https:{raw}"));
    }
    if raw.contains("://") {
        return Some(raw.to_owned());
    }
    Some(format!("https://{}", raw.trim_start_matches('/')))
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(|s| s.trim()).filter(|s| !s.is_empty())
}

/// `result.item.itemId`, trimmed; `None` when absent or blank.
#[must_use]
pub fn item_id(doc: &RawItemDocument) -> Option<&str> {
    non_empty(doc.item()?.item_id.as_ref())
}

/// `result.item.title`, verbatim; `None` when absent or blank.
#[must_use]
pub fn title(doc: &RawItemDocument) -> Option<&str> {
    doc.item()?
        .title
        .as_deref()
        .filter(|t| !t.trim().is_empty())
}

/// `result.item.itemUrl` made absolute.
#[must_use]
pub fn item_url(doc: &RawItemDocument) -> Option<String> {
    non_empty(doc.item()?.item_url.as_ref()).and_then(absolute_url)
}

/// Specification table as `"name: value"` lines in source order.
///
/// Entries without a name are skipped; a missing value renders as empty.
#[must_use]
pub fn specifications(doc: &RawItemDocument) -> String {
    let Some(list) = doc
        .item()
        .and_then(|i| i.properties.as_ref())
        .and_then(|p| p.list.as_ref())
    else {
        return String::new();
    };

    list.iter()
        .filter_map(|prop| {
            let name = non_empty(prop.name.as_ref())?;
            let value = prop.value.as_deref().unwrap_or("").trim();
            Some(format!("{name}: {value}"))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Delivery note of the first shipping option.
///
/// Returns `"<note[0]>\nDelivery: <note[1]>"` when the note has at least two
/// lines, otherwise an empty string.
#[must_use]
pub fn delivery_note(doc: &RawItemDocument) -> String {
    let note = doc
        .result
        .as_ref()
        .and_then(|r| r.delivery.as_ref())
        .and_then(|d| d.shipping_list.as_ref())
        .and_then(|list| list.first())
        .map(|option| option.note.as_slice());

    match note {
        Some([first, second, ..]) => format!("{first}\nDelivery: {second}"),
        _ => String::new(),
    }
}

/// `result.item.description`, when present.
#[must_use]
pub fn description(doc: &RawItemDocument) -> Option<&RawDescription> {
    doc.item()?.description.as_ref()
}

/// Gallery photos (`description.images[]`) as absolute URLs, in source order.
#[must_use]
pub fn gallery_photos(doc: &RawItemDocument) -> Vec<String> {
    description(doc)
        .map(|d| d.images.iter().filter_map(|u| absolute_url(u)).collect())
        .unwrap_or_default()
}

/// `result.item.wishCount`, `0` when absent.
#[must_use]
pub fn wish_count(doc: &RawItemDocument) -> i64 {
    doc.item().and_then(|i| i.wish_count).unwrap_or(0)
}

/// `result.reviews.averageStar`, `0.0` when absent.
#[must_use]
pub fn average_rating(doc: &RawItemDocument) -> f64 {
    doc.result
        .as_ref()
        .and_then(|r| r.reviews.as_ref())
        .and_then(|r| r.average_star)
        .unwrap_or(0.0)
}

/// Raw `(price, promotionPrice)` strings of the default SKU.
#[must_use]
pub fn sku_prices(doc: &RawItemDocument) -> (Option<&str>, Option<&str>) {
    let def = doc
        .item()
        .and_then(|i| i.sku.as_ref())
        .and_then(|s| s.def.as_ref());
    match def {
        Some(def) => (
            non_empty(def.price.as_ref()),
            non_empty(def.promotion_price.as_ref()),
        ),
        None => (None, None),
    }
}

/// Review photos flattened across all review entries, as absolute URLs.
///
/// A missing document, a missing result list, or entries without images all
/// contribute nothing.
#[must_use]
pub fn review_photos(reviews: Option<&RawReviewsDocument>) -> Vec<String> {
    let Some(entries) = reviews
        .and_then(|doc| doc.result.as_ref())
        .and_then(|r| r.result_list.as_ref())
    else {
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(|entry| entry.review.as_ref())
        .flat_map(|review| review.review_images.iter())
        .filter_map(|u| absolute_url(u))
        .collect()
}

/// Item ids from a search response, in ranking order.
#[must_use]
pub fn search_item_ids(doc: &RawSearchDocument) -> Vec<String> {
    doc.result
        .as_ref()
        .and_then(|r| r.result_list.as_ref())
        .map(|entries| {
            entries
                .iter()
                .filter_map(|e| e.item.as_ref())
                .filter_map(|i| non_empty(i.item_id.as_ref()))
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
