//! Response types for the RapidAPI "aliexpress-datahub" endpoints.
//!
//! ## Observed shape
//!
//! Every endpoint wraps its payload in `{"result": {"status": {...}, ...}}`.
//! A failed lookup still returns HTTP 200 with `result.status.data == "error"`.
//!
//! ### Identity fields
//! `itemId` arrives as a JSON number on `item_detail_7` and as a string on
//! `item_search_4`. Both are read into `Option<String>`.
//!
//! ### URLs
//! `itemUrl`, `description.images[]` and `reviewImages[]` are
//! protocol-relative (`"//www.aliexpress.com/item/1005006.html"`).
//!
//! ### Prices
//! `sku.def.price` is either a single amount (`"4.99"`) or a range
//! (`"4.99 - 7.50"`) when variants differ. `promotionPrice` follows the same
//! shape and is absent when no promotion runs.
//!
//! ### Ratings
//! `reviews.averageStar` has been seen both as `4.8` and `"4.8"`.
//!
//! Every level below the root is `Option` and read through [`crate::lenient`],
//! so an absent, `null`, or wrongly-typed node degrades to "not present"
//! instead of failing the document.

use serde::Deserialize;

use crate::lenient;

/// `result.status`, present on every endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ResultStatus {
    #[serde(default, deserialize_with = "lenient::string")]
    pub data: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub msg: Option<String>,
}

impl ResultStatus {
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.data.as_deref() == Some("error")
    }
}

/// Top-level response from `GET /item_detail_7`.
#[derive(Debug, Default, Deserialize)]
pub struct RawItemDocument {
    #[serde(default, deserialize_with = "lenient::optional")]
    pub result: Option<ItemResult>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ItemResult {
    #[serde(default, deserialize_with = "lenient::optional")]
    pub status: Option<ResultStatus>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub item: Option<RawItem>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub delivery: Option<RawDelivery>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub reviews: Option<RawReviewSummary>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawItem {
    #[serde(default, deserialize_with = "lenient::string")]
    pub item_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub item_url: Option<String>,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub wish_count: Option<i64>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub properties: Option<RawProperties>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub description: Option<RawDescription>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub sku: Option<RawSku>,
}

/// `item.properties`: the specification table.
#[derive(Debug, Default, Deserialize)]
pub struct RawProperties {
    #[serde(default, deserialize_with = "lenient::object_list")]
    pub list: Option<Vec<RawProperty>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawProperty {
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub value: Option<String>,
}

/// `item.description`: rich-text body plus the gallery image list.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct RawDescription {
    #[serde(default, deserialize_with = "lenient::string")]
    pub text: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub html: Option<String>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub images: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawSku {
    #[serde(default, deserialize_with = "lenient::optional")]
    pub def: Option<RawSkuDefault>,
}

/// `item.sku.def`: pricing of the storefront-default SKU.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSkuDefault {
    #[serde(default, deserialize_with = "lenient::string")]
    pub price: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub promotion_price: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDelivery {
    #[serde(default, deserialize_with = "lenient::object_list")]
    pub shipping_list: Option<Vec<RawShippingOption>>,
}

/// One shipping option. `note` is a list of display lines, e.g.
/// `["Free shipping", "Mar 03 - Mar 12"]`.
#[derive(Debug, Default, Deserialize)]
pub struct RawShippingOption {
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub note: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawReviewSummary {
    #[serde(default, deserialize_with = "lenient::float")]
    pub average_star: Option<f64>,
}

/// Top-level response from `GET /item_review`.
#[derive(Debug, Default, Deserialize)]
pub struct RawReviewsDocument {
    #[serde(default, deserialize_with = "lenient::optional")]
    pub result: Option<ReviewsResult>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewsResult {
    #[serde(default, deserialize_with = "lenient::optional")]
    pub status: Option<ResultStatus>,
    #[serde(default, deserialize_with = "lenient::object_list")]
    pub result_list: Option<Vec<RawReviewEntry>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawReviewEntry {
    #[serde(default, deserialize_with = "lenient::optional")]
    pub review: Option<RawReview>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawReview {
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub review_images: Vec<String>,
}

/// Top-level response from `GET /item_search_4`.
#[derive(Debug, Default, Deserialize)]
pub struct RawSearchDocument {
    #[serde(default, deserialize_with = "lenient::optional")]
    pub result: Option<SearchResult>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    #[serde(default, deserialize_with = "lenient::optional")]
    pub status: Option<ResultStatus>,
    #[serde(default, deserialize_with = "lenient::object_list")]
    pub result_list: Option<Vec<RawSearchEntry>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawSearchEntry {
    #[serde(default, deserialize_with = "lenient::optional")]
    pub item: Option<RawSearchItem>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSearchItem {
    #[serde(default, deserialize_with = "lenient::string")]
    pub item_id: Option<String>,
}

impl RawItemDocument {
    /// `result.item`, when present.
    #[must_use]
    pub fn item(&self) -> Option<&RawItem> {
        self.result.as_ref()?.item.as_ref()
    }

    /// `true` when the API reported the lookup itself as failed.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.result
            .as_ref()
            .and_then(|r| r.status.as_ref())
            .is_some_and(ResultStatus::is_error)
    }
}

impl RawReviewsDocument {
    /// Parses a reviews payload, treating any shape mismatch as "no reviews".
    #[must_use]
    pub fn from_value_lenient(value: serde_json::Value) -> Option<Self> {
        let doc: Self = serde_json::from_value(value).ok()?;
        if doc.is_error() {
            return None;
        }
        Some(doc)
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.result
            .as_ref()
            .and_then(|r| r.status.as_ref())
            .is_some_and(ResultStatus::is_error)
    }
}

impl RawSearchDocument {
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.result
            .as_ref()
            .and_then(|r| r.status.as_ref())
            .is_some_and(ResultStatus::is_error)
    }
}
