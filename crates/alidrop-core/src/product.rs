use serde::{Deserialize, Serialize};

/// Column order of the native CSV export: a synthetic `Handle` followed by
/// every [`ProductRecord`] field in declaration order.
pub const NATIVE_COLUMNS: [&str; 13] = [
    "Handle",
    "Link",
    "Title",
    "DiscountPrice",
    "OriginalPrice",
    "Rating",
    "Likes",
    "MainDeliveryOption",
    "Description",
    "Specifications",
    "MainPhotoLinks",
    "ReviewsPhotoLinks",
    "HostingFolderLink",
];

/// A marketplace product normalized into one flat record, independent of any
/// export schema.
///
/// Serialized keys match the field names of the JSON snapshot exactly
/// (`Link`, `Title`, `DiscountPrice`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProductRecord {
    /// Absolute product page URL, e.g. `"https://www.aliexpress.com/item/1005006.html"`.
    pub link: String,
    pub title: String,
    /// Promotional price exactly as the source returns it: empty, `"4.99"`,
    /// or a range such as `"4.99 - 7.50"`.
    pub discount_price: String,
    /// Regular price, same shape as `discount_price`.
    pub original_price: String,
    /// Average review star rating; `0.0` when the source has none.
    pub rating: f64,
    /// Wish-list count; `0` when absent.
    pub likes: i64,
    pub main_delivery_option: String,
    /// Plain-text description with markup and tracking fragments removed.
    pub description: String,
    /// `"name: value"` pairs, one per line.
    pub specifications: String,
    pub main_photo_links: Vec<String>,
    pub reviews_photo_links: Vec<String>,
    /// Hosting folder URLs for `(main photos, review photos)`. Informational
    /// only; uploads are addressed by folder label, not by these URLs.
    pub hosting_folder_link: (String, String),
}

impl ProductRecord {
    #[must_use]
    pub fn has_main_photos(&self) -> bool {
        !self.main_photo_links.is_empty()
    }

    #[must_use]
    pub fn has_review_photos(&self) -> bool {
        !self.reviews_photo_links.is_empty()
    }
}
