//! Shopify product-import CSV row.
//!
//! The column set and order are dictated by Shopify's bulk product import.
//! A product spans one or more rows: the first carries the listing fields,
//! every further row only an image. Rows of one product share a `Handle`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Header of the commerce CSV, in write order.
pub const COMMERCE_COLUMNS: [&str; 51] = [
    "Handle",
    "Title",
    "Body (HTML)",
    "Vendor",
    "Product Category",
    "Type",
    "Tags",
    "Published",
    "Option1 Name",
    "Option1 Value",
    "Option2 Name",
    "Option2 Value",
    "Option3 Name",
    "Option3 Value",
    "Variant SKU",
    "Variant Grams",
    "Variant Inventory Tracker",
    "Variant Inventory Qty",
    "Variant Inventory Policy",
    "Variant Fulfillment Service",
    "Variant Price",
    "Variant Compare At Price",
    "Variant Requires Shipping",
    "Variant Taxable",
    "Variant Barcode",
    "Image Src",
    "Image Position",
    "Image Alt Text",
    "Gift Card",
    "SEO Title",
    "SEO Description",
    "Google Shopping / Google Product Category",
    "Google Shopping / Gender",
    "Google Shopping / Age Group",
    "Google Shopping / MPN",
    "Google Shopping / AdWords Grouping",
    "Google Shopping / AdWords Labels",
    "Google Shopping / Condition",
    "Google Shopping / Custom Product",
    "Google Shopping / Custom Label 0",
    "Google Shopping / Custom Label 1",
    "Google Shopping / Custom Label 2",
    "Google Shopping / Custom Label 3",
    "Google Shopping / Custom Label 4",
    "Variant Image",
    "Variant Weight Unit",
    "Variant Tax Code",
    "Cost per item",
    "Price / International",
    "Compare At Price / International",
    "Status",
];

/// One row of the Shopify import CSV.
///
/// `Option` fields serialize as an empty cell when `None`, which is how
/// image-only continuation rows leave every listing column blank.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommerceRow {
    /// Assigned by the exporter, never by the projector.
    #[serde(rename = "Handle")]
    pub handle: Option<usize>,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Body (HTML)")]
    pub body_html: String,
    #[serde(rename = "Vendor")]
    pub vendor: String,
    #[serde(rename = "Product Category")]
    pub product_category: String,
    #[serde(rename = "Type")]
    pub product_type: String,
    #[serde(rename = "Tags")]
    pub tags: String,
    #[serde(rename = "Published")]
    pub published: Option<bool>,
    #[serde(rename = "Option1 Name")]
    pub option1_name: String,
    #[serde(rename = "Option1 Value")]
    pub option1_value: String,
    #[serde(rename = "Option2 Name")]
    pub option2_name: String,
    #[serde(rename = "Option2 Value")]
    pub option2_value: String,
    #[serde(rename = "Option3 Name")]
    pub option3_name: String,
    #[serde(rename = "Option3 Value")]
    pub option3_value: String,
    #[serde(rename = "Variant SKU")]
    pub variant_sku: String,
    #[serde(rename = "Variant Grams")]
    pub variant_grams: String,
    #[serde(rename = "Variant Inventory Tracker")]
    pub variant_inventory_tracker: String,
    #[serde(rename = "Variant Inventory Qty")]
    pub variant_inventory_qty: Option<u32>,
    #[serde(rename = "Variant Inventory Policy")]
    pub variant_inventory_policy: String,
    #[serde(rename = "Variant Fulfillment Service")]
    pub variant_fulfillment_service: String,
    #[serde(rename = "Variant Price")]
    pub variant_price: Option<Decimal>,
    #[serde(rename = "Variant Compare At Price")]
    pub variant_compare_at_price: Option<Decimal>,
    #[serde(rename = "Variant Requires Shipping")]
    pub variant_requires_shipping: String,
    #[serde(rename = "Variant Taxable")]
    pub variant_taxable: String,
    #[serde(rename = "Variant Barcode")]
    pub variant_barcode: String,
    #[serde(rename = "Image Src")]
    pub image_src: String,
    #[serde(rename = "Image Position")]
    pub image_position: usize,
    #[serde(rename = "Image Alt Text")]
    pub image_alt_text: String,
    #[serde(rename = "Gift Card")]
    pub gift_card: String,
    #[serde(rename = "SEO Title")]
    pub seo_title: String,
    #[serde(rename = "SEO Description")]
    pub seo_description: String,
    #[serde(rename = "Google Shopping / Google Product Category")]
    pub google_product_category: String,
    #[serde(rename = "Google Shopping / Gender")]
    pub google_gender: String,
    #[serde(rename = "Google Shopping / Age Group")]
    pub google_age_group: String,
    #[serde(rename = "Google Shopping / MPN")]
    pub google_mpn: String,
    #[serde(rename = "Google Shopping / AdWords Grouping")]
    pub google_adwords_grouping: String,
    #[serde(rename = "Google Shopping / AdWords Labels")]
    pub google_adwords_labels: String,
    #[serde(rename = "Google Shopping / Condition")]
    pub google_condition: String,
    #[serde(rename = "Google Shopping / Custom Product")]
    pub google_custom_product: String,
    #[serde(rename = "Google Shopping / Custom Label 0")]
    pub google_custom_label_0: String,
    #[serde(rename = "Google Shopping / Custom Label 1")]
    pub google_custom_label_1: String,
    #[serde(rename = "Google Shopping / Custom Label 2")]
    pub google_custom_label_2: String,
    #[serde(rename = "Google Shopping / Custom Label 3")]
    pub google_custom_label_3: String,
    #[serde(rename = "Google Shopping / Custom Label 4")]
    pub google_custom_label_4: String,
    #[serde(rename = "Variant Image")]
    pub variant_image: String,
    #[serde(rename = "Variant Weight Unit")]
    pub variant_weight_unit: String,
    #[serde(rename = "Variant Tax Code")]
    pub variant_tax_code: String,
    #[serde(rename = "Cost per item")]
    pub cost_per_item: String,
    #[serde(rename = "Price / International")]
    pub price_international: Option<Decimal>,
    #[serde(rename = "Compare At Price / International")]
    pub compare_at_price_international: Option<Decimal>,
    #[serde(rename = "Status")]
    pub status: String,
}

impl CommerceRow {
    /// An image-only continuation row: everything blank except the image.
    #[must_use]
    pub fn image_only(image_src: impl Into<String>, image_position: usize) -> Self {
        Self {
            image_src: image_src.into(),
            image_position,
            ..Self::default()
        }
    }

    /// `true` when the row carries listing fields rather than just an image.
    #[must_use]
    pub fn is_primary(&self) -> bool {
        !self.title.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_only_row_is_blank_except_image() {
        let row = CommerceRow::image_only("https://cdn.example.com/b.jpg", 2);
        assert_eq!(row.image_src, "https://cdn.example.com/b.jpg");
        assert_eq!(row.image_position, 2);
        assert!(row.title.is_empty());
        assert!(row.status.is_empty());
        assert!(row.variant_price.is_none());
        assert!(row.published.is_none());
        assert!(row.handle.is_none());
        assert!(!row.is_primary());
    }

    #[test]
    fn column_list_matches_serialized_field_names() {
        let json = serde_json::to_value(CommerceRow::default()).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), COMMERCE_COLUMNS.len());
        for column in COMMERCE_COLUMNS {
            assert!(object.contains_key(column), "missing column {column}");
        }
    }
}
