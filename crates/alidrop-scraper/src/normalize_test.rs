use serde_json::json;

use super::*;
use crate::fixtures::{item_doc, item_json, reviews_doc, reviews_json};

const BASE: &str = "https://res.cloudinary.com/demo";

fn widget_json() -> serde_json::Value {
    json!({
        "result": {
            "item": {
                "itemId": "123",
                "title": "Widget",
                "itemUrl": "//www.aliexpress.com/item/123.html",
                "description": {"images": ["//img.example/a.jpg", "//img.example/b.jpg"]},
                "sku": {"def": {"price": "5"}}
            }
        }
    })
}

// -----------------------------------------------------------------------
// build_product_record
// -----------------------------------------------------------------------

#[test]
fn full_document_builds_complete_record() {
    let item = item_doc(item_json());
    let reviews = reviews_doc(reviews_json());
    let record = build_product_record(&item, Some(&reviews), BASE).unwrap();

    assert_eq!(record.link, "https://www.aliexpress.com/item/1005006123456.html");
    assert_eq!(record.title, "Silicone Phone Case");
    assert_eq!(record.discount_price, "3.10");
    assert_eq!(record.original_price, "4.20 - 6.00");
    assert!((record.rating - 4.8).abs() < f64::EPSILON);
    assert_eq!(record.likes, 512);
    assert_eq!(record.main_delivery_option, "Free shipping\nDelivery: Mar 03 - Mar 12");
    assert_eq!(record.description, "Soft & durable Fits most phones");
    assert_eq!(
        record.specifications,
        "Material: Silicone\nBrand Name: NoEnName_Null"
    );
    assert_eq!(record.main_photo_links.len(), 2);
    assert_eq!(record.reviews_photo_links.len(), 3);
}

#[test]
fn widget_scenario_record_fields() {
    let record = build_product_record(&item_doc(widget_json()), None, BASE).unwrap();

    assert_eq!(record.discount_price, "");
    assert_eq!(record.original_price, "5");
    assert_eq!(
        record.main_photo_links,
        vec!["https://img.example/a.jpg", "https://img.example/b.jpg"]
    );
    assert!(record.reviews_photo_links.is_empty());
    assert!(record.rating.abs() < f64::EPSILON);
    assert_eq!(record.likes, 0);
    assert_eq!(record.main_delivery_option, "");
    assert_eq!(record.description, "");
    assert_eq!(record.specifications, "");
}

#[test]
fn every_photo_link_is_absolute() {
    let record = build_product_record(
        &item_doc(item_json()),
        Some(&reviews_doc(reviews_json())),
        BASE,
    )
    .unwrap();
    assert!(record
        .main_photo_links
        .iter()
        .chain(&record.reviews_photo_links)
        .all(|u| u.starts_with("https://")));
}

#[test]
fn hosting_folder_links_use_base_and_id() {
    let record =
        build_product_record(&item_doc(widget_json()), None, "https://cdn.example/acct/").unwrap();
    assert_eq!(
        record.hosting_folder_link,
        (
            "https://cdn.example/acct/123/MainPhotos".to_owned(),
            "https://cdn.example/acct/123/PhotoReview".to_owned()
        )
    );
}

#[test]
fn missing_item_id_is_malformed() {
    let mut value = widget_json();
    value["result"]["item"]
        .as_object_mut()
        .unwrap()
        .remove("itemId");
    let err = build_product_record(&item_doc(value), None, BASE).unwrap_err();
    assert!(
        matches!(err, ScraperError::MalformedSourceData { ref reason, .. } if reason.contains("itemId")),
        "got {err:?}"
    );
}

#[test]
fn missing_url_is_malformed_with_item_id() {
    let mut value = widget_json();
    value["result"]["item"]["itemUrl"] = serde_json::Value::Null;
    let err = build_product_record(&item_doc(value), None, BASE).unwrap_err();
    match err {
        ScraperError::MalformedSourceData { item_id, reason } => {
            assert_eq!(item_id, "123");
            assert!(reason.contains("itemUrl"));
        }
        other => panic!("expected MalformedSourceData, got {other:?}"),
    }
}

#[test]
fn blank_title_is_malformed() {
    let mut value = widget_json();
    value["result"]["item"]["title"] = json!("");
    let err = build_product_record(&item_doc(value), None, BASE).unwrap_err();
    assert!(matches!(err, ScraperError::MalformedSourceData { .. }));
}

#[test]
fn missing_description_keeps_record_buildable() {
    let mut value = widget_json();
    value["result"]["item"]
        .as_object_mut()
        .unwrap()
        .remove("description");
    let record = build_product_record(&item_doc(value), None, BASE).unwrap();
    assert!(record.main_photo_links.is_empty());
    assert_eq!(record.description, "");
}

// -----------------------------------------------------------------------
// photo_folders
// -----------------------------------------------------------------------

#[test]
fn photo_folders_are_id_scoped_labels() {
    assert_eq!(
        photo_folders("1005006"),
        ("1005006/MainPhotos".to_owned(), "1005006/PhotoReview".to_owned())
    );
}
