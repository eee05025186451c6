//! Shared upstream payloads for unit tests.

use serde_json::{json, Value};

use crate::types::{RawItemDocument, RawReviewsDocument};

/// A complete `item_detail_7` response as observed from the API.
pub(crate) fn item_json() -> Value {
    json!({
        "result": {
            "status": {"data": "success", "code": 200},
            "item": {
                "itemId": 1_005_006_123_456_u64,
                "title": "Silicone Phone Case",
                "itemUrl": "//www.aliexpress.com/item/1005006123456.html",
                "wishCount": 512,
                "properties": {
                    "list": [
                        {"name": "Material", "value": "Silicone"},
                        {"name": "Brand Name", "value": "NoEnName_Null"}
                    ]
                },
                "description": {
                    "html": "<div><p>Soft &amp; durable</p>\n<p>Fits most phones</p></div>",
                    "images": [
                        "//ae01.alicdn.com/kf/S1.jpg",
                        "//ae01.alicdn.com/kf/S2.jpg"
                    ]
                },
                "sku": {
                    "def": {
                        "price": "4.20 - 6.00",
                        "promotionPrice": "3.10"
                    }
                }
            },
            "delivery": {
                "shippingList": [
                    {"note": ["Free shipping", "Mar 03 - Mar 12"]},
                    {"note": ["Express", "Feb 27"]}
                ]
            },
            "reviews": {"averageStar": "4.8", "count": 211}
        }
    })
}

/// A `item_review` response with two photo-bearing reviews and one without.
pub(crate) fn reviews_json() -> Value {
    json!({
        "result": {
            "status": {"data": "success"},
            "resultList": [
                {"review": {"reviewImages": ["//ae01.alicdn.com/kf/R1.jpg"]}},
                {"review": {"reviewContent": "great"}},
                {"review": {"reviewImages": [
                    "//ae01.alicdn.com/kf/R2.jpg",
                    "//ae01.alicdn.com/kf/R3.jpg"
                ]}}
            ]
        }
    })
}

pub(crate) fn item_doc(value: Value) -> RawItemDocument {
    serde_json::from_value(value).expect("fixture item document")
}

pub(crate) fn reviews_doc(value: Value) -> RawReviewsDocument {
    serde_json::from_value(value).expect("fixture reviews document")
}
