use super::*;

#[test]
fn endpoint_url_appends_path_and_query() {
    let url = AliExpressClient::endpoint_url(
        "https://aliexpress-datahub.p.rapidapi.com",
        "item_detail_7",
        &[("itemId", "1005006"), ("region", "US")],
    )
    .unwrap();
    assert_eq!(
        url.as_str(),
        "https://aliexpress-datahub.p.rapidapi.com/item_detail_7?itemId=1005006&region=US"
    );
}

#[test]
fn endpoint_url_strips_trailing_slash() {
    let url = AliExpressClient::endpoint_url("http://127.0.0.1:8080/", "item_review", &[]).unwrap();
    assert_eq!(url.as_str(), "http://127.0.0.1:8080/item_review");
}

#[test]
fn endpoint_url_encodes_query_values() {
    let url = AliExpressClient::endpoint_url(
        "https://api.example.com",
        "item_search_4",
        &[("q", "phone case & cover")],
    )
    .unwrap();
    assert_eq!(
        url.as_str(),
        "https://api.example.com/item_search_4?q=phone+case+%26+cover"
    );
}

#[test]
fn endpoint_url_rejects_invalid_base() {
    let err = AliExpressClient::endpoint_url("not-a-url", "item_detail_7", &[]).unwrap_err();
    assert!(
        matches!(err, ScraperError::InvalidBaseUrl { .. }),
        "expected InvalidBaseUrl, got: {err:?}"
    );
}

#[test]
fn new_client_trims_base_url() {
    let client = AliExpressClient::new(
        "https://api.example.com/",
        "key",
        "api.example.com",
        "US",
        10,
        "alidrop-test/0.1",
    )
    .unwrap();
    assert_eq!(client.base_url, "https://api.example.com");
    assert_eq!(client.region, "US");
}
