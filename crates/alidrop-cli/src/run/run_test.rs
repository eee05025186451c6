use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Mutex;

use alidrop_scraper::{RawItemDocument, RawReviewsDocument, ScraperError};
use async_trait::async_trait;
use serde_json::{json, Value};

use super::*;

const HOSTING_BASE: &str = "https://res.cloudinary.com/demo";

fn priced_item(id: &str, price: Option<&str>) -> Value {
    let mut sku = json!({});
    if let Some(price) = price {
        sku = json!({"def": {"price": price}});
    }
    json!({
        "result": {
            "item": {
                "itemId": id,
                "title": format!("Widget {id}"),
                "itemUrl": format!("//www.aliexpress.com/item/{id}.html"),
                "description": {"images": [
                    format!("//img.example/{id}/a.jpg"),
                    format!("//img.example/{id}/b.jpg")
                ]},
                "sku": sku
            }
        }
    })
}

#[derive(Default)]
struct FakeSource {
    items: HashMap<String, Value>,
    reviews: HashMap<String, Value>,
    search_results: Vec<String>,
    queries: Mutex<Vec<String>>,
}

impl FakeSource {
    fn with_items(items: &[(&str, Value)]) -> Self {
        Self {
            items: items
                .iter()
                .map(|(id, doc)| ((*id).to_owned(), doc.clone()))
                .collect(),
            ..Self::default()
        }
    }
}

#[async_trait]
impl ItemSource for FakeSource {
    async fn fetch_item(&self, item_id: &str) -> Result<RawItemDocument, ScraperError> {
        let doc = self
            .items
            .get(item_id)
            .ok_or_else(|| ScraperError::FetchFailure {
                subject: item_id.to_owned(),
                reason: "item not found".to_owned(),
            })?;
        Ok(serde_json::from_value(doc.clone()).expect("valid item document"))
    }

    async fn fetch_reviews(&self, item_id: &str) -> Option<RawReviewsDocument> {
        self.reviews
            .get(item_id)
            .map(|doc| serde_json::from_value(doc.clone()).expect("valid reviews document"))
    }

    async fn search(&self, query: &str, limit: usize) -> Result<Vec<String>, ScraperError> {
        self.queries.lock().unwrap().push(query.to_owned());
        Ok(self.search_results.iter().take(limit).cloned().collect())
    }
}

/// Pretends to re-host each photo under `https://hosted/<folder>/<file>`.
#[derive(Default)]
struct FakeHost {
    folders: Mutex<Vec<String>>,
}

#[async_trait]
impl PhotoHost for FakeHost {
    async fn upload(&self, urls: &[String], folder: &str) -> Vec<String> {
        self.folders.lock().unwrap().push(folder.to_owned());
        urls.iter()
            .map(|url| {
                let file = url.rsplit('/').next().unwrap_or_default();
                format!("https://hosted/{folder}/{file}")
            })
            .collect()
    }
}

#[derive(Default)]
struct RecordingObserver {
    events: Mutex<Vec<(String, Milestone)>>,
}

impl RecordingObserver {
    fn events(&self) -> Vec<(String, Milestone)> {
        self.events.lock().unwrap().clone()
    }
}

impl ProgressObserver for RecordingObserver {
    fn milestone(&self, subject: &str, milestone: Milestone) {
        self.events
            .lock()
            .unwrap()
            .push((subject.to_owned(), milestone));
    }
}

fn context<O: ProgressObserver>(
    source: FakeSource,
    observer: O,
    root: &Path,
) -> RunContext<FakeSource, FakeHost, O> {
    RunContext {
        source,
        host: FakeHost::default(),
        observer,
        output_root: root.to_path_buf(),
        hosting_base: HOSTING_BASE.to_owned(),
    }
}

fn commerce_handles(path: &Path) -> Vec<String> {
    let text = fs::read_to_string(path).unwrap();
    text.lines()
        .skip(1)
        .map(|line| line.split(',').next().unwrap_or_default().to_owned())
        .collect()
}

// -----------------------------------------------------------------------
// run_single
// -----------------------------------------------------------------------

#[tokio::test]
async fn single_run_writes_three_files_and_reports_milestones_in_order() {
    let root = tempfile::tempdir().unwrap();
    let source = FakeSource::with_items(&[("123", priced_item("123", Some("5")))]);
    let ctx = context(source, RecordingObserver::default(), root.path());

    let layout = run_single(&ctx, "https://www.aliexpress.com/item/123.html")
        .await
        .unwrap();

    assert_eq!(layout.dir(), root.path().join("123"));
    assert!(layout.json_path().exists());
    assert!(layout.native_csv_path().exists());
    assert!(layout.commerce_csv_path().exists());

    let milestones: Vec<Milestone> = ctx.observer.events().into_iter().map(|(_, m)| m).collect();
    assert_eq!(
        milestones,
        vec![
            Milestone::IdResolved,
            Milestone::DataFetched,
            Milestone::RecordBuilt,
            Milestone::FilesWritten,
            Milestone::PhotosUploaded,
            Milestone::ExportBuilt,
        ]
    );
    assert!(ctx.observer.events().iter().all(|(subject, _)| subject == "123"));
}

#[tokio::test]
async fn single_run_uses_hosted_photos_in_commerce_rows() {
    let root = tempfile::tempdir().unwrap();
    let source = FakeSource::with_items(&[("123", priced_item("123", Some("5")))]);
    let ctx = context(source, (), root.path());

    let layout = run_single(&ctx, "123").await.unwrap();

    let commerce = fs::read_to_string(layout.commerce_csv_path()).unwrap();
    assert!(commerce.contains("https://hosted/123/MainPhotos/a.jpg"));
    assert!(commerce.contains("https://hosted/123/MainPhotos/b.jpg"));
    assert!(!commerce.contains("img.example"));
    assert_eq!(commerce_handles(&layout.commerce_csv_path()), vec!["1", "1"]);

    let native = fs::read_to_string(layout.native_csv_path()).unwrap();
    assert!(native.contains("https://img.example/123/a.jpg"));
}

#[tokio::test]
async fn single_run_uploads_review_photos_to_their_own_folder() {
    let root = tempfile::tempdir().unwrap();
    let mut source = FakeSource::with_items(&[("123", priced_item("123", Some("5")))]);
    source.reviews.insert(
        "123".to_owned(),
        json!({"result": {"resultList": [{"review": {"reviewImages": ["//img.example/r.jpg"]}}]}}),
    );
    let ctx = context(source, (), root.path());

    run_single(&ctx, "123").await.unwrap();

    assert_eq!(
        *ctx.host.folders.lock().unwrap(),
        vec!["123/MainPhotos".to_owned(), "123/PhotoReview".to_owned()]
    );
}

#[tokio::test]
async fn single_run_without_price_fails_before_commerce_file() {
    let root = tempfile::tempdir().unwrap();
    let source = FakeSource::with_items(&[("123", priced_item("123", None))]);
    let ctx = context(source, (), root.path());

    let err = run_single(&ctx, "123").await.unwrap_err();

    assert!(err.to_string().contains("price"), "unexpected error: {err}");
    let layout = OutputLayout::new(root.path(), "123");
    assert!(layout.json_path().exists());
    assert!(!layout.commerce_csv_path().exists());
}

#[tokio::test]
async fn failed_rerun_does_not_keep_the_previous_commerce_file() {
    let root = tempfile::tempdir().unwrap();
    let priced = context(
        FakeSource::with_items(&[("123", priced_item("123", Some("5")))]),
        (),
        root.path(),
    );
    let layout = run_single(&priced, "123").await.unwrap();
    assert!(layout.commerce_csv_path().exists());

    let unpriced = context(
        FakeSource::with_items(&[("123", priced_item("123", None))]),
        (),
        root.path(),
    );
    assert!(run_single(&unpriced, "123").await.is_err());

    let record: alidrop_core::ProductRecord =
        alidrop_export::load_json_snapshot(&layout.json_path()).unwrap();
    assert_eq!(record.original_price, "");
    assert!(!layout.commerce_csv_path().exists());
}

#[tokio::test]
async fn single_run_rejects_link_without_item_id() {
    let root = tempfile::tempdir().unwrap();
    let ctx = context(FakeSource::default(), RecordingObserver::default(), root.path());

    assert!(run_single(&ctx, "https://www.aliexpress.com/store/42")
        .await
        .is_err());
    assert!(ctx.observer.events().is_empty());
    assert!(fs::read_dir(root.path()).unwrap().next().is_none());
}

#[tokio::test]
async fn observer_does_not_change_written_files() {
    let quiet_root = tempfile::tempdir().unwrap();
    let loud_root = tempfile::tempdir().unwrap();
    let item = priced_item("123", Some("4.20 - 6.00"));

    let quiet = context(FakeSource::with_items(&[("123", item.clone())]), (), quiet_root.path());
    let loud = context(
        FakeSource::with_items(&[("123", item)]),
        RecordingObserver::default(),
        loud_root.path(),
    );
    let a = run_single(&quiet, "123").await.unwrap();
    let b = run_single(&loud, "123").await.unwrap();

    for (left, right) in [
        (a.json_path(), b.json_path()),
        (a.native_csv_path(), b.native_csv_path()),
        (a.commerce_csv_path(), b.commerce_csv_path()),
    ] {
        assert_eq!(fs::read(left).unwrap(), fs::read(right).unwrap());
    }
}

// -----------------------------------------------------------------------
// run_links
// -----------------------------------------------------------------------

#[tokio::test]
async fn links_batch_skips_failures_and_exports_the_rest() {
    let root = tempfile::tempdir().unwrap();
    let source = FakeSource::with_items(&[
        ("1", priced_item("1", Some("5"))),
        ("2", priced_item("2", None)),
        ("3", priced_item("3", Some("7.50"))),
    ]);
    let ctx = context(source, RecordingObserver::default(), root.path());
    let links: Vec<String> = [
        "https://www.aliexpress.com/item/1.html",
        "https://www.aliexpress.com/item/2.html",
        " ",
        "not a link",
        "https://www.aliexpress.com/item/404.html",
        "3",
    ]
    .iter()
    .map(|s| (*s).to_owned())
    .collect();

    let batch = run_links(&ctx, &links).await.unwrap();

    assert!(batch.written);
    assert_eq!(batch.report.exported_count(), 2);
    let skipped: Vec<&str> = batch.report.skipped().iter().map(|(id, _)| *id).collect();
    assert_eq!(skipped, vec!["2", "not a link", "404"]);

    assert_eq!(batch.layout.dir(), root.path().join(LINKS_BATCH_LABEL));
    assert_eq!(
        commerce_handles(&batch.layout.commerce_csv_path()),
        vec!["1", "1", "2", "2"]
    );

    let events = ctx.observer.events();
    assert_eq!(
        events.last(),
        Some(&(LINKS_BATCH_LABEL.to_owned(), Milestone::BatchSaved))
    );
    assert!(!events.iter().any(|(_, m)| *m == Milestone::FilesWritten));
}

#[tokio::test]
async fn links_batch_with_no_exports_writes_nothing() {
    let root = tempfile::tempdir().unwrap();
    let ctx = context(FakeSource::default(), RecordingObserver::default(), root.path());

    let batch = run_links(&ctx, &["404".to_owned()]).await.unwrap();

    assert!(!batch.written);
    assert_eq!(batch.report.skipped().len(), 1);
    assert!(!batch.layout.dir().exists());
    assert!(!ctx
        .observer
        .events()
        .iter()
        .any(|(_, m)| *m == Milestone::BatchSaved));
}

#[tokio::test]
async fn links_batch_rejects_blank_list() {
    let root = tempfile::tempdir().unwrap();
    let ctx = context(FakeSource::default(), (), root.path());

    assert!(run_links(&ctx, &[" ".to_owned(), String::new()]).await.is_err());
}

// -----------------------------------------------------------------------
// run_search
// -----------------------------------------------------------------------

#[tokio::test]
async fn search_exports_results_up_to_limit() {
    let root = tempfile::tempdir().unwrap();
    let mut source = FakeSource::with_items(&[
        ("10", priced_item("10", Some("1"))),
        ("11", priced_item("11", Some("2"))),
        ("12", priced_item("12", Some("3"))),
    ]);
    source.search_results = vec!["10".to_owned(), "11".to_owned(), "12".to_owned()];
    let ctx = context(source, (), root.path());

    let batch = run_search(&ctx, "https://www.aliexpress.com/w/wholesale-phone-case.html", 2)
        .await
        .unwrap();

    assert_eq!(*ctx.source.queries.lock().unwrap(), vec!["phone-case".to_owned()]);
    assert_eq!(batch.report.exported_count(), 2);
    assert_eq!(batch.layout.dir(), root.path().join(QUERY_BATCH_LABEL));
    assert!(batch.layout.json_path().exists());
}

#[tokio::test]
async fn search_without_results_is_an_error() {
    let root = tempfile::tempdir().unwrap();
    let ctx = context(FakeSource::default(), (), root.path());

    let err = run_search(&ctx, "phone case", 5).await.unwrap_err();

    assert!(err.to_string().contains("no items"));
    assert!(!root.path().join(QUERY_BATCH_LABEL).exists());
}
