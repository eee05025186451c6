//! The three endpoint calls and their [`ItemSource`] wiring.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::ScraperError;
use crate::extract::search_item_ids;
use crate::types::{RawItemDocument, RawReviewsDocument, RawSearchDocument, ResultStatus};

use super::{AliExpressClient, ItemSource};

fn status_reason(status: Option<&ResultStatus>) -> String {
    status
        .and_then(|s| s.msg.clone())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| "upstream reported an error status".to_owned())
}

impl AliExpressClient {
    /// Fetches the item detail document for `item_id`.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::FetchFailure`]: non-2xx, undecodable body, or an
    ///   error status in the body.
    /// - [`ScraperError::Http`]: network or TLS failure.
    pub async fn fetch_item(&self, item_id: &str) -> Result<RawItemDocument, ScraperError> {
        let body = self
            .get_json(
                "item_detail_7",
                &[("itemId", item_id), ("region", self.region.as_str())],
                item_id,
            )
            .await?;
        let doc = decode::<RawItemDocument>(body, item_id)?;

        if doc.is_error() {
            return Err(ScraperError::FetchFailure {
                subject: item_id.to_owned(),
                reason: status_reason(doc.result.as_ref().and_then(|r| r.status.as_ref())),
            });
        }
        Ok(doc)
    }

    /// Fetches the first page of reviews for `item_id`.
    ///
    /// Never fails: a transport error, bad status, or error body is logged and
    /// reported as `None`.
    pub async fn fetch_reviews(&self, item_id: &str) -> Option<RawReviewsDocument> {
        let body = self
            .get_json(
                "item_review",
                &[
                    ("itemId", item_id),
                    ("page", "1"),
                    ("sort", "default"),
                    ("filter", "allReviews"),
                ],
                item_id,
            )
            .await;

        match body {
            Ok(value) => {
                let doc = RawReviewsDocument::from_value_lenient(value);
                if doc.is_none() {
                    tracing::debug!(item_id, "reviews document unusable; continuing without");
                }
                doc
            }
            Err(e) => {
                tracing::warn!(item_id, error = %e, "reviews fetch failed; continuing without");
                None
            }
        }
    }

    /// Searches for `query` and returns up to `limit` item ids from page 1.
    ///
    /// # Errors
    ///
    /// Same as [`Self::fetch_item`].
    pub async fn search(&self, query: &str, limit: usize) -> Result<Vec<String>, ScraperError> {
        let body = self
            .get_json(
                "item_search_4",
                &[
                    ("q", query),
                    ("page", "1"),
                    ("sort", "default"),
                    ("region", self.region.as_str()),
                ],
                query,
            )
            .await?;
        let doc = decode::<RawSearchDocument>(body, query)?;

        if doc.is_error() {
            return Err(ScraperError::FetchFailure {
                subject: query.to_owned(),
                reason: status_reason(doc.result.as_ref().and_then(|r| r.status.as_ref())),
            });
        }

        let mut ids = search_item_ids(&doc);
        ids.truncate(limit);
        Ok(ids)
    }
}

fn decode<T: serde::de::DeserializeOwned>(body: Value, subject: &str) -> Result<T, ScraperError> {
    serde_json::from_value(body).map_err(|e| ScraperError::FetchFailure {
        subject: subject.to_owned(),
        reason: format!("unexpected document shape: {e}"),
    })
}

#[async_trait]
impl ItemSource for AliExpressClient {
    async fn fetch_item(&self, item_id: &str) -> Result<RawItemDocument, ScraperError> {
        AliExpressClient::fetch_item(self, item_id).await
    }

    async fn fetch_reviews(&self, item_id: &str) -> Option<RawReviewsDocument> {
        AliExpressClient::fetch_reviews(self, item_id).await
    }

    async fn search(&self, query: &str, limit: usize) -> Result<Vec<String>, ScraperError> {
        AliExpressClient::search(self, query, limit).await
    }
}
