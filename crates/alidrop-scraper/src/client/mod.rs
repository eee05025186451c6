//! HTTP client for the RapidAPI "aliexpress-datahub" endpoints.

mod endpoints;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::Value;

use crate::error::ScraperError;
use crate::types::{RawItemDocument, RawReviewsDocument};

const API_KEY_HEADER: &str = "x-rapidapi-key";
const API_HOST_HEADER: &str = "x-rapidapi-host";

/// Where raw item documents come from.
///
/// Run orchestration is written against this trait so it can be exercised
/// without a network.
#[async_trait]
pub trait ItemSource: Send + Sync {
    /// # Errors
    ///
    /// Returns [`ScraperError::FetchFailure`] when the lookup yields no usable
    /// document.
    async fn fetch_item(&self, item_id: &str) -> Result<RawItemDocument, ScraperError>;

    /// Reviews are optional; any failure degrades to `None`.
    async fn fetch_reviews(&self, item_id: &str) -> Option<RawReviewsDocument>;

    /// Item ids matching `query`, in ranking order, at most `limit` of them.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::FetchFailure`] when the search yields no usable
    /// document.
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<String>, ScraperError>;
}

/// Client for `item_detail_7`, `item_review` and `item_search_4`.
///
/// Every request carries the RapidAPI key and host headers. Non-2xx statuses,
/// undecodable bodies, and bodies whose `result.status.data` is `"error"` are
/// all reported as [`ScraperError::FetchFailure`]. There is no retry.
pub struct AliExpressClient {
    client: Client,
    base_url: String,
    api_key: String,
    api_host: String,
    region: String,
}

impl AliExpressClient {
    /// Creates a client with the given timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        base_url: &str,
        api_key: &str,
        api_host: &str,
        region: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
            api_key: api_key.to_owned(),
            api_host: api_host.to_owned(),
            region: region.to_owned(),
        })
    }

    /// Builds `{base}/{endpoint}?{query}` with each pair percent-encoded.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidBaseUrl`] if the result is not a valid
    /// URL.
    fn endpoint_url(
        base_url: &str,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<Url, ScraperError> {
        let raw = format!("{}/{endpoint}", base_url.trim_end_matches('/'));
        let mut url = Url::parse(&raw).map_err(|e| ScraperError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;
        url.query_pairs_mut().extend_pairs(query);
        Ok(url)
    }

    /// Performs one GET and decodes the body as JSON.
    ///
    /// `subject` names what was requested, for error context.
    async fn get_json(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
        subject: &str,
    ) -> Result<Value, ScraperError> {
        let url = Self::endpoint_url(&self.base_url, endpoint, query)?;
        tracing::debug!(endpoint, subject, "requesting");

        let response = self
            .client
            .get(url)
            .header(API_KEY_HEADER, &self.api_key)
            .header(API_HOST_HEADER, &self.api_host)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::FetchFailure {
                subject: subject.to_owned(),
                reason: format!("{endpoint} returned HTTP {}", status.as_u16()),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ScraperError::FetchFailure {
            subject: subject.to_owned(),
            reason: format!("{endpoint} body is not JSON: {e}"),
        })
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
