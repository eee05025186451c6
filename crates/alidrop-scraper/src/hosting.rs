//! Photo re-hosting: copying source photo URLs to a hosting service.
//!
//! Uploads are best-effort per URL. A failed upload is logged and dropped, so
//! the returned list may be shorter than the input but keeps input order.

use std::time::Duration;

use alidrop_core::HostingConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use sha2::{Digest, Sha256};

use crate::error::ScraperError;

/// Public Cloudinary API root.
pub const CLOUDINARY_API_BASE: &str = "https://api.cloudinary.com";

#[async_trait]
pub trait PhotoHost: Send + Sync {
    /// Uploads `urls` into `folder` and returns the hosted URLs of the
    /// uploads that succeeded, in input order. Never fails.
    async fn upload(&self, urls: &[String], folder: &str) -> Vec<String>;
}

/// Hands back the source URLs unchanged; used when no hosting credentials are
/// configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct SourceUrlHost;

#[async_trait]
impl PhotoHost for SourceUrlHost {
    async fn upload(&self, urls: &[String], _folder: &str) -> Vec<String> {
        urls.iter().filter(|u| !u.trim().is_empty()).cloned().collect()
    }
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: Option<String>,
}

/// Uploads by remote URL through Cloudinary's signed upload API.
pub struct CloudinaryHost {
    client: Client,
    config: HostingConfig,
    upload_url: String,
}

impl CloudinaryHost {
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        config: HostingConfig,
        api_base: &str,
        timeout_secs: u64,
    ) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        let upload_url = format!(
            "{}/v1_1/{}/image/upload",
            api_base.trim_end_matches('/'),
            config.cloud_name
        );
        Ok(Self {
            client,
            config,
            upload_url,
        })
    }

    /// SHA-256 request signature: `folder=..&timestamp=..` followed by the
    /// secret, hex-encoded. Parameters are in alphabetical order.
    fn signature(folder: &str, timestamp: &str, api_secret: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(format!("folder={folder}&timestamp={timestamp}{api_secret}"));
        format!("{:x}", hasher.finalize())
    }

    async fn upload_one(
        &self,
        source: &str,
        folder: &str,
        timestamp: &str,
    ) -> Result<String, ScraperError> {
        let signature = Self::signature(folder, timestamp, &self.config.api_secret);
        let response = self
            .client
            .post(&self.upload_url)
            .form(&[
                ("file", source),
                ("folder", folder),
                ("timestamp", timestamp),
                ("api_key", self.config.api_key.as_str()),
                ("signature_algorithm", "sha256"),
                ("signature", signature.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::FetchFailure {
                subject: source.to_owned(),
                reason: format!("upload returned HTTP {}", status.as_u16()),
            });
        }

        response
            .json::<UploadResponse>()
            .await?
            .secure_url
            .filter(|u| !u.is_empty())
            .ok_or_else(|| ScraperError::FetchFailure {
                subject: source.to_owned(),
                reason: "upload response has no secure_url".to_owned(),
            })
    }
}

#[async_trait]
impl PhotoHost for CloudinaryHost {
    async fn upload(&self, urls: &[String], folder: &str) -> Vec<String> {
        let timestamp = chrono::Utc::now().timestamp().to_string();
        let mut hosted = Vec::with_capacity(urls.len());

        for source in urls.iter().filter(|u| !u.trim().is_empty()) {
            match self.upload_one(source, folder, &timestamp).await {
                Ok(url) => hosted.push(url),
                Err(e) => {
                    tracing::warn!(source = %source, folder, error = %e, "photo upload failed; skipping");
                }
            }
        }

        tracing::info!(
            folder,
            uploaded = hosted.len(),
            requested = urls.len(),
            "photo upload finished"
        );
        hosted
    }
}
