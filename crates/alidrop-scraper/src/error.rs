use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid API base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },

    /// The upstream lookup or search produced nothing usable.
    #[error("fetch failed for {subject}: {reason}")]
    FetchFailure { subject: String, reason: String },

    /// A required identity field (`itemId`, `itemUrl`, `title`) is missing.
    #[error("malformed source data for item {item_id}: {reason}")]
    MalformedSourceData { item_id: String, reason: String },

    /// No single export price can be derived from the record's price fields.
    #[error("cannot resolve a price for {subject}: {reason}")]
    PriceResolution { subject: String, reason: String },

    #[error("invalid link \"{link}\": {reason}")]
    InvalidLink { link: String, reason: String },
}
