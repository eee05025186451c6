use std::path::PathBuf;

/// Credentials for the photo re-hosting service.
///
/// Handed explicitly to the hosting client at construction time; nothing
/// reads these from process-wide state.
#[derive(Clone)]
pub struct HostingConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
}

impl std::fmt::Debug for HostingConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostingConfig")
            .field("cloud_name", &self.cloud_name)
            .field("api_key", &"[redacted]")
            .field("api_secret", &"[redacted]")
            .finish()
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub rapidapi_key: String,
    pub rapidapi_host: String,
    pub api_base_url: String,
    pub region: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub output_dir: PathBuf,
    pub log_level: String,
    /// Base URL interpolated into each record's `HostingFolderLink`.
    pub hosting_base_url: String,
    /// `None` disables re-hosting; source photo URLs are exported as-is.
    pub hosting: Option<HostingConfig>,
    /// Maximum number of search results processed per query run.
    pub search_limit: usize,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("rapidapi_key", &"[redacted]")
            .field("rapidapi_host", &self.rapidapi_host)
            .field("api_base_url", &self.api_base_url)
            .field("region", &self.region)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("output_dir", &self.output_dir)
            .field("log_level", &self.log_level)
            .field("hosting_base_url", &self.hosting_base_url)
            .field("hosting", &self.hosting)
            .field("search_limit", &self.search_limit)
            .finish()
    }
}
