pub mod app_config;
pub mod batch;
pub mod commerce;
pub mod config;
pub mod product;
pub mod progress;

pub use app_config::{AppConfig, HostingConfig};
pub use batch::{BatchItemResult, BatchReport};
pub use commerce::{CommerceRow, COMMERCE_COLUMNS};
pub use config::{load_app_config, load_app_config_from_env};
pub use product::{ProductRecord, NATIVE_COLUMNS};
pub use progress::{Milestone, ProgressObserver, TracingObserver};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("configuration validation failed: {0}")]
    Validation(String),
}
