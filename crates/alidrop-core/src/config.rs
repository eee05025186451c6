use crate::app_config::{AppConfig, HostingConfig};
use crate::ConfigError;

/// Upper bound the search endpoint returns per page.
pub const MAX_SEARCH_LIMIT: usize = 60;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files. Useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup; no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let rapidapi_key = require("RAPIDAPI_KEY")?;
    let rapidapi_host = or_default("ALIDROP_RAPIDAPI_HOST", "aliexpress-datahub.p.rapidapi.com");
    let api_base_url = or_default(
        "ALIDROP_API_BASE_URL",
        "https://aliexpress-datahub.p.rapidapi.com",
    );
    let region = or_default("ALIDROP_REGION", "US");
    let request_timeout_secs = parse_u64("ALIDROP_REQUEST_TIMEOUT_SECS", "10")?;
    let user_agent = or_default("ALIDROP_USER_AGENT", "alidrop/0.1 (catalog-export)");
    let output_dir = PathBuf::from(or_default("ALIDROP_OUTPUT_DIR", "."));
    let log_level = or_default("ALIDROP_LOG_LEVEL", "info");

    let search_limit = parse_usize("ALIDROP_SEARCH_LIMIT", "60")?;
    if search_limit == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "ALIDROP_SEARCH_LIMIT".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }
    let search_limit = search_limit.min(MAX_SEARCH_LIMIT);

    let hosting = parse_hosting(&lookup)?;
    let hosting_base_url = lookup("ALIDROP_HOSTING_BASE_URL").unwrap_or_else(|_| {
        let cloud = hosting.as_ref().map_or("alidrop", |h| h.cloud_name.as_str());
        format!("https://res.cloudinary.com/{cloud}")
    });

    Ok(AppConfig {
        rapidapi_key,
        rapidapi_host,
        api_base_url,
        region,
        request_timeout_secs,
        user_agent,
        output_dir,
        log_level,
        hosting_base_url: hosting_base_url.trim_end_matches('/').to_string(),
        hosting,
        search_limit,
    })
}

/// Hosting credentials are all-or-nothing; a partial set is rejected.
fn parse_hosting<F>(lookup: &F) -> Result<Option<HostingConfig>, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    const VARS: [&str; 3] = [
        "CLOUDINARY_CLOUD_NAME",
        "CLOUDINARY_API_KEY",
        "CLOUDINARY_API_SECRET",
    ];

    let values: Vec<Option<String>> = VARS
        .iter()
        .map(|var| lookup(var).ok().filter(|v| !v.trim().is_empty()))
        .collect();

    match values.as_slice() {
        [Some(cloud_name), Some(api_key), Some(api_secret)] => Ok(Some(HostingConfig {
            cloud_name: cloud_name.clone(),
            api_key: api_key.clone(),
            api_secret: api_secret.clone(),
        })),
        [None, None, None] => Ok(None),
        _ => {
            let missing: Vec<&str> = VARS
                .iter()
                .zip(&values)
                .filter(|(_, v)| v.is_none())
                .map(|(var, _)| *var)
                .collect();
            Err(ConfigError::Validation(format!(
                "incomplete hosting credentials, missing: {}",
                missing.join(", ")
            )))
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
