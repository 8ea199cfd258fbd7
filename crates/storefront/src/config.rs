//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `LAREK_API_URL` - Base URL of the catalog/order API
//!
//! ## Optional
//! - `LAREK_CDN_URL` - Base URL for product images; defaults to
//!   `<api origin>/content/weblarek`

use thiserror::Error;
use url::Url;

const DEFAULT_CDN_PATH: &str = "/content/weblarek";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL for API requests (`GET /product`, `POST /order`).
    pub api_base_url: Url,
    /// Base URL prepended to relative product image paths.
    pub cdn_base_url: Url,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `LAREK_API_URL` is missing or either URL
    /// fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Pure core of [`Self::from_env`], testable without touching the
    /// process environment.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_base_url = parse_url(
            "LAREK_API_URL",
            &lookup("LAREK_API_URL")
                .ok_or_else(|| ConfigError::MissingEnvVar("LAREK_API_URL".to_string()))?,
        )?;

        let cdn_base_url = match lookup("LAREK_CDN_URL") {
            Some(value) => parse_url("LAREK_CDN_URL", &value)?,
            None => {
                let mut cdn = api_base_url.clone();
                cdn.set_path(DEFAULT_CDN_PATH);
                cdn
            }
        };

        Ok(Self {
            api_base_url,
            cdn_base_url,
        })
    }
}

fn parse_url(key: &str, value: &str) -> Result<Url, ConfigError> {
    Url::parse(value).map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}
