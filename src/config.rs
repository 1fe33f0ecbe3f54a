//! Application configuration loaded from environment variables.
//!
//! Every setting has a default, so an empty environment talks to the
//! public reqres.in service.

use crate::services::{PageDecoding, TokenCheck};
use std::env;
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_API_BASE_URL: &str = "https://reqres.in";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Service root, without the `/api` prefix
    pub api_base_url: String,
    /// Sent as `x-api-key` when set
    pub api_key: Option<String>,
    /// Per-request timeout
    pub http_timeout: Duration,
    /// How a 200 login body is judged
    pub token_check: TokenCheck,
    /// How malformed page elements are handled
    pub page_decoding: PageDecoding,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            api_key: None,
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
            token_check: TokenCheck::default(),
            page_decoding: PageDecoding::default(),
        }
    }
}

impl Config {
    /// Default config pointed at another service root (e.g. a local fixture server).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            api_base_url: env::var("API_BASE_URL")
                .map(|v| v.trim().to_string())
                .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
            api_key: env::var("REQRES_API_KEY")
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
            http_timeout: Duration::from_secs(
                parse_var("HTTP_TIMEOUT_SECS")?.unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS),
            ),
            token_check: parse_var("TOKEN_CHECK")?.unwrap_or_default(),
            page_decoding: parse_var("PAGE_DECODING")?.unwrap_or_default(),
        })
    }
}

/// Parse an optional variable; unset means `None`, unparseable is an error.
fn parse_var<T: FromStr>(name: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { name, value }),
        Err(_) => Ok(None),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}
