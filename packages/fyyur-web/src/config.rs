use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

const DEFAULT_LOG_FILTER: &str = "info";

/// Runtime configuration for the page handlers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Origin the Fyyur server is reached at, e.g. `http://localhost:5000`
    pub base_url: String,
    /// `tracing` filter directive
    pub log_filter: String,
    /// Request timeout for venue requests (ignored on wasm32)
    pub request_timeout: Option<Duration>,
}

impl Config {
    /// Configuration for a page served from `origin`
    pub fn for_origin(origin: impl Into<String>) -> Self {
        Self {
            base_url: origin.into(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            request_timeout: None,
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let request_timeout = lookup("FYYUR_REQUEST_TIMEOUT_SECS")
            .map(|secs| {
                secs.parse::<u64>()
                    .context("FYYUR_REQUEST_TIMEOUT_SECS must be a whole number of seconds")
            })
            .transpose()?
            .map(Duration::from_secs);

        Ok(Self {
            base_url: lookup("FYYUR_BASE_URL").context("FYYUR_BASE_URL must be set")?,
            log_filter: lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            request_timeout,
        })
    }
}
