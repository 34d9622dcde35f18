//! HTTP client for venue requests

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{StatusCode, Url};
use serde::Deserialize;
use tracing::{debug, warn};

use super::{DeleteOutcome, VenueApi};
use crate::config::Config;
use crate::page::VenueTarget;
use crate::routes::Route;

/// Error type for building and addressing the client
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Body returned by the server's delete endpoint
#[derive(Debug, Deserialize)]
struct DeleteResponse {
    success: Option<bool>,
}

/// Client for the Fyyur server, addressed relative to a base URL
#[derive(Clone, Debug)]
pub struct VenueClient {
    client: reqwest::Client,
    base_url: Url,
}

impl VenueClient {
    /// Create a client with default settings
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::from_config(&Config::for_origin(base_url))
    }

    /// Create a client from runtime configuration
    pub fn from_config(config: &Config) -> Result<Self, ClientError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ClientError::InvalidBaseUrl(format!("{}: {e}", config.base_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl(config.base_url.clone()));
        }

        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = match config.request_timeout {
            Some(timeout) => builder.timeout(timeout),
            None => builder,
        };

        Ok(Self {
            client: builder.build()?,
            base_url,
        })
    }

    /// Absolute URL for a route on this server
    pub fn url_for(&self, route: &Route) -> Result<Url, ClientError> {
        self.base_url
            .join(&route.path())
            .map_err(|e| ClientError::InvalidUrl(format!("{route}: {e}")))
    }
}

#[async_trait(?Send)]
impl VenueApi for VenueClient {
    async fn delete_venue(&self, venue: &VenueTarget) -> DeleteOutcome {
        let url = match self.url_for(&venue.route()) {
            Ok(url) => url,
            Err(e) => {
                return DeleteOutcome::NetworkError {
                    message: e.to_string(),
                }
            }
        };

        debug!(%url, "sending venue delete");
        let response = match self
            .client
            .delete(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!(venue_id = %venue.id, error = %e, "venue delete request failed");
                return DeleteOutcome::NetworkError {
                    message: e.to_string(),
                };
            }
        };

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        classify_response(status, &body)
    }
}

/// Map a delete response onto a [`DeleteOutcome`].
///
/// Only 2xx counts as success. A 2xx JSON body with `"success": false` is a
/// server-side failure; any other 2xx body (including none) is a success.
pub fn classify_response(status: StatusCode, body: &str) -> DeleteOutcome {
    let code = status.as_u16();

    if status.is_success() {
        return match serde_json::from_str::<DeleteResponse>(body) {
            Ok(DeleteResponse {
                success: Some(false),
            }) => DeleteOutcome::ServerError { status: code },
            _ => DeleteOutcome::Success,
        };
    }

    if status.is_server_error() {
        DeleteOutcome::ServerError { status: code }
    } else {
        DeleteOutcome::ClientError { status: code }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_success() {
        assert_eq!(
            classify_response(StatusCode::OK, r#"{"success": true}"#),
            DeleteOutcome::Success
        );
        assert_eq!(classify_response(StatusCode::NO_CONTENT, ""), DeleteOutcome::Success);
        assert_eq!(
            classify_response(StatusCode::OK, "<html>deleted</html>"),
            DeleteOutcome::Success
        );
    }

    #[test]
    fn test_classify_reported_failure() {
        assert_eq!(
            classify_response(StatusCode::OK, r#"{"success": false}"#),
            DeleteOutcome::ServerError { status: 200 }
        );
    }

    #[test]
    fn test_classify_error_statuses() {
        assert_eq!(
            classify_response(StatusCode::NOT_FOUND, ""),
            DeleteOutcome::ClientError { status: 404 }
        );
        assert_eq!(
            classify_response(StatusCode::FOUND, ""),
            DeleteOutcome::ClientError { status: 302 }
        );
        assert_eq!(
            classify_response(StatusCode::INTERNAL_SERVER_ERROR, r#"{"success": true}"#),
            DeleteOutcome::ServerError { status: 500 }
        );
    }

    #[test]
    fn test_url_for_joins_on_base() {
        let client = VenueClient::new("http://localhost:5000").unwrap();
        let url = client.url_for(&Route::Venue { id: "5".into() }).unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/venues/5");
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            VenueClient::new("not a url"),
            Err(ClientError::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            VenueClient::new("mailto:someone@example.com"),
            Err(ClientError::InvalidBaseUrl(_))
        ));
    }
}
