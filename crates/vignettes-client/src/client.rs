//! Vignettes backend HTTP client

use crate::error::{Result, VignettesError};
use reqwest::header::ACCEPT;
use std::time::Duration;
use tracing::{debug, warn};

/// Client for the vignettes backend
///
/// Every request carries the configured bearer token. No retries are made;
/// a failed request is reported to the caller immediately.
pub struct VignettesClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl VignettesClient {
    /// Create a client without a request timeout
    pub fn new(base_url: &str, token: &str) -> Self {
        Self::from_http(reqwest::Client::new(), base_url, token)
    }

    /// Create a client, optionally bounding every request by `timeout`
    pub fn with_timeout(base_url: &str, token: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self::from_http(builder.build()?, base_url, token))
    }

    fn from_http(http: reqwest::Client, base_url: &str, token: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the vignettes for a category
    ///
    /// Returns the backend's JSON body untouched so callers can pass it
    /// through verbatim. Use [`crate::VignettesResponse`] to get typed records.
    ///
    /// # Arguments
    /// * `category` - Category key, sent as given (callers normalize it)
    pub async fn fetch_vignettes(&self, category: &str) -> Result<serde_json::Value> {
        let url = format!(
            "{}/vignettes?category={}",
            self.base_url,
            urlencoding::encode(category)
        );

        debug!(url = %url, "Fetching vignettes from backend");

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, category, "Vignettes backend returned an error");
            return Err(VignettesError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
