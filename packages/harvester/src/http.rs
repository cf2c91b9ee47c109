//! HTTP page fetching from the review site.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::redirect::Policy;

use crate::config::{
    review_url, validate_account_id, BROWSER_USER_AGENT, HTTP_CONNECT_TIMEOUT_SECS, HTTP_TIMEOUT_SECS, MAX_REDIRECTS,
    TRUSTPILOT_BASE_URL,
};
use crate::error::{HarvesterError, Result};

/// Source of raw review listing markup.
///
/// The harvester only depends on this trait, so pages can come from the
/// network, from fixtures, or from anything else that can produce markup.
pub trait PageFetcher {
    /// Fetch the markup of one review listing page.
    ///
    /// # Arguments
    /// * `account_id` - Account identifier on the review site
    /// * `page` - 1-based page number
    fn fetch(&self, account_id: &str, page: u32) -> Result<String>;
}

/// Create a configured HTTP client.
///
/// # Returns
/// A `reqwest::blocking::Client` with browser user agent, bounded redirects,
/// connect and total timeouts, and transparent response decompression.
pub fn create_client() -> Result<Client> {
    let client = Client::builder()
        .user_agent(BROWSER_USER_AGENT)
        .redirect(Policy::limited(MAX_REDIRECTS))
        .connect_timeout(Duration::from_secs(HTTP_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .build()?;
    Ok(client)
}

/// Fetches review listing pages over HTTP.
#[derive(Debug, Clone)]
pub struct HttpPageFetcher {
    client: Client,
    base_url: String,
}

impl HttpPageFetcher {
    /// Create a fetcher for the public review site.
    pub fn new() -> Result<Self> {
        Self::with_base_url(TRUSTPILOT_BASE_URL)
    }

    /// Create a fetcher for a different site root (e.g., a local mirror).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: create_client()?,
            base_url: base_url.into(),
        })
    }

    /// Site root requests are made against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl PageFetcher for HttpPageFetcher {
    /// Fetch a page body as text.
    ///
    /// The status code is not checked: an error page with a body is returned
    /// like any other page, and only transport failures are errors. An
    /// invalid account ID is rejected before any request is made.
    fn fetch(&self, account_id: &str, page: u32) -> Result<String> {
        validate_account_id(account_id)?;
        let url = review_url(&self.base_url, account_id, page);
        tracing::debug!(%url, page, "Fetching review page");

        let to_fetch_error = |source: reqwest::Error| HarvesterError::Fetch {
            account_id: account_id.to_string(),
            page,
            source,
        };

        let response = self.client.get(&url).send().map_err(to_fetch_error)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = %status, page, "Review page returned non-success status");
        }

        response.text().map_err(to_fetch_error)
    }
}
