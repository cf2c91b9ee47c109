//! Configuration constants and validation functions for the harvester.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{HarvesterError, Result};

/// Base URL of the Trustpilot site.
pub const TRUSTPILOT_BASE_URL: &str = "https://trustpilot.com";

/// Total HTTP timeout in seconds, per page request.
pub const HTTP_TIMEOUT_SECS: u64 = 120;

/// HTTP connect timeout in seconds.
pub const HTTP_CONNECT_TIMEOUT_SECS: u64 = 120;

/// Maximum number of redirects followed per page request.
pub const MAX_REDIRECTS: usize = 10;

/// Browser user agent sent with every request.
///
/// Review pages are served to regular browsers only, so the harvester
/// presents itself as desktop Chrome.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.36";

/// Default field delimiter for delimited exports.
pub const DEFAULT_DELIMITER: char = ',';

/// Account ID pattern: a domain-like name such as `www.example.com`.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static ACCOUNT_ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9](?:[A-Za-z0-9.-]*[A-Za-z0-9])?$").expect("valid regex")
});

/// Validate account ID format.
///
/// # Arguments
/// * `account_id` - The account identifier to validate
///
/// # Returns
/// * `Ok(())` if valid
/// * `Err(HarvesterError::InvalidAccountId)` if invalid
///
/// # Examples
/// ```
/// use review_harvester::config::validate_account_id;
///
/// assert!(validate_account_id("www.example.com").is_ok());
/// assert!(validate_account_id("example.com/../admin").is_err());
/// ```
pub fn validate_account_id(account_id: &str) -> Result<()> {
    if ACCOUNT_ID_PATTERN.is_match(account_id) {
        Ok(())
    } else {
        Err(HarvesterError::InvalidAccountId(account_id.to_string()))
    }
}

/// Validate a delimiter for delimited exports.
///
/// Quotes and line breaks are reserved for field quoting and row separation.
pub fn validate_delimiter(delimiter: char) -> Result<()> {
    match delimiter {
        '"' | '\n' | '\r' => Err(HarvesterError::InvalidDelimiter(delimiter)),
        _ => Ok(()),
    }
}

/// Build the review listing URL for an account page.
///
/// The `page` parameter is only included for pages after the first, which is
/// how the site itself links to the first page.
///
/// # Arguments
/// * `base_url` - Site base URL without trailing slash (e.g., [`TRUSTPILOT_BASE_URL`])
/// * `account_id` - The account identifier (should be validated with `validate_account_id` first)
/// * `page` - 1-based page number
///
/// # Examples
/// ```
/// use review_harvester::config::{review_url, TRUSTPILOT_BASE_URL};
///
/// assert_eq!(
///     review_url(TRUSTPILOT_BASE_URL, "www.example.com", 2),
///     "https://trustpilot.com/review/www.example.com?languages=all&page=2&sort=recency"
/// );
/// ```
pub fn review_url(base_url: &str, account_id: &str, page: u32) -> String {
    let base_url = base_url.trim_end_matches('/');
    if page == 1 {
        format!("{base_url}/review/{account_id}?languages=all&sort=recency")
    } else {
        format!("{base_url}/review/{account_id}?languages=all&page={page}&sort=recency")
    }
}
