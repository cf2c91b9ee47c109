//! Error types for the harvester.
//!
//! A single `HarvesterError` covers every failure a pipeline run can surface:
//! configuration errors raised before any request, fetch failures that abort
//! the run, and export failures that leave the collected reviews untouched.

use thiserror::Error;

/// Main error type for the harvester library.
#[derive(Debug, Error)]
pub enum HarvesterError {
    /// Invalid account identifier.
    #[error("Invalid account ID: '{0}'. Expected a domain-like name (e.g., www.example.com)")]
    InvalidAccountId(String),

    /// Invalid review count.
    #[error("Invalid review count: {0}. Expected a positive number or -1 for all reviews")]
    InvalidCount(i64),

    /// Unrecognized sort key.
    #[error("Invalid sort key: '{0}'. Expected 'time' or 'rating'")]
    InvalidSortKey(String),

    /// Unrecognized sort direction.
    #[error("Invalid sort direction: '{0}'. Expected 'asc' or 'desc'")]
    InvalidSortDirection(String),

    /// Delimiter unusable for the delimited exporter.
    #[error("Invalid delimiter: {0:?}. Expected a single character other than a quote or line break")]
    InvalidDelimiter(char),

    /// HTTP client could not be created.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to fetch a review page.
    #[error("Failed to fetch review page {page} for {account_id}: {source}")]
    Fetch {
        account_id: String,
        page: u32,
        #[source]
        source: reqwest::Error,
    },

    /// Last pagination control does not carry a page number.
    #[error("Pagination label '{0}' is not a page number")]
    InvalidPageLabel(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// XML serialization error.
    #[error("XML serialization failed: {0}")]
    XmlWrite(String),
}

/// Result type alias for harvester operations.
pub type Result<T> = std::result::Result<T, HarvesterError>;
