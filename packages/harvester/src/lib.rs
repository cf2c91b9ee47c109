//! Review Harvester - Collect customer reviews for an account from Trustpilot.
//!
//! This crate walks the paginated review listing of an account, extracts one
//! record per review, orders the result and optionally exports it as a
//! delimited file or XML.
//!
//! # Example
//!
//! ```
//! use review_harvester::config;
//! use review_harvester::types::{ResultCap, ReviewQuery, SortDirection, SortKey};
//!
//! assert!(config::validate_account_id("www.example.com").is_ok());
//!
//! let query = ReviewQuery::new("www.example.com")
//!     .with_cap(ResultCap::from_count(20).unwrap())
//!     .with_order(SortKey::Rating, SortDirection::Desc);
//! assert_eq!(query.sort_key, SortKey::Rating);
//! ```
//!
//! # Architecture
//!
//! The harvester is organized into several modules:
//!
//! - [`config`]: Configuration constants and validation
//! - [`types`]: Core data types (Review, ReviewQuery, etc.)
//! - [`error`]: Error types and Result alias
//! - [`http`]: Page fetching over HTTP
//! - [`html`]: Selectors and structural lookups
//! - [`pagination`]: Page count detection
//! - [`extract`]: Review extraction from entry nodes
//! - [`order`]: Ordering of collected reviews
//! - [`export`]: Delimited and XML output
//! - [`cli`]: Command-line interface
//! - [`harvester`]: Main harvester service

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod extract;
pub mod harvester;
pub mod html;
pub mod http;
pub mod order;
pub mod pagination;
pub mod types;

// Re-export main functions
pub use harvester::{harvest_reviews, ReviewHarvester};

// Re-export commonly used items
pub use config::validate_account_id;
pub use error::{HarvesterError, Result};
pub use http::{HttpPageFetcher, PageFetcher};
pub use types::{ResultCap, Review, ReviewQuery, SortDirection, SortKey};
