//! Main harvester service that ties all components together.

use std::path::Path;

use scraper::Html;

use crate::config::{validate_account_id, validate_delimiter};
use crate::error::Result;
use crate::export::{save_delimited, save_xml};
use crate::extract::{extract_review, review_entries};
use crate::http::{HttpPageFetcher, PageFetcher};
use crate::order::order_reviews;
use crate::pagination::total_pages;
use crate::types::{Review, ReviewQuery};

/// Collects, orders and exports the reviews of one account.
///
/// The query is fixed at construction. Every call to
/// [`get_reviews`](Self::get_reviews) fetches the pages again; nothing is
/// cached between calls.
#[derive(Debug)]
pub struct ReviewHarvester<F> {
    query: ReviewQuery,
    fetcher: F,
}

impl ReviewHarvester<HttpPageFetcher> {
    /// Create a harvester that fetches pages from the public review site.
    pub fn from_query(query: ReviewQuery) -> Result<Self> {
        Self::new(query, HttpPageFetcher::new()?)
    }
}

impl<F: PageFetcher> ReviewHarvester<F> {
    /// Create a harvester with a custom page source.
    ///
    /// Fails if the account ID is not a valid identifier.
    pub fn new(query: ReviewQuery, fetcher: F) -> Result<Self> {
        validate_account_id(&query.account_id)?;
        Ok(Self { query, fetcher })
    }

    /// Query this harvester runs.
    #[must_use]
    pub fn query(&self) -> &ReviewQuery {
        &self.query
    }

    /// Collect all reviews up to the cap, in the requested order.
    pub fn get_reviews(&self) -> Result<Vec<Review>> {
        let mut reviews = self.collect()?;
        order_reviews(&mut reviews, self.query.sort_key, self.query.direction);
        Ok(reviews)
    }

    /// Collect reviews and append them to a delimited file.
    ///
    /// Returns the collected reviews. If writing fails the error is returned
    /// instead; nothing else is affected.
    pub fn export_delimited(&self, path: &Path, delimiter: char) -> Result<Vec<Review>> {
        validate_delimiter(delimiter)?;
        let reviews = self.get_reviews()?;
        save_delimited(&reviews, path, delimiter)?;
        Ok(reviews)
    }

    /// Collect reviews and write them to an XML file.
    pub fn export_xml(&self, path: &Path) -> Result<Vec<Review>> {
        let reviews = self.get_reviews()?;
        save_xml(&reviews, path)?;
        Ok(reviews)
    }

    /// Walk pages 1..=N and collect reviews in discovery order.
    ///
    /// The cap is checked before every append, so it can be reached in the
    /// middle of a page. Once reached, no further pages are fetched.
    fn collect(&self) -> Result<Vec<Review>> {
        let account_id = self.query.account_id.as_str();
        let cap = self.query.cap;
        let mut reviews: Vec<Review> = Vec::new();

        let first_page = Html::parse_document(&self.fetcher.fetch(account_id, 1)?);
        let pages = total_pages(&first_page)?;
        tracing::info!(account_id, total_pages = pages, "Discovered review pages");

        append_page(&first_page, &mut reviews, |len| cap.is_reached(len));
        tracing::debug!(page = 1, count = reviews.len(), "Collected page");

        for page in 2..=pages {
            if cap.is_reached(reviews.len()) {
                tracing::debug!(page, "Review cap reached, skipping remaining pages");
                break;
            }

            let document = Html::parse_document(&self.fetcher.fetch(account_id, page)?);
            append_page(&document, &mut reviews, |len| cap.is_reached(len));
            tracing::debug!(page, count = reviews.len(), "Collected page");
        }

        tracing::info!(account_id, count = reviews.len(), "Collected reviews");
        Ok(reviews)
    }
}

/// Append the reviews of one page until `is_full` reports the cap is reached.
fn append_page(document: &Html, reviews: &mut Vec<Review>, is_full: impl Fn(usize) -> bool) {
    for entry in review_entries(document) {
        if is_full(reviews.len()) {
            break;
        }
        reviews.push(extract_review(entry));
    }
}

/// Collect the reviews described by `query` from the public review site.
///
/// # Arguments
/// * `query` - Account, cap and ordering of the run
///
/// # Returns
/// The ordered reviews
pub fn harvest_reviews(query: ReviewQuery) -> Result<Vec<Review>> {
    ReviewHarvester::from_query(query)?.get_reviews()
}
