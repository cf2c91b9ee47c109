//! Extraction of review records from entry nodes.

use scraper::{ElementRef, Html};

use crate::html::selectors::{
    CONSUMER_NAME, DATE_ATTR, RATING_ATTR, REVIEW_DATE, REVIEW_ENTRY, REVIEW_RATING,
    REVIEW_TEXT, REVIEW_TITLE, TITLE_LINK_ATTR,
};
use crate::html::{first_attr, first_text};
use crate::types::Review;

/// Iterate over the review entry nodes of a page, in document order.
pub fn review_entries(document: &Html) -> impl Iterator<Item = ElementRef<'_>> {
    document.select(&REVIEW_ENTRY)
}

/// Extract a review from a single entry node.
///
/// Each field is looked up independently within the entry. A field whose
/// node or attribute is missing becomes an empty string and does not affect
/// the other fields.
///
/// # Examples
/// ```
/// use scraper::Html;
/// use review_harvester::extract::{extract_review, review_entries};
///
/// let html = Html::parse_document(
///     r#"<article><span data-consumer-name-typography>Ann</span></article>"#,
/// );
/// let entry = review_entries(&html).next().unwrap();
/// let review = extract_review(entry);
/// assert_eq!(review.consumer, "Ann");
/// assert_eq!(review.rating, "");
/// ```
pub fn extract_review(entry: ElementRef<'_>) -> Review {
    Review {
        consumer: first_text(entry, &CONSUMER_NAME),
        title: first_text(entry, &REVIEW_TITLE),
        url: first_attr(entry, &REVIEW_TITLE, TITLE_LINK_ATTR),
        content: first_text(entry, &REVIEW_TEXT),
        rating: first_attr(entry, &REVIEW_RATING, RATING_ATTR),
        time: first_attr(entry, &REVIEW_DATE, DATE_ATTR),
    }
}

/// Extract every review on a page, in document order.
pub fn extract_reviews(document: &Html) -> Vec<Review> {
    review_entries(document).map(extract_review).collect()
}
