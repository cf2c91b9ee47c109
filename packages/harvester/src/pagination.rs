//! Page count detection from pagination controls.

use scraper::Html;

use crate::error::{HarvesterError, Result};
use crate::html::selectors::PAGINATION_BUTTON;
use crate::html::text_content;

/// Determine the number of review pages from the first page.
///
/// Reads the label of the last numbered pagination control in document order.
/// This assumes the controls are rendered in ascending order with purely
/// numeric labels. If the site ever renders a non-numeric control (such as an
/// ellipsis) last, the label is reported as [`HarvesterError::InvalidPageLabel`]
/// instead of being guessed at.
///
/// Returns 1 when the page has no pagination controls.
///
/// # Examples
/// ```
/// use scraper::Html;
/// use review_harvester::pagination::total_pages;
///
/// let html = Html::parse_document(
///     r#"<a name="pagination-button-1">1</a><a name="pagination-button-4">4</a>
///        <a name="pagination-button-next">Next</a>"#,
/// );
/// assert_eq!(total_pages(&html).unwrap(), 4);
/// ```
pub fn total_pages(document: &Html) -> Result<u32> {
    let Some(last) = document.select(&PAGINATION_BUTTON).last() else {
        return Ok(1);
    };

    let label = text_content(last);
    match label.parse::<u32>() {
        Ok(pages) if pages >= 1 => Ok(pages),
        _ => Err(HarvesterError::InvalidPageLabel(label)),
    }
}
