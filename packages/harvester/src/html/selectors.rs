//! Structural selectors for Trustpilot review listing pages.
//!
//! These are the only places that know the site's markup. Each selector is
//! compiled once on first use.

use std::sync::LazyLock;

use scraper::Selector;

/// Compile a static selector.
#[allow(clippy::expect_used)] // Static selectors that are guaranteed to be valid
fn compile(selector: &str) -> Selector {
    Selector::parse(selector).expect("valid selector")
}

/// Root node of a single review entry.
pub static REVIEW_ENTRY: LazyLock<Selector> = LazyLock::new(|| compile("article"));

/// Numbered pagination controls. The "next page" control is excluded.
pub static PAGINATION_BUTTON: LazyLock<Selector> = LazyLock::new(|| {
    compile("[name*='pagination-button-']:not([name*='pagination-button-next'])")
});

/// Author display name within an entry.
pub static CONSUMER_NAME: LazyLock<Selector> =
    LazyLock::new(|| compile("[data-consumer-name-typography]"));

/// Review title within an entry. Also carries the link to the review.
pub static REVIEW_TITLE: LazyLock<Selector> =
    LazyLock::new(|| compile("[data-review-title-typography]"));

/// Review body within an entry.
pub static REVIEW_TEXT: LazyLock<Selector> =
    LazyLock::new(|| compile("[data-service-review-text-typography]"));

/// Rating container within an entry.
pub static REVIEW_RATING: LazyLock<Selector> =
    LazyLock::new(|| compile("div[data-service-review-rating]"));

/// Publication date element within an entry.
pub static REVIEW_DATE: LazyLock<Selector> =
    LazyLock::new(|| compile("[data-service-review-date-time-ago]"));

/// Attribute holding the link on [`REVIEW_TITLE`].
pub const TITLE_LINK_ATTR: &str = "href";

/// Attribute holding the rating on [`REVIEW_RATING`].
pub const RATING_ATTR: &str = "data-service-review-rating";

/// Attribute holding the timestamp on [`REVIEW_DATE`].
pub const DATE_ATTR: &str = "datetime";
