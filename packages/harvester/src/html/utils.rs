//! Helpers for structural lookups scoped to an element.
//!
//! Every helper tolerates absence: a missing node or attribute yields `None`
//! or an empty string, never an error.

use scraper::{ElementRef, Selector};

/// Find the first element under `scope` matching `selector`.
///
/// # Examples
/// ```
/// use scraper::{Html, Selector};
/// use review_harvester::html::select_first;
///
/// let html = Html::parse_fragment(r#"<div><p>one</p><p>two</p></div>"#);
/// let p = Selector::parse("p").unwrap();
/// let first = select_first(html.root_element(), &p).unwrap();
/// assert_eq!(first.inner_html(), "one");
/// ```
pub fn select_first<'a>(scope: ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    scope.select(selector).next()
}

/// Get all descendant text of an element, trimmed.
///
/// # Examples
/// ```
/// use scraper::Html;
/// use review_harvester::html::text_content;
///
/// let html = Html::parse_fragment("<h2>\n  Very <b>good</b> shop \n</h2>");
/// assert_eq!(text_content(html.root_element()), "Very good shop");
/// ```
pub fn text_content(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Get the text of the first element under `scope` matching `selector`.
///
/// Returns an empty string when nothing matches.
pub fn first_text(scope: ElementRef<'_>, selector: &Selector) -> String {
    select_first(scope, selector)
        .map(text_content)
        .unwrap_or_default()
}

/// Get an attribute of the first element under `scope` matching `selector`.
///
/// Returns an empty string when nothing matches or the attribute is missing.
/// Only the first match is consulted, even if a later match has the attribute.
pub fn first_attr(scope: ElementRef<'_>, selector: &Selector, attr: &str) -> String {
    select_first(scope, selector)
        .and_then(|e| e.value().attr(attr))
        .map(str::to_string)
        .unwrap_or_default()
}
