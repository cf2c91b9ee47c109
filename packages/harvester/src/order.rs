//! Ordering of collected reviews.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::types::{Review, SortDirection, SortKey};

/// Naive timestamp layouts accepted when a value is not RFC 3339.
const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Order reviews in place by `key` and `direction`.
///
/// The sort is stable: reviews with equal keys keep their discovery order in
/// both directions.
///
/// Ordering by time descending leaves the reviews untouched. Pages are
/// requested newest first, so discovery order already is that order.
pub fn order_reviews(reviews: &mut [Review], key: SortKey, direction: SortDirection) {
    if key == SortKey::Time && direction == SortDirection::Desc {
        return;
    }
    reviews.sort_by(|a, b| compare_reviews(a, b, key, direction));
}

/// Compare two reviews by `key`, in `direction`.
///
/// Values that cannot be interpreted (unparseable timestamps or ratings) sort
/// before all valid values in ascending order.
pub fn compare_reviews(a: &Review, b: &Review, key: SortKey, direction: SortDirection) -> Ordering {
    let ordering = match key {
        SortKey::Time => parse_timestamp(&a.time).cmp(&parse_timestamp(&b.time)),
        SortKey::Rating => compare_ratings(parse_rating(&a.rating), parse_rating(&b.rating)),
    };
    match direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}

/// Parse a published timestamp into a UTC date-time.
///
/// Accepts RFC 3339 (as published by the site), naive date-times (taken as
/// UTC) and plain dates (taken as midnight UTC).
///
/// # Examples
/// ```
/// use review_harvester::order::parse_timestamp;
///
/// assert!(parse_timestamp("2024-03-01T09:15:00.000Z").is_some());
/// assert!(parse_timestamp("2024-03-01").is_some());
/// assert!(parse_timestamp("last tuesday").is_none());
/// ```
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
            return Some(parsed.and_utc());
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|datetime| datetime.and_utc())
}

/// Parse a published rating as a number.
pub fn parse_rating(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|r| !r.is_nan())
}

fn compare_ratings(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
