//! Core data types for the harvester.
//!
//! These types describe a single extracted review and the fixed parameters
//! of a harvesting run.

use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{HarvesterError, Result};

/// A single review extracted from a review listing page.
///
/// Every field is always present. Values the page does not provide are
/// empty strings. Field order matches [`Review::FIELD_NAMES`] and is kept by
/// serialization and by both exporters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Display name of the author.
    pub consumer: String,

    /// Review title.
    pub title: String,

    /// Link to the full review, relative or absolute.
    pub url: String,

    /// Review body.
    pub content: String,

    /// Declared rating, as published (e.g., "5").
    pub rating: String,

    /// Publication timestamp, as published (e.g., "2024-03-01T09:15:00.000Z").
    pub time: String,
}

impl Review {
    /// Field names in export order.
    pub const FIELD_NAMES: [&'static str; 6] =
        ["consumer", "title", "url", "content", "rating", "time"];

    /// Field values in export order.
    #[must_use]
    pub fn values(&self) -> [&str; 6] {
        [
            &self.consumer,
            &self.title,
            &self.url,
            &self.content,
            &self.rating,
            &self.time,
        ]
    }

    /// Field name/value pairs in export order.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &str)> {
        Self::FIELD_NAMES.into_iter().zip(self.values())
    }
}

/// Maximum number of reviews to collect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResultCap {
    /// Collect every review on every page.
    #[default]
    Unlimited,

    /// Stop once this many reviews are collected.
    Limit(NonZeroUsize),
}

impl ResultCap {
    /// Count value that selects [`ResultCap::Unlimited`].
    pub const UNLIMITED_COUNT: i64 = -1;

    /// Build a cap from a review count, where `-1` means unlimited.
    ///
    /// # Examples
    /// ```
    /// use review_harvester::types::ResultCap;
    ///
    /// assert_eq!(ResultCap::from_count(-1).unwrap(), ResultCap::Unlimited);
    /// assert!(ResultCap::from_count(10).unwrap().is_reached(10));
    /// assert!(ResultCap::from_count(0).is_err());
    /// ```
    pub fn from_count(count: i64) -> Result<Self> {
        if count == Self::UNLIMITED_COUNT {
            return Ok(Self::Unlimited);
        }
        usize::try_from(count)
            .ok()
            .and_then(NonZeroUsize::new)
            .map(Self::Limit)
            .ok_or(HarvesterError::InvalidCount(count))
    }

    /// Check whether a collection of `collected` reviews has reached the cap.
    #[must_use]
    pub fn is_reached(&self, collected: usize) -> bool {
        match self {
            Self::Unlimited => false,
            Self::Limit(limit) => collected >= limit.get(),
        }
    }
}

/// Key reviews are ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Publication timestamp.
    #[default]
    Time,

    /// Numeric rating.
    Rating,
}

impl SortKey {
    /// Get the string value used on the command line.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Time => "time",
            Self::Rating => "rating",
        }
    }
}

impl FromStr for SortKey {
    type Err = HarvesterError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "time" => Ok(Self::Time),
            "rating" => Ok(Self::Rating),
            other => Err(HarvesterError::InvalidSortKey(other.to_string())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction reviews are ordered in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    /// Smallest first.
    Asc,

    /// Largest first.
    #[default]
    Desc,
}

impl SortDirection {
    /// Get the string value used on the command line.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl FromStr for SortDirection {
    type Err = HarvesterError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(HarvesterError::InvalidSortDirection(other.to_string())),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters of a single harvesting run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewQuery {
    /// Account identifier on the review site (e.g., "www.example.com").
    pub account_id: String,

    /// Maximum number of reviews to collect.
    pub cap: ResultCap,

    /// Key the final collection is ordered by.
    pub sort_key: SortKey,

    /// Direction the final collection is ordered in.
    pub direction: SortDirection,
}

impl ReviewQuery {
    /// Create a query for all reviews of an account, newest first.
    #[must_use]
    pub fn new(account_id: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            cap: ResultCap::default(),
            sort_key: SortKey::default(),
            direction: SortDirection::default(),
        }
    }

    /// Set the result cap.
    #[must_use]
    pub fn with_cap(mut self, cap: ResultCap) -> Self {
        self.cap = cap;
        self
    }

    /// Set the sort key and direction.
    #[must_use]
    pub fn with_order(mut self, sort_key: SortKey, direction: SortDirection) -> Self {
        self.sort_key = sort_key;
        self.direction = direction;
        self
    }
}
