//! Search filter value objects.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Result ordering for a product search.
///
/// Unrecognized sort text maps to [`SortKey::Natural`], which leaves the
/// store's order unspecified instead of failing the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortKey {
    /// Ascending by price.
    PriceAsc,
    /// Descending by price.
    PriceDesc,
    /// Newest first.
    DateDesc,
    /// Whatever order the store returns.
    #[default]
    Natural,
}

impl SortKey {
    /// Parses the wire token. Never fails.
    #[must_use]
    pub fn parse(token: &str) -> Self {
        match token {
            "price_asc" => Self::PriceAsc,
            "price_desc" => Self::PriceDesc,
            "date_desc" => Self::DateDesc,
            _ => Self::Natural,
        }
    }

    /// Canonical wire token; empty for natural order.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PriceAsc => "price_asc",
            Self::PriceDesc => "price_desc",
            Self::DateDesc => "date_desc",
            Self::Natural => "",
        }
    }
}

impl Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A product search query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchFilter {
    /// Category prefix.
    pub category: String,
    /// Inclusive lower price bound.
    pub price_min: f64,
    /// Inclusive upper price bound.
    pub price_max: f64,
    /// Result ordering.
    pub sort: SortKey,
}

impl SearchFilter {
    /// Creates a new search filter.
    pub fn new(category: impl Into<String>, price_min: f64, price_max: f64, sort: SortKey) -> Self {
        Self {
            category: category.into(),
            price_min,
            price_max,
            sort,
        }
    }
}
