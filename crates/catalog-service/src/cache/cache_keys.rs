//! Cache key generators for consistent key naming.
//!
//! Other services share these keys, so the formats must not change.

use catalog_core::{ProductId, SearchFilter};

/// Generate a cache key for a product by ID.
#[must_use]
pub fn product_by_id(id: ProductId) -> String {
    format!("product:{}", id)
}

/// Generate a cache key for a search.
///
/// Prices carry exactly six decimals. The sort segment is the canonical
/// token of the parsed [`SortKey`](catalog_core::SortKey), not the raw request
/// text: every unrecognized token means natural order and renders as an empty
/// trailing segment, so such keys differ from writers that embed the raw token.
#[must_use]
pub fn search(filter: &SearchFilter) -> String {
    format!(
        "search:{}:{:.6}:{:.6}:{}",
        filter.category, filter.price_min, filter.price_max, filter.sort
    )
}
