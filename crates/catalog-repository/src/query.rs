//! SQL construction for product searches.

use catalog_core::{SearchFilter, SortKey};
use sqlx::{Postgres, QueryBuilder};

/// Column list shared by every product read.
pub(crate) const PRODUCT_COLUMNS: &str = "id, name, description, category, price, created_at";

/// Builds the parameterized search statement for `filter`.
///
/// The category becomes an `ILIKE` prefix pattern with LIKE metacharacters
/// escaped; the sort key selects one of a fixed set of ORDER BY clauses.
pub(crate) fn search_query(filter: &SearchFilter) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE category ILIKE "));
    qb.push_bind(format!("{}%", escape_like(&filter.category)));
    qb.push(" ESCAPE '\\' AND price >= ");
    qb.push_bind(filter.price_min);
    qb.push(" AND price <= ");
    qb.push_bind(filter.price_max);

    if let Some(order) = order_by(filter.sort) {
        qb.push(" ORDER BY ");
        qb.push(order);
    }

    qb
}

const fn order_by(sort: SortKey) -> Option<&'static str> {
    match sort {
        SortKey::PriceAsc => Some("price ASC"),
        SortKey::PriceDesc => Some("price DESC"),
        SortKey::DateDesc => Some("created_at DESC"),
        SortKey::Natural => None,
    }
}

/// Escapes `%`, `_` and the escape character itself.
pub(crate) fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
