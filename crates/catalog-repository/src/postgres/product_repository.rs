//! PostgreSQL product repository implementation.

use crate::query::{search_query, PRODUCT_COLUMNS};
use crate::{traits::ProductRepository, DatabasePoolInterface};
use catalog_core::{CatalogResult, NewProduct, Product, ProductId, SearchFilter};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// PostgreSQL product repository implementation.
#[derive(Component, Clone)]
#[shaku(interface = ProductRepository)]
pub struct PgProductRepository {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl PgProductRepository {
    /// Creates a new PostgreSQL product repository.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a product.
#[derive(Debug, FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    description: String,
    category: String,
    price: f64,
    created_at: DateTime<Utc>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: ProductId::new(row.id),
            name: row.name,
            description: row.description,
            category: row.category,
            price: row.price,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn create(&self, product: &NewProduct) -> CatalogResult<ProductId> {
        debug!("Inserting product: {}", product.name);

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO products (name, description, category, price)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(&product.category)
        .bind(product.price)
        .fetch_one(self.pool.inner())
        .await?;

        Ok(ProductId::new(id))
    }

    async fn find_by_id(&self, id: ProductId) -> CatalogResult<Option<Product>> {
        debug!("Finding product by id: {}", id);

        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(Product::from))
    }

    async fn search(&self, filter: &SearchFilter) -> CatalogResult<Vec<Product>> {
        debug!(
            category = %filter.category,
            price_min = filter.price_min,
            price_max = filter.price_max,
            sort = %filter.sort,
            "Searching products"
        );

        let mut qb = search_query(filter);
        let rows = qb
            .build_query_as::<ProductRow>()
            .fetch_all(self.pool.inner())
            .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }
}
