//! Catalog service trait definition.

use catalog_core::{CatalogResult, Interface, NewProduct, Product, ProductId, SearchFilter};
use async_trait::async_trait;

/// Product catalog operations with cache-aside reads.
#[async_trait]
pub trait CatalogService: Interface + Send + Sync {
    /// Creates a product and returns its id.
    async fn create_product(&self, product: NewProduct) -> CatalogResult<ProductId>;

    /// Gets a product by id. Fails with `NotFound` when the store has no such product.
    async fn get_product(&self, id: ProductId) -> CatalogResult<Product>;

    /// Searches products by category prefix and inclusive price range.
    async fn search_products(&self, filter: SearchFilter) -> CatalogResult<Vec<Product>>;
}
