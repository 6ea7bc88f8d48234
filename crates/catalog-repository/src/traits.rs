//! Repository trait definitions.

use catalog_core::{CatalogResult, Interface, NewProduct, Product, ProductId, SearchFilter};
use async_trait::async_trait;

/// Durable product store.
///
/// Unique-constraint violations surface as `CatalogError::Conflict`, every
/// other driver failure as `CatalogError::Database`.
#[async_trait]
pub trait ProductRepository: Interface + Send + Sync {
    /// Inserts a product and returns its server-assigned id.
    async fn create(&self, product: &NewProduct) -> CatalogResult<ProductId>;

    /// Finds a product by id. `None` means no such product.
    async fn find_by_id(&self, id: ProductId) -> CatalogResult<Option<Product>>;

    /// Returns products whose category starts with the filter's category
    /// (case-insensitive) and whose price lies within the inclusive bounds.
    async fn search(&self, filter: &SearchFilter) -> CatalogResult<Vec<Product>>;
}
