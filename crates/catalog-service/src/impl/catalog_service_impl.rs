//! Cache-aside catalog service implementation.

use crate::cache::{cache_keys, CacheDegraded, CacheExt, CacheInterface};
use crate::catalog_service::CatalogService;
use crate::metrics::CatalogMetrics;
use catalog_config::CacheConfig;
use catalog_core::{CatalogError, CatalogResult, NewProduct, Product, ProductId, SearchFilter};
use catalog_repository::ProductRepository;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use shaku::Component;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

const OP_CREATE: &str = "catalog.create_product";
const OP_GET: &str = "catalog.get_product";
const OP_SEARCH: &str = "catalog.search_products";

/// Lifetimes of cache entries written by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheTtls {
    /// TTL for `product:<id>` entries.
    pub product: Duration,
    /// TTL for search result entries.
    pub search: Duration,
}

impl Default for CacheTtls {
    fn default() -> Self {
        Self {
            product: Duration::from_secs(600),
            search: Duration::from_secs(300),
        }
    }
}

impl From<&CacheConfig> for CacheTtls {
    fn from(config: &CacheConfig) -> Self {
        Self {
            product: config.product_ttl(),
            search: config.search_ttl(),
        }
    }
}

/// Catalog service component for DI.
///
/// Holds only shared handles; no lock is held across store or cache calls.
#[derive(Component)]
#[shaku(interface = CatalogService)]
pub struct CatalogServiceImpl {
    #[shaku(inject)]
    repository: Arc<dyn ProductRepository>,
    #[shaku(inject)]
    cache: Arc<dyn CacheInterface>,
    ttls: CacheTtls,
}

impl CatalogServiceImpl {
    /// Creates a new catalog service.
    pub fn new(
        repository: Arc<dyn ProductRepository>,
        cache: Arc<dyn CacheInterface>,
        ttls: CacheTtls,
    ) -> Self {
        Self {
            repository,
            cache,
            ttls,
        }
    }

    /// Returns the cached value at `key`, or `None` when the store must be consulted.
    async fn read_cached<T: DeserializeOwned + Send + 'static>(&self, op: &'static str, key: &str) -> Option<T> {
        match self.cache.lookup::<T>(key).await {
            Ok(value) => {
                CatalogMetrics::cache_lookup(op, "hit");
                debug!(operation = op, key, "Serving from cache");
                Some(value)
            }
            Err(degraded) => {
                CatalogMetrics::cache_lookup(op, degraded.outcome());
                match &degraded {
                    CacheDegraded::Miss => debug!(operation = op, key, "Cache miss"),
                    CacheDegraded::Unavailable(_) | CacheDegraded::Corrupt(_) => {
                        warn!(operation = op, key, reason = %degraded, "Falling back to store");
                    }
                }
                None
            }
        }
    }

    /// Best-effort cache write. Failures are logged and counted only.
    async fn populate<T: Serialize + Send + Sync + 'static>(
        &self,
        op: &'static str,
        key: &str,
        value: &T,
        ttl: Duration,
    ) {
        if let Err(e) = self.cache.set(key, value, ttl).await {
            CatalogMetrics::cache_write_failed(op);
            warn!(operation = op, key, error = %e, "Cache write failed");
        }
    }

    fn store_failure(op: &'static str, err: CatalogError) -> CatalogError {
        if !err.is_not_found() {
            CatalogMetrics::store_error(op);
        }
        err.within(op)
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn create_product(&self, product: NewProduct) -> CatalogResult<ProductId> {
        debug!("Creating product: {}", product.name);

        let id = self
            .repository
            .create(&product)
            .await
            .map_err(|e| Self::store_failure(OP_CREATE, e))?;

        let snapshot = Product::from_new(id, product);
        self.populate(OP_CREATE, &cache_keys::product_by_id(id), &snapshot, self.ttls.product)
            .await;

        info!("Product created: {}", id);
        Ok(id)
    }

    async fn get_product(&self, id: ProductId) -> CatalogResult<Product> {
        debug!("Getting product: {}", id);

        let key = cache_keys::product_by_id(id);
        if let Some(cached) = self.read_cached::<Product>(OP_GET, &key).await {
            return Ok(cached);
        }

        let product = self
            .repository
            .find_by_id(id)
            .await
            .map_err(|e| Self::store_failure(OP_GET, e))?
            .ok_or_else(|| CatalogError::not_found("Product", id))?;

        self.populate(OP_GET, &key, &product, self.ttls.product).await;

        Ok(product)
    }

    async fn search_products(&self, filter: SearchFilter) -> CatalogResult<Vec<Product>> {
        debug!(
            category = %filter.category,
            price_min = filter.price_min,
            price_max = filter.price_max,
            sort = %filter.sort,
            "Searching products"
        );

        let key = cache_keys::search(&filter);
        if let Some(cached) = self.read_cached::<Vec<Product>>(OP_SEARCH, &key).await {
            return Ok(cached);
        }

        let products = self
            .repository
            .search(&filter)
            .await
            .map_err(|e| Self::store_failure(OP_SEARCH, e))?;

        self.populate(OP_SEARCH, &key, &products, self.ttls.search).await;

        Ok(products)
    }
}

impl std::fmt::Debug for CatalogServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogServiceImpl")
            .field("cache_enabled", &self.cache.is_enabled())
            .field("ttls", &self.ttls)
            .finish_non_exhaustive()
    }
}
