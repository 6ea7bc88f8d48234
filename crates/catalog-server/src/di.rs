//! Dependency injection module using Shaku.
//!
//! `CatalogModule` wires the PostgreSQL pool, the product repository, the
//! Redis cache and the cache-aside catalog service into one container.

use catalog_config::{CacheConfig, RedisConfig};
use catalog_core::{CatalogError, CatalogResult};
use catalog_repository::{
    DatabasePool, DatabasePoolInterface, DatabasePoolParameters, PgProductRepository,
    ProductRepository,
};
use catalog_service::{
    CacheInterface, CacheTtls, CatalogService, CatalogServiceImpl, CatalogServiceImplParameters,
    RedisCacheService, RedisCacheServiceParameters,
};
use deadpool_redis::{PoolConfig, Runtime};
use shaku::{module, HasComponent};
use std::sync::Arc;
use tracing::info;

// Single-process deployment: store, cache and service in one container.
module! {
    pub CatalogModule {
        components = [
            DatabasePool,
            PgProductRepository,
            RedisCacheService,
            CatalogServiceImpl,
        ],
        providers = [],
    }
}

/// Builds the catalog module around an already connected database pool.
///
/// No Redis connection is opened here; the pool connects lazily on first use,
/// so an unreachable cache never blocks startup.
pub fn build_catalog_module(
    db_pool: &DatabasePool,
    redis_config: &RedisConfig,
    cache_config: &CacheConfig,
) -> CatalogResult<Arc<CatalogModule>> {
    let cache_pool = create_cache_pool(redis_config)?;

    let module = CatalogModule::builder()
        .with_component_parameters::<DatabasePool>(DatabasePoolParameters {
            pool: db_pool.inner().clone(),
        })
        .with_component_parameters::<RedisCacheService>(RedisCacheServiceParameters {
            pool: cache_pool,
            operation_timeout: redis_config.operation_timeout(),
        })
        .with_component_parameters::<CatalogServiceImpl>(CatalogServiceImplParameters {
            ttls: CacheTtls::from(cache_config),
        })
        .build();

    Ok(Arc::new(module))
}

fn create_cache_pool(config: &RedisConfig) -> CatalogResult<Option<Arc<deadpool_redis::Pool>>> {
    if !config.enabled {
        info!("Redis cache disabled; every read goes to the store");
        return Ok(None);
    }

    let mut redis_cfg = deadpool_redis::Config::from_url(&config.url);
    redis_cfg.pool = Some(PoolConfig::new(config.pool_size));
    let pool = redis_cfg
        .create_pool(Some(Runtime::Tokio1))
        .map_err(|e| CatalogError::Cache(format!("Failed to create Redis pool: {}", e)))?;

    info!(url = %config.redacted_url(), pool_size = config.pool_size, "Redis cache pool created");
    Ok(Some(Arc::new(pool)))
}

// ============================================================================
// Module Resolution Helpers
// ============================================================================

/// Resolves the catalog components from a module.
pub trait CatalogResolver {
    /// Resolves the catalog service.
    fn catalog_service(&self) -> Arc<dyn CatalogService>;

    /// Resolves the database pool.
    fn database_pool(&self) -> Arc<dyn DatabasePoolInterface>;

    /// Resolves the product repository.
    fn product_repository(&self) -> Arc<dyn ProductRepository>;

    /// Resolves the cache.
    fn cache(&self) -> Arc<dyn CacheInterface>;
}

impl CatalogResolver for CatalogModule {
    fn catalog_service(&self) -> Arc<dyn CatalogService> {
        self.resolve()
    }

    fn database_pool(&self) -> Arc<dyn DatabasePoolInterface> {
        self.resolve()
    }

    fn product_repository(&self) -> Arc<dyn ProductRepository> {
        self.resolve()
    }

    fn cache(&self) -> Arc<dyn CacheInterface> {
        self.resolve()
    }
}
