//! Redis-based cache implementation.

use super::CacheInterface;
use catalog_core::{CatalogError, CatalogResult};
use async_trait::async_trait;
use deadpool_redis::{redis::AsyncCommands, Pool};
use shaku::Component;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Default upper bound for a single Redis round trip.
pub const DEFAULT_OPERATION_TIMEOUT: Duration = Duration::from_millis(250);

/// Redis-based cache service.
///
/// Every operation, including checking a connection out of the pool, is
/// bounded by `operation_timeout`.
#[derive(Component)]
#[shaku(interface = CacheInterface)]
pub struct RedisCacheService {
    /// Redis connection pool. `None` disables caching.
    pool: Option<Arc<Pool>>,
    #[shaku(default = DEFAULT_OPERATION_TIMEOUT)]
    operation_timeout: Duration,
}

impl RedisCacheService {
    /// Create a new Redis cache service.
    #[must_use]
    pub fn new(pool: Arc<Pool>) -> Self {
        Self {
            pool: Some(pool),
            operation_timeout: DEFAULT_OPERATION_TIMEOUT,
        }
    }

    /// Create a cache service with a custom operation timeout.
    #[must_use]
    pub fn with_timeout(pool: Arc<Pool>, operation_timeout: Duration) -> Self {
        Self {
            pool: Some(pool),
            operation_timeout,
        }
    }

    /// Create a no-op cache service (for when Redis is disabled).
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            pool: None,
            operation_timeout: DEFAULT_OPERATION_TIMEOUT,
        }
    }

    /// Get a connection from the pool.
    async fn get_conn(&self) -> CatalogResult<deadpool_redis::Connection> {
        match &self.pool {
            Some(pool) => pool.get().await.map_err(|e| {
                CatalogError::Cache(format!("Failed to get Redis connection: {}", e))
            }),
            None => Err(CatalogError::Cache("Cache is disabled".to_string())),
        }
    }

    async fn bounded<T, Fut>(&self, key: &str, operation: Fut) -> CatalogResult<T>
    where
        Fut: Future<Output = CatalogResult<T>> + Send,
    {
        tokio::time::timeout(self.operation_timeout, operation)
            .await
            .map_err(|_| {
                CatalogError::Cache(format!(
                    "Operation on key '{}' timed out after {:?}",
                    key, self.operation_timeout
                ))
            })?
    }
}

#[async_trait]
impl CacheInterface for RedisCacheService {
    fn is_enabled(&self) -> bool {
        self.pool.is_some()
    }

    async fn get_raw(&self, key: &str) -> CatalogResult<Option<String>> {
        if !self.is_enabled() {
            return Ok(None);
        }

        let value = self
            .bounded(key, async {
                let mut conn = self.get_conn().await?;
                conn.get::<_, Option<String>>(key).await.map_err(|e| {
                    CatalogError::Cache(format!("Failed to get key '{}': {}", key, e))
                })
            })
            .await?;

        match &value {
            Some(_) => debug!("Cache hit for key '{}'", key),
            None => debug!("Cache miss for key '{}'", key),
        }

        Ok(value)
    }

    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> CatalogResult<()> {
        if !self.is_enabled() {
            return Ok(());
        }

        let ttl_secs = ttl.as_secs().max(1);

        self.bounded(key, async {
            let mut conn = self.get_conn().await?;
            conn.set_ex::<_, _, ()>(key, value, ttl_secs).await.map_err(|e| {
                CatalogError::Cache(format!("Failed to set key '{}': {}", key, e))
            })
        })
        .await?;

        debug!("Cached key '{}' with TTL {}s", key, ttl_secs);
        Ok(())
    }
}
