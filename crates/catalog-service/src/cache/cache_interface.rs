//! Cache interface trait for abstracted caching operations.

use super::CacheDegraded;
use catalog_core::CatalogResult;
use async_trait::async_trait;
use shaku::Interface;
use std::time::Duration;

/// Cache interface for storing and retrieving cached data.
///
/// Uses JSON strings for type-erased storage to maintain dyn-compatibility.
#[async_trait]
pub trait CacheInterface: Interface + Send + Sync {
    /// Get a raw JSON value from the cache.
    ///
    /// Returns `None` if the key doesn't exist or has expired.
    async fn get_raw(&self, key: &str) -> CatalogResult<Option<String>>;

    /// Set a raw JSON value in the cache with a TTL.
    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> CatalogResult<()>;

    /// Check if caching is enabled.
    fn is_enabled(&self) -> bool;
}

/// Extension trait with typed methods for convenience.
#[async_trait]
pub trait CacheExt: CacheInterface {
    /// Get a typed value from the cache.
    ///
    /// Deserialization is strict: a payload missing required fields is
    /// reported as [`CacheDegraded::Corrupt`], never as a value.
    async fn lookup<T: serde::de::DeserializeOwned + Send>(&self, key: &str) -> Result<T, CacheDegraded> {
        match self.get_raw(key).await {
            Ok(Some(json)) => {
                serde_json::from_str(&json).map_err(|e| CacheDegraded::Corrupt(e.to_string()))
            }
            Ok(None) => Err(CacheDegraded::Miss),
            Err(e) => Err(CacheDegraded::Unavailable(e.to_string())),
        }
    }

    /// Set a typed value in the cache.
    async fn set<T: serde::Serialize + Send + Sync>(
        &self,
        key: &str,
        value: &T,
        ttl: Duration,
    ) -> CatalogResult<()> {
        let json = serde_json::to_string(value)?;
        self.set_raw(key, &json, ttl).await
    }
}

// Blanket implementation for all CacheInterface implementations
impl<T: CacheInterface + ?Sized> CacheExt for T {}
