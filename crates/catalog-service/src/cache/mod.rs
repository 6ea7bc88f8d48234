//! Caching infrastructure for the service layer.
//!
//! This module provides a cache abstraction with a Redis implementation.
//! Lookups never fail the caller: every non-hit is classified as a
//! [`CacheDegraded`] and the service falls back to the store.

mod cache_interface;
pub mod cache_keys;
mod lookup;
mod redis_cache;

pub use cache_interface::{CacheExt, CacheInterface};
pub use lookup::CacheDegraded;
pub use redis_cache::{RedisCacheService, RedisCacheServiceParameters, DEFAULT_OPERATION_TIMEOUT};
