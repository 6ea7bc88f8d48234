//! Store and cache doubles for catalog service tests.

#![allow(dead_code)]

use async_trait::async_trait;
use catalog_core::{
    CatalogError, CatalogResult, NewProduct, Product, ProductId, SearchFilter, SortKey,
};
use catalog_repository::ProductRepository;
use catalog_service::CacheInterface;
use chrono::{Duration as ChronoDuration, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// In-memory product store that mimics the PostgreSQL semantics.
#[derive(Default)]
pub struct InMemoryProductRepository {
    products: Mutex<Vec<Product>>,
    unreachable: AtomicBool,
    reads: AtomicUsize,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds products with ids 1.. and creation times one minute apart.
    pub fn with_products(items: &[(&str, &str, f64)]) -> Self {
        let repo = Self::new();
        {
            let mut products = repo.products.lock().unwrap();
            let start = Utc::now() - ChronoDuration::hours(1);
            for (i, (name, category, price)) in items.iter().enumerate() {
                products.push(Product {
                    id: ProductId::new(i as i64 + 1),
                    name: (*name).to_string(),
                    description: format!("{name} description"),
                    category: (*category).to_string(),
                    price: *price,
                    created_at: start + ChronoDuration::minutes(i as i64),
                });
            }
        }
        repo
    }

    /// Makes every subsequent call fail as if the database were down.
    pub fn set_unreachable(&self, unreachable: bool) {
        self.unreachable.store(unreachable, Ordering::SeqCst);
    }

    /// Number of find/search calls that reached the store.
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    fn check_reachable(&self) -> CatalogResult<()> {
        if self.unreachable.load(Ordering::SeqCst) {
            return Err(CatalogError::Database("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, product: &NewProduct) -> CatalogResult<ProductId> {
        self.check_reachable()?;
        let mut products = self.products.lock().unwrap();
        let id = ProductId::new(products.len() as i64 + 1);
        products.push(Product {
            id,
            name: product.name.clone(),
            description: product.description.clone(),
            category: product.category.clone(),
            price: product.price,
            created_at: Utc::now(),
        });
        Ok(id)
    }

    async fn find_by_id(&self, id: ProductId) -> CatalogResult<Option<Product>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.check_reachable()?;
        Ok(self.products.lock().unwrap().iter().find(|p| p.id == id).cloned())
    }

    async fn search(&self, filter: &SearchFilter) -> CatalogResult<Vec<Product>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.check_reachable()?;

        let prefix = filter.category.to_lowercase();
        let mut found: Vec<Product> = self
            .products
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.category.to_lowercase().starts_with(&prefix))
            .filter(|p| p.price >= filter.price_min && p.price <= filter.price_max)
            .cloned()
            .collect();

        match filter.sort {
            SortKey::PriceAsc => found.sort_by(|a, b| a.price.total_cmp(&b.price)),
            SortKey::PriceDesc => found.sort_by(|a, b| b.price.total_cmp(&a.price)),
            SortKey::DateDesc => found.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            SortKey::Natural => {}
        }

        Ok(found)
    }
}

/// A cache entry as written by the service.
#[derive(Debug, Clone)]
pub struct Entry {
    pub value: String,
    pub ttl: Duration,
}

/// In-memory cache that records every write.
#[derive(Default)]
pub struct RecordingCache {
    entries: Mutex<HashMap<String, Entry>>,
    writes: AtomicUsize,
}

impl RecordingCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a raw value without counting it as a service write.
    pub fn put_raw(&self, key: &str, value: &str) {
        self.entries.lock().unwrap().insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                ttl: Duration::from_secs(60),
            },
        );
    }

    pub fn entry(&self, key: &str) -> Option<Entry> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CacheInterface for RecordingCache {
    async fn get_raw(&self, key: &str) -> CatalogResult<Option<String>> {
        Ok(self.entries.lock().unwrap().get(key).map(|e| e.value.clone()))
    }

    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> CatalogResult<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.entries.lock().unwrap().insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                ttl,
            },
        );
        Ok(())
    }

    fn is_enabled(&self) -> bool {
        true
    }
}

/// Cache whose every operation fails.
#[derive(Default)]
pub struct FailingCache {
    attempts: AtomicUsize,
}

impl FailingCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CacheInterface for FailingCache {
    async fn get_raw(&self, _key: &str) -> CatalogResult<Option<String>> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(CatalogError::Cache("connection reset by peer".to_string()))
    }

    async fn set_raw(&self, _key: &str, _value: &str, _ttl: Duration) -> CatalogResult<()> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(CatalogError::Cache("connection reset by peer".to_string()))
    }

    fn is_enabled(&self) -> bool {
        true
    }
}
