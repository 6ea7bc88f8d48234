//! Prometheus metrics for the cache-aside layer.

use metrics::{counter, describe_counter};

/// Metric names for the catalog service.
pub mod names {
    /// Cache lookups by operation and outcome (hit, miss, unavailable, corrupt).
    pub const CACHE_LOOKUPS_TOTAL: &str = "catalog_cache_lookups_total";
    /// Failed best-effort cache writes.
    pub const CACHE_WRITE_FAILURES_TOTAL: &str = "catalog_cache_write_failures_total";
    /// Store failures other than not-found.
    pub const STORE_ERRORS_TOTAL: &str = "catalog_store_errors_total";
}

/// Register all metric descriptions.
pub fn register_metrics() {
    describe_counter!(
        names::CACHE_LOOKUPS_TOTAL,
        "Total number of cache lookups by outcome"
    );
    describe_counter!(
        names::CACHE_WRITE_FAILURES_TOTAL,
        "Total number of cache writes that failed and were dropped"
    );
    describe_counter!(
        names::STORE_ERRORS_TOTAL,
        "Total number of failed store operations"
    );
}

/// Catalog metrics recorder.
#[derive(Clone)]
pub struct CatalogMetrics;

impl CatalogMetrics {
    /// Record the outcome of a cache lookup.
    pub fn cache_lookup(operation: &'static str, outcome: &'static str) {
        counter!(
            names::CACHE_LOOKUPS_TOTAL,
            "operation" => operation,
            "outcome" => outcome
        )
        .increment(1);
    }

    /// Record a dropped cache write.
    pub fn cache_write_failed(operation: &'static str) {
        counter!(names::CACHE_WRITE_FAILURES_TOTAL, "operation" => operation).increment(1);
    }

    /// Record a store failure.
    pub fn store_error(operation: &'static str) {
        counter!(names::STORE_ERRORS_TOTAL, "operation" => operation).increment(1);
    }
}
