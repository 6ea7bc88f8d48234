//! # Catalog Service
//!
//! Cache-aside access layer for the product catalog.
//!
//! Reads consult the cache first and fall back to the store on any miss,
//! cache failure or undecodable entry; store results are written back on a
//! best-effort basis. Writes go to the store and then prime the cache.

pub mod cache;
pub mod catalog_service;
pub mod dto;
pub mod r#impl;
pub mod metrics;

pub use cache::*;
pub use catalog_service::*;
pub use dto::*;
pub use r#impl::*;
