//! # Catalog Server Library
//!
//! Dependency injection wiring and startup helpers shared by the
//! `catalog-server` and `catalog-migrator` binaries.

pub mod di;
pub mod startup;
