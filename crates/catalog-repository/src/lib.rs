//! # Catalog Repository
//!
//! Durable product store backed by PostgreSQL through SQLx.
//!
//! ```text
//! Service
//!   ↓  Arc<dyn ProductRepository>
//! PgProductRepository
//!   ↓  Arc<dyn DatabasePoolInterface>
//! DatabasePool (PgPool)
//!   ↓
//! PostgreSQL
//! ```
//!
//! Search statements are assembled in [`query`] with bound parameters only.

pub mod pool;
pub mod postgres;
mod query;
pub mod traits;

pub use pool::*;
pub use postgres::*;
pub use traits::*;
