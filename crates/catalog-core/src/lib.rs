//! # Catalog Core
//!
//! Core types, domain model, and error definitions for the product catalog.
//! Every other crate in the workspace builds on the abstractions defined here.

pub mod error;
pub mod id;
pub mod product;
pub mod result;
pub mod search;
pub mod telemetry;
pub mod validation;

pub use error::*;
pub use id::*;
pub use product::*;
pub use result::*;
pub use search::*;
pub use telemetry::*;
pub use validation::*;

// Re-export shaku for dependency injection
pub use shaku::Interface;
