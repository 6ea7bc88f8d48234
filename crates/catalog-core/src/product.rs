//! Product entity.

use crate::ProductId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A catalog product.
///
/// This is also the shape cached under `product:<id>`. Deserialization is
/// strict: every field except `description` must be present, so a truncated
/// or foreign payload is rejected rather than read as an empty record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    pub price: f64,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Builds the snapshot of a freshly created product.
    ///
    /// `created_at` is stamped client-side, so it can differ slightly from the
    /// value the store persisted.
    #[must_use]
    pub fn from_new(id: ProductId, new_product: NewProduct) -> Self {
        Self {
            id,
            name: new_product.name,
            description: new_product.description,
            category: new_product.category,
            price: new_product.price,
            created_at: Utc::now(),
        }
    }
}

/// The caller-supplied fields of a product create.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: f64,
}

impl NewProduct {
    /// Creates a new product payload.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            category: category.into(),
            price,
        }
    }
}
