//! Product-related request DTOs and their field rules.

use catalog_core::rules::{finite_non_negative, finite_non_zero, not_blank};
use catalog_core::{NewProduct, ProductId, SearchFilter, SortKey};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to create a new product.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateProductRequest {
    #[validate(custom(function = "not_blank", message = "name is required"))]
    pub name: String,

    #[validate(custom(function = "not_blank", message = "description is required"))]
    pub description: String,

    #[validate(custom(function = "not_blank", message = "category is required"))]
    pub category: String,

    #[validate(custom(function = "finite_non_negative", message = "price must be a finite, non-negative number"))]
    pub price: f64,
}

impl From<CreateProductRequest> for NewProduct {
    fn from(request: CreateProductRequest) -> Self {
        Self::new(request.name, request.description, request.category, request.price)
    }
}

/// Request to fetch a single product.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate)]
pub struct GetProductRequest {
    #[validate(range(min = 0, message = "invalid product id"))]
    pub id: i64,
}

impl From<GetProductRequest> for ProductId {
    fn from(request: GetProductRequest) -> Self {
        Self::new(request.id)
    }
}

/// Request to search products.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SearchProductsRequest {
    #[validate(custom(function = "not_blank", message = "category is required"))]
    pub category: String,

    #[validate(custom(function = "finite_non_negative", message = "price_min must be a finite, non-negative number"))]
    pub price_min: f64,

    #[validate(custom(function = "finite_non_zero", message = "price_max must be a finite, non-zero number"))]
    pub price_max: f64,

    #[validate(custom(function = "not_blank", message = "sort_by is required"))]
    pub sort_by: String,
}

impl From<SearchProductsRequest> for SearchFilter {
    fn from(request: SearchProductsRequest) -> Self {
        Self::new(
            request.category,
            request.price_min,
            request.price_max,
            SortKey::parse(&request.sort_by),
        )
    }
}
