//! Product gRPC service implementation.

use crate::proto::catalog;
use catalog_core::{CatalogError, Product, ValidateExt};
use catalog_service::dto::{CreateProductRequest, GetProductRequest, SearchProductsRequest};
use catalog_service::CatalogService;
use chrono::SecondsFormat;
use std::sync::Arc;
use tonic::{Request, Response, Status};
use tracing::{debug, error};

/// Product gRPC service implementation.
pub struct ProductGrpcService {
    catalog_service: Arc<dyn CatalogService>,
}

impl ProductGrpcService {
    /// Creates a new product gRPC service.
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self { catalog_service }
    }
}

#[tonic::async_trait]
impl catalog::product_services_server::ProductServices for ProductGrpcService {
    async fn create_product(
        &self,
        request: Request<catalog::CreateProductRequest>,
    ) -> Result<Response<catalog::CreateProductResponse>, Status> {
        let req = request.into_inner();
        debug!("gRPC CreateProduct: {}", req.name);

        let create_request = CreateProductRequest {
            name: req.name,
            description: req.description,
            category: req.category,
            price: req.price,
        };
        create_request.validate_request().map_err(to_status)?;

        let id = self
            .catalog_service
            .create_product(create_request.into())
            .await
            .map_err(to_status)?;

        Ok(Response::new(catalog::CreateProductResponse { id: id.into() }))
    }

    async fn get_product(
        &self,
        request: Request<catalog::GetProductRequest>,
    ) -> Result<Response<catalog::GetProductResponse>, Status> {
        let req = request.into_inner();
        debug!("gRPC GetProduct: {}", req.id);

        let get_request = GetProductRequest { id: req.id };
        get_request.validate_request().map_err(to_status)?;

        let product = self
            .catalog_service
            .get_product(get_request.into())
            .await
            .map_err(to_status)?;

        Ok(Response::new(catalog::GetProductResponse {
            product: Some(to_proto_product(&product)),
        }))
    }

    async fn search_products(
        &self,
        request: Request<catalog::SearchProductsRequest>,
    ) -> Result<Response<catalog::SearchProductsResponse>, Status> {
        let req = request.into_inner();
        debug!("gRPC SearchProducts: {}", req.category);

        let search_request = SearchProductsRequest {
            category: req.category,
            price_min: req.price_min,
            price_max: req.price_max,
            sort_by: req.sort_by,
        };
        search_request.validate_request().map_err(to_status)?;

        let products = self
            .catalog_service
            .search_products(search_request.into())
            .await
            .map_err(to_status)?;

        Ok(Response::new(catalog::SearchProductsResponse {
            product: products.iter().map(to_proto_product).collect(),
        }))
    }
}

/// Maps a catalog error to a gRPC status.
///
/// Internal details are logged and replaced with a generic message.
pub(crate) fn to_status(err: CatalogError) -> Status {
    match err {
        CatalogError::NotFound { .. } => {
            debug!("gRPC not found: {}", err);
            Status::not_found(err.to_string())
        }
        CatalogError::Validation(msg) => Status::invalid_argument(msg),
        CatalogError::Conflict(msg) => Status::already_exists(msg),
        other => {
            error!("gRPC error: {:?}", other);
            Status::internal("internal error")
        }
    }
}

pub(crate) fn to_proto_product(product: &Product) -> catalog::Product {
    catalog::Product {
        id: product.id.into(),
        name: product.name.clone(),
        description: product.description.clone(),
        category: product.category.clone(),
        price: product.price,
        created_at: product.created_at.to_rfc3339_opts(SecondsFormat::Secs, true),
    }
}
