//! gRPC server setup.

use crate::proto::{catalog, health};
use crate::services::{HealthServiceImpl, ProductGrpcService};
use catalog_config::ServerConfig;
use catalog_core::{CatalogError, CatalogResult};
use catalog_repository::DatabasePoolInterface;
use catalog_service::CatalogService;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tonic::transport::Server;
use tracing::info;

/// gRPC server exposing `ProductServices` and the health service.
pub struct GrpcServer {
    addr: SocketAddr,
    request_timeout: Duration,
    catalog_service: Arc<dyn CatalogService>,
    pool: Arc<dyn DatabasePoolInterface>,
}

impl GrpcServer {
    /// Creates a new gRPC server.
    pub fn new(
        config: &ServerConfig,
        catalog_service: Arc<dyn CatalogService>,
        pool: Arc<dyn DatabasePoolInterface>,
    ) -> CatalogResult<Self> {
        let addr = config.grpc_addr().parse().map_err(|e| {
            CatalogError::Configuration(format!("Invalid gRPC address: {}", e))
        })?;

        Ok(Self {
            addr,
            request_timeout: config.request_timeout(),
            catalog_service,
            pool,
        })
    }

    /// Returns the listen address.
    #[must_use]
    pub const fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Serves until `signal` resolves, then drains in-flight requests.
    ///
    /// Requests exceeding the configured timeout (or a shorter client
    /// `grpc-timeout`) are cancelled by dropping their futures.
    pub async fn serve_with_shutdown<F>(self, signal: F) -> CatalogResult<()>
    where
        F: Future<Output = ()> + Send,
    {
        info!("Starting gRPC server on {}", self.addr);

        let health_service = HealthServiceImpl::new(self.pool);
        let product_service = ProductGrpcService::new(self.catalog_service);

        Server::builder()
            .timeout(self.request_timeout)
            .add_service(health::health_server::HealthServer::new(health_service))
            .add_service(catalog::product_services_server::ProductServicesServer::new(
                product_service,
            ))
            .serve_with_shutdown(self.addr, signal)
            .await
            .map_err(|e| CatalogError::Internal(format!("gRPC server error: {}", e)))?;

        info!("gRPC server stopped");
        Ok(())
    }
}
