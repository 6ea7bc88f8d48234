//! gRPC health service implementation.

use crate::proto::health::{
    health_check_response::ServingStatus,
    health_server::Health,
    HealthCheckRequest, HealthCheckResponse,
};
use catalog_repository::DatabasePoolInterface;
use std::sync::Arc;
use std::time::Duration;
use tokio_stream::wrappers::ReceiverStream;
use tonic::{Request, Response, Status};
use tracing::{debug, warn};

/// Fully-qualified name of the product service.
pub const PRODUCT_SERVICE_NAME: &str = "catalog.ProductServices";

/// How often `Watch` re-evaluates the status.
const WATCH_INTERVAL: Duration = Duration::from_secs(5);

/// Health service backed by a database ping. The cache never affects health.
#[derive(Clone)]
pub struct HealthServiceImpl {
    pool: Arc<dyn DatabasePoolInterface>,
}

impl HealthServiceImpl {
    /// Creates a new health service.
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }

    /// Gets the health status for a service.
    async fn get_status(&self, service: &str) -> ServingStatus {
        debug!("Health check for service: {}", service);

        match service {
            "" | PRODUCT_SERVICE_NAME => match self.pool.health_check().await {
                Ok(()) => ServingStatus::Serving,
                Err(e) => {
                    warn!("Database health check failed: {}", e);
                    ServingStatus::NotServing
                }
            },
            _ => ServingStatus::ServiceUnknown,
        }
    }
}

#[tonic::async_trait]
impl Health for HealthServiceImpl {
    async fn check(
        &self,
        request: Request<HealthCheckRequest>,
    ) -> Result<Response<HealthCheckResponse>, Status> {
        let req = request.into_inner();
        let status = self.get_status(&req.service).await;

        Ok(Response::new(HealthCheckResponse {
            status: status.into(),
        }))
    }

    type WatchStream = ReceiverStream<Result<HealthCheckResponse, Status>>;

    async fn watch(
        &self,
        request: Request<HealthCheckRequest>,
    ) -> Result<Response<Self::WatchStream>, Status> {
        let service = request.into_inner().service;
        let (tx, rx) = tokio::sync::mpsc::channel(1);
        let this = self.clone();

        // Emit the current status, then every change, until the client goes away.
        tokio::spawn(async move {
            let mut last = None;
            let mut ticker = tokio::time::interval(WATCH_INTERVAL);
            loop {
                ticker.tick().await;
                if tx.is_closed() {
                    break;
                }

                let status = this.get_status(&service).await;
                if last == Some(status) {
                    continue;
                }

                let response = HealthCheckResponse {
                    status: status.into(),
                };
                if tx.send(Ok(response)).await.is_err() {
                    break;
                }
                last = Some(status);
            }
        });

        Ok(Response::new(ReceiverStream::new(rx)))
    }
}
