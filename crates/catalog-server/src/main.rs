//! # Product Catalog Server
//!
//! Serves `catalog.ProductServices` and `grpc.health.v1.Health` over gRPC,
//! reading through a Redis cache in front of PostgreSQL.

use catalog_config::{AppConfig, ConfigLoader, ObservabilityConfig};
use catalog_core::{init_telemetry, shutdown_telemetry, CatalogError, CatalogResult};
use catalog_grpc::GrpcServer;
use catalog_repository::create_pool;
use catalog_server::di::{build_catalog_module, CatalogResolver};
use catalog_server::startup::{print_banner, print_startup_info};
use catalog_service::metrics::register_metrics;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    let config_loader = match ConfigLoader::from_default_location() {
        Ok(loader) => loader,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };
    let config = config_loader.get().await;

    if let Err(e) = init_telemetry(&config.telemetry) {
        eprintln!("Failed to initialize telemetry: {}", e);
    }

    print_banner();
    info!("Starting Product Catalog Server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    info!("Environment: {}", config.app.environment);

    let result = run(config).await;
    if let Err(e) = &result {
        error!("Application error: {}", e);
    }

    shutdown_telemetry();
    if result.is_err() {
        std::process::exit(1);
    }
}

async fn run(config: AppConfig) -> CatalogResult<()> {
    install_metrics_exporter(&config.observability)?;

    let db_pool = create_pool(&config.database).await?;
    let module = build_catalog_module(&db_pool, &config.redis, &config.cache)?;
    let pool = module.database_pool();

    if config.database.run_migrations {
        let applied = pool.run_migrations().await?;
        info!(applied, "Schema is up to date");
    }

    let grpc_server = GrpcServer::new(&config.server, module.catalog_service(), pool.clone())?;
    print_startup_info(&config);

    let served = grpc_server.serve_with_shutdown(shutdown_signal()).await;

    pool.close().await;
    info!("Server shutdown complete");
    served
}

fn install_metrics_exporter(config: &ObservabilityConfig) -> CatalogResult<()> {
    if !config.metrics_enabled {
        register_metrics();
        return Ok(());
    }

    let addr: SocketAddr = config.metrics_addr.parse().map_err(|e| {
        CatalogError::Configuration(format!("Invalid metrics address: {}", e))
    })?;

    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| CatalogError::Internal(format!("Failed to install metrics exporter: {}", e)))?;

    register_metrics();
    info!("Prometheus exporter listening on {}", addr);
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
