//! Server startup utilities.

use catalog_config::AppConfig;
use tracing::info;

/// Prints the startup banner.
pub fn print_banner() {
    info!(r#"
   ______      __        __
  / ____/___ _/ /_____ _/ /___  ____ _
 / /   / __ `/ __/ __ `/ / __ \/ __ `/
/ /___/ /_/ / /_/ /_/ / / /_/ / /_/ /
\____/\__,_/\__/\__,_/_/\____/\__, /
                             /____/
    "#);
}

/// Prints server startup information.
pub fn print_startup_info(config: &AppConfig) {
    let separator = "=".repeat(60);
    info!("{}", separator);
    info!("gRPC API:  http://{}", config.server.grpc_addr());
    info!("Health:    grpc.health.v1.Health on the same port");
    if config.observability.metrics_enabled {
        info!("Metrics:   http://{}/metrics", config.observability.metrics_addr);
    }
    if config.redis.enabled {
        info!("Cache:     {}", config.redis.redacted_url());
    } else {
        info!("Cache:     disabled");
    }
    info!("{}", separator);
}
