//! Applies pending schema migrations to the configured database and exits.

use anyhow::Context;
use catalog_config::ConfigLoader;
use catalog_core::{init_telemetry, shutdown_telemetry};
use catalog_repository::{create_pool, DatabasePoolInterface};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let loader = ConfigLoader::from_default_location().context("failed to load configuration")?;
    let config = loader.get().await;

    if let Err(e) = init_telemetry(&config.telemetry) {
        eprintln!("Failed to initialize telemetry: {}", e);
    }

    let pool = create_pool(&config.database)
        .await
        .context("failed to connect to database")?;
    let applied = pool.run_migrations().await;
    pool.close().await;
    shutdown_telemetry();

    match applied.context("failed to apply migrations")? {
        0 => println!("no migrations to apply"),
        n => println!("{} migrations applied successfully", n),
    }
    Ok(())
}
