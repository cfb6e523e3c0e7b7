//! `SmartEMI` server binary: initializes logging, loads the seed catalog,
//! prepares the database, and serves the storefront API.

use smartemi::{api, config, core, errors::Result};

use dotenvy::dotenv;
use std::env;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (non-fatal, env vars can be set externally)
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load the seed catalog (CONFIG_PATH overrides ./config.toml)
    let catalog = match env::var("CONFIG_PATH") {
        Ok(path) => config::catalog::load_config(path),
        Err(_) => config::catalog::load_default_config(),
    }
    .inspect_err(|e| error!("Failed to load catalog configuration: {e}"))?;
    info!(products = catalog.products.len(), "Loaded catalog configuration");

    // 4. Initialize database
    let db = config::database::create_connection()
        .await
        .inspect_err(|e| error!("Failed to connect to database: {e}"))?;
    config::database::create_tables(&db)
        .await
        .inspect(|()| info!("Database initialized successfully."))
        .inspect_err(|e| error!("Failed to initialize database: {e}"))?;

    // 5. Seed the catalog (no-op when products already exist)
    let seeded = core::seed::seed_catalog(&db, &catalog)
        .await
        .inspect_err(|e| error!("Failed to seed catalog: {e}"))?;
    info!(seeded, "Catalog seeding complete");

    // 6. Serve the storefront API
    let addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "SmartEMI listening");

    axum::serve(listener, api::router(db)).await?;

    Ok(())
}
