use rv_server::{AppState, ReceiptStore, build_router, logger};

use rv_auth::JwtValidator;

use std::error::Error;
use std::sync::Arc;

use log::info;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = rv_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = rv_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        // Ensure log directory exists
        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting rv-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // The verification key is loaded once and held for the process
    // lifetime; nothing rotates or mutates it.
    let Some(ref secret) = config.auth.jwt_secret else {
        unreachable!("validate() ensures auth.jwt_secret is set");
    };
    let jwt_validator = Arc::new(JwtValidator::with_hs256(secret.as_bytes()));
    info!("JWT: HS256 verification key loaded");

    let store = ReceiptStore::with_demo_data();
    info!("Receipt store seeded with {} receipts", store.len());

    let state = AppState {
        jwt_validator,
        store,
    };

    let app = build_router(state);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
