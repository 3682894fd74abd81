pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

#[cfg(test)]
mod tests;

pub use api::{
    delete_response::DeleteResponse,
    error::ApiError,
    error::Result as ApiResult,
    users::{
        create_user_request::CreateUserRequest,
        update_user_request::UpdateUserRequest,
        user_dto::UserDto,
        users::{create_user, delete_user, get_user, list_users, update_user},
    },
};

pub use crate::routes::build_router;
pub use crate::state::AppState;

use std::error::Error;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load .env file if present (development)
    let _ = dotenvy::dotenv();

    // Load and validate configuration
    let config = um_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = um_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        // Ensure log directory exists
        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting um-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Open the store and build the gateway connection pool
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());

    let pool = um_db::connect(&database_path).await?;
    info!("Database connection established");

    // Run migrations
    info!("Running database migrations...");
    um_db::run_migrations(&pool).await?;
    info!("Migrations complete");

    // Build application state
    let app_state = AppState { pool };

    // Build router
    let app = build_router(app_state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Start server with graceful shutdown
    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Graceful shutdown complete");

    Ok(())
}

/// Resolve when SIGINT (Ctrl+C) is received
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => {
            info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
        }
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
        }
    }
}
