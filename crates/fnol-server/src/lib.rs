//! FNOL HTTP Server
//!
//! Exposes the extraction and routing engine over HTTP: a raw-text
//! endpoint, a document upload endpoint, and a health check.

#![warn(missing_docs)]

pub mod config;
pub mod handlers;

use config::ServerConfig;
use fnol_extractor::Extractor;
use handlers::{create_router, AppState};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Server error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Extraction engine initialization error
    #[error("Engine error: {0}")]
    Engine(#[from] fnol_extractor::ExtractorError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Start the FNOL HTTP server
///
/// Builds the extraction engine from the configured rules and starts
/// the axum server.
pub async fn start_server(config: ServerConfig) -> Result<(), ServerError> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting FNOL server");
    info!("Bind address: {}", config.bind_addr());
    info!("Upload directory: {}", config.upload_dir.display());
    info!(
        "Fast-track threshold: {}",
        config.engine.fast_track_threshold
    );

    // Build the extraction engine once; it is shared across requests
    let extractor = Arc::new(Extractor::new(config.engine.clone())?);

    let state = AppState {
        extractor,
        config: Arc::new(config),
    };

    let app = create_router(state.clone());

    // Bind and serve
    let listener = TcpListener::bind(&state.config.bind_addr()).await?;
    info!("FNOL server listening on {}", state.config.bind_addr());

    axum::serve(listener, app)
        .await
        .map_err(|e| ServerError::Server(e.to_string()))?;

    Ok(())
}
