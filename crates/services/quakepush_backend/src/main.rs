// File: services/quakepush_backend/src/main.rs
use quakepush_backend::{routes, AppState};
use quakepush_common::{config_error, logging, QuakepushError};
use quakepush_config::load_config;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        // Config errors happen before logging is set up
        logging::init();
        logging::log_error(&err, "quakepush-backend stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), QuakepushError> {
    let config = Arc::new(load_config().map_err(config_error)?);
    logging::init_from_config(&config.logging);

    let state = Arc::new(AppState::from_config(config.clone()).await?);
    let app = routes(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Starting server at http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(err) => {
            logging::log_error(err, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    }
}
