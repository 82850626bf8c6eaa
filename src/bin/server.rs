//! crm-store Server Binary
//!
//! Starts the HTTP server for the customer store.

use std::sync::Arc;

use clap::Parser;
use crm_store::network::Server;
use crm_store::{Config, CustomerStore};
use tracing_subscriber::{fmt, EnvFilter};

/// crm-store Server
#[derive(Parser, Debug)]
#[command(name = "crm-server")]
#[command(about = "In-memory customer record store over HTTP+JSON")]
#[command(version)]
struct Args {
    /// Listen address (host:port)
    #[arg(short, long, default_value = "127.0.0.1:4000")]
    listen: String,

    /// Path prefix for the customer routes
    #[arg(short, long, default_value = "/customers")]
    base_path: String,

    /// Directory served for paths outside the API
    #[arg(long, default_value = "./public")]
    static_dir: String,

    /// JSON file of customers to load before serving
    #[arg(short, long)]
    seed: Option<String>,
}

#[tokio::main]
async fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,crm_store=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();

    tracing::info!("crm-store Server v{}", crm_store::VERSION);
    tracing::info!("Listen address: {}", args.listen);
    tracing::info!("Static directory: {}", args.static_dir);

    // Build config from args
    let mut builder = Config::builder()
        .listen_addr(&args.listen)
        .base_path(&args.base_path)
        .static_dir(&args.static_dir);
    if let Some(seed) = &args.seed {
        builder = builder.seed_file(seed);
    }
    let config = builder.build();

    // Create the store and load seed data
    let store = Arc::new(CustomerStore::new());
    if let Some(seed) = &config.seed_file {
        if let Err(e) = store.load_file(seed) {
            tracing::error!("Failed to load seed file {}: {}", seed.display(), e);
            std::process::exit(1);
        }
        tracing::info!("Loaded {} customers from {}", store.count(), seed.display());
    }

    // Bind and serve
    let server = match Server::bind(config, store).await {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Failed to start server: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = server.run_until(shutdown_signal()).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Resolves on Ctrl+C
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Received Ctrl+C, initiating shutdown...");
}
