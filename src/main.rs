//! Connectivity status service - application entry point.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use conncheck::{server, Config};

#[tokio::main]
async fn main() {
    init_tracing();

    // Load configuration
    let config = Config::from_env();
    tracing::debug!("Configuration loaded");

    if let Err(e) = server::serve(config).await {
        tracing::error!("Server failed: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing subscriber
fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
