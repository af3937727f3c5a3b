//! HTTP server startup.

use std::sync::Arc;

use crate::api::{create_router, AppState};
use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::{Cache, Database};

/// Connect the shared backing-store handles and serve until shutdown.
pub async fn serve(config: Config) -> AppResult<()> {
    // The cache connection is attempted once, up front; a failure leaves a
    // disconnected handle and the process keeps serving.
    let cache = Cache::connect(&config.redis_url()).await;

    // The database pool is built lazily, on the first request.
    let database = Arc::new(Database::new());

    let state = AppState::new(cache, database, config.redis_host.clone());
    let app = create_router(state);

    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
