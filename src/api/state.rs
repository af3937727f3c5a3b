//! Application state shared across requests.

use std::sync::Arc;

use crate::infra::{Cache, Database};

/// Shared handles to the backing stores, plus the configuration the status
/// page renders.
#[derive(Clone)]
pub struct AppState {
    /// Redis cache connection
    pub cache: Cache,
    /// Lazily-pooled database handle
    pub database: Arc<Database>,
    /// Cache host shown on the status page
    pub redis_host: String,
}

impl AppState {
    pub fn new(cache: Cache, database: Arc<Database>, redis_host: impl Into<String>) -> Self {
        Self {
            cache,
            database,
            redis_host: redis_host.into(),
        }
    }
}
