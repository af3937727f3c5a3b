//! Database connection pooling.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tokio::sync::OnceCell;

use crate::config::{
    DB_POOL_ACQUIRE_TIMEOUT_SECS, DB_POOL_IDLE_TIMEOUT_SECS, DB_POOL_MAX_CONNECTIONS,
    DB_POOL_MIN_CONNECTIONS,
};
use crate::errors::AppResult;

pub mod transport;

pub use transport::{DbTransport, TlsPaths};

/// Source of the transport descriptor; injectable so tests can bypass the
/// process environment.
pub type TransportSource = fn() -> AppResult<DbTransport>;

/// Lazily-initialized, process-wide PostgreSQL pool.
///
/// The pool is built on the first request. Concurrent first callers collapse
/// into a single in-flight construction through the `OnceCell`, so at most
/// one pool ever exists per handle. A failed construction is not cached;
/// the next caller retries.
pub struct Database {
    pool: OnceCell<PgPool>,
    transport_source: TransportSource,
}

impl Database {
    /// Database handle that selects its transport from the environment on
    /// first use.
    pub fn new() -> Self {
        Self {
            pool: OnceCell::new(),
            transport_source: DbTransport::from_env,
        }
    }

    /// Database handle over a fixed transport source.
    pub fn with_transport_source(transport_source: TransportSource) -> Self {
        Self {
            pool: OnceCell::new(),
            transport_source,
        }
    }

    /// Get the shared pool, constructing it on first use.
    ///
    /// Construction validates configuration and reads TLS material; it does
    /// not open connections. Connections are established on demand, up to
    /// the pool bounds, when the pool is first queried, and a connect
    /// failure surfaces as a driver error from that query.
    pub async fn pool(&self) -> AppResult<&PgPool> {
        self.pool
            .get_or_try_init(|| async {
                let transport = (self.transport_source)()?;
                let options = transport.connect_options()?;
                tracing::info!("initializing PostgreSQL connection pool");
                Ok(pool_options().connect_lazy_with(options))
            })
            .await
    }

    /// List table names from the system catalog.
    ///
    /// Callers beyond the pool bound queue for a connection up to the
    /// acquire timeout; the timeout surfaces here as a driver error.
    pub async fn table_names(&self) -> AppResult<Vec<String>> {
        let pool = self.pool().await?;
        let names = sqlx::query_scalar::<_, String>("SELECT tablename FROM pg_catalog.pg_tables")
            .fetch_all(pool)
            .await?;
        Ok(names)
    }
}

impl Default for Database {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed pool tuning. min == max keeps the pool hot under load at the cost
/// of five standing connections.
fn pool_options() -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(DB_POOL_MAX_CONNECTIONS)
        .min_connections(DB_POOL_MIN_CONNECTIONS)
        .acquire_timeout(Duration::from_secs(DB_POOL_ACQUIRE_TIMEOUT_SECS))
        .idle_timeout(Duration::from_secs(DB_POOL_IDLE_TIMEOUT_SECS))
}
