//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default HTTP listen port (overridden by PORT)
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// Cache (Redis)
// =============================================================================

/// Default Redis host (overridden by REDIS_IP)
pub const DEFAULT_REDIS_HOST: &str = "127.0.0.1";

/// Key written and read back by the status page
pub const CACHE_TEST_KEY: &str = "key";

/// Value the status page writes under [`CACHE_TEST_KEY`]
pub const CACHE_TEST_VALUE: &str = "value!";

// =============================================================================
// Database
// =============================================================================

/// Default PostgreSQL port (overridden by DB_PORT)
pub const DEFAULT_DB_PORT: u16 = 5432;

/// Upper bound on live connections held by the pool
pub const DB_POOL_MAX_CONNECTIONS: u32 = 5;

/// Idle connections the pool maintains; equal to the max so the pool stays
/// hot at the cost of five standing connections
pub const DB_POOL_MIN_CONNECTIONS: u32 = 5;

/// How long a caller waits for a pooled connection before timing out
pub const DB_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 60;

/// How long a connection may sit idle before it is closed
pub const DB_POOL_IDLE_TIMEOUT_SECS: u64 = 600;

/// Rendered in place of the table list when the database is unreachable or
/// unconfigured
pub const TABLES_PLACEHOLDER: &str = r#"<em style="color:red;">PostgreSQL not connected</em>"#;
