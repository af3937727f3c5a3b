//! Application settings loaded from environment variables.
//!
//! Only the HTTP and cache settings are read here. The database variables
//! (INSTANCE_HOST, INSTANCE_UNIX_SOCKET, DB_*) are read by the transport
//! selector when the pool is first constructed, so the process starts even
//! with an unconfigured database.

use std::env;

use super::constants::{DEFAULT_REDIS_HOST, DEFAULT_SERVER_PORT};

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub redis_host: String,
    pub server_port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            redis_host: env::var("REDIS_IP").unwrap_or_else(|_| DEFAULT_REDIS_HOST.to_string()),
            server_port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
        }
    }

    /// Connection URL for the cache.
    pub fn redis_url(&self) -> String {
        format!("redis://{}", self.redis_host)
    }

    /// Get the full server bind address.
    pub fn server_addr(&self) -> String {
        format!("0.0.0.0:{}", self.server_port)
    }
}
