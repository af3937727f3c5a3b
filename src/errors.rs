//! Centralized error handling.
//!
//! Provides a unified error type for the entire application. No variant ever
//! reaches the HTTP layer as a 5xx: the status handler is the terminal catch
//! point and degrades every failure to placeholder text in the rendered page.

use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Neither database transport is configured in the environment.
    #[error("database configuration error: {0}")]
    Config(String),

    /// TLS certificate material could not be read from disk.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Connection, acquisition, or query failure from the database driver.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The cache connection was never established.
    #[error("cache connection not established")]
    CacheUnavailable,

    /// Error from the cache driver.
    #[error("cache error: {0}")]
    Cache(#[from] redis::RedisError),
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn config(msg: impl Into<String>) -> Self {
        AppError::Config(msg.into())
    }
}
