//! Redis cache client.
//!
//! One shared connection held for the process lifetime. Connection-level
//! failures are logged, never fatal: a handle whose initial connection
//! failed stays usable and reports [`AppError::CacheUnavailable`] from every
//! operation.

use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client, RedisError};

use crate::errors::{AppError, AppResult};

/// Shared cache connection.
#[derive(Clone)]
pub struct Cache {
    connection: Option<ConnectionManager>,
}

impl Cache {
    /// Connect to Redis. A failed attempt is logged and produces a
    /// disconnected handle instead of terminating the process.
    pub async fn connect(redis_url: &str) -> Self {
        match Self::try_connect(redis_url).await {
            Ok(cache) => {
                tracing::info!("Redis cache connected");
                cache
            }
            Err(e) => {
                tracing::error!("Redis connection failed: {}", e);
                Self::disconnected()
            }
        }
    }

    async fn try_connect(redis_url: &str) -> Result<Self, RedisError> {
        let client = Client::open(redis_url)?;
        let connection = ConnectionManager::new(client).await?;
        Ok(Self {
            connection: Some(connection),
        })
    }

    /// A handle with no live connection.
    pub fn disconnected() -> Self {
        Self { connection: None }
    }

    /// Get a string value.
    pub async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let mut conn = self
            .connection
            .clone()
            .ok_or(AppError::CacheUnavailable)?;
        let value: Option<String> = conn.get(key).await?;
        Ok(value)
    }

    /// SET on a background task, fire-and-forget. Failures are observable
    /// only through the log; the handle is returned so tests can await
    /// completion.
    pub fn set_detached(&self, key: &str, value: &str) -> tokio::task::JoinHandle<()> {
        let connection = self.connection.clone();
        let key = key.to_string();
        let value = value.to_string();

        tokio::spawn(async move {
            let Some(mut conn) = connection else {
                tracing::error!(key = %key, "cache SET skipped: connection not established");
                return;
            };
            if let Err(e) = conn.set::<_, _, ()>(&key, &value).await {
                tracing::error!(key = %key, "cache SET failed: {}", e);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn disconnected_get_reports_unavailable() {
        let cache = Cache::disconnected();
        assert!(matches!(
            cache.get("key").await,
            Err(AppError::CacheUnavailable)
        ));
    }

    #[tokio::test]
    async fn disconnected_set_completes_without_panicking() {
        let cache = Cache::disconnected();
        cache.set_detached("key", "value!").await.unwrap();
    }
}
