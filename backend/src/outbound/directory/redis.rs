//! Redis-backed directory client pooled through `bb8`.
//!
//! Items are stored as JSON strings under `"{table}:{key}"`.

use std::time::Duration;

use async_trait::async_trait;
use bb8_redis::RedisConnectionManager;
use bb8_redis::bb8::Pool;
use bb8_redis::redis;
use tracing::debug;

use super::client::{DirectoryClient, DirectoryClientError, DirectoryItem};

/// Redis key holding the item for `key` in `table_name`.
///
/// # Examples
/// ```
/// use user_directory::outbound::directory::item_key;
///
/// assert_eq!(item_key("users", "ada"), "users:ada");
/// ```
pub fn item_key(table_name: &str, key: &str) -> String {
    format!("{table_name}:{key}")
}

/// Configuration for the Redis connection pool.
///
/// # Example
///
/// ```ignore
/// let config = RedisPoolConfig::new("redis://localhost:6379")
///     .with_max_size(16)
///     .with_connection_timeout(Duration::from_secs(2));
/// ```
#[derive(Debug, Clone)]
pub struct RedisPoolConfig {
    url: String,
    max_size: u32,
    connection_timeout: Duration,
}

impl RedisPoolConfig {
    /// Create a configuration for `url` with 10 connections and a 5 second
    /// checkout timeout.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_size: 10,
            connection_timeout: Duration::from_secs(5),
        }
    }

    /// Set the maximum number of pooled connections.
    pub fn with_max_size(mut self, max_size: u32) -> Self {
        self.max_size = max_size;
        self
    }

    /// Set the connection checkout timeout.
    pub fn with_connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout = timeout;
        self
    }

    /// Get the Redis URL.
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Directory client reading JSON items from Redis.
#[derive(Clone)]
pub struct RedisDirectoryClient {
    pool: Pool<RedisConnectionManager>,
}

impl RedisDirectoryClient {
    /// Build the connection pool.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryClientError::Connection` if the URL is invalid or
    /// the pool cannot be constructed.
    pub async fn connect(config: RedisPoolConfig) -> Result<Self, DirectoryClientError> {
        let manager = RedisConnectionManager::new(config.url.as_str())
            .map_err(|err| DirectoryClientError::connection(err.to_string()))?;

        let pool = Pool::builder()
            .max_size(config.max_size)
            .connection_timeout(config.connection_timeout)
            .build(manager)
            .await
            .map_err(|err| DirectoryClientError::connection(err.to_string()))?;

        Ok(Self { pool })
    }
}

fn decode_item(raw: &str) -> Result<DirectoryItem, DirectoryClientError> {
    serde_json::from_str(raw).map_err(|err| DirectoryClientError::encoding(err.to_string()))
}

#[async_trait]
impl DirectoryClient for RedisDirectoryClient {
    async fn get_item(
        &self,
        table_name: &str,
        key: &str,
    ) -> Result<Option<DirectoryItem>, DirectoryClientError> {
        let redis_key = item_key(table_name, key);
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| DirectoryClientError::connection(err.to_string()))?;

        let raw: Option<String> = redis::cmd("GET")
            .arg(&redis_key)
            .query_async(&mut *conn)
            .await
            .map_err(|err| DirectoryClientError::request(err.to_string()))?;

        debug!(key = %redis_key, hit = raw.is_some(), "directory lookup");
        raw.as_deref().map(decode_item).transpose()
    }
}
