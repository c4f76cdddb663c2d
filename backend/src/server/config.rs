//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use user_directory::outbound::directory::RedisPoolConfig;
use user_directory::settings::{DirectorySettings, SettingsError};

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) user_table_name: String,
    pub(crate) redis: Option<RedisPoolConfig>,
}

impl ServerConfig {
    /// Construct a server configuration using the in-memory directory.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, user_table_name: impl Into<String>) -> Self {
        Self {
            bind_addr,
            user_table_name: user_table_name.into(),
            redis: None,
        }
    }

    /// Derive the configuration from loaded settings.
    ///
    /// # Errors
    /// Returns [`SettingsError`] when the table name is missing or the bind
    /// address is malformed.
    pub fn from_settings(settings: &DirectorySettings) -> Result<Self, SettingsError> {
        let config = Self::new(settings.bind_addr()?, settings.user_table_name()?);
        Ok(match settings.redis_url() {
            Some(url) => config.with_redis(RedisPoolConfig::new(url)),
            None => config,
        })
    }

    /// Read users from Redis instead of the in-memory directory.
    #[must_use]
    pub fn with_redis(mut self, redis: RedisPoolConfig) -> Self {
        self.redis = Some(redis);
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
