//! Service configuration loaded via OrthoConfig.
//!
//! Values come from CLI flags, `DIRECTORY_*` environment variables and
//! configuration files, in OrthoConfig's usual precedence.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

/// Settings for the user directory service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "DIRECTORY")]
pub struct DirectorySettings {
    /// Table holding user items. Required at startup.
    pub user_table_name: Option<String>,
    /// Socket address the HTTP server binds to.
    #[ortho_config(default = "0.0.0.0:8080".to_owned())]
    pub bind_addr: String,
    /// Redis connection URL; the in-memory directory is used when absent.
    pub redis_url: Option<String>,
}

/// Reasons the loaded settings cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("user table name is not set (DIRECTORY_USER_TABLE_NAME)")]
    MissingTableName,
    #[error("invalid bind address `{value}`: {message}")]
    InvalidBindAddr { value: String, message: String },
}

impl DirectorySettings {
    /// Return the configured table name.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::MissingTableName`] when the name is unset or
    /// blank.
    pub fn user_table_name(&self) -> Result<&str, SettingsError> {
        self.user_table_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or(SettingsError::MissingTableName)
    }

    /// Parse the bind address.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidBindAddr`] when the value does not
    /// parse as a socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        self.bind_addr
            .parse()
            .map_err(|err: std::net::AddrParseError| SettingsError::InvalidBindAddr {
                value: self.bind_addr.clone(),
                message: err.to_string(),
            })
    }

    /// Return the Redis URL when one is configured.
    pub fn redis_url(&self) -> Option<&str> {
        self.redis_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> DirectorySettings {
        DirectorySettings::load_from_iter([OsString::from("user-directory")])
            .expect("config should load")
    }

    #[rstest]
    fn defaults_apply_when_only_the_table_is_set() {
        let _guard = lock_env([
            ("DIRECTORY_USER_TABLE_NAME", Some("UserTable".to_owned())),
            ("DIRECTORY_BIND_ADDR", None::<String>),
            ("DIRECTORY_REDIS_URL", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.user_table_name(), Ok("UserTable"));
        assert_eq!(
            settings.bind_addr(),
            Ok(SocketAddr::from(([0, 0, 0, 0], 8080)))
        );
        assert!(settings.redis_url().is_none());
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("DIRECTORY_USER_TABLE_NAME", Some("Users".to_owned())),
            ("DIRECTORY_BIND_ADDR", Some("127.0.0.1:9090".to_owned())),
            ("DIRECTORY_REDIS_URL", Some("redis://cache:6379".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.user_table_name(), Ok("Users"));
        assert_eq!(
            settings.bind_addr(),
            Ok(SocketAddr::from(([127, 0, 0, 1], 9090)))
        );
        assert_eq!(settings.redis_url(), Some("redis://cache:6379"));
    }

    #[rstest]
    fn empty_environment_loads_and_reports_missing_table() {
        let _guard = lock_env([
            ("DIRECTORY_USER_TABLE_NAME", None::<String>),
            ("DIRECTORY_BIND_ADDR", None::<String>),
            ("DIRECTORY_REDIS_URL", None::<String>),
        ]);

        let settings = DirectorySettings::load_from_iter([OsString::from("user-directory")])
            .expect("an empty environment still loads");
        assert_eq!(
            settings.user_table_name(),
            Err(SettingsError::MissingTableName)
        );
        assert_eq!(
            settings.bind_addr(),
            Ok(SocketAddr::from(([0, 0, 0, 0], 8080)))
        );
    }

    #[rstest]
    fn malformed_bind_address_is_rejected() {
        let settings = DirectorySettings {
            user_table_name: Some("Users".to_owned()),
            bind_addr: "localhost".to_owned(),
            redis_url: None,
        };

        assert!(matches!(
            settings.bind_addr(),
            Err(SettingsError::InvalidBindAddr { .. })
        ));
    }

    #[rstest]
    fn blank_redis_url_means_in_memory() {
        let settings = DirectorySettings {
            user_table_name: Some("Users".to_owned()),
            bind_addr: "0.0.0.0:8080".to_owned(),
            redis_url: Some("  ".to_owned()),
        };

        assert!(settings.redis_url().is_none());
    }
}
